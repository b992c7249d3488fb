//! A project board with kanban, list and timeline (Gantt) views.
//!
//! The date and timeline engine in [`model`] and [`timeline`] and the state
//! container in [`state`] have no UI dependency. [`ui`] and [`app`] render
//! them with egui.

pub mod app;
pub mod error;
pub mod model;
pub mod settings;
pub mod state;
pub mod timeline;
pub mod ui;

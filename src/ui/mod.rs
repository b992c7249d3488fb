pub mod dashboard;
pub mod kanban;
pub mod list_view;
pub mod sidebar;
pub mod task_modal;
pub mod theme;
pub mod timeline_view;
pub mod top_bar;
pub mod widgets;

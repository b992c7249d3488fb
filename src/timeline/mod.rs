//! Timeline (Gantt) layout engine: grid headers, bar geometry and the
//! drag/resize/reorder controller.

pub mod bars;
pub mod drag;
pub mod grid;

pub use bars::{bar_position, task_bars, BarGeometry, TaskBars};
pub use drag::{DragController, DragSnapshot, DragState, Edge, LiveOffset, TimelineAction};
pub use grid::{
    build_headers, Granularity, GridColumn, GridHeaders, MonthBand, TimelineWindow, MIN_UNIT_WIDTH,
};

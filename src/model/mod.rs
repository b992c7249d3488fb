pub mod dates;
pub mod project;
pub mod sample;
pub mod task;

pub use project::{Project, ProjectKind};
pub use task::{DateSpan, Priority, Status, Task};

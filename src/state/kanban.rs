//! Drag a card between kanban columns.

use tracing::debug;

use crate::model::{Status, Task};

/// Holds the card currently being dragged on the board.
#[derive(Debug, Clone, Default)]
pub struct KanbanDrag {
    dragged: Option<Task>,
}

impl KanbanDrag {
    pub fn begin(&mut self, task: &Task) {
        debug!(task_id = %task.id, "card drag started");
        self.dragged = Some(task.clone());
    }

    pub fn dragged(&self) -> Option<&Task> {
        self.dragged.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Drop onto a column. Returns the full replacement record with only its
    /// status changed; `None` when nothing was being dragged.
    pub fn drop_on(&mut self, status: Status) -> Option<Task> {
        let mut task = self.dragged.take()?;
        debug!(task_id = %task.id, ?status, "card dropped");
        task.status = status;
        Some(task)
    }

    pub fn cancel(&mut self) {
        self.dragged = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateSpan, Priority};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn drop_changes_only_status() {
        let mut task = Task::new("Design System V2", "Oct 24", Uuid::new_v4());
        task.wbs = "1.1".into();
        task.priority = Priority::High;
        task.assignee = "Alex".into();
        task.tags = vec!["Design".into()];
        task.start_date = Some("Oct 13".into());
        task.planned = Some(DateSpan::new("Oct 9", "Oct 20"));
        task.description = "Update palette.".into();

        let mut drag = KanbanDrag::default();
        drag.begin(&task);
        let dropped = drag.drop_on(Status::Review).unwrap();

        let mut expected = task.clone();
        expected.status = Status::Review;
        assert_eq!(dropped, expected);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_without_drag_is_noop() {
        let mut drag = KanbanDrag::default();
        assert_eq!(drag.drop_on(Status::Done), None);
    }
}

use uuid::Uuid;

/// Which page the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    MyTasks,
    Inbox,
    Account,
    Project(Uuid),
    Doc(Uuid),
}

impl Route {
    /// Routes that show task views (board / list / timeline).
    pub fn shows_tasks(&self) -> bool {
        matches!(self, Route::Project(_) | Route::MyTasks)
    }

    pub fn project_id(&self) -> Option<Uuid> {
        match self {
            Route::Project(id) | Route::Doc(id) => Some(*id),
            _ => None,
        }
    }
}

/// How a task route is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Board,
    List,
    Timeline,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Board, ViewMode::List, ViewMode::Timeline]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Board => "Board",
            ViewMode::List => "List",
            ViewMode::Timeline => "Gantt",
        }
    }
}

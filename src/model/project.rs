use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a sidebar entry opens: a task board or a free-text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Project,
    Doc,
}

/// A grouping of tasks (or a document) listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub kind: ProjectKind,
}

impl Project {
    pub fn new(name: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
        }
    }

    pub fn is_board(&self) -> bool {
        self.kind == ProjectKind::Project
    }
}

//! The board's top-level state. All mutations of the task and project lists
//! go through methods on [`AppState`]; views only ever see snapshots.

pub mod kanban;
pub mod route;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::model::dates::format_display_date;
use crate::model::{Project, ProjectKind, Status, Task};
use crate::timeline::TimelineAction;

pub use kanban::KanbanDrag;
pub use route::{Route, ViewMode};

/// Name of the sidebar section holding the project list.
pub const PROJECTS_MENU: &str = "projects";

/// Task counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl Stats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Stats::default(), |mut s, t| {
            match t.status {
                Status::Todo => s.todo += 1,
                Status::InProgress => s.in_progress += 1,
                Status::Done => s.done += 1,
                Status::Review => {}
            }
            s
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    tasks: Vec<Task>,
    projects: Vec<Project>,
    pub route: Route,
    pub view_mode: ViewMode,
    pub search_query: String,
    pub selected_task: Option<Uuid>,
    pub dark_mode: bool,
    pub sidebar_open: bool,
    expanded_menus: HashSet<String>,
    /// Name that "My Tasks" filters on and new tasks are assigned to.
    pub current_user: String,
    /// Supplies the year for display dates and the default due date.
    pub today: NaiveDate,
}

impl AppState {
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>, today: NaiveDate) -> Self {
        let mut expanded_menus = HashSet::new();
        expanded_menus.insert(PROJECTS_MENU.to_string());
        Self {
            tasks,
            projects,
            route: Route::default(),
            view_mode: ViewMode::default(),
            search_query: String::new(),
            selected_task: None,
            dark_mode: false,
            sidebar_open: true,
            expanded_menus,
            current_user: "User".to_string(),
            today,
        }
    }

    // --- Read access ---

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected_task.and_then(|id| self.task(id))
    }

    /// Year display dates are resolved against.
    pub fn year(&self) -> i32 {
        self.today.year()
    }

    pub fn is_menu_expanded(&self, menu: &str) -> bool {
        self.expanded_menus.contains(menu)
    }

    /// Tasks for the current route, narrowed by the search query.
    pub fn filtered_tasks(&self) -> Vec<Task> {
        let query = self.search_query.trim();
        self.tasks
            .iter()
            .filter(|t| match self.route {
                Route::Project(id) => t.project_id == id,
                Route::MyTasks => t.assignee == self.current_user,
                _ => true,
            })
            .filter(|t| query.is_empty() || t.matches_query(query))
            .cloned()
            .collect()
    }

    /// Counts across every task, regardless of route.
    pub fn stats(&self) -> Stats {
        Stats::from_tasks(&self.tasks)
    }

    pub fn page_title(&self) -> String {
        match self.route {
            Route::Dashboard => "Dashboard".to_string(),
            Route::MyTasks => "My Tasks".to_string(),
            Route::Inbox => "Inbox".to_string(),
            Route::Account => "Account".to_string(),
            Route::Project(id) | Route::Doc(id) => self
                .project(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Project".to_string()),
        }
    }

    // --- Navigation ---

    pub fn set_route(&mut self, route: Route) {
        debug!(?route, "route changed");
        self.route = route;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_menu(&mut self, menu: &str) {
        if !self.expanded_menus.remove(menu) {
            self.expanded_menus.insert(menu.to_string());
        }
    }

    pub fn select_task(&mut self, id: Uuid) {
        if self.task(id).is_some() {
            self.selected_task = Some(id);
        }
    }

    pub fn close_editor(&mut self) {
        self.selected_task = None;
    }

    // --- Task operations ---

    /// Replace the task with the same id. Returns false if there is none.
    pub fn update_task(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                debug!(task_id = %updated.id, "task updated");
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Set a task's due date display string.
    pub fn update_task_date(&mut self, id: Uuid, date: impl Into<String>) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.due_date = date.into();
                true
            }
            None => false,
        }
    }

    /// Move `dragged` to the index `target` currently occupies.
    ///
    /// Unknown ids leave the order untouched.
    pub fn reorder_tasks(&mut self, dragged: Uuid, target: Uuid) -> bool {
        let from = self.tasks.iter().position(|t| t.id == dragged);
        let to = self.tasks.iter().position(|t| t.id == target);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        let moved = self.tasks.remove(from);
        self.tasks.insert(to, moved);
        info!(%dragged, from, to, "tasks reordered");
        true
    }

    /// Create a task with default fields in the current project (or the first
    /// board project) and open it in the editor.
    pub fn add_task(&mut self, status: Status) -> Uuid {
        let project_id = match self.route {
            Route::Project(id) => id,
            _ => self
                .projects
                .iter()
                .find(|p| p.is_board())
                .map(|p| p.id)
                .unwrap_or_else(Uuid::nil),
        };
        let mut task = Task::new("New Task", format_display_date(self.today), project_id);
        task.status = status;
        task.assignee = self.current_user.clone();
        let id = task.id;

        self.tasks.push(task);
        self.selected_task = Some(id);
        info!(task_id = %id, ?status, "task added");
        id
    }

    /// Remove a task. Closes the editor if it was showing it.
    pub fn delete_task(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.selected_task == Some(id) {
            self.selected_task = None;
        }
        let removed = self.tasks.len() != before;
        if removed {
            info!(task_id = %id, "task deleted");
        }
        removed
    }

    /// Apply something the timeline asked for.
    pub fn apply_timeline_action(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::OpenEditor(id) => self.select_task(id),
            TimelineAction::Reschedule { task_id, start, end } => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
                    task.set_execution_range(start, end);
                    info!(
                        %task_id,
                        start = %format_display_date(start),
                        end = %format_display_date(end),
                        "task rescheduled"
                    );
                }
            }
            TimelineAction::Reorder { dragged, target } => {
                self.reorder_tasks(dragged, target);
            }
            TimelineAction::AddTask => {
                self.add_task(Status::Todo);
            }
        }
    }

    // --- Project operations ---

    /// Create "New Project N", expand the project list and open it.
    pub fn add_project(&mut self) -> Uuid {
        let count = self.projects.iter().filter(|p| p.is_board()).count();
        let project = Project::new(format!("New Project {}", count + 1), ProjectKind::Project);
        let id = project.id;
        self.projects.push(project);
        self.expanded_menus.insert(PROJECTS_MENU.to_string());
        self.route = Route::Project(id);
        info!(project_id = %id, "project added");
        id
    }

    /// Remove a project. Its tasks are kept and keep pointing at the old id.
    pub fn delete_project(&mut self, id: Uuid) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.route.project_id() == Some(id) {
            self.route = Route::Dashboard;
        }
        let removed = self.projects.len() != before;
        if removed {
            info!(project_id = %id, "project deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_board;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn sample_state() -> AppState {
        let (projects, tasks) = sample_board();
        AppState::new(projects, tasks, today())
    }

    #[test]
    fn project_route_filters_by_project() {
        let mut state = sample_state();
        let marketing = state.projects()[1].id;
        state.set_route(Route::Project(marketing));
        let titles: Vec<_> = state.filtered_tasks().into_iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            ["Marketing Campaign", "Q4 Strategy Draft", "Landing Page Update"]
        );
    }

    #[test]
    fn my_tasks_filters_on_current_user() {
        let mut state = sample_state();
        state.set_route(Route::MyTasks);
        let tasks = state.filtered_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Finance Review");
    }

    #[test]
    fn search_matches_title_and_assignee_case_insensitively() {
        let mut state = sample_state();
        state.search_query = "MIKE".into();
        assert_eq!(state.filtered_tasks().len(), 1);
        state.search_query = "draft".into();
        assert_eq!(state.filtered_tasks()[0].title, "Q4 Strategy Draft");
    }

    #[test]
    fn stats_count_statuses() {
        let state = sample_state();
        assert_eq!(
            state.stats(),
            Stats {
                todo: 3,
                in_progress: 3,
                done: 1
            }
        );
    }

    #[test]
    fn add_task_uses_route_project_and_opens_editor() {
        let mut state = sample_state();
        let marketing = state.projects()[1].id;
        state.set_route(Route::Project(marketing));
        let id = state.add_task(Status::Review);
        let task = state.task(id).unwrap();
        assert_eq!(task.project_id, marketing);
        assert_eq!(task.status, Status::Review);
        assert_eq!(task.due_date, "Oct 18");
        assert_eq!(task.assignee, "User");
        assert_eq!(state.selected_task, Some(id));
    }

    #[test]
    fn add_task_outside_project_uses_first_board_project() {
        let mut state = sample_state();
        let first = state.projects()[0].id;
        let id = state.add_task(Status::Todo);
        assert_eq!(state.task(id).unwrap().project_id, first);
    }

    #[test]
    fn delete_task_clears_selection() {
        let mut state = sample_state();
        let id = state.tasks()[0].id;
        state.select_task(id);
        assert!(state.delete_task(id));
        assert_eq!(state.selected_task, None);
        assert!(!state.delete_task(id));
    }

    #[test]
    fn delete_project_leaves_orphans() {
        let mut state = sample_state();
        let marketing = state.projects()[1].id;
        state.set_route(Route::Project(marketing));
        assert!(state.delete_project(marketing));
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(
            state.tasks().iter().filter(|t| t.project_id == marketing).count(),
            3
        );
    }

    #[test]
    fn add_project_names_and_opens_it() {
        let mut state = sample_state();
        state.toggle_menu(PROJECTS_MENU);
        assert!(!state.is_menu_expanded(PROJECTS_MENU));
        let id = state.add_project();
        assert_eq!(state.project(id).unwrap().name, "New Project 3");
        assert_eq!(state.route, Route::Project(id));
        assert!(state.is_menu_expanded(PROJECTS_MENU));
        assert_eq!(state.page_title(), "New Project 3");
    }

    #[test]
    fn update_task_with_unknown_id_is_ignored() {
        let mut state = sample_state();
        let before = state.tasks().to_vec();
        let stranger = Task::new("x", "Oct 1", Uuid::nil());
        assert!(!state.update_task(stranger));
        assert!(!state.update_task_date(Uuid::new_v4(), "Oct 2"));
        assert_eq!(state.tasks(), before.as_slice());
    }

    #[test]
    fn reschedule_action_writes_display_dates() {
        let mut state = sample_state();
        let id = state.tasks()[3].id; // Compile Survey Data, due Oct 27 only
        state.apply_timeline_action(TimelineAction::Reschedule {
            task_id: id,
            start: NaiveDate::from_ymd_opt(2026, 10, 25).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 10, 29).unwrap(),
        });
        let task = state.task(id).unwrap();
        assert_eq!(task.start_date.as_deref(), Some("Oct 25"));
        assert_eq!(task.due_date, "Oct 29");
    }

    #[test]
    fn open_editor_action_selects_task() {
        let mut state = sample_state();
        let id = state.tasks()[2].id;
        state.apply_timeline_action(TimelineAction::OpenEditor(id));
        assert_eq!(state.selected_task, Some(id));
        state.apply_timeline_action(TimelineAction::OpenEditor(Uuid::new_v4()));
        assert_eq!(state.selected_task, Some(id));
    }
}

//! Board-level flows over the sample data.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use rust_board_app::model::sample::sample_board;
use rust_board_app::model::Status;
use rust_board_app::state::{AppState, KanbanDrag, Route, ViewMode};

fn sample_state() -> AppState {
    let (projects, tasks) = sample_board();
    AppState::new(projects, tasks, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

#[test]
fn kanban_drop_moves_card_to_new_column() {
    let mut state = sample_state();
    let launch = state.projects()[0].id;
    state.set_route(Route::Project(launch));
    state.set_view_mode(ViewMode::Board);

    let card = state
        .filtered_tasks()
        .into_iter()
        .find(|t| t.title == "User Interview Analysis")
        .unwrap();
    let mut drag = KanbanDrag::default();
    drag.begin(&card);
    let dropped = drag.drop_on(Status::InProgress).unwrap();
    assert!(state.update_task(dropped));

    let stored = state.task(card.id).unwrap();
    assert_eq!(stored.status, Status::InProgress);
    assert_eq!(stored.title, card.title);
    assert_eq!(stored.due_date, card.due_date);

    let in_progress: Vec<String> = state
        .filtered_tasks()
        .into_iter()
        .filter(|t| t.status == Status::InProgress)
        .map(|t| t.title)
        .collect();
    assert_eq!(in_progress, ["Product Launch Phase", "User Interview Analysis"]);
}

#[test]
fn search_narrows_current_route_only() {
    let mut state = sample_state();
    let marketing = state.projects()[1].id;
    state.set_route(Route::Project(marketing));
    state.search_query = "sarah".into();
    assert_eq!(state.filtered_tasks().len(), 3);

    state.search_query = "alex".into();
    assert!(state.filtered_tasks().is_empty());

    state.set_route(Route::Dashboard);
    assert_eq!(state.filtered_tasks().len(), 3);
}

#[test]
fn new_task_lands_in_its_column_and_opens() {
    let mut state = sample_state();
    let marketing = state.projects()[1].id;
    state.set_route(Route::Project(marketing));

    let id = state.add_task(Status::Done);
    let done: Vec<_> = state
        .filtered_tasks()
        .into_iter()
        .filter(|t| t.status == Status::Done)
        .collect();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, id);
    assert_eq!(done[0].title, "New Task");
    assert_eq!(done[0].wbs, "1.0");
    assert_eq!(state.selected().map(|t| t.id), Some(id));
}

#[test]
fn stats_ignore_route_and_search() {
    let mut state = sample_state();
    let before = state.stats();
    state.set_route(Route::MyTasks);
    state.search_query = "finance".into();
    assert_eq!(state.stats(), before);
    assert_eq!(before.todo + before.in_progress + before.done, 7);
}

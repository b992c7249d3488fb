//! Timeline gestures driven through the controller and applied to the board.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use rust_board_app::model::{Project, ProjectKind, Task};
use rust_board_app::state::AppState;
use rust_board_app::timeline::{
    task_bars, DragController, DragSnapshot, Edge, Granularity, TimelineAction, TimelineWindow,
};

fn ymd(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn board_with(start: &str, due: &str) -> (AppState, Uuid) {
    let project = Project::new("Launch", ProjectKind::Project);
    let mut task = Task::new("Build", due, project.id);
    task.start_date = Some(start.to_string());
    let id = task.id;
    (AppState::new(vec![project], vec![task], ymd(10, 18)), id)
}

fn snapshot_of(state: &AppState, id: Uuid) -> DragSnapshot {
    let (start, end) = state.task(id).unwrap().execution_range(state.year()).unwrap();
    DragSnapshot { start, end }
}

#[test]
fn dragging_a_bar_three_days_moves_both_dates() {
    let (mut state, id) = board_with("Oct 10", "Oct 12");
    let window = TimelineWindow::new(ymd(10, 1), ymd(10, 31), Granularity::Day, 40.0);

    let before = task_bars(state.task(id).unwrap(), &window, state.year()).actual.unwrap();
    assert_eq!(before.left, 360.0);
    assert_eq!(before.width, 120.0);

    let mut drag = DragController::new(Granularity::Day, 40.0);
    let grab = before.left + 10.0;
    assert!(drag.press_bar(id, snapshot_of(&state, id), grab));
    drag.pointer_moved(grab + 50.0);
    drag.pointer_moved(grab + 118.0);
    let action = drag.release(grab + 118.0).unwrap();
    state.apply_timeline_action(action);

    let task = state.task(id).unwrap();
    assert_eq!(task.start_date.as_deref(), Some("Oct 13"));
    assert_eq!(task.due_date, "Oct 15");

    let after = task_bars(task, &window, state.year()).actual.unwrap();
    assert_eq!(after.left, before.left + 120.0);
    assert_eq!(drag.active_captures(), 0);
}

#[test]
fn small_wobble_opens_the_editor_without_moving() {
    let (mut state, id) = board_with("Oct 10", "Oct 12");
    let mut drag = DragController::new(Granularity::Day, 40.0);
    drag.press_bar(id, snapshot_of(&state, id), 400.0);
    drag.pointer_moved(403.0);

    let action = drag.release(403.0);
    assert_eq!(action, Some(TimelineAction::OpenEditor(id)));
    state.apply_timeline_action(action.unwrap());

    assert_eq!(state.selected_task, Some(id));
    assert_eq!(state.task(id).unwrap().due_date, "Oct 12");
}

#[test]
fn left_resize_past_the_end_is_dropped_then_a_valid_one_commits() {
    let (mut state, id) = board_with("Oct 10", "Oct 20");
    let mut drag = DragController::new(Granularity::Day, 40.0);

    drag.press_edge(id, Edge::Start, snapshot_of(&state, id), 0.0);
    assert_eq!(drag.release(15.0 * 40.0), None);
    assert_eq!(state.task(id).unwrap().start_date.as_deref(), Some("Oct 10"));

    drag.press_edge(id, Edge::Start, snapshot_of(&state, id), 0.0);
    let action = drag.release(5.0 * 40.0).unwrap();
    state.apply_timeline_action(action);

    let task = state.task(id).unwrap();
    assert_eq!(task.start_date.as_deref(), Some("Oct 15"));
    assert_eq!(task.due_date, "Oct 20");
}

#[test]
fn week_resize_snaps_to_whole_weeks() {
    let (mut state, id) = board_with("Oct 5", "Oct 9");
    let mut drag = DragController::new(Granularity::Week, 60.0);

    drag.press_edge(id, Edge::End, snapshot_of(&state, id), 100.0);
    drag.pointer_moved(190.0);
    state.apply_timeline_action(drag.release(190.0).unwrap());

    assert_eq!(state.task(id).unwrap().due_date, "Oct 23");
}

#[test]
fn row_drag_reorders_the_board() {
    let project = Project::new("Launch", ProjectKind::Project);
    let tasks: Vec<Task> = (0..8)
        .map(|i| Task::new(format!("Task {i}"), "Oct 20", project.id))
        .collect();
    let ids: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();
    let mut state = AppState::new(vec![project], tasks, ymd(10, 18));

    let mut drag = DragController::new(Granularity::Week, 60.0);
    assert!(drag.begin_row_drag(ids[2]));
    let action = drag.drop_row(ids[5]).unwrap();
    state.apply_timeline_action(action);

    let order: Vec<Uuid> = state.tasks().iter().map(|t| t.id).collect();
    let expected: Vec<Uuid> = [0, 1, 3, 4, 5, 2, 6, 7].iter().map(|&i| ids[i]).collect();
    assert_eq!(order, expected);
}

#[test]
fn window_fit_covers_every_task_and_the_viewport() {
    let (state, id) = board_with("Oct 10", "Oct 20");
    let window = TimelineWindow::fit(
        state.tasks(),
        Granularity::Day,
        40.0,
        4000.0,
        state.year(),
        state.today,
    );
    assert_eq!(window.start, ymd(9, 26));
    assert!(window.end >= ymd(12, 4));
    assert!(window.total_width() >= 4000.0);

    let bars = task_bars(state.task(id).unwrap(), &window, state.year());
    let actual = bars.actual.unwrap();
    assert_eq!(actual.left, window.date_to_x(ymd(10, 10)));
    assert_eq!(bars.planned, None);
}

#[test]
fn malformed_dates_omit_the_bar() {
    let (mut state, id) = board_with("Oct 10", "Oct 20");
    let mut task = state.task(id).unwrap().clone();
    task.due_date = "someday".into();
    state.update_task(task);

    let window = TimelineWindow::fit(
        state.tasks(),
        Granularity::Week,
        60.0,
        600.0,
        state.year(),
        state.today,
    );
    assert!(task_bars(state.task(id).unwrap(), &window, state.year()).actual.is_none());
}

use tracing::debug;

use crate::model::dates::format_display_date;
use crate::model::sample::sample_board;
use crate::model::Status;
use crate::settings::AppSettings;
use crate::state::{AppState, KanbanDrag, Route, ViewMode};
use crate::timeline::TimelineAction;
use crate::ui;
use crate::ui::dashboard::DashboardAction;
use crate::ui::kanban::BoardAction;
use crate::ui::list_view::ListAction;
use crate::ui::sidebar::SidebarAction;
use crate::ui::task_modal::ModalAction;
use crate::ui::timeline_view::TimelineView;
use crate::ui::top_bar::TopBarAction;

/// Main application: board state plus the per-view interaction state.
pub struct BoardApp {
    pub state: AppState,
    pub settings: AppSettings,
    timeline: TimelineView,
    kanban_drag: KanbanDrag,
    status_message: String,
}

impl BoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let (projects, tasks) = sample_board();
        let state = AppState::new(projects, tasks, chrono::Local::now().date_naive());
        Self::with_state(state, settings)
    }

    /// Build around an existing state, applying start-up preferences to it.
    pub fn with_state(mut state: AppState, settings: AppSettings) -> Self {
        state.dark_mode = settings.dark_mode;
        state.current_user = settings.current_user.clone();
        Self {
            state,
            timeline: TimelineView::new(&settings),
            settings,
            kanban_drag: KanbanDrag::default(),
            status_message: "Ready".to_string(),
        }
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Drop any gesture belonging to a view that is no longer on screen.
    fn sync_active_view(&mut self) {
        let on_tasks = self.state.route.shows_tasks();
        if !(on_tasks && self.state.view_mode == ViewMode::Timeline) {
            self.timeline.cancel_drag();
        }
        if !(on_tasks && self.state.view_mode == ViewMode::Board) {
            self.kanban_drag.cancel();
        }
    }

    fn apply_sidebar(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::Navigate(route) => self.state.set_route(route),
            SidebarAction::OpenProjectView(id, mode) => {
                self.state.set_route(Route::Project(id));
                self.state.set_view_mode(mode);
            }
            SidebarAction::ToggleMenu(menu) => self.state.toggle_menu(menu),
            SidebarAction::AddProject => {
                let id = self.state.add_project();
                self.status_message = format!("Created '{}'", self.state.page_title());
                debug!(project_id = %id, "project opened");
            }
            SidebarAction::DeleteProject(id) => {
                if self.state.delete_project(id) {
                    self.status_message = "Project deleted".to_string();
                }
            }
            SidebarAction::Search(query) => self.state.search_query = query,
            SidebarAction::Collapse => self.state.sidebar_open = false,
            SidebarAction::None => {}
        }
    }

    fn apply_top_bar(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::ToggleDarkMode => self.state.toggle_dark_mode(),
            TopBarAction::OpenSidebar => self.state.sidebar_open = true,
            TopBarAction::SetViewMode(mode) => self.state.set_view_mode(mode),
            TopBarAction::None => {}
        }
    }

    fn apply_board(&mut self, action: BoardAction) {
        match action {
            BoardAction::Edit(id) => self.state.select_task(id),
            BoardAction::Update(task) => {
                let message = format!("'{}' moved to {}", task.title, task.status.label());
                if self.state.update_task(task) {
                    self.status_message = message;
                }
            }
            BoardAction::Add(status) => {
                self.state.add_task(status);
            }
            BoardAction::None => {}
        }
    }

    fn apply_list(&mut self, action: ListAction) {
        match action {
            ListAction::Edit(id) => self.state.select_task(id),
            ListAction::Add => {
                self.state.add_task(Status::Todo);
            }
            ListAction::None => {}
        }
    }

    fn apply_timeline(&mut self, action: TimelineAction) {
        if let TimelineAction::Reschedule { task_id, start, end } = &action {
            if let Some(task) = self.state.task(*task_id) {
                self.status_message = format!(
                    "Rescheduled '{}' ({} - {})",
                    task.title,
                    format_display_date(*start),
                    format_display_date(*end)
                );
            }
        }
        self.state.apply_timeline_action(action);
    }

    fn apply_dashboard(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Navigate(route) => self.state.set_route(route),
            DashboardAction::Edit(id) => self.state.select_task(id),
            DashboardAction::None => {}
        }
    }

    fn apply_modal(&mut self, action: ModalAction) {
        match action {
            ModalAction::Update(task) => {
                self.state.update_task(task);
            }
            ModalAction::Delete(id) => {
                if self.state.delete_task(id) {
                    self.status_message = "Task deleted".to_string();
                }
            }
            ModalAction::Close => self.state.close_editor(),
            ModalAction::None => {}
        }
    }

    fn show_content(&mut self, ui: &mut egui::Ui, visible: &[crate::model::Task]) {
        let dark_mode = self.state.dark_mode;
        match self.state.route {
            Route::Dashboard => {
                let action = ui::dashboard::show_dashboard(
                    self.state.stats(),
                    self.state.tasks(),
                    self.state.projects(),
                    dark_mode,
                    ui,
                );
                self.apply_dashboard(action);
            }
            Route::Inbox => ui::dashboard::show_placeholder(
                "Inbox",
                "You're all caught up.",
                dark_mode,
                ui,
            ),
            Route::Account => ui::dashboard::show_placeholder(
                "Account",
                &format!("Signed in as {}", self.state.current_user),
                dark_mode,
                ui,
            ),
            Route::Doc(_) => ui::dashboard::show_placeholder(
                &self.state.page_title(),
                "This document is empty.",
                dark_mode,
                ui,
            ),
            Route::Project(_) | Route::MyTasks => match self.state.view_mode {
                ViewMode::Board => {
                    let action = ui::kanban::show_kanban_board(
                        visible,
                        &mut self.kanban_drag,
                        dark_mode,
                        ui,
                    );
                    self.apply_board(action);
                }
                ViewMode::List => {
                    let action = ui::list_view::show_list_view(visible, dark_mode, ui);
                    self.apply_list(action);
                }
                ViewMode::Timeline => {
                    let action = self.timeline.show(
                        visible,
                        self.state.year(),
                        self.state.today,
                        &self.settings,
                        dark_mode,
                        ui,
                    );
                    if let Some(action) = action {
                        self.apply_timeline(action);
                    }
                }
            },
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.today = chrono::Local::now().date_naive();
        ui::theme::apply_theme(ctx, self.state.dark_mode);
        let pal = ui::theme::palette(self.state.dark_mode);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.kanban_drag.is_dragging() {
                self.kanban_drag.cancel();
            } else if !self.timeline.drag().is_pointer_drag() {
                self.state.close_editor();
            }
        }
        self.sync_active_view();

        let visible = self.state.filtered_tasks();

        if self.state.sidebar_open {
            let mut sidebar_action = SidebarAction::None;
            egui::SidePanel::left("sidebar")
                .exact_width(ui::theme::SIDEBAR_WIDTH)
                .resizable(false)
                .frame(
                    egui::Frame::default()
                        .fill(pal.bg_panel)
                        .inner_margin(egui::Margin::same(10.0))
                        .stroke(egui::Stroke::new(1.0, pal.border)),
                )
                .show(ctx, |ui| {
                    sidebar_action = ui::sidebar::show_sidebar(&self.state, ui);
                });
            self.apply_sidebar(sidebar_action);
        }

        let mut top_action = TopBarAction::None;
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::default()
                    .fill(pal.bg)
                    .inner_margin(egui::Margin::symmetric(16.0, 4.0))
                    .stroke(egui::Stroke::new(1.0, pal.border)),
            )
            .show(ctx, |ui| {
                top_action = ui::top_bar::show_top_bar(&self.state, &visible, ui);
            });
        self.apply_top_bar(top_action);

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::default()
                    .fill(pal.bg_panel)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .size(11.0)
                            .color(pal.text_secondary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", visible.len()))
                                .size(10.5)
                                .color(pal.text_dim),
                        );
                    });
                });
            });

        self.sync_active_view();
        let padded = !(self.state.route.shows_tasks() && self.state.view_mode == ViewMode::Timeline);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(pal.bg)
                    .inner_margin(egui::Margin::same(if padded { 20.0 } else { 0.0 })),
            )
            .show(ctx, |ui| {
                self.show_content(ui, &visible);
            });

        if let Some(task) = self.state.selected().cloned() {
            ui::task_modal::paint_backdrop(ctx);
            let action = ui::task_modal::show_task_modal(
                ctx,
                &task,
                self.state.year(),
                self.state.today,
                self.state.dark_mode,
            );
            self.apply_modal(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{DragSnapshot, Edge};
    use chrono::NaiveDate;

    fn app() -> BoardApp {
        let (projects, tasks) = sample_board();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        BoardApp::with_state(AppState::new(projects, tasks, today), AppSettings::default())
    }

    #[test]
    fn settings_seed_state() {
        let settings = AppSettings {
            dark_mode: true,
            current_user: "Sarah".into(),
            ..AppSettings::default()
        };
        let (projects, tasks) = sample_board();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let app = BoardApp::with_state(AppState::new(projects, tasks, today), settings);
        assert!(app.state.dark_mode);
        assert_eq!(app.state.current_user, "Sarah");
    }

    #[test]
    fn project_view_shortcut_sets_route_and_mode() {
        let mut app = app();
        let id = app.state.projects()[0].id;
        app.apply_sidebar(SidebarAction::OpenProjectView(id, ViewMode::Timeline));
        assert_eq!(app.state.route, Route::Project(id));
        assert_eq!(app.state.view_mode, ViewMode::Timeline);
    }

    #[test]
    fn leaving_the_timeline_releases_pointer_capture() {
        let mut app = app();
        let id = app.state.projects()[0].id;
        app.apply_sidebar(SidebarAction::OpenProjectView(id, ViewMode::Timeline));

        let task = app.state.tasks()[0].id;
        let day = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let snapshot = DragSnapshot { start: day, end: day };
        assert!(app.timeline.drag_mut().press_edge(task, Edge::End, snapshot, 0.0));
        assert_eq!(app.timeline.drag().active_captures(), 1);

        app.apply_top_bar(TopBarAction::SetViewMode(ViewMode::List));
        app.sync_active_view();
        assert_eq!(app.timeline.drag().active_captures(), 0);
    }

    #[test]
    fn leaving_the_board_cancels_card_drag() {
        let mut app = app();
        let task = app.state.tasks()[0].clone();
        app.kanban_drag.begin(&task);
        app.apply_sidebar(SidebarAction::Navigate(Route::Inbox));
        app.sync_active_view();
        assert!(!app.kanban_drag.is_dragging());
    }

    #[test]
    fn board_drop_updates_task_and_reports() {
        let mut app = app();
        let mut task = app.state.tasks()[2].clone();
        task.status = Status::Review;
        app.apply_board(BoardAction::Update(task.clone()));
        assert_eq!(app.state.task(task.id).unwrap().status, Status::Review);
        assert_eq!(app.status_message(), "'User Interview Analysis' moved to Review");
    }

    #[test]
    fn modal_delete_removes_and_closes() {
        let mut app = app();
        let id = app.state.tasks()[1].id;
        app.apply_board(BoardAction::Edit(id));
        assert_eq!(app.state.selected_task, Some(id));
        app.apply_modal(ModalAction::Delete(id));
        assert!(app.state.task(id).is_none());
        assert_eq!(app.state.selected_task, None);
    }

    #[test]
    fn timeline_reschedule_reports_new_range() {
        let mut app = app();
        let id = app.state.tasks()[3].id;
        app.apply_timeline(TimelineAction::Reschedule {
            task_id: id,
            start: NaiveDate::from_ymd_opt(2026, 10, 25).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 10, 29).unwrap(),
        });
        assert_eq!(app.state.task(id).unwrap().due_date, "Oct 29");
        assert!(app.status_message().ends_with("(Oct 25 - Oct 29)"));
    }
}

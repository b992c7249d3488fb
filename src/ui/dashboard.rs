use egui::{RichText, Ui};
use uuid::Uuid;

use crate::model::{Project, Status, Task};
use crate::state::{Route, Stats};
use crate::ui::theme::{self, Palette};
use crate::ui::widgets;

const RECENT_TASKS: usize = 5;

/// Actions the dashboard can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Navigate(Route),
    Edit(Uuid),
}

pub fn show_dashboard(
    stats: Stats,
    tasks: &[Task],
    projects: &[Project],
    dark_mode: bool,
    ui: &mut Ui,
) -> DashboardAction {
    let pal = theme::palette(dark_mode);
    let mut action = DashboardAction::None;

    ui.heading(RichText::new("Good to see you").color(pal.text_primary));
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        stat_card(ui, Status::Todo, stats.todo, dark_mode, pal);
        stat_card(ui, Status::InProgress, stats.in_progress, dark_mode, pal);
        stat_card(ui, Status::Done, stats.done, dark_mode, pal);
    });
    ui.add_space(16.0);

    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Recent tasks").strong().color(pal.text_secondary));
        cols[0].add_space(4.0);
        for task in tasks.iter().rev().take(RECENT_TASKS) {
            let row = cols[0].horizontal(|ui| {
                let (fill, text) = theme::status_colors(task.status, dark_mode);
                widgets::pill(ui, task.status.label(), fill, text);
                ui.label(RichText::new(&task.title).color(pal.text_primary));
                ui.label(RichText::new(&task.due_date).size(11.0).color(pal.text_dim));
            });
            if row.response.interact(egui::Sense::click()).clicked() {
                action = DashboardAction::Edit(task.id);
            }
        }

        cols[1].label(RichText::new("Projects").strong().color(pal.text_secondary));
        cols[1].add_space(4.0);
        for project in projects {
            let (icon, route) = if project.is_board() {
                (egui_phosphor::regular::KANBAN, Route::Project(project.id))
            } else {
                (egui_phosphor::regular::FILE_TEXT, Route::Doc(project.id))
            };
            let open_count = tasks
                .iter()
                .filter(|t| t.project_id == project.id && t.status != Status::Done)
                .count();
            let label = if project.is_board() {
                format!("{icon} {}  ({open_count} open)", project.name)
            } else {
                format!("{icon} {}", project.name)
            };
            if cols[1].link(label).clicked() {
                action = DashboardAction::Navigate(route);
            }
        }
    });

    action
}

fn stat_card(ui: &mut Ui, status: Status, count: usize, dark_mode: bool, pal: &Palette) {
    let (fill, _) = theme::status_colors(status, dark_mode);
    let frame = egui::Frame {
        fill: pal.bg_card,
        rounding: egui::Rounding::same(10.0),
        inner_margin: egui::Margin::same(14.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, pal.border),
        shadow: egui::epaint::Shadow::NONE,
    };
    frame.show(ui, |ui| {
        ui.set_width(160.0);
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, fill);
            ui.label(RichText::new(status.label()).color(pal.text_secondary));
        });
        ui.label(RichText::new(count.to_string()).size(28.0).strong().color(pal.text_primary));
    });
}

/// Static pages for routes that have no task content.
pub fn show_placeholder(title: &str, body: &str, dark_mode: bool, ui: &mut Ui) {
    let pal = theme::palette(dark_mode);
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading(RichText::new(title).color(pal.text_primary));
        ui.add_space(8.0);
        ui.label(RichText::new(body).color(pal.text_dim));
    });
}

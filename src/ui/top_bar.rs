use egui::{RichText, Ui};

use crate::model::sample::USERS;
use crate::model::{Status, Task};
use crate::state::{AppState, ViewMode};
use crate::ui::theme;
use crate::ui::widgets;

/// Actions that the top bar can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    None,
    ToggleDarkMode,
    OpenSidebar,
    SetViewMode(ViewMode),
}

/// Breadcrumb, collaborators and the theme switch. On task routes a second row
/// holds the view switcher and counts for `visible` tasks.
pub fn show_top_bar(state: &AppState, visible: &[Task], ui: &mut Ui) -> TopBarAction {
    let pal = theme::palette(state.dark_mode);
    let mut action = TopBarAction::None;

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if !state.sidebar_open {
            let open = ui.button(egui_phosphor::regular::LAYOUT);
            if open.on_hover_text("Show sidebar").clicked() {
                action = TopBarAction::OpenSidebar;
            }
        }
        ui.label(RichText::new("Work").color(pal.text_dim));
        ui.label(RichText::new("/").color(pal.text_dim));
        ui.label(
            RichText::new(format!("{} {}", state.page_title(), egui_phosphor::regular::CARET_DOWN))
                .strong()
                .color(pal.text_primary),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, hint) = if state.dark_mode {
                (egui_phosphor::regular::SUN, "Switch to Light Mode")
            } else {
                (egui_phosphor::regular::MOON, "Switch to Dark Mode")
            };
            if ui.button(icon).on_hover_text(hint).clicked() {
                action = TopBarAction::ToggleDarkMode;
            }
            ui.separator();
            widgets::avatar(ui, "+", 24.0);
            for user in USERS.iter().take(3).rev() {
                widgets::avatar(ui, user, 24.0);
            }
        });
    });
    ui.add_space(4.0);

    if state.route.shows_tasks() {
        ui.separator();
        ui.horizontal(|ui| {
            for mode in ViewMode::all() {
                let icon = match mode {
                    ViewMode::Board => egui_phosphor::regular::KANBAN,
                    ViewMode::List => egui_phosphor::regular::LIST,
                    ViewMode::Timeline => egui_phosphor::regular::CHART_BAR_HORIZONTAL,
                };
                let label = RichText::new(format!("{icon} {}", mode.label())).size(12.0);
                if ui.selectable_label(state.view_mode == *mode, label).clicked() {
                    action = TopBarAction::SetViewMode(*mode);
                }
            }
            ui.separator();
            for status in [Status::Todo, Status::InProgress] {
                let count = visible.iter().filter(|t| t.status == status).count();
                let (fill, _) = theme::status_colors(status, state.dark_mode);
                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, fill);
                ui.label(
                    RichText::new(format!("{count} {}", status.label()))
                        .size(11.0)
                        .color(pal.text_secondary),
                );
            }
        });
        ui.add_space(2.0);
    }

    action
}

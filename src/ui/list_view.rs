use egui::{RichText, Ui};
use uuid::Uuid;

use crate::model::{Status, Task};
use crate::ui::theme;
use crate::ui::widgets;

/// Actions that the list can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    None,
    Edit(Uuid),
    Add,
}

const NAME_WIDTH: f32 = 340.0;
const STATUS_WIDTH: f32 = 120.0;
const ASSIGNEE_WIDTH: f32 = 130.0;
const DUE_WIDTH: f32 = 110.0;

/// Render tasks as a flat table.
pub fn show_list_view(tasks: &[Task], dark_mode: bool, ui: &mut Ui) -> ListAction {
    let pal = theme::palette(dark_mode);
    let mut action = ListAction::None;

    // Column headers
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        let hdr = |ui: &mut Ui, text: &str, width: f32| {
            ui.allocate_ui(egui::vec2(width, 18.0), |ui| {
                ui.label(RichText::new(text).size(11.0).strong().color(pal.text_dim));
            });
        };
        hdr(ui, "Task Name", NAME_WIDTH);
        hdr(ui, "Status", STATUS_WIDTH);
        hdr(ui, "Assignee", ASSIGNEE_WIDTH);
        hdr(ui, "Due Date", DUE_WIDTH);
        hdr(ui, "Priority", 80.0);
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("list-scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for task in tasks {
                let frame = egui::Frame {
                    fill: pal.bg,
                    rounding: egui::Rounding::ZERO,
                    inner_margin: egui::Margin::symmetric(12.0, 6.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };
                let row = frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.allocate_ui(egui::vec2(NAME_WIDTH, 22.0), |ui| {
                            ui.horizontal(|ui| {
                                let (icon, color) = if task.status == Status::Done {
                                    (egui_phosphor::regular::CHECK_CIRCLE, pal.success_text)
                                } else {
                                    (egui_phosphor::regular::CIRCLE, pal.text_dim)
                                };
                                ui.label(RichText::new(icon).color(color));
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(&task.title).color(pal.text_primary),
                                    )
                                    .truncate(),
                                );
                            });
                        });
                        ui.allocate_ui(egui::vec2(STATUS_WIDTH, 22.0), |ui| {
                            let (fill, text) = theme::status_colors(task.status, dark_mode);
                            widgets::pill(ui, task.status.label(), fill, text);
                        });
                        ui.allocate_ui(egui::vec2(ASSIGNEE_WIDTH, 22.0), |ui| {
                            ui.horizontal(|ui| {
                                widgets::avatar(ui, &task.assignee, 22.0);
                                ui.label(
                                    RichText::new(&task.assignee)
                                        .size(11.0)
                                        .color(pal.text_secondary),
                                );
                            });
                        });
                        ui.allocate_ui(egui::vec2(DUE_WIDTH, 22.0), |ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{} {}",
                                    egui_phosphor::regular::CALENDAR_BLANK,
                                    task.due_date
                                ))
                                .size(11.0)
                                .color(pal.text_secondary),
                            );
                        });
                        let (fill, text) = theme::priority_colors(task.priority, dark_mode);
                        widgets::pill(ui, task.priority.label(), fill, text);
                    });
                });

                // Make entire row clickable
                let row_rect = row.response.rect;
                let click = ui.interact(
                    row_rect,
                    egui::Id::new(("list-row", task.id)),
                    egui::Sense::click(),
                );
                if click.hovered() {
                    ui.painter().rect_filled(
                        row_rect,
                        0.0,
                        pal.bg_row_hover.gamma_multiply(0.4),
                    );
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if click.clicked() {
                    action = ListAction::Edit(task.id);
                }
                ui.painter().line_segment(
                    [row_rect.left_bottom(), row_rect.right_bottom()],
                    egui::Stroke::new(1.0, pal.border),
                );
            }

            ui.add_space(4.0);
            let add = ui.add(
                egui::Button::new(
                    RichText::new(format!("{} New Task", egui_phosphor::regular::PLUS))
                        .color(pal.text_dim),
                )
                .frame(false),
            );
            if add.clicked() {
                action = ListAction::Add;
            }
        });

    action
}

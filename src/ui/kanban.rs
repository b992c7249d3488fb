use egui::{Rect, RichText, Ui};
use uuid::Uuid;

use crate::model::{Priority, Status, Task};
use crate::state::KanbanDrag;
use crate::ui::theme::{self, Palette};
use crate::ui::widgets;

/// Actions the board can request.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    None,
    Edit(Uuid),
    /// A card was dropped on another column.
    Update(Task),
    Add(Status),
}

/// Render one column per status. Cards are dragged with `drag` and dropped on
/// whichever column is under the pointer when the button comes up.
pub fn show_kanban_board(
    tasks: &[Task],
    drag: &mut KanbanDrag,
    dark_mode: bool,
    ui: &mut Ui,
) -> BoardAction {
    let pal = theme::palette(dark_mode);
    let mut action = BoardAction::None;
    let mut columns: Vec<(Status, Rect)> = Vec::with_capacity(Status::all().len());
    let pointer = ui.input(|i| i.pointer.latest_pos());

    egui::ScrollArea::horizontal()
        .id_salt("kanban-scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 20.0;
                for status in Status::all() {
                    let column_tasks: Vec<&Task> =
                        tasks.iter().filter(|t| t.status == *status).collect();

                    let frame = egui::Frame {
                        fill: pal.bg_column,
                        rounding: egui::Rounding::same(12.0),
                        inner_margin: egui::Margin::same(8.0),
                        outer_margin: egui::Margin::ZERO,
                        stroke: egui::Stroke::NONE,
                        shadow: egui::epaint::Shadow::NONE,
                    };
                    let resp = frame.show(ui, |ui| {
                        ui.set_width(theme::KANBAN_COLUMN_WIDTH);
                        ui.set_min_height(ui.available_height().max(200.0));
                        if let Some(a) =
                            show_column(ui, *status, &column_tasks, drag, dark_mode, pal)
                        {
                            action = a;
                        }
                    });
                    let rect = resp.response.rect;
                    if drag.is_dragging() && pointer.is_some_and(|p| rect.contains(p)) {
                        ui.painter().rect_stroke(
                            rect,
                            egui::Rounding::same(12.0),
                            egui::Stroke::new(1.5, pal.border_strong),
                        );
                    }
                    columns.push((*status, rect));
                }
            });
        });

    if drag.is_dragging() {
        if let (Some(p), Some(task)) = (pointer, drag.dragged()) {
            egui::Area::new(egui::Id::new("kanban-drag-preview"))
                .order(egui::Order::Tooltip)
                .fixed_pos(p + egui::vec2(12.0, 8.0))
                .interactable(false)
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(RichText::new(&task.title).strong());
                    });
                });
        }
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);

        if ui.input(|i| i.pointer.any_released()) {
            let target = pointer.and_then(|p| {
                columns
                    .iter()
                    .find(|(_, rect)| rect.contains(p))
                    .map(|(status, _)| *status)
            });
            match target {
                Some(status) => {
                    if let Some(updated) = drag.drop_on(status) {
                        if tasks.iter().any(|t| t.id == updated.id && t.status != status) {
                            action = BoardAction::Update(updated);
                        }
                    }
                }
                None => drag.cancel(),
            }
        }
    }

    action
}

fn show_column(
    ui: &mut Ui,
    status: Status,
    tasks: &[&Task],
    drag: &mut KanbanDrag,
    dark_mode: bool,
    pal: &Palette,
) -> Option<BoardAction> {
    let mut action = None;
    let (fill, text) = theme::status_colors(status, dark_mode);

    ui.horizontal(|ui| {
        widgets::pill(ui, tasks.len().to_string(), fill, text);
        ui.label(RichText::new(status.label()).strong().color(pal.text_secondary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let add = ui.add(
                egui::Button::new(RichText::new(egui_phosphor::regular::PLUS).color(pal.text_dim))
                    .frame(false),
            );
            if add.on_hover_text("Add task").clicked() {
                action = Some(BoardAction::Add(status));
            }
        });
    });
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt(("kanban-column", status.label()))
        .auto_shrink([false, true])
        .max_height((ui.available_height() - 36.0).max(80.0))
        .show(ui, |ui| {
            for task in tasks {
                if let Some(a) = show_card(ui, task, drag, pal) {
                    action = Some(a);
                }
                ui.add_space(6.0);
            }
        });

    if ui
        .add(
            egui::Button::new(
                RichText::new(format!("{} Add task", egui_phosphor::regular::PLUS))
                    .color(pal.text_dim),
            )
            .frame(false),
        )
        .clicked()
    {
        action = Some(BoardAction::Add(status));
    }

    action
}

fn show_card(ui: &mut Ui, task: &Task, drag: &mut KanbanDrag, pal: &Palette) -> Option<BoardAction> {
    let is_dragged = drag.dragged().is_some_and(|t| t.id == task.id);
    let frame = egui::Frame {
        fill: pal.bg_card,
        rounding: egui::Rounding::same(8.0),
        inner_margin: egui::Margin::same(10.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, pal.border),
        shadow: egui::epaint::Shadow::NONE,
    };

    let resp = frame
        .multiply_with_opacity(if is_dragged { 0.5 } else { 1.0 })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if !task.tags.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    for tag in &task.tags {
                        widgets::tag(ui, tag, pal);
                    }
                });
                ui.add_space(4.0);
            }
            ui.label(RichText::new(&task.title).strong().color(pal.text_primary));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                widgets::avatar(ui, &task.assignee, 22.0);
                if task.priority == Priority::High {
                    ui.label(
                        RichText::new(egui_phosphor::regular::ARROW_CIRCLE_UP)
                            .color(pal.danger_text),
                    )
                    .on_hover_text("High priority");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} {}", egui_phosphor::regular::CALENDAR_BLANK, task.due_date))
                            .size(11.0)
                            .color(pal.text_dim),
                    );
                });
            });
        });

    let card = ui.interact(
        resp.response.rect,
        egui::Id::new(("kanban-card", task.id)),
        egui::Sense::click_and_drag(),
    );
    if card.hovered() && !drag.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
    if card.drag_started() {
        drag.begin(task);
    }
    card.clicked().then_some(BoardAction::Edit(task.id))
}

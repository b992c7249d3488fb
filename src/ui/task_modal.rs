use chrono::NaiveDate;
use egui::{Align2, Color32, Id, RichText, Ui};
use egui_extras::DatePickerButton;
use uuid::Uuid;

use crate::model::dates::{format_display_date_in, parse_display_date};
use crate::model::sample::USERS;
use crate::model::{Priority, Status, Task};
use crate::ui::theme::{self, Palette};

/// Actions the editor can request.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    None,
    /// Full replacement record for the task being edited.
    Update(Task),
    Delete(Uuid),
    Close,
}

/// Modal editor for one task. Every field edit produces a full `Update`.
pub fn show_task_modal(
    ctx: &egui::Context,
    task: &Task,
    year: i32,
    today: NaiveDate,
    dark_mode: bool,
) -> ModalAction {
    let pal = theme::palette(dark_mode);
    let mut draft = task.clone();
    let mut action = ModalAction::None;

    egui::Window::new("task-modal")
        .title_bar(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .default_width(560.0)
        .show(ctx, |ui| {
            ui.set_min_width(560.0);
            ui.spacing_mut().item_spacing.y = 8.0;

            let badge = if draft.wbs.is_empty() {
                format!("TASK-{}", draft.id.simple())
            } else {
                format!("TASK {}", draft.wbs)
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(badge).small().strong().color(pal.text_secondary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = ui.add(
                        egui::Button::new(RichText::new(egui_phosphor::regular::X).color(pal.text_dim))
                            .frame(false),
                    );
                    if close.on_hover_text("Close").clicked() {
                        action = ModalAction::Close;
                    }
                });
            });
            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut draft.title)
                    .font(egui::FontId::proportional(24.0))
                    .frame(false)
                    .hint_text("Task Title")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            egui::Grid::new("task-modal-fields")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    field_label(ui, "WBS Code", pal);
                    ui.add(egui::TextEdit::singleline(&mut draft.wbs).desired_width(120.0));
                    ui.end_row();

                    field_label(ui, "Status", pal);
                    status_combo(ui, &mut draft.status, dark_mode);
                    ui.end_row();

                    field_label(ui, "Priority", pal);
                    priority_combo(ui, &mut draft.priority);
                    ui.end_row();

                    field_label(ui, "Assignee", pal);
                    egui::ComboBox::from_id_salt("modal-assignee")
                        .selected_text(draft.assignee.as_str())
                        .show_ui(ui, |ui| {
                            for user in USERS {
                                ui.selectable_value(&mut draft.assignee, (*user).to_string(), *user);
                            }
                        });
                    ui.end_row();

                    field_label(ui, "Start", pal);
                    start_date_field(ui, &mut draft, year, today);
                    ui.end_row();

                    field_label(ui, "Due", pal);
                    ui.horizontal(|ui| {
                        let mut due = parse_display_date(&draft.due_date, year).unwrap_or(today);
                        if ui
                            .add(DatePickerButton::new(&mut due).id_salt("modal-due"))
                            .changed()
                        {
                            draft.due_date = format_display_date_in(due, year);
                        }
                        ui.label(RichText::new(&draft.due_date).color(pal.text_dim));
                    });
                    ui.end_row();

                    field_label(ui, "Tags", pal);
                    tags_field(ui, &mut draft, pal);
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut draft.description)
                    .hint_text("Description...")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let delete = egui::Button::new(
                    RichText::new(format!("{} Delete", egui_phosphor::regular::TRASH))
                        .color(pal.danger_text),
                )
                .fill(pal.danger_bg)
                .rounding(egui::Rounding::same(16.0));
                if ui.add(delete).clicked() {
                    action = ModalAction::Delete(draft.id);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let done = egui::Button::new(
                        RichText::new(format!("Done {}", egui_phosphor::regular::CHECK_CIRCLE))
                            .color(pal.success_text),
                    )
                    .fill(pal.success_bg)
                    .rounding(egui::Rounding::same(16.0));
                    if ui.add(done).clicked() {
                        action = ModalAction::Close;
                    }
                });
            });
        });

    if action == ModalAction::None && draft != *task {
        return ModalAction::Update(draft);
    }
    action
}

fn field_label(ui: &mut Ui, text: &str, pal: &Palette) {
    ui.label(RichText::new(text).color(pal.text_secondary));
}

fn status_combo(ui: &mut Ui, status: &mut Status, dark_mode: bool) {
    let (fill, text) = theme::status_colors(*status, dark_mode);
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("modal-status")
            .selected_text(RichText::new(status.label()).color(text))
            .show_ui(ui, |ui| {
                for s in Status::all() {
                    ui.selectable_value(status, *s, s.label());
                }
            });
        let (dot, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().circle_filled(dot.center(), 6.0, fill);
    });
}

fn priority_combo(ui: &mut Ui, priority: &mut Priority) {
    egui::ComboBox::from_id_salt("modal-priority")
        .selected_text(priority.label())
        .show_ui(ui, |ui| {
            for p in Priority::all() {
                ui.selectable_value(priority, *p, p.label());
            }
        });
}

fn start_date_field(ui: &mut Ui, draft: &mut Task, year: i32, today: NaiveDate) {
    ui.horizontal(|ui| {
        let mut has_start = draft.start_date.is_some();
        if ui.checkbox(&mut has_start, "").changed() {
            draft.start_date = has_start.then(|| {
                let due = parse_display_date(&draft.due_date, year).unwrap_or(today);
                format_display_date_in(due, year)
            });
        }
        let Some(current) = draft.start_date.clone() else {
            ui.label(RichText::new("Same as due").italics());
            return;
        };
        let mut start = parse_display_date(&current, year).unwrap_or(today);
        if ui
            .add(DatePickerButton::new(&mut start).id_salt("modal-start"))
            .changed()
        {
            draft.start_date = Some(format_display_date_in(start, year));
        }
    });
}

fn tags_field(ui: &mut Ui, draft: &mut Task, pal: &Palette) {
    let input_id = Id::new(("modal-tag-input", draft.id));
    ui.horizontal_wrapped(|ui| {
        let mut remove = None;
        for (i, tag) in draft.tags.iter().enumerate() {
            let chip = egui::Button::new(
                RichText::new(format!("{tag} {}", egui_phosphor::regular::X))
                    .small()
                    .color(pal.text_secondary),
            )
            .fill(pal.bg_header)
            .rounding(egui::Rounding::same(8.0));
            if ui.add(chip).on_hover_text("Remove tag").clicked() {
                remove = Some(i);
            }
        }
        if let Some(i) = remove {
            draft.tags.remove(i);
        }

        let mut input: String = ui.ctx().data_mut(|d| d.get_temp(input_id).unwrap_or_default());
        let edit = ui.add(
            egui::TextEdit::singleline(&mut input)
                .hint_text("Add tag")
                .desired_width(90.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let tag = input.trim().to_string();
        if submitted && !tag.is_empty() && !draft.tags.contains(&tag) {
            draft.tags.push(tag);
            input.clear();
        }
        ui.ctx().data_mut(|d| d.insert_temp(input_id, input));
    });
}

/// Dimmed layer painted beneath the modal.
pub fn paint_backdrop(ctx: &egui::Context) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        Id::new("task-modal-backdrop"),
    ));
    painter.rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(100));
}

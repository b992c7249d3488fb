use chrono::{Datelike, NaiveDate, Weekday};
use egui::{Align2, Color32, CursorIcon, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};
use uuid::Uuid;

use crate::model::Task;
use crate::settings::AppSettings;
use crate::timeline::{
    task_bars, BarGeometry, DragController, DragSnapshot, Edge, Granularity, GridHeaders,
    LiveOffset, TimelineAction, TimelineWindow,
};
use crate::ui::theme::{self, Palette};

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const HANDLE_WIDTH: f32 = theme::HANDLE_WIDTH;
const TASK_COLUMN_WIDTH: f32 = theme::TASK_COLUMN_WIDTH;
const PLANNED_TOP: f32 = 8.0;
const ACTUAL_TOP: f32 = 20.0;

/// The Gantt view: a task column on the left and the date grid to its right.
///
/// Lives for as long as the app does. The host calls [`TimelineView::cancel_drag`]
/// whenever the view goes off screen.
pub struct TimelineView {
    granularity: Granularity,
    drag: DragController,
}

impl TimelineView {
    pub fn new(settings: &AppSettings) -> Self {
        let granularity = settings.granularity;
        Self {
            granularity,
            drag: DragController::new(granularity, settings.unit_width(granularity)),
        }
    }

    /// Switch zoom. An in-flight gesture is dropped since its snapshot was
    /// taken at the old scale.
    pub fn set_granularity(&mut self, granularity: Granularity, settings: &AppSettings) {
        if granularity == self.granularity {
            return;
        }
        self.drag.cancel();
        self.granularity = granularity;
        self.drag
            .set_scale(granularity, settings.unit_width(granularity));
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    #[cfg(test)]
    pub(crate) fn drag_mut(&mut self) -> &mut DragController {
        &mut self.drag
    }

    pub fn show(
        &mut self,
        tasks: &[Task],
        year: i32,
        today: NaiveDate,
        settings: &AppSettings,
        dark_mode: bool,
        ui: &mut Ui,
    ) -> Option<TimelineAction> {
        let pal = theme::palette(dark_mode);
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} Timeline", egui_phosphor::regular::CALENDAR_BLANK))
                    .strong()
                    .color(pal.text_secondary),
            );
            ui.add_space(12.0);
            for g in [Granularity::Day, Granularity::Week] {
                let hint = match g {
                    Granularity::Day => "Day view",
                    Granularity::Week => "Week view",
                };
                if ui
                    .selectable_label(self.granularity == g, g.short_label())
                    .on_hover_text(hint)
                    .clicked()
                {
                    self.set_granularity(g, settings);
                }
            }
            ui.add_space(12.0);
            if ui
                .button(format!("{} Add task", egui_phosphor::regular::PLUS))
                .clicked()
            {
                action = Some(TimelineAction::AddTask);
            }
        });
        ui.add_space(4.0);

        let unit_width = settings.unit_width(self.granularity);
        self.drag.set_scale(self.granularity, unit_width);

        let viewport_width = ui.available_width() - TASK_COLUMN_WIDTH;
        let window = TimelineWindow::fit(
            tasks,
            self.granularity,
            unit_width,
            viewport_width,
            year,
            today,
        );
        let headers = window.headers();

        if let Some(done) = self.track_pointer(ui) {
            action = Some(done);
        }

        let canvas_size = Vec2::new(
            TASK_COLUMN_WIDTH + window.total_width(),
            HEADER_HEIGHT + tasks.len() as f32 * ROW_HEIGHT,
        );

        egui::ScrollArea::both()
            .id_salt("timeline-scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(canvas_size, Sense::hover());
                let origin = response.rect.min;
                let grid_origin = Pos2::new(origin.x + TASK_COLUMN_WIDTH, origin.y);
                let header_y = header_top(origin.y, ui.clip_rect().top());
                let header_rect = Rect::from_min_size(
                    Pos2::new(origin.x, header_y),
                    Vec2::new(canvas_size.x, HEADER_HEIGHT),
                );

                painter.rect_filled(response.rect, 0.0, pal.bg);
                draw_columns(&painter, grid_origin, &window, &headers, canvas_size.y, pal);
                draw_today_line(&painter, grid_origin, &window, today, canvas_size.y, pal);

                let mut row_rects = Vec::with_capacity(tasks.len());
                for (i, task) in tasks.iter().enumerate() {
                    let y = origin.y + HEADER_HEIGHT + i as f32 * ROW_HEIGHT;
                    let row_rect = Rect::from_min_size(
                        Pos2::new(origin.x, y),
                        Vec2::new(canvas_size.x, ROW_HEIGHT),
                    );
                    row_rects.push((task.id, row_rect));

                    if let Some(a) = self.task_row(ui, &painter, task, origin, y, pal) {
                        action = Some(a);
                    }
                    if let Some(a) =
                        self.bar_row(ui, &painter, task, &window, grid_origin, y, year, dark_mode, pal)
                    {
                        action = Some(a);
                    }
                }

                if let Some(a) = self.finish_row_drag(ui, &painter, &row_rects, header_rect, pal) {
                    action = Some(a);
                }

                // Header last: it paints over rows scrolled beneath it and
                // swallows clicks meant for them.
                ui.interact(header_rect, ui.make_persistent_id("timeline-header"), Sense::click());
                draw_header(
                    &painter,
                    header_rect.min,
                    Pos2::new(grid_origin.x, header_y),
                    &window,
                    &headers,
                    pal,
                );
            });

        action
    }

    /// Follow the pointer anywhere in the window while a bar is captured.
    fn track_pointer(&mut self, ui: &Ui) -> Option<TimelineAction> {
        if !self.drag.is_pointer_drag() {
            return None;
        }
        let (pos, released, escape) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.any_released(),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if escape {
            self.drag.cancel();
            return None;
        }
        if let Some(p) = pos {
            self.drag.pointer_moved(p.x);
        }
        ui.ctx().request_repaint();
        if released {
            let x = pos.map(|p| p.x).or(self.drag.pointer_x())?;
            return self.drag.release(x);
        }
        None
    }

    fn task_row(
        &mut self,
        ui: &Ui,
        painter: &egui::Painter,
        task: &Task,
        origin: Pos2,
        y: f32,
        pal: &Palette,
    ) -> Option<TimelineAction> {
        let rect = Rect::from_min_size(Pos2::new(origin.x, y), Vec2::new(TASK_COLUMN_WIDTH, ROW_HEIGHT));
        let response = ui.interact(
            rect,
            ui.make_persistent_id(("timeline-row", task.id)),
            Sense::click_and_drag(),
        );

        let is_dragged = self.drag.dragged_row() == Some(task.id);
        let fill = if is_dragged {
            pal.bg_row_dragging
        } else if response.hovered() {
            pal.bg_row_hover
        } else {
            pal.bg
        };
        painter.rect_filled(rect, 0.0, fill);
        painter.line_segment(
            [rect.left_bottom(), Pos2::new(rect.right(), rect.bottom())],
            Stroke::new(1.0, pal.border),
        );
        painter.line_segment(
            [rect.right_top(), rect.right_bottom()],
            Stroke::new(1.0, pal.border_strong),
        );

        let text_alpha = if is_dragged { 0.5 } else { 1.0 };
        let cy = rect.center().y;
        painter.text(
            Pos2::new(rect.left() + 12.0, cy),
            Align2::LEFT_CENTER,
            egui_phosphor::regular::DOTS_SIX_VERTICAL,
            theme::font_sub(),
            pal.text_dim.gamma_multiply(text_alpha),
        );
        painter.text(
            Pos2::new(rect.left() + 30.0, cy),
            Align2::LEFT_CENTER,
            &task.wbs,
            theme::font_mono(),
            pal.text_dim.gamma_multiply(text_alpha),
        );

        let title_left = rect.left() + 78.0 + task.depth() as f32 * theme::INDENT_PER_LEVEL;
        let title_rect = Rect::from_min_max(
            Pos2::new(title_left, rect.top()),
            Pos2::new(rect.right() - 8.0, rect.bottom()),
        );
        painter.with_clip_rect(title_rect).text(
            Pos2::new(title_left, cy),
            Align2::LEFT_CENTER,
            &task.title,
            theme::font_header(),
            pal.text_primary.gamma_multiply(text_alpha),
        );

        if response.hovered() && !self.drag.is_pointer_drag() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }
        if response.drag_started() {
            self.drag.begin_row_drag(task.id);
        }
        if response.clicked() {
            return Some(TimelineAction::OpenEditor(task.id));
        }
        None
    }

    #[allow(clippy::too_many_arguments)]
    fn bar_row(
        &mut self,
        ui: &Ui,
        painter: &egui::Painter,
        task: &Task,
        window: &TimelineWindow,
        grid_origin: Pos2,
        y: f32,
        year: i32,
        dark_mode: bool,
        pal: &Palette,
    ) -> Option<TimelineAction> {
        let bars = task_bars(task, window, year);

        if let Some(planned) = bars.planned {
            let rect = Rect::from_min_size(
                Pos2::new(grid_origin.x + planned.left, y + PLANNED_TOP),
                Vec2::new(planned.width, theme::PLANNED_BAR_HEIGHT),
            );
            draw_planned_bar(painter, rect, pal);
            let hover = ui.interact(
                rect,
                ui.make_persistent_id(("timeline-planned", task.id)),
                Sense::hover(),
            );
            if let Some(span) = &task.planned {
                hover.on_hover_text(format!("Planned: {} - {}", span.start, span.end));
            }
        }

        let actual = bars.actual?;
        let (start, end) = task.execution_range(year)?;
        let rect = live_bar_rect(actual, self.drag.live_offset(task.id), window.unit_width, grid_origin, y);
        let is_active = self.drag.active_task() == Some(task.id);

        let (fill, text) = theme::status_colors(task.status, dark_mode);
        let rounding = Rounding::same(theme::BAR_ROUNDING);
        if is_active {
            painter.rect_filled(rect.translate(Vec2::new(0.0, 2.0)), rounding, Color32::from_black_alpha(40));
        }
        painter.rect_filled(rect, rounding, fill);
        if is_active {
            painter.rect_stroke(rect.expand(2.0), Rounding::same(theme::BAR_ROUNDING + 2.0), Stroke::new(2.0, pal.drag_ring));
        }
        let label_rect = rect.shrink2(Vec2::new(HANDLE_WIDTH, 0.0));
        painter.with_clip_rect(label_rect).text(
            Pos2::new(label_rect.left(), rect.center().y),
            Align2::LEFT_CENTER,
            &task.title,
            theme::font_bar(),
            text,
        );

        // Handles sit on top of the body, so test them first.
        let left_handle = Rect::from_min_size(rect.min, Vec2::new(HANDLE_WIDTH, rect.height()));
        let right_handle = Rect::from_min_size(
            Pos2::new(rect.right() - HANDLE_WIDTH, rect.top()),
            Vec2::new(HANDLE_WIDTH, rect.height()),
        );
        let body = ui.interact(
            rect,
            ui.make_persistent_id(("timeline-bar", task.id)),
            Sense::click_and_drag(),
        );
        let left = ui.interact(
            left_handle,
            ui.make_persistent_id(("timeline-resize-left", task.id)),
            Sense::drag(),
        );
        let right = ui.interact(
            right_handle,
            ui.make_persistent_id(("timeline-resize-right", task.id)),
            Sense::drag(),
        );

        for handle in [&left, &right] {
            if handle.hovered() {
                painter.rect_filled(handle.rect, rounding, Color32::from_black_alpha(25));
                ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
            }
        }
        if body.hovered() && !left.hovered() && !right.hovered() {
            ui.ctx().set_cursor_icon(if is_active {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Grab
            });
            if !self.drag.is_pointer_drag() {
                let span = task.execution_span();
                body.clone()
                    .on_hover_text(format!("Actual: {} - {}", span.start, span.end));
            }
        }

        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let press_x = ui.input(|i| i.pointer.press_origin()).map(|p| p.x);
        if let (true, Some(x)) = (pressed, press_x) {
            let snapshot = DragSnapshot { start, end };
            if left.hovered() {
                self.drag.press_edge(task.id, Edge::Start, snapshot, x);
            } else if right.hovered() {
                self.drag.press_edge(task.id, Edge::End, snapshot, x);
            } else if body.hovered() {
                self.drag.press_bar(task.id, snapshot, x);
            }
        }

        None
    }

    /// Resolve a row drag once the pointer comes up.
    fn finish_row_drag(
        &mut self,
        ui: &Ui,
        painter: &egui::Painter,
        rows: &[(Uuid, Rect)],
        header: Rect,
        pal: &Palette,
    ) -> Option<TimelineAction> {
        let dragged = self.drag.dragged_row()?;
        let (pos, released) = ui.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));
        let pos = pos.filter(|p| !header.contains(*p));
        let target = pos.and_then(|p| rows.iter().find(|(_, r)| r.contains(p)).map(|(id, _)| *id));

        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        if let Some((_, rect)) = rows.iter().find(|(id, _)| Some(*id) == target && *id != dragged) {
            painter.line_segment(
                [rect.left_top(), rect.right_top()],
                Stroke::new(2.0, pal.accent),
            );
        }

        if !released {
            return None;
        }
        match target {
            Some(target) => self.drag.drop_row(target),
            None => {
                self.drag.end_row_drag();
                None
            }
        }
    }
}

fn live_bar_rect(
    bar: BarGeometry,
    offset: Option<LiveOffset>,
    unit_width: f32,
    grid_origin: Pos2,
    y: f32,
) -> Rect {
    let offset = offset.unwrap_or_default();
    let left = bar.left + offset.left;
    let width = (bar.width + offset.width).max(unit_width);
    Rect::from_min_size(
        Pos2::new(grid_origin.x + left, y + ACTUAL_TOP),
        Vec2::new(width, theme::ACTUAL_BAR_HEIGHT),
    )
}

fn draw_planned_bar(painter: &egui::Painter, rect: Rect, pal: &Palette) {
    let rounding = Rounding::same(rect.height() / 2.0);
    painter.rect_filled(rect, rounding, pal.planned_bar.gamma_multiply(0.8));

    let hatch = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let stroke = Stroke::new(1.0, Color32::from_black_alpha(60));
    let mut x = rect.left() - rect.height();
    while x < rect.right() {
        hatch.line_segment(
            [Pos2::new(x, rect.bottom()), Pos2::new(x + rect.height(), rect.top())],
            stroke,
        );
        x += 6.0;
    }
    painter.rect_stroke(rect, rounding, Stroke::new(1.0, pal.planned_stroke));
}

fn draw_columns(
    painter: &egui::Painter,
    grid_origin: Pos2,
    window: &TimelineWindow,
    headers: &GridHeaders,
    height: f32,
    pal: &Palette,
) {
    let top = grid_origin.y + HEADER_HEIGHT;
    for (i, col) in headers.columns.iter().enumerate() {
        let x = grid_origin.x + i as f32 * window.unit_width;
        let is_weekend = window.granularity == Granularity::Day
            && matches!(col.date.weekday(), Weekday::Sat | Weekday::Sun);
        if is_weekend {
            painter.rect_filled(
                Rect::from_min_max(
                    Pos2::new(x, top),
                    Pos2::new(x + window.unit_width, grid_origin.y + height),
                ),
                0.0,
                pal.bg_weekend,
            );
        }
        painter.line_segment(
            [
                Pos2::new(x + window.unit_width, top),
                Pos2::new(x + window.unit_width, grid_origin.y + height),
            ],
            Stroke::new(1.0, pal.grid_line),
        );
    }
}

fn draw_today_line(
    painter: &egui::Painter,
    grid_origin: Pos2,
    window: &TimelineWindow,
    today: NaiveDate,
    height: f32,
    pal: &Palette,
) {
    if today < window.grid_start() || today > window.end {
        return;
    }
    let x = grid_origin.x + window.date_to_x(today);
    painter.line_segment(
        [
            Pos2::new(x, grid_origin.y + HEADER_HEIGHT),
            Pos2::new(x, grid_origin.y + height),
        ],
        Stroke::new(1.0, pal.today_line.gamma_multiply(0.6)),
    );
}

/// Screen y of the header: pinned to the top of the visible area once the
/// canvas has scrolled past it.
fn header_top(canvas_top: f32, visible_top: f32) -> f32 {
    canvas_top.max(visible_top)
}

fn draw_header(
    painter: &egui::Painter,
    origin: Pos2,
    grid_origin: Pos2,
    window: &TimelineWindow,
    headers: &GridHeaders,
    pal: &Palette,
) {
    let width = window.total_width();

    // Task column caption
    let caption = Rect::from_min_size(origin, Vec2::new(TASK_COLUMN_WIDTH, HEADER_HEIGHT));
    painter.rect_filled(caption, 0.0, pal.bg);
    painter.text(
        Pos2::new(caption.left() + 16.0, caption.center().y),
        Align2::LEFT_CENTER,
        "WBS / TASK NAME",
        theme::font_sub(),
        pal.text_dim,
    );
    painter.line_segment(
        [caption.right_top(), caption.right_bottom()],
        Stroke::new(1.0, pal.border_strong),
    );

    // Month bands
    let month_rect = Rect::from_min_size(grid_origin, Vec2::new(width, theme::MONTH_ROW_HEIGHT));
    painter.rect_filled(month_rect, 0.0, pal.bg_header);
    let mut x = grid_origin.x;
    for band in &headers.months {
        let band_width = band.span as f32 * window.unit_width;
        let band_rect = Rect::from_min_size(
            Pos2::new(x, grid_origin.y),
            Vec2::new(band_width, theme::MONTH_ROW_HEIGHT),
        );
        painter.with_clip_rect(band_rect).text(
            band_rect.center(),
            Align2::CENTER_CENTER,
            &band.label,
            theme::font_header(),
            pal.text_primary,
        );
        painter.line_segment(
            [band_rect.right_top(), band_rect.right_bottom()],
            Stroke::new(1.0, pal.border_strong),
        );
        x += band_width;
    }

    // Day / week columns
    let day_top = grid_origin.y + theme::MONTH_ROW_HEIGHT;
    painter.rect_filled(
        Rect::from_min_size(Pos2::new(grid_origin.x, day_top), Vec2::new(width, theme::DAY_ROW_HEIGHT)),
        0.0,
        pal.bg,
    );
    for (i, col) in headers.columns.iter().enumerate() {
        let cell = Rect::from_min_size(
            Pos2::new(grid_origin.x + i as f32 * window.unit_width, day_top),
            Vec2::new(window.unit_width, theme::DAY_ROW_HEIGHT),
        );
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            &col.label,
            theme::font_sub(),
            pal.text_secondary,
        );
        painter.line_segment(
            [cell.right_top(), cell.right_bottom()],
            Stroke::new(1.0, pal.border),
        );
    }

    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(grid_origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, pal.border_strong),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_follows_the_canvas_until_it_scrolls_away() {
        assert_eq!(header_top(100.0, 40.0), 100.0);
        assert_eq!(header_top(100.0, 100.0), 100.0);
        // Scrolled 500px down: canvas top is far above the visible area.
        assert_eq!(header_top(-400.0, 100.0), 100.0);
    }
}

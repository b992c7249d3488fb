use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::{Priority, Status};

// ── Palette ──────────────────────────────────────────────────────────────────

/// Every colour the views paint with, for one of the two modes.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color32,
    pub bg_panel: Color32,
    pub bg_header: Color32,
    pub bg_card: Color32,
    pub bg_column: Color32,
    pub bg_weekend: Color32,
    pub bg_row_hover: Color32,
    pub bg_row_dragging: Color32,
    pub border: Color32,
    pub border_strong: Color32,
    pub grid_line: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub planned_bar: Color32,
    pub planned_stroke: Color32,
    pub drag_ring: Color32,
    pub today_line: Color32,
    pub danger_bg: Color32,
    pub danger_text: Color32,
    pub success_bg: Color32,
    pub success_text: Color32,
}

pub const LIGHT: Palette = Palette {
    bg: Color32::from_rgb(255, 255, 255),
    bg_panel: Color32::from_rgb(247, 247, 245),
    bg_header: Color32::from_rgb(243, 244, 246),
    bg_card: Color32::from_rgb(255, 255, 255),
    bg_column: Color32::from_rgb(249, 250, 251),
    bg_weekend: Color32::from_rgb(249, 250, 251),
    bg_row_hover: Color32::from_rgb(243, 244, 246),
    bg_row_dragging: Color32::from_rgb(229, 231, 235),
    border: Color32::from_rgb(229, 231, 235),
    border_strong: Color32::from_rgb(209, 213, 219),
    grid_line: Color32::from_rgb(243, 244, 246),
    text_primary: Color32::from_rgb(17, 24, 39),
    text_secondary: Color32::from_rgb(75, 85, 99),
    text_dim: Color32::from_rgb(156, 163, 175),
    accent: Color32::from_rgb(79, 70, 229),
    planned_bar: Color32::from_rgb(209, 213, 219),
    planned_stroke: Color32::from_rgb(156, 163, 175),
    drag_ring: Color32::from_rgb(156, 163, 175),
    today_line: Color32::from_rgb(239, 68, 68),
    danger_bg: Color32::from_rgb(254, 226, 226),
    danger_text: Color32::from_rgb(185, 28, 28),
    success_bg: Color32::from_rgb(220, 252, 231),
    success_text: Color32::from_rgb(21, 128, 61),
};

pub const DARK: Palette = Palette {
    bg: Color32::from_rgb(17, 24, 39),
    bg_panel: Color32::from_rgb(25, 25, 25),
    bg_header: Color32::from_rgb(31, 41, 55),
    bg_card: Color32::from_rgb(31, 41, 55),
    bg_column: Color32::from_rgb(24, 31, 45),
    bg_weekend: Color32::from_rgb(24, 32, 46),
    bg_row_hover: Color32::from_rgb(31, 41, 55),
    bg_row_dragging: Color32::from_rgb(39, 50, 66),
    border: Color32::from_rgb(31, 41, 55),
    border_strong: Color32::from_rgb(55, 65, 81),
    grid_line: Color32::from_rgb(31, 41, 55),
    text_primary: Color32::from_rgb(243, 244, 246),
    text_secondary: Color32::from_rgb(209, 213, 219),
    text_dim: Color32::from_rgb(107, 114, 128),
    accent: Color32::from_rgb(129, 140, 248),
    planned_bar: Color32::from_rgb(75, 85, 99),
    planned_stroke: Color32::from_rgb(107, 114, 128),
    drag_ring: Color32::from_rgb(156, 163, 175),
    today_line: Color32::from_rgb(248, 113, 113),
    danger_bg: Color32::from_rgb(69, 26, 26),
    danger_text: Color32::from_rgb(252, 165, 165),
    success_bg: Color32::from_rgb(20, 53, 34),
    success_text: Color32::from_rgb(134, 239, 172),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

/// Fill and text colour of a status pill / timeline bar.
pub fn status_colors(status: Status, dark_mode: bool) -> (Color32, Color32) {
    match (status, dark_mode) {
        (Status::Todo, false) => (Color32::from_rgb(226, 232, 240), Color32::from_rgb(30, 41, 59)),
        (Status::Todo, true) => (Color32::from_rgb(51, 65, 85), Color32::from_rgb(241, 245, 249)),
        (Status::InProgress, false) => (Color32::from_rgb(191, 219, 254), Color32::from_rgb(30, 58, 138)),
        (Status::InProgress, true) => (Color32::from_rgb(30, 58, 138), Color32::from_rgb(219, 234, 254)),
        (Status::Review, false) => (Color32::from_rgb(254, 240, 138), Color32::from_rgb(113, 63, 18)),
        (Status::Review, true) => (Color32::from_rgb(113, 63, 18), Color32::from_rgb(254, 249, 195)),
        (Status::Done, false) => (Color32::from_rgb(187, 247, 208), Color32::from_rgb(20, 83, 45)),
        (Status::Done, true) => (Color32::from_rgb(20, 83, 45), Color32::from_rgb(220, 252, 231)),
    }
}

pub fn priority_colors(priority: Priority, dark_mode: bool) -> (Color32, Color32) {
    match (priority, dark_mode) {
        (Priority::Low, false) => (Color32::from_rgb(243, 244, 246), Color32::from_rgb(75, 85, 99)),
        (Priority::Low, true) => (Color32::from_rgb(31, 41, 55), Color32::from_rgb(156, 163, 175)),
        (Priority::Medium, false) => (Color32::from_rgb(254, 249, 195), Color32::from_rgb(161, 98, 7)),
        (Priority::Medium, true) => (Color32::from_rgb(66, 52, 14), Color32::from_rgb(253, 224, 71)),
        (Priority::High, false) => (Color32::from_rgb(254, 226, 226), Color32::from_rgb(185, 28, 28)),
        (Priority::High, true) => (Color32::from_rgb(69, 26, 26), Color32::from_rgb(252, 165, 165)),
    }
}

/// Avatar background per known user, grey for anyone else.
pub fn avatar_color(name: &str) -> Color32 {
    match name {
        "Alex" => Color32::from_rgb(226, 232, 240),
        "Sarah" => Color32::from_rgb(254, 215, 170),
        "Mike" => Color32::from_rgb(191, 219, 254),
        "User" => Color32::from_rgb(167, 243, 208),
        _ => Color32::from_rgb(243, 244, 246),
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 48.0;
pub const MONTH_ROW_HEIGHT: f32 = 30.0;
pub const DAY_ROW_HEIGHT: f32 = 22.0;
pub const HEADER_HEIGHT: f32 = MONTH_ROW_HEIGHT + DAY_ROW_HEIGHT;
pub const TASK_COLUMN_WIDTH: f32 = 320.0;
pub const HANDLE_WIDTH: f32 = 8.0;
pub const ACTUAL_BAR_HEIGHT: f32 = 20.0;
pub const PLANNED_BAR_HEIGHT: f32 = 12.0;
pub const BAR_ROUNDING: f32 = 4.0;
pub const INDENT_PER_LEVEL: f32 = 16.0;
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const KANBAN_COLUMN_WIDTH: f32 = 300.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_bar() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_mono() -> FontId {
    FontId::monospace(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let p = palette(dark_mode);
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.override_text_color = Some(p.text_primary);
    visuals.panel_fill = p.bg;
    visuals.window_fill = p.bg_card;
    visuals.faint_bg_color = p.bg_panel;

    visuals.widgets.noninteractive.bg_fill = p.bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = p.bg_header;
    visuals.widgets.inactive.weak_bg_fill = p.bg_header;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = p.bg_row_hover;
    visuals.widgets.hovered.weak_bg_fill = p.bg_row_hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, p.border_strong);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = p.bg_row_dragging;
    visuals.widgets.active.weak_bg_fill = p.bg_row_dragging;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, p.accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.stroke = Stroke::new(1.0, p.accent);
    visuals.window_rounding = Rounding::same(12.0);
    visuals.window_stroke = Stroke::new(1.0, p.border);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

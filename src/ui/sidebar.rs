use egui::{RichText, Ui};
use uuid::Uuid;

use crate::state::{AppState, Route, ViewMode, PROJECTS_MENU};
use crate::ui::theme::{self, Palette};
use crate::ui::widgets;

/// Actions that the sidebar can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    None,
    Navigate(Route),
    /// Open a project straight into one of its views.
    OpenProjectView(Uuid, ViewMode),
    ToggleMenu(&'static str),
    AddProject,
    DeleteProject(Uuid),
    Search(String),
    Collapse,
}

pub fn show_sidebar(state: &AppState, ui: &mut Ui) -> SidebarAction {
    let pal = theme::palette(state.dark_mode);
    let mut action = SidebarAction::None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        widgets::avatar(ui, "Workspace", 22.0);
        ui.label(RichText::new("Workspace").strong().color(pal.text_primary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let collapse = ui.add(
                egui::Button::new(
                    RichText::new(egui_phosphor::regular::SIDEBAR_SIMPLE).color(pal.text_dim),
                )
                .frame(false),
            );
            if collapse.on_hover_text("Hide sidebar").clicked() {
                action = SidebarAction::Collapse;
            }
        });
    });
    ui.add_space(8.0);

    // Search
    let mut query = state.search_query.clone();
    let search = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text(format!("{} Search...", egui_phosphor::regular::MAGNIFYING_GLASS))
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        action = SidebarAction::Search(query);
    }
    ui.add_space(8.0);

    let fixed = [
        (egui_phosphor::regular::LAYOUT, "Dashboard", Route::Dashboard, None),
        (egui_phosphor::regular::CHECK_CIRCLE, "My Tasks", Route::MyTasks, None),
        (egui_phosphor::regular::TRAY, "Inbox", Route::Inbox, Some(3)),
    ];
    for (icon, label, route, count) in fixed {
        if nav_item(ui, icon, label, state.route == route, count, pal).clicked() {
            action = SidebarAction::Navigate(route);
        }
    }

    ui.add_space(12.0);

    // Projects section
    let expanded = state.is_menu_expanded(PROJECTS_MENU);
    ui.horizontal(|ui| {
        let caret = if expanded {
            egui_phosphor::regular::CARET_DOWN
        } else {
            egui_phosphor::regular::CARET_RIGHT
        };
        let header = ui.add(
            egui::Button::new(
                RichText::new(format!("{caret} Projects"))
                    .size(11.0)
                    .strong()
                    .color(pal.text_dim),
            )
            .frame(false),
        );
        if header.clicked() {
            action = SidebarAction::ToggleMenu(PROJECTS_MENU);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let add = ui.add(
                egui::Button::new(RichText::new(egui_phosphor::regular::PLUS).color(pal.text_dim))
                    .frame(false),
            );
            if add.on_hover_text("New project").clicked() {
                action = SidebarAction::AddProject;
            }
        });
    });

    if expanded {
        for project in state.projects() {
            let active = state.route.project_id() == Some(project.id);
            if project.is_board() {
                let item = nav_item(
                    ui,
                    egui_phosphor::regular::KANBAN,
                    &project.name,
                    active,
                    None,
                    pal,
                );
                if item.clicked() {
                    action = SidebarAction::Navigate(Route::Project(project.id));
                }
                item.context_menu(|ui| {
                    if ui.button("Delete project").clicked() {
                        action = SidebarAction::DeleteProject(project.id);
                        ui.close_menu();
                    }
                });

                if active {
                    ui.indent(("project-views", project.id), |ui| {
                        for mode in ViewMode::all() {
                            let selected = state.view_mode == *mode;
                            if ui
                                .selectable_label(selected, RichText::new(mode.label()).size(12.0))
                                .clicked()
                            {
                                action = SidebarAction::OpenProjectView(project.id, *mode);
                            }
                        }
                    });
                }
            } else {
                let item = nav_item(
                    ui,
                    egui_phosphor::regular::FILE_TEXT,
                    &project.name,
                    active,
                    None,
                    pal,
                );
                if item.clicked() {
                    action = SidebarAction::Navigate(Route::Doc(project.id));
                }
            }
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(8.0);
        let account = ui
            .horizontal(|ui| {
                widgets::avatar(ui, &state.current_user, 24.0);
                ui.label(RichText::new(&state.current_user).color(pal.text_secondary));
            })
            .response
            .interact(egui::Sense::click());
        if account.clicked() {
            action = SidebarAction::Navigate(Route::Account);
        }
        ui.separator();
    });

    action
}

fn nav_item(
    ui: &mut Ui,
    icon: &str,
    label: &str,
    active: bool,
    count: Option<usize>,
    pal: &Palette,
) -> egui::Response {
    let text = RichText::new(format!("{icon}  {label}")).color(if active {
        pal.text_primary
    } else {
        pal.text_secondary
    });
    ui.horizontal(|ui| {
        let item = ui.add_sized(
            [ui.available_width() - if count.is_some() { 28.0 } else { 0.0 }, 24.0],
            egui::SelectableLabel::new(active, text),
        );
        if let Some(n) = count {
            widgets::pill(ui, n.to_string(), pal.bg_header, pal.text_secondary);
        }
        item
    })
    .inner
}

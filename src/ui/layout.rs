// Main application layout
// Handles the menu bar, page header, filter controls and the worker grid

use eframe::egui;
use workers_directory_backend::directory::{ServiceFilter, SortKey};
use crate::state::{DirectoryState, UiEvent};
use crate::ui::components::*;

/// Render the main application layout
/// Returns the events produced by user interaction this frame
pub fn render_app_layout(ctx: &egui::Context, state: &DirectoryState) -> Vec<UiEvent> {
    let mut events = Vec::new();

    render_menu_bar(ctx, &mut events);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if state.load.is_loading() {
                    loading_view(ui);
                } else if let Some(error) = state.load.error() {
                    if error_view(ui, &error.user_message()) {
                        events.push(UiEvent::LoadStarted);
                    }
                } else {
                    render_header(ui);
                    render_filters(ui, state, &mut events);
                    ui.add_space(16.0);
                    render_worker_grid(ui, state);
                    render_footer(ui);
                }
            });
    });

    events
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, events: &mut Vec<UiEvent>) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Refresh").clicked() {
                    events.push(UiEvent::LoadStarted);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    let visuals = if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                }
            });
        });
    });
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new("Professional Workers Directory").size(32.0).strong());
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Discover & hire skilled professionals for your next project.")
                .size(14.0)
                .weak(),
        );
        ui.add_space(24.0);
    });
}

/// Search box, service selector, sort selector and the result summary
fn render_filters(ui: &mut egui::Ui, state: &DirectoryState, events: &mut Vec<UiEvent>) {
    let view = state.view();
    let criteria = &state.criteria;

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            let mut term = criteria.search_term.clone();
            let search = egui::TextEdit::singleline(&mut term)
                .hint_text("🔍 Search by name or service...")
                .desired_width(320.0);
            if ui.add(search).changed() {
                events.push(UiEvent::SearchChanged(term));
            }

            ui.add_space(12.0);

            let selected_text = match &criteria.service {
                ServiceFilter::All => "All Services".to_string(),
                ServiceFilter::Only(service) => service.clone(),
            };
            egui::ComboBox::from_id_source("service_filter")
                .selected_text(selected_text)
                .width(180.0)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(criteria.service == ServiceFilter::All, "All Services")
                        .clicked()
                    {
                        events.push(UiEvent::ServiceSelected(ServiceFilter::All));
                    }
                    for service in &view.services {
                        let option = ServiceFilter::Only(service.clone());
                        if ui
                            .selectable_label(criteria.service == option, service.as_str())
                            .clicked()
                        {
                            events.push(UiEvent::ServiceSelected(option));
                        }
                    }
                });

            ui.add_space(12.0);

            egui::ComboBox::from_id_source("sort_by")
                .selected_text(sort_label(criteria.sort_by))
                .width(160.0)
                .show_ui(ui, |ui| {
                    for key in [SortKey::Name, SortKey::Price] {
                        if ui
                            .selectable_label(criteria.sort_by == key, sort_label(key))
                            .clicked()
                        {
                            events.push(UiEvent::SortChanged(key));
                        }
                    }
                });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(view.summary()).weak().size(12.0));
        });
    });
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Name => "Sort by Name",
        SortKey::Price => "Sort by Price",
    }
}

fn render_worker_grid(ui: &mut egui::Ui, state: &DirectoryState) {
    let view = state.view();
    if view.is_empty() {
        empty_results_view(ui);
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for worker in &view.visible {
            worker_card(ui, worker);
        }
    });
}

fn render_footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new("All prices include 18% GST.")
                .weak()
                .small(),
        );
        ui.add_space(16.0);
    });
}

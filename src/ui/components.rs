// Reusable UI components
// Worker card, avatar fallback and the loading/error/empty placeholders

use eframe::egui;
use workers_directory_backend::directory::display::{
    format_rupees, initials, price_with_gst, service_title,
};
use workers_directory_backend::directory::WorkerRecord;

/// Fixed card width so the grid wraps into even columns
pub const CARD_WIDTH: f32 = 240.0;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(79, 70, 229); // Indigo
const STAR: egui::Color32 = egui::Color32::from_rgb(250, 204, 21); // Yellow

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(text).strong().color(ACCENT))
}

const AVATAR_SIZE: f32 = 64.0;

/// Worker photo, or `None` when it can't be shown
/// A pending load still returns the image; egui draws a spinner meanwhile
pub fn avatar_image<'a>(ctx: &egui::Context, worker: &'a WorkerRecord) -> Option<egui::Image<'a>> {
    if worker.image.is_empty() {
        return None;
    }
    let image = egui::Image::new(worker.image.as_str())
        .fit_to_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE))
        .rounding(AVATAR_SIZE / 2.0);
    match image.load_for_size(ctx, egui::vec2(AVATAR_SIZE, AVATAR_SIZE)) {
        Ok(_) => Some(image),
        Err(e) => {
            tracing::debug!(image = %worker.image, error = %e, "Falling back to initials avatar");
            None
        }
    }
}

/// Render the worker's photo, falling back to a circle with their initials
pub fn avatar(ui: &mut egui::Ui, worker: &WorkerRecord) {
    if let Some(image) = avatar_image(ui.ctx(), worker) {
        ui.add(image);
        return;
    }

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, ACCENT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(&worker.name),
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );
}

/// Four filled stars out of five
fn rating_stars(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 1.0;
        for i in 0..5 {
            let color = if i < 4 { STAR } else { egui::Color32::GRAY };
            ui.label(egui::RichText::new("★").color(color));
        }
        ui.add_space(6.0);
        ui.label(egui::RichText::new("4.0+ rating").weak().size(12.0));
    });
}

/// Render one worker as a card
pub fn worker_card(ui: &mut egui::Ui, worker: &WorkerRecord) {
    egui::Frame::group(ui.style())
        .rounding(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    avatar(ui, worker);
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(&worker.name).strong().size(16.0));
                        ui.label(egui::RichText::new(service_title(worker)).weak().size(13.0));
                    });
                });

                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format_rupees(price_with_gst(worker)))
                            .strong()
                            .size(22.0),
                    );
                    ui.label(egui::RichText::new("per day").weak().size(12.0));
                });

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&worker.service)
                        .size(11.0)
                        .color(ACCENT)
                        .background_color(ui.visuals().faint_bg_color),
                );
                ui.add_space(8.0);
                rating_stars(ui);

                ui.add_space(12.0);
                let contact = egui::Button::new(egui::RichText::new("Contact Worker").strong());
                if ui.add_sized([CARD_WIDTH, 32.0], contact).clicked() {
                    tracing::info!(worker_id = ?worker.id, name = %worker.name, "Contact requested");
                }
            });
        });
}

/// Spinner shown while the listing is being fetched
pub fn loading_view(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.add(egui::Spinner::new().size(56.0));
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Loading workers...").weak());
    });
}

/// Error message with a retry button
/// Returns true if "Try Again" was clicked
pub fn error_view(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(egui::RichText::new("⚠").size(48.0));
        ui.add_space(8.0);
        ui.heading("Error Loading Workers");
        ui.add_space(8.0);
        ui.label(egui::RichText::new(message).weak());
        ui.add_space(16.0);
        ui.spacing_mut().button_padding = egui::vec2(12.0, 8.0);
        retry = primary_button(ui, "Try Again").clicked();
    });
    retry
}

/// Placeholder when no worker matches the criteria
pub fn empty_results_view(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(egui::RichText::new("🔍").size(48.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("No workers found").strong().size(18.0));
        ui.label(egui::RichText::new("Try adjusting your search or filters").weak());
    });
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::SectorColors;
use crate::data::model::Company;
use crate::state::{AppState, LoadState};

// ---------------------------------------------------------------------------
// Company list (central panel)
// ---------------------------------------------------------------------------

/// Render one card per visible company, or the loading / empty / error state.
pub fn company_list(ui: &mut Ui, state: &AppState) {
    match &state.load_state {
        LoadState::Loading => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.spinner();
            });
            return;
        }
        LoadState::Failed(msg) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(msg).color(Color32::RED).size(16.0));
            });
            return;
        }
        LoadState::Ready => {}
    }

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No companies match the current filters.");
        });
        return;
    }

    ScrollArea::vertical()
        .id_salt("company_cards")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for company in state.visible() {
                company_card(ui, company, &state.sector_colors);
                ui.add_space(6.0);
            }
        });
}

fn company_card(ui: &mut Ui, company: &Company, colors: &SectorColors) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(&company.name).strong().size(18.0));
        ui.label(
            RichText::new(&company.sector)
                .strong()
                .color(colors.color_for(&company.sector)),
        );
        ui.weak(company.location.as_str());
        ui.add_space(4.0);
        ui.label(&company.description);
        ui.separator();
        ui.horizontal(|ui: &mut Ui| {
            ui.strong("Revenue:");
            ui.label(company.revenue.as_deref().unwrap_or(""));
        });
    });
}

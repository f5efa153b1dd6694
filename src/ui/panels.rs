use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, LoadState};

/// Label of the "no filter" entry in each selection control.
const ALL_SECTORS: &str = "All sectors";
const ALL_COUNTRIES: &str = "All countries";

// ---------------------------------------------------------------------------
// Top bar – name search, sector and country selectors
// ---------------------------------------------------------------------------

/// Render the filter controls. Any change re-runs filter and statistics.
pub fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    let before = state.criteria.clone();
    let ready = state.load_state == LoadState::Ready;
    let mut clear = false;

    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Company Directory");
        ui.separator();

        ui.add_enabled(
            ready,
            egui::TextEdit::singleline(&mut state.criteria.name)
                .hint_text("Search by name…")
                .desired_width(200.0),
        );

        ui.add_enabled_ui(ready, |ui: &mut Ui| {
            selection_combo(
                ui,
                "sector_filter",
                ALL_SECTORS,
                &mut state.criteria.sector,
                &state.options.sectors,
            );
            selection_combo(
                ui,
                "country_filter",
                ALL_COUNTRIES,
                &mut state.criteria.location,
                &state.options.countries,
            );

            clear = ui.button("Clear filters").clicked();
        });

        ui.separator();

        match &state.load_state {
            LoadState::Loading => {
                ui.spinner();
                ui.label("Loading…");
            }
            LoadState::Ready => {
                ui.label(format!(
                    "{} companies loaded, {} shown",
                    state.companies().len(),
                    state.visible_indices.len()
                ));
            }
            LoadState::Failed(msg) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
        }
    });

    if clear {
        state.clear_filters();
    } else if state.criteria != before {
        state.refilter();
    }
}

/// Single-select combo box with an "all" entry that maps to `None`.
fn selection_combo<'a>(
    ui: &mut Ui,
    id: &str,
    all_label: &str,
    selected: &mut Option<String>,
    values: impl IntoIterator<Item = &'a String>,
) {
    let current = selected.clone().unwrap_or_else(|| all_label.to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(selected, None, all_label);
            for value in values {
                ui.selectable_value(selected, Some(value.clone()), value.as_str());
            }
        });
}

// ---------------------------------------------------------------------------
// Right side panel – statistics
// ---------------------------------------------------------------------------

/// Render total count, average revenue and the per-country breakdown.
pub fn stats_panel(ui: &mut Ui, state: &AppState) {
    let stats = &state.stats;

    ui.heading("Statistics");
    ui.separator();

    egui::Grid::new("stats_overview")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Total companies:");
            ui.strong(stats.count.to_string());
            ui.end_row();

            ui.label("Average revenue:");
            ui.strong(stats.average_revenue_label());
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.strong("Companies per country");
    ui.separator();

    if stats.country_counts.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.weak("No data");
        });
        return;
    }

    ScrollArea::vertical()
        .id_salt("country_counts")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("country_counts_table")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    for entry in &stats.country_counts {
                        ui.label(&entry.country);
                        ui.label(RichText::new(entry.count.to_string()).strong());
                        ui.end_row();
                    }
                });
        });
}

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::DEFAULT_AGE_RANGE;
use crate::data::filter::SexChoice;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros Interativos");
    ui.separator();

    // Edit a copy so the recomputation happens once, after all widgets.
    let mut selection = state.selection.clone();
    let (lo, hi) = state.dataset.age_range.unwrap_or(DEFAULT_AGE_RANGE);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Age band ----
            ui.strong("Faixa Etária");
            ui.add(egui::Slider::new(&mut selection.age_min, lo..=hi).text("mín"));
            ui.add(egui::Slider::new(&mut selection.age_max, lo..=hi).text("máx"));
            // Dragging one handle past the other pushes it along.
            if selection.age_min > selection.age_max {
                if selection.age_min != state.selection.age_min {
                    selection.age_max = selection.age_min;
                } else {
                    selection.age_min = selection.age_max;
                }
            }
            ui.separator();

            // ---- Sex ----
            ui.strong("Sexo");
            for choice in SexChoice::ALL {
                ui.radio_value(&mut selection.sex, choice, choice.label());
            }
            ui.separator();

            // ---- Chest pain type (multi-select) ----
            let n_selected = selection.chest_pain.len();
            let n_total = state.dataset.chest_pain_types.len();
            ui.strong(format!("Tipo de Dor no Peito  ({n_selected}/{n_total})"));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("Todos").clicked() {
                    selection.chest_pain = state.dataset.chest_pain_types.clone();
                }
                if ui.small_button("Nenhum").clicked() {
                    selection.chest_pain.clear();
                }
            });
            for &code in &state.dataset.chest_pain_types {
                let mut checked = selection.chest_pain.contains(&code);
                if ui.checkbox(&mut checked, code.to_string()).changed() {
                    if checked {
                        selection.chest_pain.insert(code);
                    } else {
                        selection.chest_pain.remove(&code);
                    }
                }
            }
            if selection.chest_pain.is_empty() {
                ui.label(RichText::new("Nenhum tipo selecionado.").weak());
            }
        });

    state.set_selection(selection);
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

/// Page title and the live row-count readout.
pub fn header(ui: &mut Ui, state: &AppState) {
    ui.heading(
        RichText::new("📊 Análise Dinâmica de Fatores Relacionados a Doenças Cardíacas").size(26.0),
    );
    ui.add_space(8.0);
    ui.label(RichText::new("🔍 Resumo dos Dados Filtrados").strong().size(18.0));
    ui.label(format!(
        "📌 {} registros selecionados em tempo real",
        state.dashboard.row_count
    ));
    ui.add_space(8.0);
}

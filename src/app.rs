use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, ScrollArea, Ui};

use crate::data::aggregate::Topic;
use crate::data::model::HeartDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, text};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeartDashApp {
    pub state: AppState,
}

impl HeartDashApp {
    pub fn new(dataset: Arc<HeartDataset>) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

/// One chart cell: heading, chart, interpretation.
fn topic_panel(ui: &mut Ui, state: &mut AppState, topic: Topic) {
    ui.heading(crate::labels::topic_text(topic).heading);
    // Split borrows: the cursor is mutable while the specs are read.
    let AppState {
        dashboard, frames, ..
    } = state;
    let cursor = frames.entry(topic).or_default();
    match topic {
        Topic::FastingBloodSugar => plot::bar_chart(ui, &dashboard.fasting_blood_sugar, cursor),
        Topic::RestingEcg => plot::bar_chart(ui, &dashboard.resting_ecg, cursor),
        Topic::Oldpeak => plot::box_chart(ui, &dashboard.oldpeak, cursor),
        Topic::MajorVessels => plot::bar_chart(ui, &dashboard.major_vessels, cursor),
    }
    text::info_panel(ui, topic);
}

impl eframe::App for HeartDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: header, 2×2 chart grid, conclusions ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::header(ui, &self.state);

                    for row in Topic::ALL.chunks(2) {
                        ui.columns(2, |cols| {
                            for (col, &topic) in cols.iter_mut().zip(row) {
                                topic_panel(col, &mut self.state, topic);
                            }
                        });
                        ui.add_space(16.0);
                    }

                    text::summary_panel(ui);
                });
        });

        if self.state.is_animating() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

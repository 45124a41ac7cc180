use std::ops::RangeInclusive;

use eframe::egui::{self, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Plot, PlotPoints, Points,
};

use crate::chart::{BarChartSpec, BoxChartSpec};
use crate::color::ColorMap;
use crate::config::CHART_HEIGHT;
use crate::data::aggregate::Topic;
use crate::labels::{LabelTable, COLOR_TITLE};
use crate::state::FrameCursor;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Label only the grid marks that land on a code of `ticks`.
fn tick_formatter(ticks: LabelTable) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let code = mark.value.round();
        if (mark.value - code).abs() > 1e-6 {
            return String::new();
        }
        ticks
            .iter()
            .find(|(c, _)| *c as f64 == code)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_default()
    }
}

/// Sex frame selector with play / pause. Returns the frame to draw.
fn frame_controls(ui: &mut Ui, labels: &[Option<String>], cursor: &mut FrameCursor) -> usize {
    let now = ui.input(|i| i.time);
    let n = labels.len();
    if n <= 1 {
        return 0;
    }

    let current = cursor.current(now, n);
    ui.horizontal(|ui: &mut Ui| {
        let icon = if cursor.is_playing() { "⏸" } else { "▶" };
        if ui.button(icon).clicked() {
            if cursor.is_playing() {
                cursor.pause(now, n);
            } else {
                cursor.play(now, n);
            }
        }
        ui.label("sex =");
        for (i, label) in labels.iter().enumerate() {
            let text = label.as_deref().unwrap_or("-");
            if ui.selectable_label(i == current, text).clicked() {
                cursor.select(i);
            }
        }
    });
    cursor.current(now, n)
}

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// Render a grouped bar chart: one bar per outcome side by side at each category.
pub fn bar_chart(ui: &mut Ui, spec: &BarChartSpec, cursor: &mut FrameCursor) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(egui::RichText::new(spec.text.title).strong());
        ui.label(egui::RichText::new(format!("(n = {})", spec.total)).weak());
    });

    let labels: Vec<Option<String>> = spec.frames.iter().map(|f| f.label.clone()).collect();
    let frame_idx = frame_controls(ui, &labels, cursor);
    let Some(frame) = spec.frames.get(frame_idx) else {
        return;
    };

    let colors = ColorMap::new(&spec.outcomes);
    let n_series = spec.outcomes.len().max(1) as f64;
    let width = 0.8 / n_series;

    // Page scrolling wins over plot scrolling; zoom with drag or ctrl+wheel.
    Plot::new(format!("bar_{:?}", spec.topic))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(spec.text.x_title)
        .y_axis_label(spec.text.y_title)
        .x_axis_formatter(tick_formatter(spec.text.ticks))
        .include_y(0.0)
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &frame.series {
                let slot = spec
                    .outcomes
                    .iter()
                    .position(|&o| o == series.outcome)
                    .unwrap_or(0) as f64;
                let offset = -0.4 + width * (slot + 0.5);

                let bars: Vec<Bar> = series
                    .bars
                    .iter()
                    .map(|b| {
                        Bar::new(b.category as f64 + offset, b.count as f64)
                            .width(width)
                            .name(format!("{} = {}: {}", series.name, b.label, b.count))
                    })
                    .collect();

                let chart = BarChart::new(bars)
                    .name(format!("{COLOR_TITLE} = {}", series.name))
                    .color(colors.color_for(series.outcome));
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Box chart
// ---------------------------------------------------------------------------

/// Render the oldpeak box chart: one box per outcome, outliers as points.
pub fn box_chart(ui: &mut Ui, spec: &BoxChartSpec, cursor: &mut FrameCursor) {
    ui.label(egui::RichText::new(spec.text.title).strong());

    let labels: Vec<Option<String>> = spec.frames.iter().map(|f| f.label.clone()).collect();
    let frame_idx = frame_controls(ui, &labels, cursor);
    let Some(frame) = spec.frames.get(frame_idx) else {
        return;
    };

    let colors = ColorMap::new(&spec.outcomes);

    Plot::new(format!("box_{:?}", Topic::Oldpeak))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(spec.text.x_title)
        .y_axis_label(spec.text.y_title)
        .x_axis_formatter(tick_formatter(spec.text.ticks))
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for summary in &frame.boxes {
                let color = colors.color_for(summary.outcome);
                let x = summary.outcome as f64;
                let s = &summary.stats;

                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(s.lower_whisker, s.q1, s.median, s.q3, s.upper_whisker),
                )
                .name(format!("{} (n = {})", summary.name, s.n))
                .box_width(0.5)
                .whisker_width(0.3)
                .fill(color.linear_multiply(0.3))
                .stroke(Stroke::new(1.5, color));

                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&summary.name).color(color));

                if !s.outliers.is_empty() {
                    let points: PlotPoints = s.outliers.iter().map(|&y| [x, y]).collect();
                    plot_ui.points(
                        Points::new(points)
                            .name(&summary.name)
                            .color(color)
                            .radius(2.5),
                    );
                }
            }
        });
}

use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues, starting
/// at blue so a two-outcome chart reads blue / orange-red.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (220.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: outcome code → Color32
// ---------------------------------------------------------------------------

/// Maps the outcome codes of a chart to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<i64, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the codes present in a chart.
    pub fn new(codes: &[i64]) -> Self {
        let palette = generate_palette(codes.len());
        let mapping = codes.iter().copied().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given code.
    pub fn color_for(&self, code: i64) -> Color32 {
        self.mapping
            .get(&code)
            .copied()
            .unwrap_or(self.default_color)
    }
}

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Static dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed location of the dataset, relative to the working directory.
pub const DATA_PATH: &str = "heart.csv";

/// Initial age band of the slider, clamped into the observed range.
pub const DEFAULT_AGE_RANGE: (i64, i64) = (40, 60);

/// Seconds each sex frame stays on screen while a chart is playing.
pub const FRAME_SECONDS: f64 = 1.5;

/// Height of every chart panel, in points.
pub const CHART_HEIGHT: f32 = 400.0;

pub const WINDOW_TITLE: &str = "Análise Dinâmica de Doenças Cardíacas";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_PATH),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
        }
    }
}

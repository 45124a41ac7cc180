use std::collections::BTreeMap;
use std::sync::Arc;

use crate::chart::Dashboard;
use crate::config::FRAME_SECONDS;
use crate::data::aggregate::Topic;
use crate::data::filter::{self, FilterSelection};
use crate::data::model::HeartDataset;

// ---------------------------------------------------------------------------
// Frame cursor – which sex frame a faceted chart shows
// ---------------------------------------------------------------------------

/// Frame position of one chart, either pinned by the user or cycling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCursor {
    selected: usize,
    /// `(started_at, first_frame)` while playing.
    playing: Option<(f64, usize)>,
}

impl FrameCursor {
    /// Frame to draw at time `now` (seconds) for a chart with `frame_count` frames.
    pub fn current(&self, now: f64, frame_count: usize) -> usize {
        if frame_count == 0 {
            return 0;
        }
        match self.playing {
            Some((started_at, first)) => {
                let steps = ((now - started_at).max(0.0) / FRAME_SECONDS) as usize;
                (first + steps) % frame_count
            }
            None => self.selected.min(frame_count - 1),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    pub fn select(&mut self, frame: usize) {
        self.selected = frame;
        self.playing = None;
    }

    pub fn play(&mut self, now: f64, frame_count: usize) {
        let from = self.current(now, frame_count);
        self.playing = Some((now, from));
    }

    pub fn pause(&mut self, now: f64, frame_count: usize) {
        self.selected = self.current(now, frame_count);
        self.playing = None;
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Arc<HeartDataset>,

    /// Current sidebar inputs.
    pub selection: FilterSelection,

    /// Charts derived from the current selection (cached until it changes).
    pub dashboard: Dashboard,

    /// Per-chart sex frame position.
    pub frames: BTreeMap<Topic, FrameCursor>,
}

impl AppState {
    pub fn new(dataset: Arc<HeartDataset>) -> Self {
        let selection = FilterSelection::defaults_for(&dataset);
        let dashboard = Dashboard::build(&filter::apply(&dataset, &selection));
        Self {
            dataset,
            selection,
            dashboard,
            frames: BTreeMap::new(),
        }
    }

    /// Replace the selection; recompute everything if it actually changed.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.refresh();
    }

    /// Full recomputation: filtered view → aggregates → chart specs.
    pub fn refresh(&mut self) {
        let view = filter::apply(&self.dataset, &self.selection);
        self.dashboard = Dashboard::build(&view);
        self.frames.clear();
        log::debug!(
            "Filter {:?} selected {} of {} records",
            self.selection,
            self.dashboard.row_count,
            self.dataset.len()
        );
    }

    /// Whether any chart is cycling its frames and needs periodic repaints.
    pub fn is_animating(&self) -> bool {
        self.frames.values().any(FrameCursor::is_playing)
    }
}

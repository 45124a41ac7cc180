use std::collections::BTreeSet;

use super::model::{HeartDataset, Record};
use crate::config::DEFAULT_AGE_RANGE;

// ---------------------------------------------------------------------------
// Sex choice
// ---------------------------------------------------------------------------

/// Single-choice sex selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SexChoice {
    #[default]
    All,
    Male,
    Female,
}

impl SexChoice {
    pub const ALL: [SexChoice; 3] = [SexChoice::All, SexChoice::Male, SexChoice::Female];

    pub fn label(self) -> &'static str {
        match self {
            SexChoice::All => "Todos",
            SexChoice::Male => "Masculino",
            SexChoice::Female => "Feminino",
        }
    }

    /// Whether a raw sex code passes this choice.
    pub fn matches(self, sex: i64) -> bool {
        match self {
            SexChoice::All => true,
            SexChoice::Male => sex == 1,
            SexChoice::Female => sex == 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter selection
// ---------------------------------------------------------------------------

/// The three sidebar inputs. Rebuilt from the widgets on every interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub age_min: i64,
    pub age_max: i64,
    pub sex: SexChoice,
    pub chest_pain: BTreeSet<i64>,
}

impl FilterSelection {
    /// Initial selection: the default age band clamped into the observed
    /// range, every chest-pain type, both sexes.
    pub fn defaults_for(dataset: &HeartDataset) -> Self {
        let (lo, hi) = dataset.age_range.unwrap_or(DEFAULT_AGE_RANGE);
        let (def_min, def_max) = DEFAULT_AGE_RANGE;
        FilterSelection {
            age_min: def_min.clamp(lo, hi),
            age_max: def_max.clamp(lo, hi),
            sex: SexChoice::All,
            chest_pain: dataset.chest_pain_types.clone(),
        }
    }

    /// Row predicate: inclusive age band, chest-pain membership, sex choice.
    pub fn accepts(&self, record: &Record) -> bool {
        (self.age_min..=self.age_max).contains(&record.age)
            && self.chest_pain.contains(&record.cp)
            && self.sex.matches(record.sex)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Read-only subset of the dataset's rows, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn from_rows(rows: Vec<&'a Record>) -> Self {
        FilteredView { rows }
    }

    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct sex codes present in this view.
    pub fn sex_codes(&self) -> BTreeSet<i64> {
        self.rows.iter().map(|r| r.sex).collect()
    }
}

/// Return the rows of `dataset` passing `selection`.
///
/// An empty chest-pain set or a swapped age range yield an empty view, which
/// is a normal outcome rather than an error.
pub fn apply<'a>(dataset: &'a HeartDataset, selection: &FilterSelection) -> FilteredView<'a> {
    FilteredView::from_rows(
        dataset
            .records
            .iter()
            .filter(|r| selection.accepts(r))
            .collect(),
    )
}

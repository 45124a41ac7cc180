//! Grouping and counting of a [`FilteredView`], one aggregate per chart.
//!
//! Every topic consults [`should_facet_by_sex`] on the *filtered* rows: when
//! only one sex remains, sex is dropped from the grouping key and the chart
//! is not split into per-sex frames.

use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::Record;

/// True when the view holds more than one distinct sex code.
pub fn should_facet_by_sex(view: &FilteredView<'_>) -> bool {
    view.sex_codes().len() > 1
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// The four analysis panels of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    FastingBloodSugar,
    RestingEcg,
    Oldpeak,
    MajorVessels,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::FastingBloodSugar,
        Topic::RestingEcg,
        Topic::Oldpeak,
        Topic::MajorVessels,
    ];

    /// Categorical dimension a bar topic groups by. `None` for the oldpeak
    /// distribution, which is not counted.
    pub fn dimension(self) -> Option<fn(&Record) -> i64> {
        match self {
            Topic::FastingBloodSugar => Some(|r: &Record| r.fbs),
            Topic::RestingEcg => Some(|r: &Record| r.restecg),
            Topic::MajorVessels => Some(|r: &Record| r.ca),
            Topic::Oldpeak => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Counted aggregates (bar topics)
// ---------------------------------------------------------------------------

/// Grouping key. `sex` is `None` when the aggregate is not faceted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub sex: Option<i64>,
    pub category: i64,
    pub outcome: i64,
}

/// Row counts per non-empty group, sorted by key.
#[derive(Debug, Clone, PartialEq)]
pub struct CountAggregate {
    pub topic: Topic,
    pub faceted: bool,
    pub groups: Vec<(GroupKey, usize)>,
}

impl CountAggregate {
    /// Sum over all groups; equals the size of the source view.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, n)| n).sum()
    }
}

/// Group `view` by `(sex?, category, outcome)` for a bar topic and count rows.
///
/// Returns `None` for [`Topic::Oldpeak`]; use [`oldpeak_distribution`].
pub fn count_by(view: &FilteredView<'_>, topic: Topic) -> Option<CountAggregate> {
    let dimension = topic.dimension()?;
    let faceted = should_facet_by_sex(view);

    let mut counts: BTreeMap<GroupKey, usize> = BTreeMap::new();
    for r in view.rows() {
        let key = GroupKey {
            sex: faceted.then_some(r.sex),
            category: dimension(r),
            outcome: r.target,
        };
        *counts.entry(key).or_default() += 1;
    }

    Some(CountAggregate {
        topic,
        faceted,
        groups: counts.into_iter().collect(),
    })
}

// ---------------------------------------------------------------------------
// Oldpeak distribution
// ---------------------------------------------------------------------------

/// One raw observation for the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OldpeakPoint {
    pub sex: Option<i64>,
    pub outcome: i64,
    pub oldpeak: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OldpeakDistribution {
    pub faceted: bool,
    pub points: Vec<OldpeakPoint>,
}

impl OldpeakDistribution {
    /// Oldpeak values of one `(sex?, outcome)` partition, in view order.
    pub fn values(&self, sex: Option<i64>, outcome: i64) -> Vec<f64> {
        self.points
            .iter()
            .filter(|p| p.sex == sex && p.outcome == outcome)
            .map(|p| p.oldpeak)
            .collect()
    }
}

/// Pass `(outcome, oldpeak)` pairs through, tagged with sex when faceted.
pub fn oldpeak_distribution(view: &FilteredView<'_>) -> OldpeakDistribution {
    let faceted = should_facet_by_sex(view);
    OldpeakDistribution {
        faceted,
        points: view
            .rows()
            .iter()
            .map(|r| OldpeakPoint {
                sex: faceted.then_some(r.sex),
                outcome: r.target,
                oldpeak: r.oldpeak,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterSelection, SexChoice};
    use crate::data::model::fixtures::{record, small_dataset};
    use crate::data::model::HeartDataset;

    fn everything(ds: &HeartDataset) -> FilterSelection {
        FilterSelection {
            age_min: 0,
            age_max: 200,
            sex: SexChoice::All,
            chest_pain: ds.chest_pain_types.clone(),
        }
    }

    const BAR_TOPICS: [Topic; 3] = [Topic::FastingBloodSugar, Topic::RestingEcg, Topic::MajorVessels];

    #[test]
    fn facet_switch_follows_distinct_sex_codes() {
        let ds = small_dataset();
        let mut sel = everything(&ds);
        assert!(should_facet_by_sex(&apply(&ds, &sel)));

        sel.sex = SexChoice::Male;
        assert!(!should_facet_by_sex(&apply(&ds, &sel)));

        sel.chest_pain.clear();
        assert!(!should_facet_by_sex(&apply(&ds, &sel)));
    }

    #[test]
    fn counts_conserve_mass_for_every_bar_topic() {
        let ds = small_dataset();
        let view = apply(&ds, &FilterSelection::defaults_for(&ds));
        for topic in BAR_TOPICS {
            let agg = count_by(&view, topic).unwrap();
            assert_eq!(agg.total(), view.len(), "{topic:?}");
            assert!(agg.groups.iter().all(|(_, n)| *n > 0));
        }
    }

    #[test]
    fn female_only_age_band_disables_sex_for_all_topics() {
        let ds = small_dataset();
        let mut sel = everything(&ds);
        sel.age_min = 70;
        sel.age_max = 77;
        let view = apply(&ds, &sel);
        assert_eq!(view.len(), 2);

        for topic in BAR_TOPICS {
            let agg = count_by(&view, topic).unwrap();
            assert!(!agg.faceted);
            assert!(agg.groups.iter().all(|(k, _)| k.sex.is_none()));
        }
        let dist = oldpeak_distribution(&view);
        assert!(!dist.faceted);
        assert!(dist.points.iter().all(|p| p.sex.is_none()));
    }

    #[test]
    fn mixed_sexes_keep_sex_in_the_key() {
        let ds = small_dataset();
        let view = apply(&ds, &everything(&ds));
        let agg = count_by(&view, Topic::FastingBloodSugar).unwrap();
        assert!(agg.faceted);
        assert!(agg.groups.iter().all(|(k, _)| k.sex.is_some()));
    }

    #[test]
    fn groups_are_exact_and_sorted() {
        let ds = HeartDataset::from_records(vec![
            record(50, 1, 0, 1, 0, 0.0, 0, 1),
            record(51, 1, 0, 1, 0, 0.0, 0, 1),
            record(52, 1, 0, 0, 0, 0.0, 0, 0),
            record(53, 1, 0, 1, 0, 0.0, 0, 0),
        ]);
        let view = apply(&ds, &everything(&ds));
        let agg = count_by(&view, Topic::FastingBloodSugar).unwrap();
        let key = |category, outcome| GroupKey {
            sex: None,
            category,
            outcome,
        };
        assert_eq!(
            agg.groups,
            vec![(key(0, 0), 1), (key(1, 0), 1), (key(1, 1), 2)]
        );
    }

    #[test]
    fn each_bar_topic_groups_by_its_own_column() {
        let ds = HeartDataset::from_records(vec![record(50, 0, 0, 1, 2, 0.0, 3, 1)]);
        let view = apply(&ds, &everything(&ds));
        let category = |topic| count_by(&view, topic).unwrap().groups[0].0.category;
        assert_eq!(category(Topic::FastingBloodSugar), 1);
        assert_eq!(category(Topic::RestingEcg), 2);
        assert_eq!(category(Topic::MajorVessels), 3);
    }

    #[test]
    fn oldpeak_is_not_counted() {
        let ds = small_dataset();
        let view = apply(&ds, &everything(&ds));
        assert!(count_by(&view, Topic::Oldpeak).is_none());
    }

    #[test]
    fn oldpeak_passes_raw_values_through() {
        let ds = small_dataset();
        let view = apply(&ds, &everything(&ds));
        let dist = oldpeak_distribution(&view);
        assert_eq!(dist.points.len(), view.len());
        assert!(dist.faceted);
        assert_eq!(dist.values(Some(0), 0), vec![1.0]);
        assert_eq!(dist.values(Some(1), 0), vec![0.4, 3.2]);
    }

    #[test]
    fn empty_view_aggregates_to_nothing() {
        let ds = small_dataset();
        let mut sel = everything(&ds);
        sel.chest_pain.clear();
        let view = apply(&ds, &sel);
        for topic in BAR_TOPICS {
            let agg = count_by(&view, topic).unwrap();
            assert!(agg.groups.is_empty());
            assert_eq!(agg.total(), 0);
        }
        assert!(oldpeak_distribution(&view).points.is_empty());
    }

    #[test]
    fn recomputation_is_stable() {
        let ds = small_dataset();
        let sel = FilterSelection::defaults_for(&ds);
        let a = count_by(&apply(&ds, &sel), Topic::RestingEcg);
        let b = count_by(&apply(&ds, &sel), Topic::RestingEcg);
        assert_eq!(a, b);
    }
}

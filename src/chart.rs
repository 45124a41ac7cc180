//! Chart specifications: plain data describing what each panel draws.
//!
//! Nothing here touches egui; `ui::plot` turns these into widgets.

use std::collections::BTreeSet;

use crate::data::aggregate::{
    count_by, oldpeak_distribution, CountAggregate, OldpeakDistribution, Topic,
};
use crate::data::filter::FilteredView;
use crate::data::stats::BoxStats;
use crate::labels::{label_for, topic_text, TopicText, SEX_LABELS};

// ---------------------------------------------------------------------------
// Grouped bar charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub category: i64,
    pub label: String,
    pub count: usize,
}

/// Bars of one outcome within a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub outcome: i64,
    pub name: String,
    pub bars: Vec<BarPoint>,
}

/// One sex frame, or the only frame when the chart is not faceted.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    pub label: Option<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub topic: Topic,
    pub text: TopicText,
    pub faceted: bool,
    /// Rows behind the chart, across all frames.
    pub total: usize,
    /// Outcome codes present anywhere in the chart, so colours and legend
    /// entries stay stable across frames.
    pub outcomes: Vec<i64>,
    pub frames: Vec<BarFrame>,
}

impl BarChartSpec {
    pub fn from_aggregate(agg: &CountAggregate) -> Self {
        let text = topic_text(agg.topic);
        let outcomes: Vec<i64> = agg
            .groups
            .iter()
            .map(|(k, _)| k.outcome)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let frames = frame_keys(agg.faceted, agg.groups.iter().map(|(k, _)| k.sex))
            .into_iter()
            .map(|sex| BarFrame {
                label: sex.map(|s| label_for(SEX_LABELS, s)),
                series: outcomes
                    .iter()
                    .map(|&outcome| BarSeries {
                        outcome,
                        name: outcome.to_string(),
                        bars: agg
                            .groups
                            .iter()
                            .filter(|(k, _)| k.sex == sex && k.outcome == outcome)
                            .map(|(k, n)| BarPoint {
                                category: k.category,
                                label: label_for(text.ticks, k.category),
                                count: *n,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        BarChartSpec {
            topic: agg.topic,
            text,
            faceted: agg.faceted,
            total: agg.total(),
            outcomes,
            frames,
        }
    }
}

// ---------------------------------------------------------------------------
// Box chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub outcome: i64,
    pub name: String,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxFrame {
    pub label: Option<String>,
    pub boxes: Vec<BoxSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxChartSpec {
    pub text: TopicText,
    pub faceted: bool,
    pub outcomes: Vec<i64>,
    pub frames: Vec<BoxFrame>,
}

impl BoxChartSpec {
    pub fn from_distribution(dist: &OldpeakDistribution) -> Self {
        let text = topic_text(Topic::Oldpeak);
        let outcomes: Vec<i64> = dist
            .points
            .iter()
            .map(|p| p.outcome)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let frames = frame_keys(dist.faceted, dist.points.iter().map(|p| p.sex))
            .into_iter()
            .map(|sex| BoxFrame {
                label: sex.map(|s| label_for(SEX_LABELS, s)),
                boxes: outcomes
                    .iter()
                    .filter_map(|&outcome| {
                        let stats = BoxStats::from_values(&dist.values(sex, outcome))?;
                        Some(BoxSummary {
                            outcome,
                            name: label_for(text.ticks, outcome),
                            stats,
                        })
                    })
                    .collect(),
            })
            .collect();

        BoxChartSpec {
            text,
            faceted: dist.faceted,
            outcomes,
            frames,
        }
    }
}

/// Ascending sex keys of a faceted chart, or the single `None` key.
fn frame_keys(faceted: bool, sexes: impl Iterator<Item = Option<i64>>) -> Vec<Option<i64>> {
    if !faceted {
        return vec![None];
    }
    let keys: BTreeSet<Option<i64>> = sexes.collect();
    if keys.is_empty() {
        vec![None]
    } else {
        keys.into_iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Dashboard – all four charts for one filter selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub row_count: usize,
    pub fasting_blood_sugar: BarChartSpec,
    pub resting_ecg: BarChartSpec,
    pub oldpeak: BoxChartSpec,
    pub major_vessels: BarChartSpec,
}

impl Dashboard {
    /// Aggregate `view` for every topic and build the chart specs.
    pub fn build(view: &FilteredView<'_>) -> Self {
        let bar = |topic| {
            let agg = count_by(view, topic).unwrap_or(CountAggregate {
                topic,
                faceted: false,
                groups: Vec::new(),
            });
            BarChartSpec::from_aggregate(&agg)
        };

        Dashboard {
            row_count: view.len(),
            fasting_blood_sugar: bar(Topic::FastingBloodSugar),
            resting_ecg: bar(Topic::RestingEcg),
            oldpeak: BoxChartSpec::from_distribution(&oldpeak_distribution(view)),
            major_vessels: bar(Topic::MajorVessels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterSelection, SexChoice};
    use crate::data::model::fixtures::small_dataset;
    use crate::data::model::HeartDataset;

    fn view_all(ds: &HeartDataset, sex: SexChoice) -> FilterSelection {
        FilterSelection {
            age_min: 0,
            age_max: 200,
            sex,
            chest_pain: ds.chest_pain_types.clone(),
        }
    }

    fn frame_count(dash: &Dashboard, topic: Topic) -> usize {
        match topic {
            Topic::FastingBloodSugar => dash.fasting_blood_sugar.frames.len(),
            Topic::RestingEcg => dash.resting_ecg.frames.len(),
            Topic::Oldpeak => dash.oldpeak.frames.len(),
            Topic::MajorVessels => dash.major_vessels.frames.len(),
        }
    }

    fn bar_total(spec: &BarChartSpec) -> usize {
        spec.frames
            .iter()
            .flat_map(|f| &f.series)
            .flat_map(|s| &s.bars)
            .map(|b| b.count)
            .sum()
    }

    #[test]
    fn faceted_charts_get_one_frame_per_sex() {
        let ds = small_dataset();
        let view = apply(&ds, &view_all(&ds, SexChoice::All));
        let dash = Dashboard::build(&view);

        let labels: Vec<_> = dash
            .resting_ecg
            .frames
            .iter()
            .map(|f| f.label.clone())
            .collect();
        assert_eq!(
            labels,
            vec![Some("Feminino".to_string()), Some("Masculino".to_string())]
        );
        for topic in Topic::ALL {
            assert_eq!(frame_count(&dash, topic), 2, "{topic:?}");
        }
    }

    #[test]
    fn single_sex_charts_have_one_unlabelled_frame() {
        let ds = small_dataset();
        let view = apply(&ds, &view_all(&ds, SexChoice::Female));
        let dash = Dashboard::build(&view);
        assert!(!dash.major_vessels.faceted);
        assert!(!dash.oldpeak.faceted);
        for topic in Topic::ALL {
            assert_eq!(frame_count(&dash, topic), 1);
        }
        assert_eq!(dash.major_vessels.frames[0].label, None);
    }

    #[test]
    fn bar_totals_match_the_row_count() {
        let ds = small_dataset();
        let view = apply(&ds, &FilterSelection::defaults_for(&ds));
        let dash = Dashboard::build(&view);
        assert_eq!(dash.row_count, view.len());
        assert_eq!(bar_total(&dash.fasting_blood_sugar), view.len());
        assert_eq!(bar_total(&dash.resting_ecg), view.len());
        assert_eq!(bar_total(&dash.major_vessels), view.len());
        assert_eq!(dash.major_vessels.total, view.len());
    }

    #[test]
    fn bars_carry_table_labels() {
        let ds = small_dataset();
        let view = apply(&ds, &view_all(&ds, SexChoice::Male));
        let dash = Dashboard::build(&view);
        let labels: BTreeSet<String> = dash.resting_ecg.frames[0]
            .series
            .iter()
            .flat_map(|s| s.bars.iter().map(|b| b.label.clone()))
            .collect();
        assert!(labels.contains("Normal"));
        assert!(labels.contains("Anormalidade ST-T"));
        assert_eq!(dash.resting_ecg.outcomes, vec![0, 1]);
    }

    #[test]
    fn box_chart_names_outcomes_and_summarises_each() {
        let ds = small_dataset();
        let view = apply(&ds, &view_all(&ds, SexChoice::Male));
        let dash = Dashboard::build(&view);
        let frame = &dash.oldpeak.frames[0];
        let names: Vec<_> = frame.boxes.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Sem Doença", "Com Doença"]);
        let n: usize = frame.boxes.iter().map(|b| b.stats.n).sum();
        assert_eq!(n, view.len());
    }

    #[test]
    fn empty_view_builds_empty_charts() {
        let ds = small_dataset();
        let mut sel = view_all(&ds, SexChoice::All);
        sel.chest_pain.clear();
        let view = apply(&ds, &sel);
        let dash = Dashboard::build(&view);

        assert_eq!(dash.row_count, 0);
        assert_eq!(dash.fasting_blood_sugar.frames.len(), 1);
        assert!(dash.fasting_blood_sugar.frames[0].series.is_empty());
        assert!(dash.oldpeak.frames[0].boxes.is_empty());
    }
}

//! Code → label lookup tables and per-topic chart wording.
//!
//! The fasting-blood-sugar labels are kept exactly as the dashboard has
//! always shown them, even though flag 1 conventionally means > 120 mg/dl.

use crate::data::aggregate::Topic;

/// A fixed mapping from raw codes to display labels.
pub type LabelTable = &'static [(i64, &'static str)];

pub const FBS_LABELS: LabelTable = &[(0, "Não (>120 mg/dl)"), (1, "Sim (≤120 mg/dl)")];

pub const RESTECG_LABELS: LabelTable = &[(0, "Normal"), (1, "Anormalidade ST-T"), (2, "Hipertrofia")];

pub const CA_LABELS: LabelTable = &[(0, "0"), (1, "1"), (2, "2"), (3, "3")];

/// Outcome on the x axis of the oldpeak box chart.
pub const TARGET_LABELS: LabelTable = &[(0, "Sem Doença"), (1, "Com Doença")];

/// Sex frames of faceted charts.
pub const SEX_LABELS: LabelTable = &[(0, "Feminino"), (1, "Masculino")];

/// Look up `code`, falling back to its numeric text.
pub fn label_for(table: LabelTable, code: i64) -> String {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Static wording of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicText {
    pub heading: &'static str,
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub ticks: LabelTable,
}

pub const COLOR_TITLE: &str = "Heart Disease (0=No, 1=Yes)";
pub const COUNT_TITLE: &str = "Contagem";

pub fn topic_text(topic: Topic) -> TopicText {
    match topic {
        Topic::FastingBloodSugar => TopicText {
            heading: "🍬 Açúcar no Sangue em Jejum vs. Doença Cardíaca",
            title: "Relação Dinâmica entre Açúcar no Sangue e Doença Cardíaca",
            x_title: "Fasting Blood Sugar (>120 mg/dl)",
            y_title: COUNT_TITLE,
            ticks: FBS_LABELS,
        },
        Topic::RestingEcg => TopicText {
            heading: "📈 Resultados de ECG em Repouso vs. Doença Cardíaca",
            title: "Relação Dinâmica entre ECG em Repouso e Doença Cardíaca",
            x_title: "Resting ECG Results",
            y_title: COUNT_TITLE,
            ticks: RESTECG_LABELS,
        },
        Topic::Oldpeak => TopicText {
            heading: "💓 Distribuição Dinâmica de Oldpeak",
            title: "Distribuição Dinâmica de Oldpeak por Status de Doença",
            x_title: COLOR_TITLE,
            y_title: "ST Depression Induced by Exercise",
            ticks: TARGET_LABELS,
        },
        Topic::MajorVessels => TopicText {
            heading: "🩺 Número de Vasos Principais vs. Doença Cardíaca",
            title: "Relação Dinâmica entre Vasos Principais e Doença Cardíaca",
            x_title: "Number of Major Vessels",
            y_title: COUNT_TITLE,
            ticks: CA_LABELS,
        },
    }
}

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::aggregate::Topic;

// ---------------------------------------------------------------------------
// Static interpretation panels
// ---------------------------------------------------------------------------

const INFO_FILL: Color32 = Color32::from_rgba_premultiplied(20, 45, 80, 60);
const SUCCESS_FILL: Color32 = Color32::from_rgba_premultiplied(20, 70, 35, 60);

pub fn interpretation(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::FastingBloodSugar => &[
            "Gráfico de barras dinâmico mostrando a contagem de pacientes por nível de açúcar no sangue.",
            "Passe o mouse sobre as barras para ver detalhes; clique e arraste para zoom.",
            "Se houver animação por sexo, observe como o padrão muda entre masculino e feminino.",
            "Insight: Proporções altas de 'Sim' com doença (1) sugerem risco associado a açúcar elevado.",
        ],
        Topic::RestingEcg => &[
            "Barras dinâmicas para resultados de ECG em repouso (0 = normal, 1 = ST-T, 2 = hipertrofia).",
            "Passe o mouse para detalhes; use os botões para explorar (zoom, pan, etc.).",
            "Animação por sexo (se disponível) mostra diferenças entre gêneros.",
            "Insight: Mais casos de doença em 'Anormalidade ST-T' ou 'Hipertrofia' indicam risco.",
        ],
        Topic::Oldpeak => &[
            "Box plot dinâmico comparando depressão ST entre pacientes com e sem doença.",
            "Passe o mouse sobre os pontos para ver valores individuais; use zoom para detalhes.",
            "Animação por sexo (se disponível) destaca diferenças de gênero.",
            "Insight: Mediana ou outliers mais altos em 'Com Doença' indicam impacto do exercício.",
        ],
        Topic::MajorVessels => &[
            "Barras dinâmicas para o número de vasos principais (0 a 3).",
            "Interaja com o gráfico usando zoom, pan ou hover para detalhes.",
            "Animação por sexo (se disponível) mostra variações entre gêneros.",
            "Insight: Mais vasos afetados (2 ou 3) com doença sugerem maior gravidade.",
        ],
    }
}

pub const SUMMARY: &[&str] = &[
    "Açúcar elevado no sangue pode ser um fator de risco (explore com hover e filtros).",
    "ECG anormal (ST-T ou hipertrofia) está ligado a maior prevalência de doença.",
    "Oldpeak mais alto em pacientes com doença reflete impacto do exercício (veja outliers).",
    "Mais vasos afetados indicam gravidade (use animação por sexo para padrões).",
    "Dica: Experimente os filtros e interaja com os gráficos para análises personalizadas!",
];

fn bullet_panel(ui: &mut Ui, fill: Color32, title: &str, lines: &[&str]) {
    egui::Frame::group(ui.style())
        .fill(fill)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).italics().strong());
            for line in lines {
                ui.label(format!("• {line}"));
            }
        });
}

/// Interpretation block shown under a chart.
pub fn info_panel(ui: &mut Ui, topic: Topic) {
    bullet_panel(ui, INFO_FILL, "🧐 Interpretação:", interpretation(topic));
}

/// Closing conclusions block.
pub fn summary_panel(ui: &mut Ui) {
    ui.heading("📊 Conclusões e Insights Dinâmicos");
    bullet_panel(ui, SUCCESS_FILL, "✅ Resumo:", SUMMARY);
}

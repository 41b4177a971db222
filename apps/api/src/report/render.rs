//! Markdown rendering of a finished report, as shown to the traveller.

use chrono::NaiveDate;

use crate::report::display::score_symbols;
use crate::report::extractor::ParsedReport;
use crate::report::requester::RawReport;
use crate::report::sections::SectionKey;

pub const DISCLAIMER: &str = "DISCLAIMER: Este relatório foi gerado por um agente de IA utilizando um modelo Gemini e buscas na web com base em publicações dos últimos 6-12 meses. \
A precisão e completude dependem das informações encontradas pela ferramenta de busca e da capacidade do modelo em interpretá-las e sintetizá-las. \
A pontuação é baseada na interpretação do modelo e das informações encontradas. \
A situação em um destino pode mudar rapidamente. \
Sempre faça sua própria pesquisa adicional, consulte fontes oficiais de viagem e avalie os riscos com base nas suas circunstâncias pessoais antes de viajar.";

/// Sections in the order they are displayed (summary first), with heading and placeholder.
const DISPLAY_ORDER: [(SectionKey, &str, &str); 4] = [
    (
        SectionKey::Summary,
        "Visão geral",
        "Resumo geral não encontrado na resposta.",
    ),
    (
        SectionKey::Justification,
        "Justificativa da nota",
        "Justificativa da nota não encontrada na resposta.",
    ),
    (
        SectionKey::SafetyAlerts,
        "Alertas de Segurança",
        "Alertas de segurança não encontrados na resposta.",
    ),
    (
        SectionKey::LocalTips,
        "Dicas Locais LGBT+",
        "Dicas locais LGBT+ não encontradas na resposta.",
    ),
];

/// Renders the whole report page. Failures render as a single error paragraph.
pub fn render_markdown(
    destination: &str,
    raw: &RawReport,
    parsed: &ParsedReport,
    searched_on: NaiveDate,
) -> String {
    let mut out = format!(
        "### 🔍 O que sabemos sobre {}\n\n*Data da busca: {}*\n\n---\n\n",
        capitalize(destination),
        searched_on.format("%Y-%m-%d")
    );

    let text = raw.text();
    if raw.failure().is_some() || text.trim().is_empty() {
        out.push_str(&format!(
            "**Não foi possível exibir o relatório:** {text}\n"
        ));
        return out;
    }

    out.push_str(&score_line(parsed.score));
    out.push_str("\n\n---\n\n");

    for (key, heading, placeholder) in DISPLAY_ORDER {
        match parsed.section(key) {
            Some(body) => out.push_str(&format!("#### **{heading}**\n\n{body}\n\n---\n\n")),
            None => out.push_str(&format!("*({placeholder})*\n\n")),
        }
    }

    out.push_str("---\n\n");
    out.push_str(&format!("*{DISCLAIMER}*\n"));
    out
}

fn score_line(score: Option<f64>) -> String {
    let symbols = score_symbols(score);
    match score {
        Some(score) => format!("### **Pontuação LGBT+ Friendly: {score:.1}/5 {symbols}**"),
        None => format!("### **Pontuação LGBT+ Friendly: Indisponível {symbols}**"),
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

//! Section Extractor — pulls the score and the four labelled sections out of free model text.
//!
//! Nothing in here fails. Missing or malformed pieces come back as `None` / empty,
//! and the renderer decides how to present the gaps.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::report::sections::{SectionKey, MAX_SCORE, MIN_SCORE};

/// `Pontuação: 3.5/5`, also `pontuacao 3,5 / 5` and `Pontua: 4/5`.
static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Pontua(?:ção|cao)?:?\s*([0-9]+(?:[.,][0-9]*)?)\s*/\s*5").unwrap()
});

/// Start of the next bolded label: `**` plus a word character at the beginning of a line.
static NEXT_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\*\*\w").unwrap());

/// Compiled label patterns for the fixed sections, built once.
static SECTION_PATTERNS: LazyLock<BTreeMap<SectionKey, Regex>> = LazyLock::new(|| {
    SectionKey::ALL
        .into_iter()
        .filter_map(|key| label_pattern(key.label()).map(|re| (key, re)))
        .collect()
});

/// Structured view of a model reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedReport {
    /// Always within `[0.0, 5.0]` when present.
    pub score: Option<f64>,
    /// Only sections that were found with a non-empty body.
    pub sections: BTreeMap<SectionKey, String>,
}

impl ParsedReport {
    pub fn section(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(String::as_str)
    }
}

/// Body of the section introduced by `label`, trimmed; empty if the label is absent.
///
/// The label matches case-insensitively and may be followed by a stray colon.
/// The body runs to the next bolded label or the end of the text.
pub fn extract_section(text: &str, label: &str) -> String {
    match label_pattern(label) {
        Some(label_re) => section_body(text, &label_re),
        None => String::new(),
    }
}

fn label_pattern(label: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}:?", regex::escape(label))).ok()
}

fn section_body(text: &str, label_re: &Regex) -> String {
    let Some(found) = label_re.find(text) else {
        return String::new();
    };

    let rest = &text[found.end()..];
    let body = match NEXT_LABEL.find(rest) {
        Some(next) => &rest[..next.start()],
        None => rest,
    };

    body.trim().to_string()
}

/// The first `Pontuação: X.X/5` value, clamped into `[0.0, 5.0]`.
pub fn parse_score(text: &str) -> Option<f64> {
    let captures = SCORE_PATTERN.captures(text)?;
    score_from_token(captures.get(1)?.as_str())
}

/// `3,5` or `3.5` as a clamped score; `None` if the token is not a number.
fn score_from_token(token: &str) -> Option<f64> {
    let raw = token.replace(',', ".");

    match raw.parse::<f64>() {
        Ok(value) => Some(value.clamp(MIN_SCORE, MAX_SCORE)),
        Err(e) => {
            debug!("Score token '{raw}' matched but did not parse: {e}");
            None
        }
    }
}

/// Score plus every section that has content.
pub fn parse_report(text: &str) -> ParsedReport {
    let sections = SECTION_PATTERNS
        .iter()
        .filter_map(|(key, label_re)| {
            let body = section_body(text, label_re);
            (!body.is_empty()).then_some((*key, body))
        })
        .collect();

    ParsedReport {
        score: parse_score(text),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPORT: &str = "**Pontuação de Segurança LGBT-Friendly:**
Pontuação: 4.5/5

**Justificativa da Nota:**
Casamento igualitário desde 2001 e leis antidiscriminação amplas.

**Resumo Geral da Situação:**
Destino muito seguro.
Cena LGBT+ vibrante.

**Alertas de Segurança:**
- Atenção a furtos em áreas turísticas.

**Dicas Locais LGBT+:**
- Bares na Reguliersdwarsstraat.
";

    #[test]
    fn test_scenario_partial_report() {
        let text = "**Pontuação de Segurança LGBT-Friendly:**\nPontuação: 3.5/5\n\n**Justificativa da Nota:**\nTexto A\n\n**Resumo Geral da Situação:**\nTexto B";

        let parsed = parse_report(text);

        assert_eq!(parsed.score, Some(3.5));
        assert_eq!(parsed.section(SectionKey::Justification), Some("Texto A"));
        assert_eq!(parsed.section(SectionKey::Summary), Some("Texto B"));
        assert_eq!(parsed.section(SectionKey::SafetyAlerts), None);
        assert_eq!(parsed.section(SectionKey::LocalTips), None);
    }

    #[test]
    fn test_scenario_empty_input() {
        assert_eq!(parse_report(""), ParsedReport::default());
    }

    #[test]
    fn test_full_report_parses_every_section() {
        let parsed = parse_report(FULL_REPORT);

        assert_eq!(parsed.score, Some(4.5));
        assert_eq!(parsed.sections.len(), 4);
        assert_eq!(
            parsed.section(SectionKey::Summary),
            Some("Destino muito seguro.\nCena LGBT+ vibrante.")
        );
        assert_eq!(
            parsed.section(SectionKey::LocalTips),
            Some("- Bares na Reguliersdwarsstraat.")
        );
    }

    #[test]
    fn test_error_text_degrades_fully() {
        let parsed = parse_report(
            "ERRO: Não foi possível gerar o relatório para 'Lima' devido a um problema na API Gemini: timeout",
        );
        assert_eq!(parsed, ParsedReport::default());
    }

    #[test]
    fn test_extract_section_returns_body_trimmed() {
        let body = "Primeira linha.\n\n  - item com **negrito** no meio\nÚltima linha.";
        let text = format!("**Alertas de Segurança:**\n\n   {body}  \n\n");

        assert_eq!(extract_section(&text, "**Alertas de Segurança:**"), body);
    }

    #[test]
    fn test_extract_section_is_case_insensitive() {
        let text = "**ALERTAS DE SEGURANÇA:**\nCuidado à noite.";
        assert_eq!(
            extract_section(text, "**Alertas de Segurança:**"),
            "Cuidado à noite."
        );
    }

    #[test]
    fn test_extract_section_missing_label_is_empty() {
        assert_eq!(extract_section(FULL_REPORT, "**Outra Seção:**"), "");
        assert_eq!(extract_section("", "**Resumo Geral da Situação:**"), "");
    }

    #[test]
    fn test_extract_section_tolerates_extra_colon() {
        let text = "**Dicas Locais LGBT+:**: Centro comunitário X.";
        assert_eq!(
            extract_section(text, "**Dicas Locais LGBT+:**"),
            "Centro comunitário X."
        );
    }

    #[test]
    fn test_extract_section_stops_at_immediately_following_label() {
        let text = "**Alertas de Segurança:**\n**Dicas Locais LGBT+:**\nBar Y.";
        assert_eq!(extract_section(text, "**Alertas de Segurança:**"), "");
        assert_eq!(extract_section(text, "**Dicas Locais LGBT+:**"), "Bar Y.");
    }

    #[test]
    fn test_extract_section_uses_first_occurrence() {
        let text = "**Resumo Geral da Situação:**\nPrimeiro.\n**Resumo Geral da Situação:**\nSegundo.";
        assert_eq!(
            extract_section(text, "**Resumo Geral da Situação:**"),
            "Primeiro."
        );
    }

    #[test]
    fn test_parse_score_well_formed() {
        assert_eq!(parse_score("Pontuação: 4.5/5"), Some(4.5));
    }

    #[test]
    fn test_parse_score_variants() {
        assert_eq!(parse_score("pontuacao 3,5 / 5"), Some(3.5));
        assert_eq!(parse_score("PONTUAÇÃO: 2/5"), Some(2.0));
        assert_eq!(parse_score("Pontua: 1/5"), Some(1.0));
    }

    #[test]
    fn test_parse_score_clamps_out_of_range() {
        assert_eq!(parse_score("Pontuação: 7.0/5"), Some(5.0));
        assert_eq!(parse_score("Pontuação: 12/5"), Some(5.0));
    }

    #[test]
    fn test_parse_score_ignores_header_and_missing_pattern() {
        assert_eq!(parse_score("**Pontuação de Segurança LGBT-Friendly:**"), None);
        assert_eq!(parse_score("Nota: 4.5 de 5"), None);
        assert_eq!(parse_score(""), None);
    }

    #[test]
    fn test_parse_score_skips_non_ascii_digits() {
        assert_eq!(
            parse_score("Pontuação ٣/5 (rascunho)\nPontuação: 4.5/5"),
            Some(4.5)
        );
        assert_eq!(parse_score("Pontuação: ٤/5"), None);
    }

    #[test]
    fn test_score_token_that_does_not_parse_is_absent() {
        assert_eq!(score_from_token("٤"), None);
        assert_eq!(score_from_token("4.5.1"), None);
        assert_eq!(score_from_token("3,5"), Some(3.5));
        assert_eq!(score_from_token("9"), Some(5.0));
    }

    #[test]
    fn test_every_section_label_has_a_cached_pattern() {
        assert_eq!(SECTION_PATTERNS.len(), SectionKey::ALL.len());
        for key in SectionKey::ALL {
            assert_eq!(
                section_body(FULL_REPORT, &SECTION_PATTERNS[&key]),
                extract_section(FULL_REPORT, key.label())
            );
        }
    }

    #[test]
    fn test_parsed_report_serializes_sections_by_key() {
        let json = serde_json::to_value(parse_report(FULL_REPORT)).unwrap();
        assert_eq!(json["score"], 4.5);
        assert!(json["sections"]["safety_alerts"]
            .as_str()
            .unwrap()
            .contains("furtos"));
    }
}

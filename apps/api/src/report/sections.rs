//! Section labels — the exact bolded headings the model is told to emit and the parser looks for.
//!
//! This table is the contract between `prompts.rs` and `extractor.rs`.
//! Change a label here and both sides follow.

use serde::{Deserialize, Serialize};

/// Heading of the score section. Not a `SectionKey`: its body is parsed by `parse_score`.
pub const SCORE_LABEL: &str = "**Pontuação de Segurança LGBT-Friendly:**";

/// Literal score line the model writes beneath `SCORE_LABEL`.
pub const SCORE_LINE_FORMAT: &str = "Pontuação: X.X/5";

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;

/// Free-text sections of a report, in the order the model writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Justification,
    Summary,
    SafetyAlerts,
    LocalTips,
}

const LABELS: [(SectionKey, &str); 4] = [
    (SectionKey::Justification, "**Justificativa da Nota:**"),
    (SectionKey::Summary, "**Resumo Geral da Situação:**"),
    (SectionKey::SafetyAlerts, "**Alertas de Segurança:**"),
    (SectionKey::LocalTips, "**Dicas Locais LGBT+:**"),
];

impl SectionKey {
    /// Source order: the order the prompt asks for.
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Justification,
        SectionKey::Summary,
        SectionKey::SafetyAlerts,
        SectionKey::LocalTips,
    ];

    /// Exact bolded label, including the `**` markers and trailing colon.
    pub fn label(self) -> &'static str {
        LABELS
            .iter()
            .find(|(key, _)| *key == self)
            .map(|(_, label)| *label)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_bold_label() {
        for key in SectionKey::ALL {
            let label = key.label();
            assert!(label.starts_with("**"), "{label}");
            assert!(label.ends_with(":**"), "{label}");
        }
    }

    #[test]
    fn test_section_key_serializes_snake_case() {
        let json = serde_json::to_string(&SectionKey::SafetyAlerts).unwrap();
        assert_eq!(json, r#""safety_alerts""#);
    }
}

//! Gender agreement — decides which grammatical register the report is written in.

use serde::Serialize;

use crate::report::prompts::{FEMININE_INSTRUCTION, MASCULINE_INSTRUCTION, NEUTRAL_INSTRUCTION};

/// Choices offered by the gender selector. Free text is accepted as well.
pub const GENDER_OPTIONS: [&str; 6] = [
    "Homem",
    "Mulher",
    "Não-binário",
    "Agênero",
    "Gênero fluido",
    "Transgênero",
];

const MASCULINE_IDENTITIES: &[&str] = &["homem", "masculino", "man", "male"];
const FEMININE_IDENTITIES: &[&str] = &["mulher", "feminino", "woman", "female"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalGender {
    Masculine,
    Feminine,
    Neutral,
}

impl GrammaticalGender {
    /// Three-way rule: only an exact "man" or "woman" identity gets gendered agreement.
    /// Anything else (including ambiguous, plural or unknown input) is neutral.
    pub fn classify(gender_identity: &str) -> Self {
        let normalized = gender_identity.trim().to_lowercase();

        if MASCULINE_IDENTITIES.contains(&normalized.as_str()) {
            GrammaticalGender::Masculine
        } else if FEMININE_IDENTITIES.contains(&normalized.as_str()) {
            GrammaticalGender::Feminine
        } else {
            GrammaticalGender::Neutral
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            GrammaticalGender::Masculine => MASCULINE_INSTRUCTION,
            GrammaticalGender::Feminine => FEMININE_INSTRUCTION,
            GrammaticalGender::Neutral => NEUTRAL_INSTRUCTION,
        }
    }
}

//! Score display — rounds a score to half units and turns it into rainbow symbols.
//!
//! Rounding is round-half-up on `score * 2` (`f64::round` rounds half away from zero,
//! which is half-up for the non-negative scores produced by the extractor).
//! So 3.25 shows as 3.5 and 3.75 as 4.0.

use serde::Serialize;

pub const WHOLE_UNIT_SYMBOL: &str = "🌈";
pub const HALF_UNIT_SYMBOL: &str = "½";
pub const UNAVAILABLE_SYMBOL: &str = "🚫";

const HALF_UNIT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayScore {
    pub rounded_to_half_unit: f64,
    pub whole_unit_count: u32,
    pub has_half_unit: bool,
}

impl DisplayScore {
    pub fn from_score(score: f64) -> Self {
        let rounded = (score * 2.0).round() / 2.0;
        let whole = rounded.floor();

        Self {
            rounded_to_half_unit: rounded,
            whole_unit_count: whole.max(0.0) as u32,
            has_half_unit: (rounded - whole - 0.5).abs() < HALF_UNIT_TOLERANCE,
        }
    }

    /// `🌈` per whole unit plus `½`; a score that rounds to nothing shows `🚫`.
    pub fn symbols(&self) -> String {
        if self.whole_unit_count == 0 && !self.has_half_unit {
            return UNAVAILABLE_SYMBOL.to_string();
        }

        let mut symbols = WHOLE_UNIT_SYMBOL.repeat(self.whole_unit_count as usize);
        if self.has_half_unit {
            symbols.push_str(HALF_UNIT_SYMBOL);
        }
        symbols
    }
}

/// Symbols for an optional score; an absent score is never shown as zero units.
pub fn score_symbols(score: Option<f64>) -> String {
    match score {
        Some(score) => DisplayScore::from_score(score).symbols(),
        None => UNAVAILABLE_SYMBOL.to_string(),
    }
}

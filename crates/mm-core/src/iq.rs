//! Score-to-IQ band lookup for the IQ/General category.
//!
//! Only meaningful for a ten-question session: each score 0-10 maps to a
//! fixed band and label. Anything else falls back to "Invalid Score".

use serde::Serialize;

/// An IQ range with its qualitative label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IqBand {
    /// Lower bound of the range.
    pub min: u32,
    /// Upper bound of the range.
    pub max: u32,
    /// Qualitative description.
    pub label: &'static str,
}

impl IqBand {
    const fn new(min: u32, max: u32, label: &'static str) -> Self {
        Self { min, max, label }
    }

    /// Whether this is the fallback for an unmappable score.
    pub fn is_invalid(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

impl std::fmt::Display for IqBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.min, self.max, self.label)
    }
}

/// Bands indexed by score.
const BANDS: [IqBand; 11] = [
    IqBand::new(40, 50, "Severe Intellectual Disability"),
    IqBand::new(50, 60, "Moderate Intellectual Disability"),
    IqBand::new(60, 70, "Mild Intellectual Disability"),
    IqBand::new(70, 80, "Borderline Intelligence"),
    IqBand::new(80, 90, "Below Average Intelligence"),
    IqBand::new(90, 100, "Low Average Intelligence"),
    IqBand::new(100, 110, "Average Intelligence"),
    IqBand::new(110, 120, "High Average Intelligence"),
    IqBand::new(120, 130, "Superior Intelligence"),
    IqBand::new(130, 140, "Very Superior Intelligence"),
    IqBand::new(140, 160, "Exceptional Genius"),
];

const INVALID: IqBand = IqBand::new(0, 0, "Invalid Score");

/// Look up the IQ band for a score out of ten.
pub fn iq_band(score: u32) -> IqBand {
    usize::try_from(score)
        .ok()
        .and_then(|i| BANDS.get(i))
        .copied()
        .unwrap_or(INVALID)
}

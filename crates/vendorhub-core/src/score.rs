//! Match score classification.

/// Color tier of a supplier's match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// `score >= 80`
    High,
    /// `70 <= score < 80`
    Mid,
    /// Everything else, including NaN and missing scores.
    Low,
}

impl ScoreTier {
    pub const HIGH_THRESHOLD: f64 = 80.0;
    pub const MID_THRESHOLD: f64 = 70.0;

    /// Classifies a score. Out-of-range values are not rejected: `150` is
    /// still `High` and `-5` is `Low`.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ScoreTier::High
        } else if score >= Self::MID_THRESHOLD {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    /// A record without a numeric score fails both comparisons and lands in `Low`.
    #[must_use]
    pub fn for_score(score: Option<f64>) -> Self {
        score.map_or(ScoreTier::Low, Self::classify)
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::High => write!(f, "high"),
            ScoreTier::Mid => write!(f, "mid"),
            ScoreTier::Low => write!(f, "low"),
        }
    }
}

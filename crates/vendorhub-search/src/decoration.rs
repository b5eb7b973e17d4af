//! Decorative card rating.
//!
//! Cards show a rating between 4.3 and 4.7 that has nothing to do with the
//! supplier record. A fresh value is drawn on every render and never stored.

use rand::Rng;

/// A rating of `4.<tenth>` out of 5.0, where `tenth` is 3 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    tenth: u8,
}

impl Rating {
    pub const MIN_TENTH: u8 = 3;
    pub const MAX_TENTH: u8 = 7;

    /// Returns `None` when `tenth` is outside `3..=7`.
    #[must_use]
    pub fn from_tenth(tenth: u8) -> Option<Self> {
        (Self::MIN_TENTH..=Self::MAX_TENTH)
            .contains(&tenth)
            .then_some(Self { tenth })
    }

    #[must_use]
    pub fn value(self) -> f64 {
        4.0 + f64::from(self.tenth) / 10.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "4.{}/5.0", self.tenth)
    }
}

/// Produces one rating per rendered card.
pub trait RatingSource {
    fn next_rating(&mut self) -> Rating;
}

impl<F> RatingSource for F
where
    F: FnMut() -> Rating,
{
    fn next_rating(&mut self) -> Rating {
        self()
    }
}

/// Unseeded ratings from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRatings;

impl RatingSource for RandomRatings {
    fn next_rating(&mut self) -> Rating {
        let tenth = rand::rng().random_range(Rating::MIN_TENTH..=Rating::MAX_TENTH);
        Rating { tenth }
    }
}

/// Always returns the same rating.
#[derive(Debug, Clone, Copy)]
pub struct FixedRating(pub Rating);

impl RatingSource for FixedRating {
    fn next_rating(&mut self) -> Rating {
        self.0
    }
}

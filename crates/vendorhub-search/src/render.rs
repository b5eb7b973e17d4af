//! Result rendering.
//!
//! [`render`] is a pure function of the search state plus a rating source.
//! It decides what the results area shows; drawing it is left to the
//! consuming surface.

use vendorhub_core::{ScoreTier, SupplierMatch};

use crate::controller::SearchState;
use crate::decoration::{Rating, RatingSource};

pub const LOADING_MESSAGE: &str = "Finding the best suppliers for you...";
pub const RESULTS_SUBHEADER: &str = "Sorted by relevance and rating";
pub const CARD_BADGES: [&str; 3] = ["ISO Certified", "Fast Response", "Quality Assured"];
pub const CARD_ACTIONS: [&str; 2] = ["Contact Supplier", "View Details"];

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// No search has completed yet.
    Hidden,
    Loading,
    Results(ResultsPanel),
}

impl ResultsView {
    /// The dashboard sidebar accompanies the results area whenever it is visible.
    #[must_use]
    pub fn shows_dashboard(&self) -> bool {
        !matches!(self, ResultsView::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPanel {
    pub header: String,
    pub cards: Vec<SupplierCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierCard {
    pub name: Option<String>,
    pub location: Option<String>,
    pub score: Option<f64>,
    pub tier: ScoreTier,
    /// `None` when the record has no numeric score.
    pub gauge: Option<Gauge>,
    pub rating: Rating,
}

/// Filled share of the score ring. Values are not clamped: a score of 150
/// yields a proportion of 1.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub proportion: f64,
    pub arc_degrees: f64,
}

impl Gauge {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self {
            proportion: score / 100.0,
            arc_degrees: score * 3.6,
        }
    }
}

impl SupplierCard {
    fn from_match(record: &SupplierMatch, rating: Rating) -> Self {
        Self {
            name: record.name.clone(),
            location: record.location.clone(),
            score: record.score,
            tier: ScoreTier::for_score(record.score),
            gauge: record.score.map(Gauge::from_score),
            rating,
        }
    }
}

/// Builds the results view.
///
/// The header quotes the product field as it is now, which may differ from
/// the value that was submitted if the field was edited afterwards.
pub fn render<R>(state: &SearchState, ratings: &mut R) -> ResultsView
where
    R: RatingSource + ?Sized,
{
    if state.busy {
        return ResultsView::Loading;
    }
    if !state.searched {
        return ResultsView::Hidden;
    }

    let header = format!(
        "Found {} suppliers for \"{}\"",
        state.results.len(),
        state.form.product
    );
    let cards = state
        .results
        .iter()
        .map(|record| SupplierCard::from_match(record, ratings.next_rating()))
        .collect();

    ResultsView::Results(ResultsPanel { header, cards })
}

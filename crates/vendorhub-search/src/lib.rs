//! Search form state, submission lifecycle and result rendering.
//!
//! [`SearchController`] owns the form and result state and drives the single
//! request to the matching service. [`render`] turns that state into a
//! [`ResultsView`]; it takes a [`RatingSource`] so the decorative card
//! rating can be stubbed.

pub mod controller;
pub mod dashboard;
pub mod decoration;
pub mod render;

pub use controller::{PendingSearch, SearchController, SearchPhase, SearchState, Submission};
pub use dashboard::{ActivityEntry, Dashboard};
pub use decoration::{FixedRating, RandomRatings, Rating, RatingSource};
pub use render::{render, Gauge, ResultsPanel, ResultsView, SupplierCard};

//! Form state holder and submission lifecycle.
//!
//! The controller is the only owner of [`SearchState`]. A submission is split
//! into [`SearchController::begin_search`] (validate, mark busy, snapshot the
//! form) and [`SearchController::settle`] (store the outcome, clear busy);
//! [`SearchController::submit`] runs both around one call to the matching
//! service.
//!
//! Overlapping submissions are not rejected here. Each settlement clears
//! `busy` and the last one to settle decides the stored results. Callers
//! that drive a user-facing trigger must consult
//! [`SearchController::can_trigger`] first.

use vendorhub_core::{Field, SearchRequest, SupplierMatch};
use vendorhub_matching::{MatchingClient, MatchingError};

/// Everything the result renderer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub form: SearchRequest,
    pub results: Vec<SupplierMatch>,
    pub busy: bool,
    /// Set by the first successful search and never cleared.
    pub searched: bool,
    /// Display form of the most recent failure. Cleared on success.
    pub last_error: Option<String>,
}

impl SearchState {
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.busy {
            SearchPhase::Searching
        } else if self.searched {
            SearchPhase::IdleWithResults
        } else {
            SearchPhase::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    IdleWithResults,
}

/// A submission that has been started but not settled.
#[derive(Debug)]
pub struct PendingSearch {
    ticket: u64,
    request: SearchRequest,
}

impl PendingSearch {
    /// Monotonic submission number, used to correlate log lines.
    #[must_use]
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Field values captured when the submission started.
    #[must_use]
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

/// What a call to [`SearchController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A field was empty; nothing changed and no request was sent.
    Skipped,
    Succeeded { count: usize },
    /// The failure was logged and recorded in `last_error`.
    Failed,
}

pub struct SearchController {
    client: MatchingClient,
    state: SearchState,
    next_ticket: u64,
}

impl SearchController {
    #[must_use]
    pub fn new(client: MatchingClient) -> Self {
        Self {
            client,
            state: SearchState::default(),
            next_ticket: 1,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn client(&self) -> &MatchingClient {
        &self.client
    }

    /// Sets a field verbatim. No trimming, no validation.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.form.set(field, value);
    }

    /// Whether a search trigger should be enabled: not busy and every field filled.
    #[must_use]
    pub fn can_trigger(&self) -> bool {
        !self.state.busy && self.state.form.is_complete()
    }

    #[must_use]
    pub fn trigger_label(&self) -> &'static str {
        if self.state.busy {
            "Finding Suppliers..."
        } else {
            "Find Suppliers"
        }
    }

    /// Starts a submission from the current field values.
    ///
    /// Returns `None` and leaves the state untouched if any field is empty.
    /// Does not check `busy`.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        if !self.state.form.is_complete() {
            tracing::debug!(
                missing = ?self.state.form.missing_fields(),
                "search skipped: form incomplete"
            );
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.state.busy = true;
        tracing::info!(ticket, product = %self.state.form.product, "search started");

        Some(PendingSearch {
            ticket,
            request: self.state.form.clone(),
        })
    }

    /// Applies the outcome of a started submission and clears `busy`.
    ///
    /// On failure the prior results and `searched` flag are kept.
    pub fn settle(
        &mut self,
        pending: PendingSearch,
        outcome: Result<Vec<SupplierMatch>, MatchingError>,
    ) -> Submission {
        let submission = match outcome {
            Ok(results) => {
                let count = results.len();
                tracing::info!(ticket = pending.ticket, count, "search completed");
                self.state.results = results;
                self.state.searched = true;
                self.state.last_error = None;
                Submission::Succeeded { count }
            }
            Err(err) => {
                tracing::error!(
                    ticket = pending.ticket,
                    status_failure = err.is_status_failure(),
                    error = %err,
                    "supplier search failed"
                );
                self.state.last_error = Some(err.to_string());
                Submission::Failed
            }
        };
        self.state.busy = false;
        submission
    }

    /// Validates the form, sends one request and stores its outcome.
    ///
    /// Never returns an error: failures are logged and reported as
    /// [`Submission::Failed`].
    pub async fn submit(&mut self) -> Submission {
        let Some(pending) = self.begin_search() else {
            return Submission::Skipped;
        };
        let outcome = self.client.find_suppliers(&pending.request).await;
        self.settle(pending, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_controller() -> SearchController {
        let client = MatchingClient::new("http://127.0.0.1:1/vendor-agent", "vendorhub-test/0.1", None)
            .expect("client construction should not fail");
        SearchController::new(client)
    }

    fn fill(controller: &mut SearchController, product: &str, quantity: &str, location: &str) {
        controller.update_field(Field::Product, product);
        controller.update_field(Field::Quantity, quantity);
        controller.update_field(Field::Location, location);
    }

    fn status_error() -> MatchingError {
        MatchingError::UnexpectedStatus {
            status: 500,
            url: "http://127.0.0.1:1/vendor-agent".to_string(),
        }
    }

    #[test]
    fn initial_state_is_idle() {
        let controller = offline_controller();
        assert_eq!(controller.state(), &SearchState::default());
        assert_eq!(controller.state().phase(), SearchPhase::Idle);
        assert!(!controller.can_trigger());
        assert_eq!(controller.trigger_label(), "Find Suppliers");
    }

    #[test]
    fn begin_search_with_empty_field_changes_nothing() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "", "USA");
        let before = controller.state().clone();

        assert!(controller.begin_search().is_none());
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn busy_is_set_between_begin_and_settle() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");

        let pending = controller.begin_search().expect("form is complete");
        assert!(controller.state().busy);
        assert_eq!(controller.state().phase(), SearchPhase::Searching);
        assert!(!controller.can_trigger());
        assert_eq!(controller.trigger_label(), "Finding Suppliers...");

        controller.settle(pending, Ok(vec![]));
        assert!(!controller.state().busy);
        assert_eq!(controller.state().phase(), SearchPhase::IdleWithResults);
    }

    #[test]
    fn begin_search_snapshots_current_field_values() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");
        controller.update_field(Field::Quantity, "750");

        let pending = controller.begin_search().unwrap();
        assert_eq!(pending.request(), &SearchRequest::new("bolts", "750", "USA"));
    }

    #[test]
    fn empty_success_is_distinct_from_never_searched() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");
        let pending = controller.begin_search().unwrap();

        assert_eq!(
            controller.settle(pending, Ok(vec![])),
            Submission::Succeeded { count: 0 }
        );
        assert!(controller.state().searched);
        assert!(controller.state().results.is_empty());
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");
        let prior = vec![SupplierMatch::new("Acme", "USA", 85.0)];

        let first = controller.begin_search().unwrap();
        controller.settle(first, Ok(prior.clone()));

        let second = controller.begin_search().unwrap();
        assert_eq!(controller.settle(second, Err(status_error())), Submission::Failed);

        assert_eq!(controller.state().results, prior);
        assert!(controller.state().searched);
        assert!(!controller.state().busy);
        assert!(controller.state().last_error.is_some());
    }

    #[test]
    fn failure_before_any_success_does_not_mark_searched() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");
        let pending = controller.begin_search().unwrap();

        controller.settle(pending, Err(status_error()));

        assert!(!controller.state().searched);
        assert!(controller.state().results.is_empty());
        assert_eq!(controller.state().phase(), SearchPhase::Idle);
    }

    #[test]
    fn success_clears_last_error() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");
        let failed = controller.begin_search().unwrap();
        controller.settle(failed, Err(status_error()));

        let ok = controller.begin_search().unwrap();
        controller.settle(ok, Ok(vec![]));
        assert_eq!(controller.state().last_error, None);
    }

    #[test]
    fn overlapping_searches_last_settlement_wins() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");

        let first = controller.begin_search().unwrap();
        let second = controller.begin_search().expect("holder does not guard reentry");
        assert!(second.ticket() > first.ticket());

        controller.settle(second, Ok(vec![SupplierMatch::new("Second", "EU", 71.0)]));
        controller.settle(first, Ok(vec![SupplierMatch::new("First", "US", 90.0)]));

        assert_eq!(controller.state().results[0].name.as_deref(), Some("First"));
        assert!(!controller.state().busy);
    }

    #[tokio::test]
    async fn submit_swallows_transport_exception() {
        let mut controller = offline_controller();
        fill(&mut controller, "bolts", "500", "USA");

        assert_eq!(controller.submit().await, Submission::Failed);
        assert!(!controller.state().busy);
        assert!(!controller.state().searched);
        assert!(controller
            .state()
            .last_error
            .as_deref()
            .is_some_and(|e| e.starts_with("HTTP error")));
    }

    #[tokio::test]
    async fn submit_with_empty_field_is_skipped() {
        let mut controller = offline_controller();
        fill(&mut controller, "", "500", "USA");
        assert_eq!(controller.submit().await, Submission::Skipped);
        assert_eq!(controller.state().last_error, None);
    }
}

//! Plain-text drawing of result views and the dashboard.

use std::fmt::Write as _;

use vendorhub_core::Field;
use vendorhub_search::render::{CARD_ACTIONS, CARD_BADGES, LOADING_MESSAGE, RESULTS_SUBHEADER};
use vendorhub_search::{Dashboard, Gauge, ResultsView, SearchController, SupplierCard};

pub(crate) const GAUGE_WIDTH: usize = 20;

/// Draws the results area followed by the dashboard when it is visible.
pub(crate) fn format_screen(view: &ResultsView, dashboard: &Dashboard) -> String {
    let mut out = format_results(view);
    if view.shows_dashboard() {
        out.push('\n');
        out.push_str(&format_dashboard(dashboard));
    }
    out
}

pub(crate) fn format_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Hidden => String::new(),
        ResultsView::Loading => format!("{LOADING_MESSAGE}\n"),
        ResultsView::Results(panel) => {
            let mut out = format!("{}\n{RESULTS_SUBHEADER}\n", panel.header);
            for card in &panel.cards {
                out.push('\n');
                out.push_str(&format_card(card));
            }
            out
        }
    }
}

pub(crate) fn format_card(card: &SupplierCard) -> String {
    let mut out = String::new();
    let score = card.score.map_or_else(|| "-".to_string(), |s| s.to_string());

    let _ = writeln!(out, "{}  [Verified]", card.name.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "  Location: {}   Rating: {}",
        card.location.as_deref().unwrap_or("-"),
        card.rating
    );
    let _ = writeln!(out, "  {}", CARD_BADGES.join(" | "));
    let _ = writeln!(
        out,
        "  Match Score: {score} ({}) {}",
        card.tier,
        gauge_bar(card.gauge, GAUGE_WIDTH)
    );
    let _ = writeln!(out, "  {}", CARD_ACTIONS.join(" | "));
    out
}

/// Draws a gauge as a bar of `width` cells.
///
/// The filled cell count is clamped to `0..=width` here; the gauge itself
/// carries the unclamped proportion.
pub(crate) fn gauge_bar(gauge: Option<Gauge>, width: usize) -> String {
    let filled = gauge.map_or(0, |g| filled_cells(g.proportion, width));
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn filled_cells(proportion: f64, width: usize) -> usize {
    if proportion.is_nan() {
        return 0;
    }
    let cells = (proportion * width as f64).round();
    cells.clamp(0.0, width as f64) as usize
}

pub(crate) fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::from("Procurement Dashboard\n");
    let _ = writeln!(out, "  Active RFQs      {}", dashboard.active_rfqs);
    let _ = writeln!(out, "  Open Orders      {}", dashboard.open_orders);
    let _ = writeln!(out, "  Supplier Rating  {:.1}", dashboard.supplier_rating);
    let _ = writeln!(out, "  [{}]", dashboard.action);
    out.push_str("Recent Activity\n");
    for entry in &dashboard.recent_activity {
        let _ = writeln!(out, "  - {} ({})", entry.title, entry.counterparty);
    }
    out
}

/// Explains why the search trigger is disabled, or `None` when it is enabled.
pub(crate) fn trigger_notice(controller: &SearchController) -> Option<String> {
    if controller.can_trigger() {
        return None;
    }
    let state = controller.state();
    if state.busy {
        return Some(format!("{} (search already running)", controller.trigger_label()));
    }
    let missing: Vec<&str> = state
        .form
        .missing_fields()
        .into_iter()
        .map(Field::name)
        .collect();
    Some(format!(
        "{} is disabled: fill in {}",
        controller.trigger_label(),
        missing.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use vendorhub_core::{ScoreTier, SupplierMatch};
    use vendorhub_search::{Rating, ResultsPanel};

    use super::*;

    fn card(score: Option<f64>) -> SupplierCard {
        SupplierCard {
            name: Some("Acme".to_string()),
            location: Some("USA".to_string()),
            score,
            tier: ScoreTier::for_score(score),
            gauge: score.map(Gauge::from_score),
            rating: Rating::from_tenth(6).unwrap(),
        }
    }

    #[test]
    fn gauge_bar_fills_proportionally() {
        assert_eq!(gauge_bar(Some(Gauge::from_score(50.0)), 10), "[#####.....]");
        assert_eq!(gauge_bar(Some(Gauge::from_score(0.0)), 4), "[....]");
    }

    #[test]
    fn gauge_bar_clamps_out_of_range_scores() {
        assert_eq!(gauge_bar(Some(Gauge::from_score(150.0)), 4), "[####]");
        assert_eq!(gauge_bar(Some(Gauge::from_score(-20.0)), 4), "[....]");
        assert_eq!(gauge_bar(Some(Gauge::from_score(f64::NAN)), 4), "[....]");
    }

    #[test]
    fn gauge_bar_without_score_is_empty() {
        assert_eq!(gauge_bar(None, 3), "[...]");
    }

    #[test]
    fn card_shows_score_verbatim_with_tier() {
        let text = format_card(&card(Some(85.0)));
        assert!(text.starts_with("Acme  [Verified]\n"), "{text}");
        assert!(text.contains("Rating: 4.6/5.0"), "{text}");
        assert!(text.contains("Match Score: 85 (high)"), "{text}");
        assert!(text.contains("ISO Certified | Fast Response | Quality Assured"));
        assert!(text.contains("Contact Supplier | View Details"));
    }

    #[test]
    fn card_marks_absent_fields() {
        let mut c = card(None);
        c.name = None;
        let text = format_card(&c);
        assert!(text.starts_with("-  [Verified]"), "{text}");
        assert!(text.contains("Match Score: - (low)"), "{text}");
    }

    #[test]
    fn hidden_view_draws_nothing_and_no_dashboard() {
        let text = format_screen(&ResultsView::Hidden, &Dashboard::demo());
        assert!(text.is_empty());
    }

    #[test]
    fn loading_view_includes_dashboard() {
        let text = format_screen(&ResultsView::Loading, &Dashboard::demo());
        assert!(text.starts_with(LOADING_MESSAGE));
        assert!(text.contains("Procurement Dashboard"));
        assert!(text.contains("Active RFQs      12"));
        assert!(text.contains("Supplier Rating  4.8"));
    }

    #[test]
    fn results_view_lists_header_then_cards() {
        let views = ResultsView::Results(ResultsPanel {
            header: "Found 1 suppliers for \"bolts\"".to_string(),
            cards: vec![card(SupplierMatch::new("Acme", "USA", 72.0).score)],
        });
        let text = format_results(&views);
        assert!(text.starts_with("Found 1 suppliers for \"bolts\"\nSorted by relevance and rating\n"));
        assert!(text.contains("Match Score: 72 (mid)"), "{text}");
    }

    #[test]
    fn dashboard_lists_recent_activity() {
        let text = format_dashboard(&Dashboard::demo());
        assert!(text.contains("  - Order shipped (Global TextFabrics)"));
        assert!(text.contains("  [Live Demo]"));
    }
}

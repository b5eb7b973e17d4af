//! Static procurement dashboard shown beside the results.

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub title: &'static str,
    pub counterparty: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub active_rfqs: u32,
    pub open_orders: u32,
    pub supplier_rating: f64,
    pub action: &'static str,
    pub recent_activity: Vec<ActivityEntry>,
}

impl Dashboard {
    /// The demo figures. Nothing here is derived from search results.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            active_rfqs: 12,
            open_orders: 26,
            supplier_rating: 4.8,
            action: "Live Demo",
            recent_activity: vec![
                ActivityEntry {
                    title: "New quote received",
                    counterparty: "ElectroTech Components",
                },
                ActivityEntry {
                    title: "Order shipped",
                    counterparty: "Global TextFabrics",
                },
                ActivityEntry {
                    title: "New AI match",
                    counterparty: "PrecisionTools Co.",
                },
            ],
        }
    }
}

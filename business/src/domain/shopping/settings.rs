use serde::{Deserialize, Serialize};

/// Bucket for eaters without a cooking group assignment.
pub const OTHER_GROUP: &str = "Andere";
/// Bucket collecting all anonymous guest portions.
pub const GUEST_GROUP: &str = "Gäste";

/// Tunables of the demand computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Count guests at 1.0 each in the event-wide and per-day totals.
    pub include_guests_in_totals: bool,
    /// Section title for lines without a category.
    pub uncategorized_label: String,
    /// Section title for lines already marked as purchased.
    pub purchased_label: String,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            include_guests_in_totals: true,
            uncategorized_label: "Sonstiges".to_string(),
            purchased_label: "Gekauft".to_string(),
        }
    }
}

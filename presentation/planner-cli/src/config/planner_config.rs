use business::domain::shopping::settings::PlannerSettings;
use tracing::warn;

/// Builds planner settings from environment-style variables.
///
/// Environment variables:
/// - PLANNER_INCLUDE_GUESTS: count guests in event totals (default: true)
/// - PLANNER_UNCATEGORIZED_LABEL: section title for uncategorised items (default: "Sonstiges")
/// - PLANNER_PURCHASED_LABEL: section title for purchased items (default: "Gekauft")
pub fn settings_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> PlannerSettings {
    let defaults = PlannerSettings::default();

    let include_guests_in_totals = match lookup("PLANNER_INCLUDE_GUESTS") {
        Some(value) => parse_flag(&value).unwrap_or_else(|| {
            warn!(
                "Ignoring PLANNER_INCLUDE_GUESTS={}, expected true or false",
                value
            );
            defaults.include_guests_in_totals
        }),
        None => defaults.include_guests_in_totals,
    };

    PlannerSettings {
        include_guests_in_totals,
        uncategorized_label: non_empty(lookup("PLANNER_UNCATEGORIZED_LABEL"))
            .unwrap_or(defaults.uncategorized_label),
        purchased_label: non_empty(lookup("PLANNER_PURCHASED_LABEL"))
            .unwrap_or(defaults.purchased_label),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

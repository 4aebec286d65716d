use super::value_objects::Unit;

const PROMOTION_THRESHOLD: f64 = 1000.0;

/// Human-readable amount for display, e.g. `1.5 kg` or `3 cloves`.
///
/// Stored amounts are never touched; this only builds a label.
pub fn format_amount(amount: f64, unit: &Unit) -> String {
    let (value, unit) = promote(amount, unit);
    let number = format_number(value);

    let label = match unit.plural() {
        Some(plural) if round_one_decimal(value) != 1.0 => plural.to_string(),
        _ => unit.to_string(),
    };

    format!("{} {}", number, label)
}

/// Rounds to at most one decimal and drops the decimal for whole numbers.
pub fn format_number(value: f64) -> String {
    let rounded = round_one_decimal(value);
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn promote(amount: f64, unit: &Unit) -> (f64, Unit) {
    let shown = round_one_decimal(amount);
    match unit {
        Unit::Gram if shown >= PROMOTION_THRESHOLD => (amount / 1000.0, Unit::Kilogram),
        Unit::Milliliter if shown >= PROMOTION_THRESHOLD => (amount / 1000.0, Unit::Liter),
        other => (amount, other.clone()),
    }
}

use crate::domain::logger::Logger;
use crate::domain::shopping::model::DemandLine;

/// Result of normalising one demand line to a metric unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Amount and unit were rewritten to grams or milliliters.
    Converted(DemandLine),
    /// Already metric, or a unit that has no metric equivalent (pieces, cans).
    Unchanged(DemandLine),
    /// A kitchen measure the ingredient carries no factor for.
    MissingFactor(DemandLine),
}

impl ConversionOutcome {
    pub fn into_line(self) -> DemandLine {
        match self {
            ConversionOutcome::Converted(line)
            | ConversionOutcome::Unchanged(line)
            | ConversionOutcome::MissingFactor(line) => line,
        }
    }
}

/// Converts a line into grams or milliliters.
///
/// Kilograms and liters use fixed factors. Kitchen measures (cup, tablespoon,
/// teaspoon, pinch) and any other unit listed in the ingredient's conversion
/// table use the ingredient's own factor.
pub fn to_metric(line: DemandLine) -> ConversionOutcome {
    if line.unit.is_metric() {
        return ConversionOutcome::Unchanged(line);
    }

    if let Some((base, factor)) = line.unit.metric_base() {
        let mut converted = line;
        converted.amount *= factor;
        converted.unit = base;
        return ConversionOutcome::Converted(converted);
    }

    let conversion = line
        .ingredient()
        .and_then(|ingredient| ingredient.conversion_for(&line.unit))
        .cloned();

    match conversion {
        Some(conversion) => {
            let mut converted = line;
            converted.amount *= conversion.factor;
            converted.unit = conversion.to.clone();
            if let Some((base, factor)) = conversion.to.metric_base() {
                converted.amount *= factor;
                converted.unit = base;
            }
            ConversionOutcome::Converted(converted)
        }
        None if line.unit.is_kitchen_measure() => ConversionOutcome::MissingFactor(line),
        None => ConversionOutcome::Unchanged(line),
    }
}

/// Same as [`to_metric`] but reports unconvertible kitchen measures and
/// always hands back a usable line.
pub fn convert_line(line: DemandLine, logger: &dyn Logger) -> DemandLine {
    match to_metric(line) {
        ConversionOutcome::MissingFactor(line) => {
            logger.warn(&format!(
                "No conversion factor for '{}' in {}, keeping original unit",
                line.name(),
                line.unit
            ));
            line
        }
        outcome => outcome.into_line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::model::{Ingredient, UnitConversion};
    use crate::domain::ingredient::value_objects::Unit;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn rice(conversions: Vec<UnitConversion>) -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: "Rice".to_string(),
            category: "Dry goods".to_string(),
            conversions,
            shelf_life_days: None,
        }
    }

    fn cup_to_grams(factor: f64) -> UnitConversion {
        UnitConversion {
            from: Unit::Cup,
            factor,
            to: Unit::Gram,
        }
    }

    #[test]
    fn should_convert_kitchen_measure_with_ingredient_factor() {
        let line = DemandLine::computed(rice(vec![cup_to_grams(100.0)]), 2.0, Unit::Cup);

        let outcome = to_metric(line);

        let ConversionOutcome::Converted(converted) = outcome else {
            panic!("expected conversion, got {:?}", outcome);
        };
        assert_eq!(converted.amount, 200.0);
        assert_eq!(converted.unit, Unit::Gram);
    }

    #[test]
    fn should_normalise_kilograms_without_ingredient_factor() {
        let line = DemandLine::computed(rice(vec![]), 1.5, Unit::Kilogram);

        let converted = to_metric(line).into_line();

        assert_eq!(converted.amount, 1500.0);
        assert_eq!(converted.unit, Unit::Gram);
    }

    #[test]
    fn should_normalise_factor_target_given_in_liters() {
        let conversion = UnitConversion {
            from: Unit::Cup,
            factor: 0.25,
            to: Unit::Liter,
        };
        let line = DemandLine::computed(rice(vec![conversion]), 2.0, Unit::Cup);

        let converted = to_metric(line).into_line();

        assert_eq!(converted.amount, 500.0);
        assert_eq!(converted.unit, Unit::Milliliter);
    }

    #[test]
    fn should_report_missing_factor_for_kitchen_measure() {
        let line = DemandLine::computed(rice(vec![cup_to_grams(100.0)]), 3.0, Unit::Teaspoon);

        let outcome = to_metric(line);

        let ConversionOutcome::MissingFactor(unchanged) = outcome else {
            panic!("expected missing factor, got {:?}", outcome);
        };
        assert_eq!(unchanged.amount, 3.0);
        assert_eq!(unchanged.unit, Unit::Teaspoon);
    }

    #[test]
    fn should_pass_countable_units_through() {
        let line = DemandLine::computed(rice(vec![]), 4.0, Unit::Piece);

        assert!(matches!(to_metric(line), ConversionOutcome::Unchanged(_)));
    }

    #[test]
    fn should_log_warning_when_factor_missing() {
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        let line = DemandLine::computed(rice(vec![]), 1.0, Unit::Tablespoon);

        let result = convert_line(line, &logger);

        assert_eq!(result.unit, Unit::Tablespoon);
        assert_eq!(result.amount, 1.0);
    }

    #[test]
    fn should_not_log_when_conversion_succeeds() {
        let mut logger = MockLog::new();
        logger.expect_warn().never();
        let line = DemandLine::computed(rice(vec![cup_to_grams(185.0)]), 1.0, Unit::Cup);

        let result = convert_line(line, &logger);

        assert_eq!(result.amount, 185.0);
    }
}

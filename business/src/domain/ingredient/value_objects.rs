use serde::{Deserialize, Serialize};

/// Measure attached to a demand line or a recipe ingredient.
///
/// Parsing never fails: unknown labels are kept verbatim as `Other` so they
/// pass through aggregation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Piece,
    Cup,
    Tablespoon,
    Teaspoon,
    Pinch,
    Clove,
    Bulb,
    Bunch,
    Can,
    Other(String),
}

impl Unit {
    /// Grams and milliliters, the units every convertible line ends in.
    pub fn is_metric(&self) -> bool {
        matches!(self, Unit::Gram | Unit::Milliliter)
    }

    /// Volume measures whose weight depends on the ingredient.
    pub fn is_kitchen_measure(&self) -> bool {
        matches!(
            self,
            Unit::Cup | Unit::Tablespoon | Unit::Teaspoon | Unit::Pinch
        )
    }

    /// Units counted in whole items, pluralised for display.
    pub fn is_countable(&self) -> bool {
        matches!(
            self,
            Unit::Piece | Unit::Clove | Unit::Bulb | Unit::Bunch | Unit::Can
        )
    }

    /// Fixed factor to the metric base unit for units that need no
    /// ingredient-specific data (kilograms and liters).
    pub fn metric_base(&self) -> Option<(Unit, f64)> {
        match self {
            Unit::Kilogram => Some((Unit::Gram, 1000.0)),
            Unit::Liter => Some((Unit::Milliliter, 1000.0)),
            _ => None,
        }
    }

    /// Plural label for countable units, `None` for everything else.
    pub fn plural(&self) -> Option<&'static str> {
        match self {
            Unit::Piece => Some("pieces"),
            Unit::Clove => Some("cloves"),
            Unit::Bulb => Some("bulbs"),
            Unit::Bunch => Some("bunches"),
            Unit::Can => Some("cans"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Gram => write!(f, "g"),
            Unit::Kilogram => write!(f, "kg"),
            Unit::Milliliter => write!(f, "ml"),
            Unit::Liter => write!(f, "l"),
            Unit::Piece => write!(f, "piece"),
            Unit::Cup => write!(f, "cup"),
            Unit::Tablespoon => write!(f, "tbsp"),
            Unit::Teaspoon => write!(f, "tsp"),
            Unit::Pinch => write!(f, "pinch"),
            Unit::Clove => write!(f, "clove"),
            Unit::Bulb => write!(f, "bulb"),
            Unit::Bunch => write!(f, "bunch"),
            Unit::Can => write!(f, "can"),
            Unit::Other(label) => write!(f, "{}", label),
        }
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" | "gramm" => Unit::Gram,
            "kg" | "kilogram" | "kilograms" | "kilogramm" => Unit::Kilogram,
            "ml" | "milliliter" | "milliliters" | "millilitre" => Unit::Milliliter,
            "l" | "liter" | "liters" | "litre" => Unit::Liter,
            "piece" | "pieces" | "pc" | "pcs" | "stk" | "stk." | "stück" => Unit::Piece,
            "cup" | "cups" | "tasse" => Unit::Cup,
            "tbsp" | "tablespoon" | "tablespoons" | "el" => Unit::Tablespoon,
            "tsp" | "teaspoon" | "teaspoons" | "tl" => Unit::Teaspoon,
            "pinch" | "pinches" | "prise" => Unit::Pinch,
            "clove" | "cloves" | "zehe" | "zehen" => Unit::Clove,
            "bulb" | "bulbs" | "knolle" | "knollen" => Unit::Bulb,
            "bunch" | "bunches" | "bund" => Unit::Bunch,
            "can" | "cans" | "dose" | "dosen" => Unit::Can,
            _ => Unit::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Unit::from(s.as_str())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.to_string()
    }
}

impl std::str::FromStr for Unit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Unit::from(s))
    }
}

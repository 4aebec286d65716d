use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::value_objects::Unit;
use crate::domain::shared::value_objects::Resolution;

/// Where a demand line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Computed,
    EnteredByUser,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Computed => write!(f, "computed"),
            Origin::EnteredByUser => write!(f, "entered_by_user"),
        }
    }
}

impl std::str::FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "computed" => Ok(Origin::Computed),
            "entered_by_user" => Ok(Origin::EnteredByUser),
            _ => Err(format!("Invalid demand origin: {}", s)),
        }
    }
}

/// What a demand line asks for: a catalog ingredient or a free-text item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandItem {
    Catalog(Resolution<Ingredient>),
    FreeText(String),
}

/// Identity of a demand line inside one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKey {
    Ingredient(Uuid),
    FreeText(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DemandKey {
    pub item: ItemKey,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandLine {
    pub id: Option<Uuid>,
    pub item: DemandItem,
    pub amount: f64,
    pub unit: Unit,
    pub origin: Origin,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub purchased: bool,
}

impl DemandLine {
    /// A freshly computed line for a catalog ingredient.
    pub fn computed(ingredient: Ingredient, amount: f64, unit: Unit) -> Self {
        Self {
            id: None,
            item: DemandItem::Catalog(Resolution::Resolved(ingredient)),
            amount,
            unit,
            origin: Origin::Computed,
            note: String::new(),
            purchased: false,
        }
    }

    pub fn key(&self) -> DemandKey {
        let item = match &self.item {
            DemandItem::Catalog(Resolution::Resolved(ingredient)) => {
                ItemKey::Ingredient(ingredient.id)
            }
            DemandItem::Catalog(Resolution::Unresolved(id)) => ItemKey::Ingredient(*id),
            DemandItem::FreeText(name) => ItemKey::FreeText(name.trim().to_lowercase()),
        };
        DemandKey {
            item,
            unit: self.unit.clone(),
        }
    }

    pub fn ingredient(&self) -> Option<&Ingredient> {
        match &self.item {
            DemandItem::Catalog(resolution) => resolution.resolved(),
            DemandItem::FreeText(_) => None,
        }
    }

    /// Ingredient name, free-text label, or empty for unresolved references.
    pub fn name(&self) -> &str {
        match &self.item {
            DemandItem::Catalog(Resolution::Resolved(ingredient)) => &ingredient.name,
            DemandItem::Catalog(Resolution::Unresolved(_)) => "",
            DemandItem::FreeText(name) => name,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.ingredient()
            .map(|i| i.category.as_str())
            .filter(|c| !c.trim().is_empty())
    }

    pub fn shelf_life_days(&self) -> Option<u32> {
        self.ingredient().and_then(|i| i.shelf_life_days)
    }

    /// Same line with a different amount, keeping identity and user data.
    pub fn with_amount(&self, amount: f64) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

/// Everything to buy on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPurchaseList {
    pub date: NaiveDate,
    pub lines: Vec<DemandLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDayPurchasePlan {
    pub event_id: Uuid,
    pub days: BTreeMap<NaiveDate, DayPurchaseList>,
}

impl MultiDayPurchasePlan {
    pub fn new(event_id: Uuid) -> Self {
        Self {
            event_id,
            days: BTreeMap::new(),
        }
    }

    pub fn trip_count(&self) -> usize {
        self.days.len()
    }

    pub fn purchase_dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    /// Sum of one ingredient/unit over every purchase date.
    pub fn total_for(&self, key: &DemandKey) -> f64 {
        self.days
            .values()
            .flat_map(|day| day.lines.iter())
            .filter(|line| &line.key() == key)
            .map(|line| line.amount)
            .sum()
    }
}

/// Whether a [`GroupDemand`] belongs to a cooking group or to the guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    CookingGroup,
    Guests,
}

/// Demand of one cooking group (or the guests bucket) on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDemand {
    pub group: String,
    pub kind: GroupKind,
    pub participant_count: usize,
    pub guest_count: u32,
    pub lines: Vec<DemandLine>,
}

use std::collections::BTreeMap;

use crate::domain::ingredient::conversion::convert_line;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::logger::Logger;
use crate::domain::meal::model::{Meal, Recipe, RecipeUse};
use crate::domain::participant::portion::{DEFAULT_MULTIPLIER, PortionTable};
use crate::domain::shared::value_objects::Resolution;

use super::model::{DemandItem, DemandKey, DemandLine, Origin};

/// Running totals of one aggregation pass, one line per ingredient and unit.
pub struct DemandAccumulator<'a> {
    lines: BTreeMap<DemandKey, DemandLine>,
    logger: &'a dyn Logger,
}

impl<'a> DemandAccumulator<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self {
            lines: BTreeMap::new(),
            logger,
        }
    }

    /// Seeds previously saved lines with amount 0 so their note and
    /// purchased flag survive even when no recipe uses them anymore.
    /// Saved lines are converted like recipe lines so both share one key.
    pub fn seed(&mut self, saved: impl IntoIterator<Item = DemandLine>) {
        for line in saved {
            let line = convert_line(line, self.logger).with_amount(0.0);
            self.lines.entry(line.key()).or_insert(line);
        }
    }

    /// Adds `recipe` scaled by `multiplier`. Unresolved ingredients are skipped.
    pub fn add_recipe(&mut self, recipe: &Recipe, multiplier: f64) {
        for recipe_ingredient in &recipe.ingredients {
            let Resolution::Resolved(ingredient) = &recipe_ingredient.ingredient else {
                self.logger.warn(&format!(
                    "Skipping unresolved ingredient {} in recipe '{}'",
                    recipe_ingredient.ingredient_id(),
                    recipe.name
                ));
                continue;
            };

            let line = DemandLine::computed(
                ingredient.clone(),
                recipe_ingredient.amount,
                recipe_ingredient.unit.clone(),
            );
            let mut line = convert_line(line, self.logger);
            line.amount *= multiplier;
            self.add(line);
        }
    }

    /// Merges a line into the totals. An existing entry keeps its id, note,
    /// origin and purchased flag; only the amount grows.
    pub fn add(&mut self, line: DemandLine) {
        match self.lines.get_mut(&line.key()) {
            Some(existing) => {
                existing.amount += line.amount;
                if matches!(existing.item, DemandItem::Catalog(Resolution::Unresolved(_)))
                    && line.ingredient().is_some()
                {
                    existing.item = line.item;
                }
            }
            None => {
                self.lines.insert(line.key(), line);
            }
        }
    }

    /// All lines, sorted by ingredient name.
    pub fn into_lines(self) -> Vec<DemandLine> {
        let mut lines: Vec<DemandLine> = self.lines.into_values().collect();
        lines.sort_by_key(|line| line.name().to_lowercase());
        lines
    }
}

/// Portions eaten for one recipe occurrence.
///
/// An explicit override wins; otherwise the eaters' multipliers are summed,
/// plus 1.0 per guest when `include_guests` is set.
pub fn portions_for(
    recipe_use: &RecipeUse,
    portions: &PortionTable,
    multiplier_override: Option<f64>,
    include_guests: bool,
    logger: &dyn Logger,
) -> f64 {
    if let Some(multiplier) = multiplier_override {
        return multiplier;
    }

    let eaters = portions.sum_for(&recipe_use.eaters, logger);
    if include_guests {
        eaters + f64::from(recipe_use.guest_count) * DEFAULT_MULTIPLIER
    } else {
        eaters
    }
}

/// Accumulates every resolved recipe of `meals`; unresolved recipes are logged
/// and skipped.
pub fn accumulate_meals<'m>(
    accumulator: &mut DemandAccumulator<'_>,
    meals: impl IntoIterator<Item = &'m Meal>,
    portions: &PortionTable,
    multiplier_override: Option<f64>,
    include_guests: bool,
    logger: &dyn Logger,
) {
    for meal in meals {
        for recipe_use in &meal.recipes {
            let Resolution::Resolved(recipe) = &recipe_use.recipe else {
                logger.warn(&format!(
                    "Skipping unresolved recipe {} on {}",
                    recipe_use.recipe_id(),
                    meal.day
                ));
                continue;
            };

            let multiplier = portions_for(
                recipe_use,
                portions,
                multiplier_override,
                include_guests,
                logger,
            );
            accumulator.add_recipe(recipe, multiplier);
        }
    }
}

/// Rebinds a user-entered free-text line to the catalog ingredient of the
/// same name so it merges with computed demand.
pub fn bind_to_catalog(line: DemandLine, catalog: &[Ingredient]) -> DemandLine {
    let DemandItem::FreeText(name) = &line.item else {
        return line;
    };

    match catalog.iter().find(|ingredient| ingredient.matches_name(name)) {
        Some(ingredient) => DemandLine {
            item: DemandItem::Catalog(Resolution::Resolved(ingredient.clone())),
            ..line
        },
        None => line,
    }
}

/// True for lines the user typed in themselves.
pub fn is_manual(line: &DemandLine) -> bool {
    line.origin == Origin::EnteredByUser
}

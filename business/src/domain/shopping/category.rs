use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::DemandLine;
use super::settings::PlannerSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ListSection {
    Category(String),
    Purchased,
}

/// One display section of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub section: ListSection,
    pub title: String,
    pub lines: Vec<DemandLine>,
}

/// Buckets lines by category, alphabetically, with purchased lines last.
pub fn group_by_category(lines: Vec<DemandLine>, settings: &PlannerSettings) -> Vec<CategoryGroup> {
    let mut open: BTreeMap<String, Vec<DemandLine>> = BTreeMap::new();
    let mut purchased = Vec::new();

    for line in lines {
        if line.purchased {
            purchased.push(line);
            continue;
        }
        let category = line
            .category()
            .map(str::to_string)
            .unwrap_or_else(|| settings.uncategorized_label.clone());
        open.entry(category).or_default().push(line);
    }

    let mut groups: Vec<CategoryGroup> = open
        .into_iter()
        .map(|(category, lines)| CategoryGroup {
            title: category.clone(),
            section: ListSection::Category(category),
            lines: sorted(lines),
        })
        .collect();

    if !purchased.is_empty() {
        groups.push(CategoryGroup {
            section: ListSection::Purchased,
            title: settings.purchased_label.clone(),
            lines: sorted(purchased),
        });
    }

    groups
}

fn sorted(mut lines: Vec<DemandLine>) -> Vec<DemandLine> {
    lines.sort_by_key(|line| line.name().to_lowercase());
    lines
}

//! Item classification.
//!
//! [`categorize`] groups raw items into categories, orders each category by
//! level, and flags items whose XP bonus is dominated by a lower-or-equal
//! level item in the same category.
//!
//! Flagging never removes items: a non-competitive item stays in the
//! listing and is only marked.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use super::category::{category_for, compare_categories, is_ingredient};
use super::item::{ItemMap, ItemRecord, XpBonus};

/// An item together with the values derived during classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedItem {
    /// Item name, unique across the item map.
    pub name: String,
    /// Required level; 0 when the record has none.
    pub level: u32,
    /// Normalized XP bonus.
    pub xp_bonus: XpBonus,
    /// False when a lower-or-equal level item guarantees more XP than this
    /// one can roll.
    pub is_competitive: bool,
    /// The record as delivered.
    pub record: ItemRecord,
}

impl CategorizedItem {
    #[must_use]
    pub fn new(name: impl Into<String>, record: ItemRecord) -> Self {
        Self {
            name: name.into(),
            level: record.level(),
            xp_bonus: record.xp_bonus(),
            is_competitive: true,
            record,
        }
    }
}

/// Categorized items, keyed by category in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Classification {
    categories: IndexMap<String, Vec<CategorizedItem>>,
}

impl Classification {
    /// Items of one category, in level order.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[CategorizedItem]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Categories in display order (see [`compare_categories`]).
    #[must_use]
    pub fn ordered(&self) -> Vec<(&str, &[CategorizedItem])> {
        let mut ordered: Vec<_> = self
            .categories
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
            .collect();
        ordered.sort_by(|(a, _), (b, _)| compare_categories(a, b));
        ordered
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Group, order and flag raw items.
#[must_use]
pub fn categorize(items: &ItemMap) -> Classification {
    let mut categories: IndexMap<String, Vec<CategorizedItem>> = IndexMap::new();

    for (name, record) in items {
        categories
            .entry(category_for(record))
            .or_default()
            .push(CategorizedItem::new(name.clone(), record.clone()));
    }

    for (category, items) in &mut categories {
        // Vec::sort_by_key is stable: equal levels keep delivery order.
        items.sort_by_key(|item| item.level);
        flag_competitive(category, items);
    }

    Classification { categories }
}

/// Mark each item competitive or not.
///
/// The best guaranteed bonus is tracked per populated level. An item is
/// non-competitive when any populated level at or below its own has a
/// non-zero best guaranteed bonus above the item's maximum possible bonus.
/// A bucket holding 0 is treated as empty and taken over by the next value,
/// negative or not. Ingredients are always competitive.
pub fn flag_competitive(category: &str, items: &mut [CategorizedItem]) {
    if is_ingredient(category) {
        for item in items.iter_mut() {
            item.is_competitive = true;
        }
        return;
    }

    let mut best_by_level: BTreeMap<u32, f64> = BTreeMap::new();
    for item in items.iter() {
        let guaranteed = item.xp_bonus.guaranteed();
        best_by_level
            .entry(item.level)
            .and_modify(|best| {
                if *best == 0.0 || best.is_nan() || guaranteed > *best {
                    *best = guaranteed;
                }
            })
            .or_insert(guaranteed);
    }

    for item in items.iter_mut() {
        let max_possible = item.xp_bonus.max_possible();
        item.is_competitive = !best_by_level
            .range(..=item.level)
            .any(|(_, best)| *best != 0.0 && *best > max_possible);
    }
}

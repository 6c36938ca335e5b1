//! Item categories: assignment, display order, and display names.

use std::cmp::Ordering;

use super::item::ItemRecord;

/// Category that never has its items flagged.
pub const INGREDIENT: &str = "ingredient";

const UNKNOWN: &str = "Unknown";
const UNKNOWN_WEAPON: &str = "Unknown Weapon";
const UNKNOWN_ARMOR: &str = "Unknown Armor";
const UNKNOWN_ACCESSORY: &str = "Unknown Accessory";

/// Rank for categories missing from the rank table.
pub const DEFAULT_RANK: u32 = 50;

const RANKS: &[(&str, u32)] = &[
    // armour slots
    ("helmet", 1),
    ("chestplate", 2),
    ("leggings", 3),
    ("boots", 4),
    // accessories
    ("ring", 11),
    ("necklace", 12),
    ("bracelet", 13),
    // weapons
    ("bow", 21),
    ("dagger", 22),
    ("relik", 23),
    ("spear", 24),
    ("wand", 25),
    (INGREDIENT, 31),
    ("unknown", 100),
];

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("wand", "Wand"),
    ("bow", "Bow"),
    ("dagger", "Dagger"),
    ("spear", "Spear"),
    ("relik", "Relik"),
    ("helmet", "Helmet"),
    ("chestplate", "Chestplate"),
    ("leggings", "Leggings"),
    ("boots", "Boots"),
    ("ring", "Ring"),
    ("bracelet", "Bracelet"),
    ("necklace", "Necklace"),
    ("weapon", "Weapon"),
    ("armour", "Armour"),
    ("accessory", "Accessory"),
    ("unknown weapon", "Unknown Weapon"),
    ("unknown armor", "Unknown Armor"),
    ("unknown accessory", "Unknown Accessory"),
    ("unknown", "Unknown"),
];

/// Category key for a raw item.
///
/// Weapons, armour and accessories are grouped by subtype, falling back to
/// an `Unknown <Type>` bucket. Everything else is grouped by its generic
/// type, or `Unknown` when it has none.
#[must_use]
pub fn category_for(item: &ItemRecord) -> String {
    let (subtype, fallback) = match item.item_type.as_deref() {
        Some("weapon") => (&item.weapon_type, UNKNOWN_WEAPON),
        Some("armour") => (&item.armour_type, UNKNOWN_ARMOR),
        Some("accessory") => (&item.accessory_type, UNKNOWN_ACCESSORY),
        Some(other) if !other.is_empty() => return other.to_string(),
        _ => return UNKNOWN.to_string(),
    };

    match subtype.as_deref() {
        Some(subtype) if !subtype.is_empty() => subtype.to_string(),
        _ => fallback.to_string(),
    }
}

/// Display rank for a category key (lower sorts first).
#[must_use]
pub fn category_rank(key: &str) -> u32 {
    let key = key.to_lowercase();
    RANKS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_RANK, |(_, rank)| *rank)
}

/// Display order: by rank, then by name ignoring case.
#[must_use]
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    category_rank(a)
        .cmp(&category_rank(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Human-readable name for a category key.
#[must_use]
pub fn display_name(key: &str) -> String {
    let lower = key.to_lowercase();
    if let Some((_, name)) = DISPLAY_NAMES.iter().find(|(k, _)| *k == lower) {
        return (*name).to_string();
    }
    key.split(' ').map(title_case).collect::<Vec<_>>().join(" ")
}

/// Whether items in this category skip competitiveness flagging.
#[must_use]
pub fn is_ingredient(key: &str) -> bool {
    key.eq_ignore_ascii_case(INGREDIENT)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

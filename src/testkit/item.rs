//! Builders for item records used across tests.

use crate::domain::item::{ItemMap, ItemRecord, StatMap, StatRange, StatValue};

const WEAPONS: &[&str] = &["bow", "dagger", "relik", "spear", "wand"];
const ARMOUR: &[&str] = &["helmet", "chestplate", "leggings", "boots"];
const ACCESSORIES: &[&str] = &["ring", "necklace", "bracelet"];

/// An item of `subtype` with a level requirement and a fixed XP bonus.
///
/// Weapon, armour and accessory subtypes get the matching generic type;
/// any other `subtype` becomes the generic type itself (e.g. `ingredient`).
pub fn bonus_item(subtype: &str, level: u32, xp: f64) -> ItemRecord {
    with_bonus(subtype, level, StatValue::Number(xp))
}

/// Like [`bonus_item`], with an XP bonus rolled between `min` and `max`.
pub fn bonus_range_item(subtype: &str, level: u32, min: f64, max: f64) -> ItemRecord {
    with_bonus(
        subtype,
        level,
        StatValue::Range(StatRange {
            min: Some(min),
            max: Some(max),
            raw: Some((min + max) / 2.0),
        }),
    )
}

/// A small mixed item map: two rings, a bow, boots and an ingredient.
pub fn sample_items() -> ItemMap {
    let mut items = ItemMap::new();
    items.insert("Ring of Wisdom".into(), bonus_item("ring", 10, 5.0));
    items.insert("Dull Ring".into(), bonus_item("ring", 20, 3.0));
    items.insert("Scholar's Bow".into(), bonus_range_item("bow", 35, 4.0, 12.0));
    items.insert("Traveler's Boots".into(), bonus_item("boots", 5, 2.0));
    items.insert("Old Parchment".into(), bonus_item("ingredient", 1, 8.0));
    items
}

fn with_bonus(subtype: &str, level: u32, xp: StatValue) -> ItemRecord {
    let mut record = typed(subtype);

    let mut requirements = StatMap::new();
    requirements.insert("level".into(), StatValue::Number(f64::from(level)));
    record.requirements = requirements;

    let mut identifications = StatMap::new();
    identifications.insert("xpBonus".into(), xp);
    record.identifications = Some(identifications);

    record
}

fn typed(subtype: &str) -> ItemRecord {
    let mut record = ItemRecord::default();
    if WEAPONS.contains(&subtype) {
        record.item_type = Some("weapon".into());
        record.weapon_type = Some(subtype.into());
    } else if ARMOUR.contains(&subtype) {
        record.item_type = Some("armour".into());
        record.armour_type = Some(subtype.into());
    } else if ACCESSORIES.contains(&subtype) {
        record.item_type = Some("accessory".into());
        record.accessory_type = Some(subtype.into());
    } else {
        record.item_type = Some(subtype.into());
    }
    record
}

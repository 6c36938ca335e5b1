//! Item records as delivered by the item API.
//!
//! - [`ItemRecord`] - One item, keyed by name in an [`ItemMap`]
//! - [`StatValue`] - A stat that is a number, text, or `{min, max, raw}` range
//! - [`XpBonus`] - The normalized XP bonus used for ranking
//!
//! Records keep every optional field as an explicit `Option` so that absence
//! is visible at the type level. Fields the API sends that are not modeled
//! here are ignored on deserialization.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Items keyed by their unique name, in delivery order.
pub type ItemMap = IndexMap<String, ItemRecord>;

/// Named stats (requirements, base stats, identifications), in delivery order.
pub type StatMap = IndexMap<String, StatValue>;

/// A single item record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Rarity tier name (e.g. `"RARE"`); matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Generic item type: `weapon`, `armour`, `accessory`, or anything else.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Weapon subtype (`bow`, `spear`, ...) for weapons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,

    /// Armour slot (`helmet`, `boots`, ...) for armour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armour_type: Option<String>,

    /// Accessory slot (`ring`, `necklace`, ...) for accessories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory_type: Option<String>,

    /// `"untradable"` marks the item untradable; anything else is tradable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,

    /// Requirements such as `level`; empty when absent or null.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub requirements: StatMap,

    /// Base stats (damage, health, defences).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<StatMap>,

    /// Rolled stats; `xpBonus` lives here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifications: Option<StatMap>,

    /// Drop location, when the item has a fixed source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_meta: Option<DropMeta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powder_slots: Option<u32>,

    /// Flavor text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ItemRecord {
    /// Required level, or 0 when the record has none.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.requirements
            .get("level")
            .and_then(StatValue::as_number)
            .filter(|level| level.is_finite() && *level > 0.0)
            .map_or(0, |level| level.min(f64::from(u32::MAX)) as u32)
    }

    /// XP bonus normalized to `{min, max, raw}`.
    #[must_use]
    pub fn xp_bonus(&self) -> XpBonus {
        XpBonus::from_stat(
            self.identifications
                .as_ref()
                .and_then(|ids| ids.get("xpBonus")),
        )
    }

    /// Tier label as shown to the user; `NORMAL` when absent.
    #[must_use]
    pub fn tier_label(&self) -> &str {
        match self.tier.as_deref() {
            Some(tier) if !tier.is_empty() => tier,
            _ => "NORMAL",
        }
    }

    #[must_use]
    pub fn is_tradable(&self) -> bool {
        self.restrictions.as_deref() != Some("untradable")
    }
}

/// Where an item drops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropMeta {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<i64>>,
}

/// A `{min, max, raw}` stat range; any part may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<f64>,
}

/// A stat value in one of the shapes the API uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Range(StatRange),
    /// Anything else (booleans, lists), kept verbatim.
    Other(serde_json::Value),
}

impl StatValue {
    /// The scalar value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether the stat helps the player: a number above zero, or a range
    /// whose `raw` value is above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Number(n) => *n > 0.0,
            Self::Range(range) => range.raw.unwrap_or(0.0) > 0.0,
            Self::Text(_) | Self::Other(_) => false,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", Number(*n)),
            Self::Text(text) => f.write_str(text),
            Self::Range(range) => match (truthy(range.min), truthy(range.max)) {
                (Some(min), Some(max)) => write!(f, "{}-{}", Number(min), Number(max)),
                _ => write!(f, "{}", Number(range.raw.unwrap_or(0.0))),
            },
            Self::Other(serde_json::Value::String(s)) => f.write_str(s),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Normalized XP bonus.
///
/// A scalar bonus `x` becomes `min = max = raw = x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct XpBonus {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub raw: Option<f64>,
}

impl XpBonus {
    /// A fixed bonus.
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
            raw: Some(value),
        }
    }

    /// A rolled bonus between `min` and `max`.
    #[must_use]
    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            raw: None,
        }
    }

    /// Normalize a raw identification value.
    #[must_use]
    pub fn from_stat(stat: Option<&StatValue>) -> Self {
        match stat {
            Some(StatValue::Number(n)) => Self::fixed(*n),
            Some(StatValue::Range(range)) => Self {
                min: range.min,
                max: range.max,
                raw: range.raw,
            },
            _ => Self::default(),
        }
    }

    /// The bonus the item always grants: `min`, else `raw`, else 0.
    ///
    /// A zero `min` counts as missing.
    #[must_use]
    pub fn guaranteed(&self) -> f64 {
        truthy(self.min).or(truthy(self.raw)).unwrap_or(0.0)
    }

    /// The best bonus the item can roll: `max`, else `raw`, else 0.
    ///
    /// A zero `max` counts as missing.
    #[must_use]
    pub fn max_possible(&self) -> f64 {
        truthy(self.max).or(truthy(self.raw)).unwrap_or(0.0)
    }

    fn low(&self) -> f64 {
        self.min.or(self.raw).unwrap_or(0.0)
    }

    fn high(&self) -> f64 {
        self.max.or(self.raw).unwrap_or(0.0)
    }
}

impl fmt::Display for XpBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = (self.low(), self.high());
        if (low - high).abs() < f64::EPSILON {
            write!(f, "{}%", Number(low))
        } else {
            write!(f, "{}-{}%", Number(low), Number(high))
        }
    }
}

/// Formats a stat number without a trailing `.0` for whole values.
#[derive(Debug, Clone, Copy)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

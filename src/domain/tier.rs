//! Item rarity tiers and their display colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item rarity, lowest to highest (with `Set` as its own family).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    #[default]
    Normal,
    Unique,
    Rare,
    Legendary,
    Mythic,
    Fabled,
    Set,
}

impl Tier {
    pub const ALL: [Self; 7] = [
        Self::Normal,
        Self::Unique,
        Self::Rare,
        Self::Legendary,
        Self::Mythic,
        Self::Fabled,
        Self::Set,
    ];

    /// Look a tier up by name, ignoring case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|tier| tier.as_str() == upper)
    }

    /// Resolve an optional tier name, falling back to `Normal`.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Unique => "UNIQUE",
            Self::Rare => "RARE",
            Self::Legendary => "LEGENDARY",
            Self::Mythic => "MYTHIC",
            Self::Fabled => "FABLED",
            Self::Set => "SET",
        }
    }

    #[must_use]
    pub const fn color(self) -> TierColor {
        match self {
            Self::Normal => TierColor::rgb(0xFF, 0xFF, 0xFF),
            Self::Unique => TierColor::rgb(0xFF, 0xFF, 0x55),
            Self::Rare => TierColor::rgb(0x55, 0xFF, 0xFF),
            Self::Legendary => TierColor::rgb(0x55, 0x55, 0xFF),
            Self::Mythic => TierColor::rgb(0xFF, 0x55, 0xFF),
            Self::Fabled => TierColor::rgb(0xFF, 0x55, 0x55),
            Self::Set => TierColor::rgb(0x55, 0xFF, 0x55),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color for a tier name; unknown or missing tiers get the
/// `NORMAL` color.
#[must_use]
pub fn tier_color(name: Option<&str>) -> TierColor {
    Tier::resolve(name).color()
}

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TierColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for TierColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

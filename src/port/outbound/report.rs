//! Render data handed to a [`Presenter`](super::presenter::Presenter).
//!
//! These are plain serializable records. Building them from a
//! classification is an application concern; drawing them belongs to the
//! presenter.

use serde::Serialize;

use crate::domain::tier::TierColor;

/// Warning shown on items flagged non-competitive.
pub const EFFICIENCY_WARNING: &str = "May be less efficient";

/// Where the presented items came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum DataOrigin {
    /// Fetched from the API just now.
    Fetched,
    /// Read from a fresh cache entry; no request was made.
    Cache,
    /// The fetch failed and the cache was used instead.
    Stale { reason: String },
}

/// Everything a presenter needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub origin: DataOrigin,
    pub listing: ListingView,
    pub summary: SummaryView,
}

/// Collapsible categories of collapsible item cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingView {
    pub categories: Vec<CategoryNode>,
}

impl ListingView {
    /// Flip a category between collapsed and expanded. Returns false when
    /// no category has this id.
    pub fn toggle_category(&mut self, id: &str) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.collapsed = !category.collapsed;
                true
            }
            None => false,
        }
    }

    /// Flip an item card between collapsed and expanded. Returns false when
    /// no item has this id.
    pub fn toggle_item(&mut self, id: &str) -> bool {
        let card = self
            .categories
            .iter_mut()
            .flat_map(|c| c.items.iter_mut())
            .find(|item| item.id == id);
        match card {
            Some(card) => {
                card.collapsed = !card.collapsed;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&CategoryNode> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// One category header and its items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    /// Slug of the category key, unique within the listing.
    pub id: String,
    /// Category key as assigned during classification (e.g. `ring`).
    pub key: String,
    /// Capitalized name for headers.
    pub display_name: String,
    /// Whether the items are hidden under the header.
    pub collapsed: bool,
    /// Cards in level order.
    pub items: Vec<ItemCard>,
}

impl CategoryNode {
    /// Header text, e.g. `Boots (3 items)`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({} items)", self.display_name, self.items.len())
    }
}

/// One item card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCard {
    /// `<category id>-<item slug>`.
    pub id: String,
    pub name: String,
    /// Tier color for the name.
    pub color: TierColor,
    /// Tier label; `NORMAL` when the record has none.
    pub tier: String,
    pub level: u32,
    /// Formatted bonus, e.g. `5-12%`.
    pub xp_bonus: String,
    pub tradable: bool,
    /// Set on non-competitive items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    /// Whether the detail sections are hidden.
    pub collapsed: bool,
    /// Detail blocks, only those with content.
    pub sections: Vec<Section>,
}

impl ItemCard {
    /// Badge text for tradability.
    #[must_use]
    pub const fn trade_badge(&self) -> &'static str {
        if self.tradable {
            "Tradable"
        } else {
            "Untradable"
        }
    }
}

/// A titled block of card details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Stats(Vec<StatLine>),
    Text(String),
}

/// Whether a stat line helps or hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub value: String,
    /// Unset for neutral lines such as requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
}

/// Totals per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryView {
    pub total_items: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub display_name: String,
    pub items: usize,
    pub tradable: usize,
    /// Highest XP bonus any item in the category can roll.
    pub max_xp: f64,
}

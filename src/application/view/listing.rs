//! Listing view: collapsible categories of collapsible item cards.

use crate::domain::category::display_name;
use crate::domain::classify::{CategorizedItem, Classification};
use crate::domain::item::StatMap;
use crate::domain::tier::tier_color;
use crate::port::outbound::report::{
    CategoryNode, ItemCard, ListingView, Section, SectionBody, Sign, StatLine, EFFICIENCY_WARNING,
};

/// Initial open/closed state for the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    /// Start every category collapsed.
    pub collapse_categories: bool,
    /// Start every item card expanded.
    pub expand_items: bool,
    /// Only include these categories (matched ignoring case); empty means all.
    pub only: Vec<String>,
}

impl Disclosure {
    fn includes(&self, category: &str) -> bool {
        self.only.is_empty()
            || self
                .only
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(category))
    }
}

/// Build the listing for a classification.
#[must_use]
pub fn build_listing(classification: &Classification, disclosure: &Disclosure) -> ListingView {
    let categories = classification
        .ordered()
        .into_iter()
        .filter(|(key, _)| disclosure.includes(key))
        .map(|(key, items)| {
            let id = slug(key);
            CategoryNode {
                items: items
                    .iter()
                    .map(|item| build_card(&id, item, disclosure))
                    .collect(),
                key: key.to_string(),
                display_name: display_name(key),
                collapsed: disclosure.collapse_categories,
                id,
            }
        })
        .collect();

    ListingView { categories }
}

fn build_card(category_id: &str, item: &CategorizedItem, disclosure: &Disclosure) -> ItemCard {
    let record = &item.record;
    ItemCard {
        id: format!("{category_id}-{}", slug(&item.name)),
        name: item.name.clone(),
        color: tier_color(record.tier.as_deref()),
        tier: record.tier_label().to_string(),
        level: item.level,
        xp_bonus: item.xp_bonus.to_string(),
        tradable: record.is_tradable(),
        warning: (!item.is_competitive).then_some(EFFICIENCY_WARNING),
        collapsed: !disclosure.expand_items,
        sections: build_sections(item),
    }
}

fn build_sections(item: &CategorizedItem) -> Vec<Section> {
    let record = &item.record;
    let mut sections = Vec::new();

    if !record.requirements.is_empty() {
        sections.push(Section {
            title: "Requirements",
            body: SectionBody::Stats(
                record
                    .requirements
                    .iter()
                    .map(|(name, value)| plain_line(name.as_str(), value.to_string()))
                    .collect(),
            ),
        });
    }

    if let Some(base) = &record.base {
        sections.push(Section {
            title: "Base Stats",
            body: SectionBody::Stats(signed_lines(base, |name| name.replacen("base", "", 1))),
        });
    }

    if let Some(identifications) = &record.identifications {
        sections.push(Section {
            title: "Identifications",
            body: SectionBody::Stats(signed_lines(identifications, str::to_string)),
        });
    }

    if let Some(drop) = &record.drop_meta {
        let mut lines = vec![plain_line("Location", drop.name.as_str())];
        if let Some(kind) = drop.kind.as_deref().filter(|k| !k.is_empty()) {
            lines.push(plain_line("Type", kind));
        }
        if let Some(coordinates) = &drop.coordinates {
            let joined = coordinates
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(plain_line("Coordinates", joined));
        }
        sections.push(Section {
            title: "Drop Location",
            body: SectionBody::Stats(lines),
        });
    }

    if let Some(slots) = record.powder_slots.filter(|s| *s > 0) {
        sections.push(Section {
            title: "Other",
            body: SectionBody::Stats(vec![plain_line("Powder Slots", slots.to_string())]),
        });
    }

    if let Some(lore) = record.lore.as_deref().filter(|l| !l.is_empty()) {
        sections.push(Section {
            title: "Lore",
            body: SectionBody::Text(lore.to_string()),
        });
    }

    sections
}

fn plain_line(name: impl Into<String>, value: impl Into<String>) -> StatLine {
    StatLine {
        name: name.into(),
        value: value.into(),
        sign: None,
    }
}

fn signed_lines(stats: &StatMap, rename: impl Fn(&str) -> String) -> Vec<StatLine> {
    stats
        .iter()
        .map(|(name, value)| StatLine {
            name: rename(name),
            value: value.to_string(),
            sign: Some(if value.is_positive() {
                Sign::Positive
            } else {
                Sign::Negative
            }),
        })
        .collect()
}

/// Lowercase id with every run of non-alphanumerics collapsed to `-`.
#[must_use]
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    if pending_dash {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classify::categorize;
    use crate::domain::item::{DropMeta, ItemMap, ItemRecord, StatRange, StatValue};
    use crate::testkit::item::bonus_item;

    fn single(name: &str, record: ItemRecord) -> ListingView {
        let mut items = ItemMap::new();
        items.insert(name.into(), record);
        build_listing(&categorize(&items), &Disclosure::default())
    }

    fn titles(card: &ItemCard) -> Vec<&'static str> {
        card.sections.iter().map(|s| s.title).collect()
    }

    #[test]
    fn categories_follow_display_order_with_counts() {
        let mut items = ItemMap::new();
        items.insert("w".into(), bonus_item("wand", 1, 1.0));
        items.insert("r1".into(), bonus_item("ring", 1, 1.0));
        items.insert("r2".into(), bonus_item("ring", 2, 1.0));
        items.insert("b".into(), bonus_item("boots", 1, 1.0));

        let listing = build_listing(&categorize(&items), &Disclosure::default());
        let headers: Vec<_> = listing.categories.iter().map(CategoryNode::title).collect();

        assert_eq!(
            headers,
            vec!["Boots (1 items)", "Ring (2 items)", "Wand (1 items)"]
        );
    }

    #[test]
    fn card_header_fields() {
        let mut record = bonus_item("bow", 12, 8.0);
        record.tier = Some("Legendary".into());
        record.restrictions = Some("untradable".into());

        let listing = single("Gale's Sight", record);
        let card = &listing.categories[0].items[0];

        assert_eq!(card.id, "bow-gale-s-sight");
        assert_eq!(card.tier, "Legendary");
        assert_eq!(card.color.hex(), "#5555FF");
        assert_eq!(card.level, 12);
        assert_eq!(card.xp_bonus, "8%");
        assert_eq!(card.trade_badge(), "Untradable");
        assert!(card.warning.is_none());
        assert!(card.collapsed);
    }

    #[test]
    fn non_competitive_items_carry_warning() {
        let mut items = ItemMap::new();
        items.insert("A".into(), bonus_item("ring", 1, 10.0));
        items.insert("B".into(), bonus_item("ring", 2, 5.0));

        let listing = build_listing(&categorize(&items), &Disclosure::default());
        let cards = &listing.categories[0].items;

        assert_eq!(cards[0].warning, None);
        assert_eq!(cards[1].warning, Some(EFFICIENCY_WARNING));
    }

    #[test]
    fn absent_sections_are_omitted() {
        let mut record = bonus_item("ring", 0, 3.0);
        record.requirements.clear();

        let listing = single("Plain", record);
        assert_eq!(titles(&listing.categories[0].items[0]), vec!["Identifications"]);
    }

    #[test]
    fn all_sections_present_in_order() {
        let mut record = bonus_item("ring", 5, 3.0);
        let mut base = StatMap::new();
        base.insert("baseHealth".into(), StatValue::Number(-20.0));
        record.base = Some(base);
        record.drop_meta = Some(DropMeta {
            name: "Ragni".into(),
            kind: Some("merchant".into()),
            coordinates: Some(vec![-870, 70, -1590]),
        });
        record.powder_slots = Some(1);
        record.lore = Some("Shiny.".into());

        let listing = single("Full", record);
        let card = &listing.categories[0].items[0];

        assert_eq!(
            titles(card),
            vec![
                "Requirements",
                "Base Stats",
                "Identifications",
                "Drop Location",
                "Other",
                "Lore"
            ]
        );

        let SectionBody::Stats(base_lines) = &card.sections[1].body else {
            panic!("base stats should be stat lines");
        };
        assert_eq!(base_lines[0].name, "Health");
        assert_eq!(base_lines[0].sign, Some(Sign::Negative));

        let SectionBody::Stats(drop_lines) = &card.sections[3].body else {
            panic!("drop location should be stat lines");
        };
        assert_eq!(drop_lines[2].value, "-870, 70, -1590");
    }

    #[test]
    fn range_identifications_are_signed_by_raw() {
        let mut record = bonus_item("ring", 5, 3.0);
        let ids = record.identifications.get_or_insert_with(StatMap::new);
        ids.insert(
            "walkSpeed".into(),
            StatValue::Range(StatRange {
                min: Some(4.0),
                max: Some(13.0),
                raw: Some(10.0),
            }),
        );

        let listing = single("Speedy", record);
        let SectionBody::Stats(lines) = &listing.categories[0].items[0].sections[1].body else {
            panic!("identifications should be stat lines");
        };
        let walk = lines.iter().find(|l| l.name == "walkSpeed").unwrap();
        assert_eq!(walk.value, "4-13");
        assert_eq!(walk.sign, Some(Sign::Positive));
    }

    #[test]
    fn disclosure_controls_initial_state_and_filter() {
        let mut items = ItemMap::new();
        items.insert("r".into(), bonus_item("ring", 1, 1.0));
        items.insert("b".into(), bonus_item("boots", 1, 1.0));

        let disclosure = Disclosure {
            collapse_categories: true,
            expand_items: true,
            only: vec!["RING".into()],
        };
        let listing = build_listing(&categorize(&items), &disclosure);

        assert_eq!(listing.categories.len(), 1);
        assert!(listing.categories[0].collapsed);
        assert!(!listing.categories[0].items[0].collapsed);
    }

    #[test]
    fn toggles_flip_state() {
        let listing_items = {
            let mut items = ItemMap::new();
            items.insert("Twisted Ring".into(), bonus_item("ring", 1, 1.0));
            items
        };
        let mut listing = build_listing(&categorize(&listing_items), &Disclosure::default());

        assert!(listing.toggle_category("ring"));
        assert!(listing.category("ring").unwrap().collapsed);
        assert!(listing.toggle_item("ring-twisted-ring"));
        assert!(!listing.categories[0].items[0].collapsed);
        assert!(!listing.toggle_item("missing"));
        assert!(!listing.toggle_category("missing"));
    }

    #[test]
    fn slugs() {
        assert_eq!(slug("Unknown Weapon"), "unknown-weapon");
        assert_eq!(slug("Gale's  Sight"), "gale-s-sight");
        assert_eq!(slug("Ring!"), "ring-");
    }
}

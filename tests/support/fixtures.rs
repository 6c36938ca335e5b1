use serde_json::{json, Value};

/// An API body with two rings, a bow and an ingredient.
pub fn items_body() -> Value {
    json!({
        "success": true,
        "items": {
            "Ring of Wisdom": {
                "tier": "Rare",
                "type": "accessory",
                "accessoryType": "ring",
                "requirements": { "level": 10 },
                "identifications": { "xpBonus": 5 }
            },
            "Dull Ring": {
                "tier": "Normal",
                "type": "accessory",
                "accessoryType": "ring",
                "restrictions": "untradable",
                "requirements": { "level": 20 },
                "identifications": { "xpBonus": 3 }
            },
            "Scholar's Bow": {
                "tier": "Legendary",
                "type": "weapon",
                "weaponType": "bow",
                "requirements": { "level": 35 },
                "identifications": { "xpBonus": { "min": 4, "max": 12, "raw": 9 } },
                "dropMeta": { "name": "Ragni", "type": "merchant", "coordinates": [-870, 70, -1590] }
            },
            "Old Parchment": {
                "type": "ingredient",
                "requirements": { "level": 1 },
                "identifications": { "xpBonus": 8 }
            }
        }
    })
}

/// A cache entry file body for `items_body()` written at `timestamp`.
pub fn cache_entry(timestamp: i64) -> String {
    json!({
        "timestamp": timestamp,
        "items": items_body()["items"].clone(),
    })
    .to_string()
}

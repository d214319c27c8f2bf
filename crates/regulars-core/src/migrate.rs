//! One-time import of legacy item dumps, where purchase metadata still lives
//! inside the item name.

use crate::error::Result;
use crate::item::{Item, ShoppingItem};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyDump {
    Bare(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

impl LegacyDump {
    fn into_items(self) -> Vec<Item> {
        match self {
            LegacyDump::Bare(items) | LegacyDump::Wrapped { items } => items,
        }
    }
}

/// Decode every legacy name exactly once. Order is preserved.
pub fn import_legacy(items: Vec<Item>) -> Vec<ShoppingItem> {
    items.iter().map(ShoppingItem::from_legacy).collect()
}

/// Parse a legacy JSON dump: either a bare array of items or an object with an
/// `items` array.
pub fn parse_legacy_json(data: &str) -> Result<Vec<Item>> {
    let dump: LegacyDump = serde_json::from_str(data)?;
    Ok(dump.into_items())
}

pub fn read_legacy_file(path: &Path) -> Result<Vec<ShoppingItem>> {
    let data = std::fs::read_to_string(path)?;
    Ok(import_legacy(parse_legacy_json(&data)?))
}

/// Export items back to the legacy JSON shape.
pub fn export_legacy(items: &[ShoppingItem]) -> Vec<Item> {
    items.iter().map(ShoppingItem::to_legacy).collect()
}

pub mod categories;
pub mod export;
pub mod household;
pub mod init;
pub mod item;
pub mod list;
pub mod migrate;
pub mod serve;
pub mod share;

use clap::Args;
use regulars_core::item::ShoppingItem;
use regulars_core::session::SessionState;
use regulars_core::types::InventoryStatus;

/// Throwaway trip state for commands that render the list from the shell.
/// Items are matched by id or by display name.
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Mark an item as checked (repeatable)
    #[arg(long = "checked", value_name = "ITEM")]
    pub checked: Vec<String>,
    /// Mark an item as out of stock at home (repeatable)
    #[arg(long = "unavailable", value_name = "ITEM")]
    pub unavailable: Vec<String>,
    /// Mark an item as still in stock at home (repeatable)
    #[arg(long = "available", value_name = "ITEM")]
    pub available: Vec<String>,
}

impl SessionArgs {
    pub fn build(&self, items: &[ShoppingItem]) -> anyhow::Result<SessionState> {
        let mut session = SessionState::new();
        for key in &self.checked {
            let id = resolve_item(items, key)?;
            if !session.is_checked(id) {
                session.toggle_checked(id);
            }
        }
        for key in &self.unavailable {
            session.set_inventory(resolve_item(items, key)?, InventoryStatus::Unavailable);
        }
        for key in &self.available {
            session.set_inventory(resolve_item(items, key)?, InventoryStatus::Available);
        }
        Ok(session)
    }
}

pub(crate) fn resolve_item<'a>(items: &'a [ShoppingItem], key: &str) -> anyhow::Result<&'a str> {
    items
        .iter()
        .find(|i| i.id == key)
        .or_else(|| items.iter().find(|i| i.name == key))
        .map(|i| i.id.as_str())
        .ok_or_else(|| anyhow::anyhow!("no item with id or name '{key}'"))
}

pub(crate) fn tag_labels(item_tags: impl IntoIterator<Item = regulars_core::types::Tag>) -> String {
    item_tags
        .into_iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

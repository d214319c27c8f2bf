use crate::error::{RegularsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EMPTY_EXTRA_LIST: &str =
    "追加の買い物リストが空です。\nアイテムをチェックしてください。";

/// A one-off item that is not a regular member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraItem {
    pub id: String,
    pub name: String,
    pub checked: bool,
    pub created_at: DateTime<Utc>,
}

/// Ad-hoc additions for the current trip. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraList {
    items: Vec<ExtraItem>,
}

impl ExtraList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ExtraItem] {
        &self.items
    }

    pub fn add(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegularsError::EmptyItemName);
        }
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.items.push(ExtraItem {
            id: id.clone(),
            name: name.to_string(),
            checked: false,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Err(RegularsError::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Flip `checked`; returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| RegularsError::ItemNotFound(id.to_string()))?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    pub fn uncheck_all(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn render_share_text(&self) -> String {
        let names: Vec<&str> = self
            .items
            .iter()
            .filter(|i| i.checked)
            .map(|i| i.name.as_str())
            .collect();
        if names.is_empty() {
            return EMPTY_EXTRA_LIST.to_string();
        }
        names.join("\n")
    }
}

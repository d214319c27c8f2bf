use crate::category::CategoryRegistry;
use crate::error::{RegularsError, Result};
use crate::item::ShoppingItem;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One shared account and its list of regular items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    pub account_id: String,
    pub name: String,
    pub password_hash: String,
    #[serde(default)]
    pub share_id: Option<String>,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Household {
    pub fn new(
        account_id: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_id: account_id.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            share_id: None,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn create(
        root: &Path,
        account_id: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self> {
        let account_id = account_id.into();
        paths::validate_account_id(&account_id)?;
        if Self::exists(root, &account_id) {
            return Err(RegularsError::HouseholdExists(account_id));
        }
        let household = Self::new(account_id, name, password_hash);
        household.save(root)?;
        Ok(household)
    }

    pub fn exists(root: &Path, account_id: &str) -> bool {
        paths::household_path(root, account_id).exists()
    }

    pub fn load(root: &Path, account_id: &str) -> Result<Self> {
        paths::validate_account_id(account_id)?;
        let path = paths::household_path(root, account_id);
        if !path.exists() {
            return Err(RegularsError::HouseholdNotFound(account_id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let household: Household = serde_yaml::from_str(&data)?;
        Ok(household)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::household_path(root, &self.account_id);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// All households, sorted by account id.
    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::households_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut households = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let data = std::fs::read_to_string(&path)?;
            households.push(serde_yaml::from_str::<Household>(&data)?);
        }
        households.sort_by(|a, b| a.account_id.cmp(&b.account_id));
        Ok(households)
    }

    pub fn find_by_share_id(root: &Path, share_id: &str) -> Result<Self> {
        if !crate::share_id::is_valid(share_id) {
            return Err(RegularsError::InvalidShareId);
        }
        Self::list(root)?
            .into_iter()
            .find(|h| h.share_id.as_deref() == Some(share_id))
            .ok_or(RegularsError::ShareIdNotFound)
    }

    /// Return the existing share id, minting one on first use.
    pub fn ensure_share_id(&mut self) -> &str {
        if self.share_id.is_none() {
            self.share_id = Some(crate::share_id::generate());
            self.touch();
        }
        self.share_id.as_deref().unwrap_or_default()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // ---------------------------------------------------------------------------
    // Items
    // ---------------------------------------------------------------------------

    /// Items in creation order.
    pub fn list_items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Result<&ShoppingItem> {
        self.items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| RegularsError::ItemNotFound(item_id.to_string()))
    }

    /// Add an item from a submitted name. Suffix/comma metadata in `raw_name`
    /// is decoded here, once.
    pub fn add_item(
        &mut self,
        raw_name: &str,
        category_id: &str,
        registry: &CategoryRegistry,
    ) -> Result<&ShoppingItem> {
        check_category(registry, category_id)?;
        let item = ShoppingItem::new(raw_name, category_id);
        if item.name.trim().is_empty() {
            return Err(RegularsError::EmptyItemName);
        }
        self.items.push(item);
        self.touch();
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn rename_item(
        &mut self,
        item_id: &str,
        raw_name: &str,
        category_id: Option<&str>,
        registry: &CategoryRegistry,
    ) -> Result<&ShoppingItem> {
        if let Some(category_id) = category_id {
            check_category(registry, category_id)?;
        }
        let idx = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| RegularsError::ItemNotFound(item_id.to_string()))?;

        let mut updated = self.items[idx].clone();
        updated.rename(raw_name);
        if updated.name.trim().is_empty() {
            return Err(RegularsError::EmptyItemName);
        }
        if let Some(category_id) = category_id {
            updated.category_id = category_id.to_string();
        }
        self.items[idx] = updated;
        self.touch();
        Ok(&self.items[idx])
    }

    pub fn delete_item(&mut self, item_id: &str) -> Result<ShoppingItem> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| RegularsError::ItemNotFound(item_id.to_string()))?;
        self.touch();
        Ok(self.items.remove(idx))
    }

    /// Merge imported items by id; an imported item replaces an existing one
    /// with the same id. Returns how many were newly appended.
    pub fn import_items(&mut self, imported: Vec<ShoppingItem>) -> usize {
        let mut added = 0;
        for item in imported {
            match self.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => *existing = item,
                None => {
                    self.items.push(item);
                    added += 1;
                }
            }
        }
        self.items.sort_by_key(|i| i.created_at);
        self.touch();
        added
    }
}

fn check_category(registry: &CategoryRegistry, category_id: &str) -> Result<()> {
    if !registry.contains(category_id) {
        return Err(RegularsError::UnknownCategory(category_id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;
    use tempfile::TempDir;

    #[test]
    fn create_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let reg = CategoryRegistry::default();
        let mut h = Household::create(dir.path(), "tanaka", "田中家", "hash").unwrap();
        h.add_item("牛乳,bench", "dairy", &reg).unwrap();
        h.save(dir.path()).unwrap();

        let loaded = Household::load(dir.path(), "tanaka").unwrap();
        assert_eq!(loaded.name, "田中家");
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].name, "牛乳");
        assert!(loaded.items[0].has_tag(Tag::Bench));
    }

    #[test]
    fn create_rejects_duplicates_and_bad_ids() {
        let dir = TempDir::new().unwrap();
        Household::create(dir.path(), "tanaka", "田中家", "hash").unwrap();
        assert!(matches!(
            Household::create(dir.path(), "tanaka", "x", "y"),
            Err(RegularsError::HouseholdExists(_))
        ));
        assert!(matches!(
            Household::create(dir.path(), "../evil", "x", "y"),
            Err(RegularsError::InvalidAccountId(_))
        ));
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Household::load(dir.path(), "nobody"),
            Err(RegularsError::HouseholdNotFound(_))
        ));
    }

    #[test]
    fn add_item_validates_input() {
        let reg = CategoryRegistry::default();
        let mut h = Household::new("a", "A", "h");
        assert!(matches!(
            h.add_item("バナナ", "nonexistent", &reg),
            Err(RegularsError::UnknownCategory(_))
        ));
        assert!(matches!(
            h.add_item("  ", "fruits", &reg),
            Err(RegularsError::EmptyItemName)
        ));
        assert!(matches!(
            h.add_item(",bench", "fruits", &reg),
            Err(RegularsError::EmptyItemName)
        ));
        assert!(h.items.is_empty());
    }

    #[test]
    fn rename_and_delete() {
        let reg = CategoryRegistry::default();
        let mut h = Household::new("a", "A", "h");
        let id = h.add_item("缶詰,emer", "other", &reg).unwrap().id.clone();

        let renamed = h.rename_item(&id, "ツナ缶,sale", Some("fish"), &reg).unwrap();
        assert_eq!(renamed.category_id, "fish");
        assert!(renamed.tags.is_empty());
        assert_eq!(renamed.alternatives, vec!["ツナ缶", "sale"]);

        let removed = h.delete_item(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(matches!(
            h.delete_item(&id),
            Err(RegularsError::ItemNotFound(_))
        ));
    }

    #[test]
    fn share_id_is_minted_once_and_findable() {
        let dir = TempDir::new().unwrap();
        let mut h = Household::create(dir.path(), "tanaka", "田中家", "hash").unwrap();
        let first = h.ensure_share_id().to_string();
        assert_eq!(h.ensure_share_id(), first);
        h.save(dir.path()).unwrap();

        let found = Household::find_by_share_id(dir.path(), &first).unwrap();
        assert_eq!(found.account_id, "tanaka");
        assert!(matches!(
            Household::find_by_share_id(dir.path(), "short"),
            Err(RegularsError::InvalidShareId)
        ));
        assert!(matches!(
            Household::find_by_share_id(dir.path(), &"A".repeat(64)),
            Err(RegularsError::ShareIdNotFound)
        ));
    }

    #[test]
    fn import_replaces_by_id() {
        let reg = CategoryRegistry::default();
        let mut h = Household::new("a", "A", "h");
        let existing = h.add_item("バナナ", "fruits", &reg).unwrap().clone();

        let mut replacement = existing.clone();
        replacement.rename("バナナ,low");
        let fresh = ShoppingItem::new("卵", "dairy");

        assert_eq!(h.import_items(vec![replacement, fresh]), 1);
        assert_eq!(h.items.len(), 2);
        assert!(h.item(&existing.id).unwrap().has_tag(Tag::SaleSensitive));
    }
}

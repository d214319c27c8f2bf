use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One supermarket section. `order` is the walking order through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub label: String,
    pub order: u32,
}

impl CategoryDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            order,
        }
    }
}

/// Built-in aisle order used when the config does not override it.
pub fn default_categories() -> Vec<CategoryDef> {
    [
        ("vegetables", "野菜・生鮮"),
        ("beans", "豆類"),
        ("mushrooms", "きのこ類"),
        ("fruits", "果物"),
        ("meat", "肉類"),
        ("fish", "魚類"),
        ("dairy", "乳製品"),
        ("bread", "パン"),
        ("beverages", "飲み物"),
        ("frozen", "冷凍食品"),
        ("snacks", "お菓子"),
        ("other", "その他"),
    ]
    .iter()
    .zip(1..)
    .map(|((id, label), order)| CategoryDef::new(*id, *label, order))
    .collect()
}

/// Immutable, ordered set of categories fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    defs: Vec<CategoryDef>,
}

impl CategoryRegistry {
    /// Build a registry sorted ascending by `order`. Ties keep input order so
    /// repeated groupings of the same set are stable. A repeated id keeps its
    /// first definition.
    pub fn new(mut defs: Vec<CategoryDef>) -> Self {
        let mut seen = HashSet::new();
        defs.retain(|d| seen.insert(d.id.clone()));
        defs.sort_by_key(|d| d.order);
        Self { defs }
    }

    pub fn list(&self) -> &[CategoryDef] {
        &self.defs
    }

    pub fn resolve(&self, id: &str) -> Option<&CategoryDef> {
        self.defs.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

use crate::codec;
use crate::types::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Item (legacy wire shape)
// ---------------------------------------------------------------------------

/// A regular item as older clients and dumps describe it: metadata is still
/// encoded in `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// ShoppingItem
// ---------------------------------------------------------------------------

/// A regular item with its purchase metadata as explicit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    /// Display label, already stripped of any suffix.
    pub name: String,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Decode a submitted name (which may carry suffix/comma metadata) into a
    /// fresh item with a generated id.
    pub fn new(raw_name: &str, category_id: impl Into<String>) -> Self {
        Self::decoded(
            uuid::Uuid::new_v4().simple().to_string(),
            raw_name,
            category_id.into(),
            Utc::now(),
        )
    }

    pub fn from_legacy(item: &Item) -> Self {
        Self::decoded(
            item.id.clone(),
            &item.name,
            item.category_id.clone(),
            item.created_at,
        )
    }

    fn decoded(id: String, raw_name: &str, category_id: String, created_at: DateTime<Utc>) -> Self {
        let d = codec::decode(raw_name);
        Self {
            id,
            name: d.display_name,
            tags: d.tags,
            alternatives: d.alternatives,
            category_id,
            created_at,
        }
    }

    /// Replace name and metadata from a newly submitted raw name.
    pub fn rename(&mut self, raw_name: &str) {
        let d = codec::decode(raw_name);
        self.name = d.display_name;
        self.tags = d.tags;
        self.alternatives = d.alternatives;
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_bench(&self) -> bool {
        self.has_tag(Tag::Bench)
    }

    pub fn has_condition(&self) -> bool {
        self.alternatives.len() >= 2
    }

    /// Re-encode into the legacy single-string form.
    pub fn to_legacy_name(&self) -> String {
        let tag = self.tags.iter().next().copied();
        if self.alternatives.is_empty() {
            return codec::encode(&[self.name.as_str()], tag);
        }
        codec::encode(&self.alternatives, tag)
    }

    pub fn to_legacy(&self) -> Item {
        Item {
            id: self.id.clone(),
            name: self.to_legacy_name(),
            category_id: self.category_id.clone(),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(name: &str, category: &str) -> Item {
        Item {
            id: "i1".into(),
            name: name.into(),
            category_id: category.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn from_legacy_decodes_once() {
        let item = ShoppingItem::from_legacy(&legacy("しめじ,きのこ,bench", "mushrooms"));
        assert_eq!(item.id, "i1");
        assert_eq!(item.name, "しめじ,きのこ");
        assert!(item.is_bench());
        assert!(item.has_condition());
        assert_eq!(item.category_id, "mushrooms");
    }

    #[test]
    fn legacy_json_uses_camel_case() {
        let json = r#"{"id":"a","name":"牛乳,bench","categoryId":"dairy","createdAt":"2024-01-15T09:30:00Z"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category_id, "dairy");
        let shopping = ShoppingItem::from_legacy(&item);
        assert_eq!(shopping.name, "牛乳");
        assert_eq!(shopping.to_legacy().name, "牛乳,bench");
    }

    #[test]
    fn rename_replaces_metadata() {
        let mut item = ShoppingItem::new("缶詰,emer", "other");
        assert!(item.has_tag(Tag::Emergency));
        item.rename("缶詰");
        assert!(item.tags.is_empty());
        assert_eq!(item.name, "缶詰");
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = ShoppingItem::new("a", "other");
        let b = ShoppingItem::new("a", "other");
        assert_ne!(a.id, b.id);
    }
}

use crate::category::{CategoryDef, CategoryRegistry};
use crate::item::ShoppingItem;
use crate::session::{ItemSession, SessionState};
use crate::types::{InventoryStatus, Tag, VisualState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// RowContext
// ---------------------------------------------------------------------------

pub struct RowContext<'a> {
    pub item: &'a ShoppingItem,
    pub session: ItemSession,
}

impl RowContext<'_> {
    fn tagged(&self, tag: Tag) -> bool {
        self.item.has_tag(tag)
    }

    fn conditional(&self) -> bool {
        self.item.has_condition()
    }
}

// ---------------------------------------------------------------------------
// StyleRule
// ---------------------------------------------------------------------------

/// One row of the visual-state decision table.
pub struct StyleRule {
    pub id: &'static str,
    pub condition: fn(&RowContext) -> bool,
    pub style: VisualState,
}

/// First match wins; order matters.
pub static STYLE_RULES: &[StyleRule] = &[
    StyleRule {
        id: "bench",
        condition: |c| c.tagged(Tag::Bench),
        style: VisualState::Bench,
    },
    StyleRule {
        id: "out_of_stock",
        condition: |c| c.session.inventory == InventoryStatus::Unavailable,
        style: VisualState::NeedsPurchase,
    },
    StyleRule {
        id: "checked_or_in_stock",
        condition: |c| c.session.checked || c.session.inventory == InventoryStatus::Available,
        style: VisualState::Dimmed,
    },
    StyleRule {
        id: "new_conditional",
        condition: |c| c.tagged(Tag::New) && c.conditional(),
        style: VisualState::NewConditional,
    },
    StyleRule {
        id: "tired_conditional",
        condition: |c| c.tagged(Tag::Tired) && c.conditional(),
        style: VisualState::TiredConditional,
    },
    StyleRule {
        id: "emergency_conditional",
        condition: |c| c.tagged(Tag::Emergency) && c.conditional(),
        style: VisualState::EmergencyConditional,
    },
    StyleRule {
        id: "sale_conditional",
        condition: |c| c.tagged(Tag::SaleSensitive) && c.conditional(),
        style: VisualState::SaleConditional,
    },
    StyleRule {
        id: "new",
        condition: |c| c.tagged(Tag::New),
        style: VisualState::New,
    },
    StyleRule {
        id: "tired",
        condition: |c| c.tagged(Tag::Tired),
        style: VisualState::Tired,
    },
    StyleRule {
        id: "emergency",
        condition: |c| c.tagged(Tag::Emergency),
        style: VisualState::Emergency,
    },
    StyleRule {
        id: "sale",
        condition: |c| c.tagged(Tag::SaleSensitive),
        style: VisualState::Sale,
    },
    StyleRule {
        id: "conditional",
        condition: |c| c.conditional(),
        style: VisualState::Conditional,
    },
];

pub fn visual_state(item: &ShoppingItem, session: ItemSession) -> VisualState {
    let ctx = RowContext { item, session };
    STYLE_RULES
        .iter()
        .find(|rule| (rule.condition)(&ctx))
        .map(|rule| rule.style)
        .unwrap_or(VisualState::Plain)
}

// ---------------------------------------------------------------------------
// Projection output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub id: String,
    pub display_name: String,
    pub tags: BTreeSet<Tag>,
    pub alternatives: Vec<String>,
    pub has_condition: bool,
    pub checked: bool,
    pub inventory: InventoryStatus,
    pub visual_state: VisualState,
}

impl RenderItem {
    pub fn new(item: &ShoppingItem, session: ItemSession) -> Self {
        Self {
            id: item.id.clone(),
            display_name: item.name.clone(),
            tags: item.tags.clone(),
            alternatives: item.alternatives.clone(),
            has_condition: item.has_condition(),
            checked: session.checked,
            inventory: session.inventory,
            visual_state: visual_state(item, session),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: CategoryDef,
    pub items: Vec<RenderItem>,
}

/// Group items by category in aisle order, merging in session state.
///
/// Items whose category is not registered are left out of every group; use
/// [`orphaned`] to find them. Empty categories are omitted.
pub fn project(
    registry: &CategoryRegistry,
    items: &[ShoppingItem],
    session: &SessionState,
) -> Vec<CategoryGroup> {
    registry
        .list()
        .iter()
        .filter_map(|category| {
            let rows: Vec<RenderItem> = items
                .iter()
                .filter(|item| item.category_id == category.id)
                .map(|item| RenderItem::new(item, session.get(&item.id)))
                .collect();
            (!rows.is_empty()).then(|| CategoryGroup {
                category: category.clone(),
                items: rows,
            })
        })
        .collect()
}

/// Items carrying `tag`, in their original order. `Tag::Bench` gives the
/// bench-member view.
pub fn with_tag(items: &[ShoppingItem], tag: Tag) -> Vec<ShoppingItem> {
    items.iter().filter(|item| item.has_tag(tag)).cloned().collect()
}

/// Items whose category id does not resolve in the registry.
pub fn orphaned<'a>(registry: &CategoryRegistry, items: &'a [ShoppingItem]) -> Vec<&'a ShoppingItem> {
    items
        .iter()
        .filter(|item| !registry.contains(&item.category_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> ShoppingItem {
        ShoppingItem::new(name, category)
    }

    fn session(checked: bool, inventory: InventoryStatus) -> ItemSession {
        ItemSession { checked, inventory }
    }

    #[test]
    fn with_tag_keeps_only_bench_members() {
        let items = vec![
            item("牛乳,bench", "dairy"),
            item("バナナ", "fruits"),
            item("卵,bench", "dairy"),
        ];
        let bench = with_tag(&items, Tag::Bench);
        let names: Vec<&str> = bench.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["牛乳", "卵"]);
        assert!(with_tag(&items, Tag::Tired).is_empty());
    }

    #[test]
    fn groups_follow_registry_order() {
        let reg = CategoryRegistry::default();
        let items = vec![item("ティッシュ", "other"), item("にんじん", "vegetables")];
        let groups = project(&reg, &items, &SessionState::new());
        let ids: Vec<&str> = groups.iter().map(|g| g.category.id.as_str()).collect();
        assert_eq!(ids, vec!["vegetables", "other"]);
    }

    #[test]
    fn regrouping_is_stable() {
        let reg = CategoryRegistry::default();
        let items = vec![
            item("a", "meat"),
            item("b", "dairy"),
            item("c", "meat"),
            item("d", "beans"),
        ];
        let s = SessionState::new();
        let groups = project(&reg, &items, &s);
        assert_eq!(groups, project(&reg, &items, &s));
        let names: Vec<&str> = groups[1]
            .items
            .iter()
            .map(|r| r.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn unresolvable_category_is_excluded() {
        let reg = CategoryRegistry::default();
        let items = vec![item("謎", "nonexistent"), item("バナナ", "fruits")];
        let groups = project(&reg, &items, &SessionState::new());
        assert_eq!(groups.len(), 1);
        assert!(groups
            .iter()
            .all(|g| g.items.iter().all(|r| r.display_name != "謎")));
        let orphans = orphaned(&reg, &items);
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].name, "謎");
    }

    #[test]
    fn empty_categories_are_omitted() {
        let reg = CategoryRegistry::default();
        assert!(project(&reg, &[], &SessionState::new()).is_empty());
    }

    #[test]
    fn session_is_merged_into_rows() {
        let reg = CategoryRegistry::default();
        let items = vec![item("バナナ", "fruits")];
        let mut s = SessionState::new();
        s.toggle_checked(&items[0].id);
        let groups = project(&reg, &items, &s);
        let row = &groups[0].items[0];
        assert!(row.checked);
        assert_eq!(row.visual_state, VisualState::Dimmed);
    }

    #[test]
    fn bench_wins_over_everything() {
        let bench = item("牛乳,bench", "dairy");
        assert_eq!(
            visual_state(&bench, session(true, InventoryStatus::Unavailable)),
            VisualState::Bench
        );
        assert_eq!(
            visual_state(&bench, session(false, InventoryStatus::Available)),
            VisualState::Bench
        );
    }

    #[test]
    fn out_of_stock_beats_checked() {
        let plain = item("バナナ", "fruits");
        assert_eq!(
            visual_state(&plain, session(true, InventoryStatus::Unavailable)),
            VisualState::NeedsPurchase
        );
        assert_eq!(
            visual_state(&plain, session(false, InventoryStatus::Available)),
            VisualState::Dimmed
        );
    }

    #[test]
    fn tag_table_when_untouched() {
        let idle = ItemSession::default();
        let cases = [
            ("a,b,new", VisualState::NewConditional),
            ("a,b,tired", VisualState::TiredConditional),
            ("a,b,emer", VisualState::EmergencyConditional),
            ("a,b,low", VisualState::SaleConditional),
            ("a,new", VisualState::New),
            ("a,tired", VisualState::Tired),
            ("a,emer", VisualState::Emergency),
            ("a,low", VisualState::Sale),
            ("a,b", VisualState::Conditional),
            ("a", VisualState::Plain),
        ];
        for (raw, expected) in cases {
            assert_eq!(visual_state(&item(raw, "other"), idle), expected, "{raw}");
        }
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = STYLE_RULES.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), STYLE_RULES.len());
    }
}

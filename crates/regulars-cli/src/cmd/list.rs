use super::SessionArgs;
use crate::output::{print_json, print_table};
use anyhow::Context;
use regulars_core::config::Config;
use regulars_core::household::Household;
use regulars_core::projection;
use regulars_core::types::Tag;
use std::path::Path;

/// Grouped list in aisle order, with an optional throwaway session.
pub fn run(
    root: &Path,
    account_id: &str,
    tag: Option<&str>,
    session: &SessionArgs,
    json: bool,
) -> anyhow::Result<()> {
    let tag = tag.map(str::parse::<Tag>).transpose()?;
    let registry = Config::load(root).context("failed to load config")?.registry();
    let household = Household::load(root, account_id)
        .with_context(|| format!("household '{account_id}' not found"))?;
    let tagged;
    let items = match tag {
        Some(tag) => {
            tagged = projection::with_tag(household.list_items(), tag);
            tagged.as_slice()
        }
        None => household.list_items(),
    };

    for orphan in projection::orphaned(&registry, items) {
        tracing::warn!(
            item = %orphan.id,
            category = %orphan.category_id,
            "item has unknown category; hidden from list"
        );
    }

    let session = session.build(household.list_items())?;
    let groups = projection::project(&registry, items, &session);

    if json {
        return print_json(&serde_json::json!({
            "categories": groups,
            "needs_purchase_count": session.needs_purchase_count(items),
        }));
    }

    if groups.is_empty() {
        println!("No items.");
        return Ok(());
    }

    let mut rows = Vec::new();
    for group in &groups {
        for row in &group.items {
            rows.push(vec![
                group.category.label.clone(),
                row.display_name.clone(),
                super::tag_labels(row.tags.iter().copied()),
                row.visual_state.as_str().to_string(),
            ]);
        }
    }
    print_table(&["CATEGORY", "NAME", "TAGS", "STATE"], rows);
    println!();
    println!("To buy: {}", session.needs_purchase_count(items));
    Ok(())
}

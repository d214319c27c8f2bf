use crate::output::print_json;
use anyhow::Context;
use regulars_core::config::Config;
use regulars_core::household::Household;
use regulars_core::{migrate, projection};
use std::path::Path;

/// Import a legacy JSON dump into a household, decoding each name once.
pub fn run(root: &Path, file: &Path, account_id: &str, json: bool) -> anyhow::Result<()> {
    let imported = migrate::read_legacy_file(file)
        .with_context(|| format!("failed to read legacy dump {}", file.display()))?;
    let total = imported.len();

    let registry = Config::load(root).context("failed to load config")?.registry();
    let orphans: Vec<String> = projection::orphaned(&registry, &imported)
        .into_iter()
        .map(|i| format!("{} ({})", i.name, i.category_id))
        .collect();

    let mut household = Household::load(root, account_id)
        .with_context(|| format!("household '{account_id}' not found"))?;
    let added = household.import_items(imported);
    household.save(root).context("failed to save household")?;

    if json {
        return print_json(&serde_json::json!({
            "imported": total,
            "added": added,
            "replaced": total - added,
            "unknown_category": orphans,
        }));
    }

    println!("Imported {total} item(s) into '{account_id}' ({added} new, {} replaced).", total - added);
    for o in &orphans {
        println!("  warning: unknown category, hidden from lists: {o}");
    }
    Ok(())
}

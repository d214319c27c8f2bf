use crate::output::print_json;
use anyhow::Context;
use regulars_core::household::Household;
use regulars_core::migrate;
use std::path::Path;

/// Print a household's items in the legacy JSON shape.
pub fn run(root: &Path, account_id: &str) -> anyhow::Result<()> {
    let household = Household::load(root, account_id)
        .with_context(|| format!("household '{account_id}' not found"))?;
    print_json(&migrate::export_legacy(household.list_items()))
}

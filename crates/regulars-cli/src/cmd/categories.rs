use crate::output::{print_json, print_table};
use anyhow::Context;
use regulars_core::config::Config;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let registry = Config::load(root)
        .context("failed to load config")?
        .registry();

    if json {
        return print_json(&registry.list());
    }

    let rows = registry
        .list()
        .iter()
        .map(|c| vec![c.order.to_string(), c.id.clone(), c.label.clone()])
        .collect();
    print_table(&["ORDER", "ID", "LABEL"], rows);
    Ok(())
}

use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use regulars_core::config::Config;
use regulars_core::household::Household;
use std::path::Path;

#[derive(Subcommand)]
pub enum ItemSubcommand {
    /// Add a regular item. Legacy suffixes (`,bench`, `,emer`, ...) and
    /// comma alternatives in NAME are decoded.
    Add {
        name: String,
        #[arg(long, short = 'c')]
        category: String,
    },
    /// List regular items in creation order
    List,
    /// Rename an item, optionally moving it to another category
    Rename {
        id: String,
        name: String,
        #[arg(long, short = 'c')]
        category: Option<String>,
    },
    /// Remove an item
    Rm { id: String },
}

pub fn run(
    root: &Path,
    account_id: &str,
    subcmd: ItemSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let registry = Config::load(root).context("failed to load config")?.registry();
    let mut household = Household::load(root, account_id)
        .with_context(|| format!("household '{account_id}' not found"))?;

    match subcmd {
        ItemSubcommand::Add { name, category } => {
            let item = household
                .add_item(&name, &category, &registry)
                .with_context(|| format!("failed to add '{name}'"))?
                .clone();
            household.save(root).context("failed to save household")?;
            if json {
                print_json(&item)?;
            } else {
                println!("Added '{}' ({}) to {}.", item.name, item.id, item.category_id);
            }
        }
        ItemSubcommand::List => {
            let items = household.list_items();
            if json {
                return print_json(&items);
            }
            if items.is_empty() {
                println!("No items.");
                return Ok(());
            }
            let rows = items
                .iter()
                .map(|i| {
                    let category = registry
                        .resolve(&i.category_id)
                        .map(|c| c.label.clone())
                        .unwrap_or_else(|| format!("?{}", i.category_id));
                    vec![
                        i.id.clone(),
                        i.name.clone(),
                        category,
                        super::tag_labels(i.tags.iter().copied()),
                    ]
                })
                .collect();
            print_table(&["ID", "NAME", "CATEGORY", "TAGS"], rows);
        }
        ItemSubcommand::Rename { id, name, category } => {
            let item = household
                .rename_item(&id, &name, category.as_deref(), &registry)
                .with_context(|| format!("failed to rename item '{id}'"))?
                .clone();
            household.save(root).context("failed to save household")?;
            if json {
                print_json(&item)?;
            } else {
                println!("Renamed {} to '{}'.", item.id, item.name);
            }
        }
        ItemSubcommand::Rm { id } => {
            let removed = household
                .delete_item(&id)
                .with_context(|| format!("failed to remove item '{id}'"))?;
            household.save(root).context("failed to save household")?;
            if json {
                print_json(&serde_json::json!({ "deleted": removed.id }))?;
            } else {
                println!("Removed '{}'.", removed.name);
            }
        }
    }
    Ok(())
}

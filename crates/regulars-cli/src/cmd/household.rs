use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use regulars_core::household::Household;
use std::path::Path;

#[derive(Subcommand)]
pub enum HouseholdSubcommand {
    /// Create a household account
    Create {
        account_id: String,
        /// Display name (defaults to the account id)
        #[arg(long)]
        name: Option<String>,
        /// Login password for the web API
        #[arg(long, env = "REGULARS_PASSWORD")]
        password: String,
    },
    /// Show one household
    Show { account_id: String },
    /// List all households
    List,
}

pub fn run(root: &Path, subcmd: HouseholdSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        HouseholdSubcommand::Create {
            account_id,
            name,
            password,
        } => create(root, &account_id, name.as_deref(), &password, json),
        HouseholdSubcommand::Show { account_id } => show(root, &account_id, json),
        HouseholdSubcommand::List => list(root, json),
    }
}

fn create(
    root: &Path,
    account_id: &str,
    name: Option<&str>,
    password: &str,
    json: bool,
) -> anyhow::Result<()> {
    if password.is_empty() {
        anyhow::bail!("password must not be empty");
    }
    let hash = regulars_server::auth::hash_password(password)?;
    let household = Household::create(root, account_id, name.unwrap_or(account_id), hash)
        .with_context(|| format!("failed to create household '{account_id}'"))?;

    if json {
        print_json(&serde_json::json!({
            "account_id": household.account_id,
            "name": household.name,
        }))?;
    } else {
        println!("Created household '{}'.", household.account_id);
    }
    Ok(())
}

fn show(root: &Path, account_id: &str, json: bool) -> anyhow::Result<()> {
    let h = Household::load(root, account_id)
        .with_context(|| format!("household '{account_id}' not found"))?;

    if json {
        print_json(&serde_json::json!({
            "account_id": h.account_id,
            "name": h.name,
            "item_count": h.items.len(),
            "share_id": h.share_id,
            "created_at": h.created_at,
            "updated_at": h.updated_at,
        }))?;
        return Ok(());
    }

    println!("Household: {} ({})", h.account_id, h.name);
    println!("Items:     {}", h.items.len());
    println!("Shared:    {}", if h.share_id.is_some() { "yes" } else { "no" });
    println!("Updated:   {}", h.updated_at.format("%Y-%m-%d %H:%M"));
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let households = Household::list(root).context("failed to list households")?;

    if json {
        let rows: Vec<serde_json::Value> = households
            .iter()
            .map(|h| {
                serde_json::json!({
                    "account_id": h.account_id,
                    "name": h.name,
                    "item_count": h.items.len(),
                })
            })
            .collect();
        return print_json(&rows);
    }

    if households.is_empty() {
        println!("No households.");
        return Ok(());
    }
    let rows = households
        .iter()
        .map(|h| vec![h.account_id.clone(), h.name.clone(), h.items.len().to_string()])
        .collect();
    print_table(&["ACCOUNT", "NAME", "ITEMS"], rows);
    Ok(())
}

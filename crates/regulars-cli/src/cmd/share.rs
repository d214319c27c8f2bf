use super::SessionArgs;
use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use regulars_core::config::Config;
use regulars_core::household::Household;
use regulars_core::share;
use std::path::Path;

#[derive(Subcommand)]
pub enum ShareSubcommand {
    /// The whole list, grouped by aisle
    Full {
        /// Date printed in the header (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },
    /// Only what needs buying this trip
    Session {
        #[command(flatten)]
        session: SessionArgs,
    },
}

pub fn run(
    root: &Path,
    account_id: &str,
    subcmd: ShareSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let household = Household::load(root, account_id)
        .with_context(|| format!("household '{account_id}' not found"))?;

    let text = match subcmd {
        ShareSubcommand::Full { date } => {
            let registry = Config::load(root).context("failed to load config")?.registry();
            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            share::render_full_list(&registry, household.list_items(), today)
        }
        ShareSubcommand::Session { session } => {
            let session = session.build(household.list_items())?;
            share::render_session_list(household.list_items(), &session)
        }
    };

    if json {
        print_json(&serde_json::json!({ "text": text }))
    } else {
        println!("{text}");
        Ok(())
    }
}

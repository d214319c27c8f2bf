mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    household::HouseholdSubcommand, item::ItemSubcommand, share::ShareSubcommand, SessionArgs,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "regulars",
    about = "Shared household list of regular groceries, grouped by supermarket aisle",
    version,
    propagate_version = true
)]
struct Cli {
    /// Store root (default: auto-detect from .regulars/)
    #[arg(long, global = true, env = "REGULARS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .regulars/ and a default config
    Init,

    /// Manage household accounts
    Household {
        #[command(subcommand)]
        subcommand: HouseholdSubcommand,
    },

    /// Manage a household's regular items
    Item {
        /// Household account id
        #[arg(long, short = 'H', env = "REGULARS_HOUSEHOLD")]
        household: String,
        #[command(subcommand)]
        subcommand: ItemSubcommand,
    },

    /// Show the list grouped by aisle
    List {
        #[arg(long, short = 'H', env = "REGULARS_HOUSEHOLD")]
        household: String,
        /// Only items with this tag (`bench` shows the bench members)
        #[arg(long)]
        tag: Option<String>,
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Render shareable text
    Share {
        #[arg(long, short = 'H', env = "REGULARS_HOUSEHOLD")]
        household: String,
        #[command(subcommand)]
        subcommand: ShareSubcommand,
    },

    /// Show the aisle order
    Categories,

    /// Import a legacy JSON dump, decoding suffixes in item names
    Migrate {
        file: PathBuf,
        #[arg(long, short = 'H', env = "REGULARS_HOUSEHOLD")]
        household: String,
    },

    /// Print a household's items in the legacy JSON shape
    Export {
        #[arg(long, short = 'H', env = "REGULARS_HOUSEHOLD")]
        household: String,
    },

    /// Run the HTTP API
    Serve {
        /// Port to listen on (default: server.port from config, 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,

        /// Open a browser once listening
        #[arg(long)]
        open: bool,

        /// Token signing secret
        #[arg(long, env = "REGULARS_SECRET", hide_env_values = true)]
        secret: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Household { subcommand } => cmd::household::run(&root, subcommand, cli.json),
        Commands::Item {
            household,
            subcommand,
        } => cmd::item::run(&root, &household, subcommand, cli.json),
        Commands::List {
            household,
            tag,
            session,
        } => cmd::list::run(&root, &household, tag.as_deref(), &session, cli.json),
        Commands::Share {
            household,
            subcommand,
        } => cmd::share::run(&root, &household, subcommand, cli.json),
        Commands::Categories => cmd::categories::run(&root, cli.json),
        Commands::Migrate { file, household } => {
            cmd::migrate::run(&root, &file, &household, cli.json)
        }
        Commands::Export { household } => cmd::export::run(&root, &household),
        Commands::Serve { port, open, secret } => cmd::serve::run(&root, port, open, secret),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

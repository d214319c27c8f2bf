use crate::error::{RegularsError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const REGULARS_DIR: &str = ".regulars";
pub const HOUSEHOLDS_DIR: &str = ".regulars/households";
pub const CONFIG_FILE: &str = ".regulars/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn households_dir(root: &Path) -> PathBuf {
    root.join(HOUSEHOLDS_DIR)
}

pub fn household_path(root: &Path, account_id: &str) -> PathBuf {
    households_dir(root).join(format!("{account_id}.yaml"))
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Account id validation
// ---------------------------------------------------------------------------

static ACCOUNT_ID_RE: OnceLock<Regex> = OnceLock::new();

fn account_id_re() -> &'static Regex {
    ACCOUNT_ID_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\-]{1,64}$").unwrap())
}

/// Account ids double as file names, so they are restricted to a safe set.
pub fn validate_account_id(account_id: &str) -> Result<()> {
    if !account_id_re().is_match(account_id) {
        return Err(RegularsError::InvalidAccountId(account_id.to_string()));
    }
    Ok(())
}

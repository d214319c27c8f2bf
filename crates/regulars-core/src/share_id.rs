//! Capability ids for the read-only shared view.
//!
//! Anyone holding the id can read the list. There is no expiry or revocation
//! beyond replacing the id on the household.

use rand::distributions::Alphanumeric;
use rand::Rng;

pub const SHARE_ID_LEN: usize = 64;

pub fn generate() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SHARE_ID_LEN)
        .map(char::from)
        .collect()
}

pub fn is_valid(id: &str) -> bool {
    id.len() == SHARE_ID_LEN && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

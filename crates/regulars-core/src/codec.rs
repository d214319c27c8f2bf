//! Legacy item-name encoding.
//!
//! Older lists packed purchase metadata into the free-text name:
//!
//! - a trailing `,new` / `,tired` / `,emer` / `,low` / `,bench` suffix marks a
//!   [`Tag`] (only the last comma segment is ever tested);
//! - the remaining body is split on commas into interchangeable alternatives
//!   ("buy whichever is cheaper").
//!
//! [`decode`] never fails. Anything it cannot interpret stays in the name.

use crate::types::Tag;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

static SUFFIX_RE: OnceLock<Regex> = OnceLock::new();

fn suffix_re() -> &'static Regex {
    SUFFIX_RE.get_or_init(|| Regex::new(r",\s*(new|tired|emer|low|bench)\s*$").unwrap())
}

/// Result of decoding one raw name. Derived data, never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedName {
    /// Single-line label. Equals the stripped body (commas kept) when
    /// `has_condition`, otherwise the lone alternative.
    pub display_name: String,
    pub tags: BTreeSet<Tag>,
    pub alternatives: Vec<String>,
    pub has_condition: bool,
}

impl DecodedName {
    pub fn tag(&self) -> Option<Tag> {
        self.tags.iter().next().copied()
    }
}

/// Split a trimmed name into `(body, tag)`, stripping at most one suffix.
pub fn split_suffix(trimmed: &str) -> (&str, Option<Tag>) {
    match suffix_re().captures(trimmed) {
        Some(caps) => {
            let whole = caps.get(0).expect("group 0 always present");
            let tag = caps.get(1).and_then(|m| Tag::from_token(m.as_str()));
            (trimmed[..whole.start()].trim_end(), tag)
        }
        None => (trimmed, None),
    }
}

pub fn decode(raw_name: &str) -> DecodedName {
    let trimmed = raw_name.trim();
    let (body, tag) = split_suffix(trimmed);

    let mut alternatives: Vec<String> = body
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    if alternatives.is_empty() {
        alternatives.push(body.to_string());
    }

    let has_condition = alternatives.len() >= 2;
    let display_name = if has_condition {
        body.to_string()
    } else {
        alternatives[0].clone()
    };

    DecodedName {
        display_name,
        tags: tag.into_iter().collect(),
        alternatives,
        has_condition,
    }
}

/// Inverse of [`decode`] for well-formed input: alternatives joined by commas,
/// followed by the tag's suffix token.
pub fn encode<S: AsRef<str>>(alternatives: &[S], tag: Option<Tag>) -> String {
    let mut out = alternatives
        .iter()
        .map(|a| a.as_ref().trim())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    if let Some(tag) = tag {
        out.push(',');
        out.push_str(tag.token());
    }
    out
}

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Purchase-behaviour marker carried by an item.
///
/// Declaration order is the order tags are annotated in share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    New,
    Tired,
    Emergency,
    SaleSensitive,
    Bench,
}

impl Tag {
    pub fn all() -> &'static [Tag] {
        &[
            Tag::New,
            Tag::Tired,
            Tag::Emergency,
            Tag::SaleSensitive,
            Tag::Bench,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::New => "new",
            Tag::Tired => "tired",
            Tag::Emergency => "emergency",
            Tag::SaleSensitive => "sale_sensitive",
            Tag::Bench => "bench",
        }
    }

    /// The suffix token used in legacy item names (`牛乳,bench`).
    pub fn token(self) -> &'static str {
        match self {
            Tag::New => "new",
            Tag::Tired => "tired",
            Tag::Emergency => "emer",
            Tag::SaleSensitive => "low",
            Tag::Bench => "bench",
        }
    }

    pub fn from_token(token: &str) -> Option<Tag> {
        Tag::all().iter().copied().find(|t| t.token() == token)
    }

    /// Annotation appended after the item name in the full share text.
    pub fn label(self) -> &'static str {
        match self {
            Tag::New => "🤔本当に必要？",
            Tag::Tired => "😴元気ない時に買う",
            Tag::Emergency => "🚨非常食",
            Tag::SaleSensitive => "💰安い場合に買う",
            Tag::Bench => "🏆必ず買うもの",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = crate::error::RegularsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tag::from_token(s)
            .or_else(|| Tag::all().iter().copied().find(|t| t.as_str() == s))
            .ok_or_else(|| crate::error::RegularsError::UnknownTag(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// InventoryStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    #[default]
    Unknown,
    Available,
    Unavailable,
}

impl InventoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InventoryStatus::Unknown => "unknown",
            InventoryStatus::Available => "available",
            InventoryStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InventoryStatus {
    type Err = crate::error::RegularsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(InventoryStatus::Unknown),
            "available" => Ok(InventoryStatus::Available),
            "unavailable" => Ok(InventoryStatus::Unavailable),
            _ => Err(crate::error::RegularsError::UnknownInventoryStatus(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// VisualState
// ---------------------------------------------------------------------------

/// How a row is drawn in the grouped list. Each variant is a distinct accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualState {
    Bench,
    NeedsPurchase,
    Dimmed,
    NewConditional,
    TiredConditional,
    EmergencyConditional,
    SaleConditional,
    New,
    Tired,
    Emergency,
    Sale,
    Conditional,
    Plain,
}

impl VisualState {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::Bench => "bench",
            VisualState::NeedsPurchase => "needs-purchase",
            VisualState::Dimmed => "dimmed",
            VisualState::NewConditional => "new-conditional",
            VisualState::TiredConditional => "tired-conditional",
            VisualState::EmergencyConditional => "emergency-conditional",
            VisualState::SaleConditional => "sale-conditional",
            VisualState::New => "new",
            VisualState::Tired => "tired",
            VisualState::Emergency => "emergency",
            VisualState::Sale => "sale",
            VisualState::Conditional => "conditional",
            VisualState::Plain => "plain",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

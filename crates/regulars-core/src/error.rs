use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegularsError {
    #[error("household not found: {0}")]
    HouseholdNotFound(String),

    #[error("household already exists: {0}")]
    HouseholdExists(String),

    #[error("invalid account id '{0}': must be 1-64 characters of letters, digits, '-' or '_'")]
    InvalidAccountId(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("item name must not be empty")]
    EmptyItemName,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("unknown inventory status: {0}")]
    UnknownInventoryStatus(String),

    #[error("invalid share id")]
    InvalidShareId,

    #[error("share id not found")]
    ShareIdNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegularsError>;

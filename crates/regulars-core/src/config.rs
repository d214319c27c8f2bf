use crate::category::{default_categories, CategoryDef, CategoryRegistry};
use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed browser origin. `None` allows any origin.
    #[serde(default)]
    pub cors_origin: Option<String>,
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u32,
}

fn default_port() -> u16 {
    3001
}

fn default_token_ttl_days() -> u32 {
    7
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors_origin: None,
            token_ttl_days: default_token_ttl_days(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            categories: default_categories(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Read `.regulars/config.yaml`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn registry(&self) -> CategoryRegistry {
        CategoryRegistry::new(self.categories.clone())
    }

    /// Check the category table for problems that would make aisle order
    /// ambiguous or items unreachable.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.categories.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "no categories configured; every item would be hidden".to_string(),
            });
        }

        let mut ids = HashSet::new();
        let mut orders = HashSet::new();
        for cat in &self.categories {
            if cat.id.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("category with label '{}' has an empty id", cat.label),
                });
            }
            if !ids.insert(cat.id.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("duplicate category id '{}'", cat.id),
                });
            }
            if !orders.insert(cat.order) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "category '{}' shares order {} with another category",
                        cat.id, cat.order
                    ),
                });
            }
        }

        if self.server.token_ttl_days == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "server.token_ttl_days is 0; issued tokens expire immediately"
                    .to_string(),
            });
        }

        warnings
    }
}

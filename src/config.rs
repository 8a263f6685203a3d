use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,
    #[serde(default = "default_keyring_root")]
    pub keyring_root: PathBuf,
}

fn default_database_path() -> String {
    "docstore.db".to_string()
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("storage")
}

fn default_keyring_root() -> PathBuf {
    PathBuf::from("keyring")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            storage_root: default_storage_root(),
            keyring_root: default_keyring_root(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a yaml file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("database_path"));
        assert!(yaml.contains("storage_root"));
    }

    #[test]
    fn test_deserialization() {
        let yaml = r#"
database_path: "data/app.db"
storage_root: "data/storage"
keyring_root: "data/keyring"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.database_path, "data/app.db");
        assert_eq!(config.storage_root, PathBuf::from("data/storage"));
        assert_eq!(config.keyring_root, PathBuf::from("data/keyring"));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: AppConfig = serde_yaml::from_str("database_path: \"custom.db\"").unwrap();
        assert_eq!(config.database_path, "custom.db");
        assert_eq!(config.storage_root, PathBuf::from("storage"));
    }
}

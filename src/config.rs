use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "roster.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Database file, relative to the project root unless absolute
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "characters.db".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on GET requests
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl RosterConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let config = Self::load_file(&config_path)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| RosterError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RosterConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(RosterError::NotInitialized);
            }
        }
    }

    pub fn database_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.store.path)
    }

    pub fn log_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.log.file.as_ref().map(|f| project_root.join(f))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: RosterConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.path, "characters.db");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert!(config.server.graphiql);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config: RosterConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_save_and_load_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.store.path = "data/cast.db".to_string();
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (loaded, root) = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded.store.path, "data/cast.db");
        assert_eq!(
            loaded.database_path(&root),
            temp_dir.path().join("data/cast.db")
        );
    }

    #[test]
    fn test_missing_config_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let err = RosterConfig::find_config_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, RosterError::NotInitialized));
    }
}

use anyhow::{anyhow, Result};
use config::Config;
use std::collections::HashMap;
use std::path::Path;

/// Application configuration, constructed once at startup and passed to the
/// pieces that need it. There is no ambient global state.
#[derive(Debug, Clone)]
pub struct RolodexConfig {
    /// Path to the SQLite database file
    pub db_path: String,

    /// Address the web interface binds to
    pub listen_address: String,

    /// Port the web interface listens on
    pub listen_port: u16,
}

const EMPTY_CONFIG: &str = r#"### rolodex configuration file

### path to the SQLite database file
# db_path = "~/.rolodex/rolodex.db"

### web interface bind address and port
# listen_address = "127.0.0.1"
# listen_port = 8080
"#;

const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1";
const DEFAULT_LISTEN_PORT: u16 = 8080;

impl Default for RolodexConfig {
    fn default() -> Self {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        Self {
            db_path: format!("{}/.rolodex/rolodex.db", home_dir),
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }
}

impl RolodexConfig {
    /// Create and initialize a new configuration
    ///
    /// Reads the TOML file at `path` (default `$HOME/.rolodex/rolodex.toml`,
    /// created with a commented template when absent), then applies `ROLODEX_*`
    /// environment variable overrides.
    pub fn new(path: &Option<String>) -> Result<RolodexConfig> {
        let mut builder = Config::builder();

        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .to_str()
            .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?
            .to_owned();

        // Config dir
        let rolodex_dir = format!("{}/.rolodex", home_dir.as_str());

        // Add in toml configuration file
        match path {
            Some(p) => {
                let path = Path::new(p.as_str());
                if path.exists() {
                    let path_str = path
                        .to_str()
                        .ok_or_else(|| anyhow!("Could not convert path to string"))?;
                    builder = builder.add_source(config::File::with_name(path_str));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG)
                        .map_err(|e| anyhow!("Unable to create config file: {}", e))?;
                }
            }
            None => {
                std::fs::create_dir_all(rolodex_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create rolodex directory: {}", e))?;
                let p = format!("{}/rolodex.toml", rolodex_dir.as_str());
                if Path::new(p.as_str()).exists() {
                    builder = builder.add_source(config::File::with_name(p.as_str()));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG).map_err(|e| {
                        anyhow!("Unable to create config file {}: {}", p.as_str(), e)
                    })?;
                }
            }
        }

        // Add in settings from the environment (with a prefix of ROLODEX)
        // E.g., `ROLODEX_DB_PATH=/tmp/test.db rolodex serve` would override the
        // database path
        builder = builder.add_source(config::Environment::with_prefix("ROLODEX"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        // Parse database path
        let db_path = match config.get("db_path") {
            Some(p) => p.to_string(),
            None => {
                std::fs::create_dir_all(rolodex_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create data directory: {}", e))?;
                format!("{}/rolodex.db", rolodex_dir.as_str())
            }
        };

        // Parse listen address (default: 127.0.0.1)
        let listen_address = config
            .get("listen_address")
            .map(|a| a.to_string())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string());

        // Parse listen port (default: 8080)
        let listen_port = config
            .get("listen_port")
            .map(|p| {
                p.parse::<u16>()
                    .map_err(|e| anyhow!("Invalid listen_port '{}': {}", p, e))
            })
            .transpose()?
            .unwrap_or(DEFAULT_LISTEN_PORT);

        Ok(RolodexConfig {
            db_path,
            listen_address,
            listen_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert!(config.db_path.ends_with("rolodex.db"));
        assert_eq!(config.listen_address, "127.0.0.1");
        assert_eq!(config.listen_port, 8080);
    }

    #[test]
    fn test_config_from_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rolodex.toml");
        std::fs::write(
            &path,
            "db_path = \"/tmp/records.db\"\nlisten_port = \"9000\"\n",
        )
        .unwrap();

        let config = RolodexConfig::new(&Some(path.to_str().unwrap().to_string())).unwrap();
        assert_eq!(config.db_path, "/tmp/records.db");
        assert_eq!(config.listen_port, 9000);
        assert_eq!(config.listen_address, "127.0.0.1");
    }

    #[test]
    fn test_missing_explicit_file_writes_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fresh.toml");

        let config = RolodexConfig::new(&Some(path.to_str().unwrap().to_string())).unwrap();
        assert!(path.exists());
        assert_eq!(config.listen_port, 8080);
    }
}

//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::permissions::{RoleAuthority, RoleTable};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// JSON role table record (optional, builtin grants when unset)
    pub role_table_path: Option<PathBuf>,

    /// Origins allowed by CORS (comma-separated in the environment)
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            role_table_path: env::var("ROLE_TABLE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
            ),
        })
    }

    /// Build the role authority from the configured table.
    ///
    /// A configured table that fails to load or validate is an error; it
    /// never falls back to the builtin grants.
    pub fn load_authority(&self) -> Result<RoleAuthority> {
        let table = match &self.role_table_path {
            Some(path) => RoleTable::load(path)
                .with_context(|| format!("Failed to load role table from {}", path.display()))?,
            None => RoleTable::builtin(),
        };
        Ok(RoleAuthority::new(table))
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            role_table_path: None,
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BIND_ADDRESS");
        env::remove_var("ROLE_TABLE_PATH");
        env::remove_var("CORS_ORIGINS");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.role_table_path.is_none());
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("BIND_ADDRESS", "127.0.0.1:9000");
        env::set_var("ROLE_TABLE_PATH", "/etc/brouhaha/roles.json");
        env::set_var("CORS_ORIGINS", "https://brouhaha.app, https://admin.brouhaha.app,");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(
            config.role_table_path,
            Some(PathBuf::from("/etc/brouhaha/roles.json"))
        );
        assert_eq!(
            config.cors_origins,
            vec![
                "https://brouhaha.app".to_string(),
                "https://admin.brouhaha.app".to_string()
            ]
        );
    }

    #[test]
    fn test_load_authority_builtin() {
        let authority = Config::default_for_test().load_authority().unwrap();
        assert!(authority.has_permission("creator", "create_content"));
    }

    #[test]
    fn test_load_authority_from_file() {
        let path = env::temp_dir().join(format!("bh-roles-{}.json", std::process::id()));
        let mut record = RoleTable::builtin().to_record();
        record
            .roles
            .get_mut("reader")
            .unwrap()
            .permissions
            .retain(|p| p != "rate_content");
        std::fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        let config = Config {
            role_table_path: Some(path.clone()),
            ..Config::default_for_test()
        };
        let authority = config.load_authority().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(authority.has_permission("reader", "view_content"));
        assert!(!authority.has_permission("reader", "rate_content"));
    }

    #[test]
    fn test_load_authority_missing_file_fails() {
        let config = Config {
            role_table_path: Some(PathBuf::from("/nonexistent/roles.json")),
            ..Config::default_for_test()
        };
        assert!(config.load_authority().is_err());
    }
}

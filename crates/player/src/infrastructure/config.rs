//! Process configuration

use std::env;

use anyhow::{Context, Result};
use pde_domain::UserId;

use super::dialog_protocol::DEFAULT_DIALOG_TIMEOUT_MS;

/// Configuration loaded from environment variables (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Identity of this client on the module channel
    pub user_id: UserId,
    /// Host game system id; selects the system adapter
    pub system_id: String,
    /// Remote dialog timeout; 0 waits indefinitely
    pub dialog_timeout_ms: u64,
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            user_id: UserId::parse(lookup("PDE_USER_ID").unwrap_or_else(|| "gamemaster".to_string()))
                .context("PDE_USER_ID must not be empty")?,
            system_id: lookup("PDE_SYSTEM_ID")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "generic".to_string()),
            dialog_timeout_ms: lookup("PDE_DIALOG_TIMEOUT_MS")
                .unwrap_or_else(|| DEFAULT_DIALOG_TIMEOUT_MS.to_string())
                .trim()
                .parse()
                .context("PDE_DIALOG_TIMEOUT_MS must be a whole number of milliseconds")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<PlayerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.user_id.as_str(), "gamemaster");
        assert_eq!(config.system_id, "generic");
        assert_eq!(config.dialog_timeout_ms, 120_000);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PDE_USER_ID", "player-1"),
            ("PDE_SYSTEM_ID", " dnd5e "),
            ("PDE_DIALOG_TIMEOUT_MS", "0"),
        ])
        .unwrap();
        assert_eq!(config.user_id.as_str(), "player-1");
        assert_eq!(config.system_id, "dnd5e");
        assert_eq!(config.dialog_timeout_ms, 0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("PDE_DIALOG_TIMEOUT_MS", "soon")]).is_err());
        assert!(config(&[("PDE_USER_ID", "  ")]).is_err());
    }
}

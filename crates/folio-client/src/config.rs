//! Client configuration, resolved once at startup.

use std::time::Duration;

use folio_shared::constants::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

const DEFAULT_GITHUB_USERNAME: &str = "kavishka-ashan";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Content API address, without a trailing slash.
    /// Env: `API_BASE`
    /// Default: `http://localhost:5000`
    pub api_base: String,

    /// Per-request timeout. A request that runs past it counts as failed.
    /// Env: `API_TIMEOUT_SECS`
    /// Default: 10 seconds
    pub timeout: Duration,

    /// GitHub account linked when a project has no repository of its own.
    /// Env: `GITHUB_USERNAME`
    pub github_username: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = var("API_BASE") {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(secs) = var("API_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %secs, "Invalid API_TIMEOUT_SECS, using default"),
            }
        }

        if let Some(user) = var("GITHUB_USERNAME") {
            config.github_username = user.trim().to_string();
        }

        config
    }

    /// Profile link used as the repository fallback.
    pub fn github_profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.github_profile_url(), "https://github.com/kavishka-ashan");
    }

    #[test]
    fn api_base_trailing_slash_is_trimmed() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "API_BASE").then(|| "https://api.portfolio.dev/".to_string())
        });
        assert_eq!(config.api_base, "https://api.portfolio.dev");
    }

    #[test]
    fn zero_timeout_is_ignored() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "API_TIMEOUT_SECS").then(|| "0".to_string())
        });
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}

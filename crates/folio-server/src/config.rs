//! Server configuration loaded from environment variables.
//!
//! Everything except the database location has a default so the API can
//! start locally with almost no setup. Mail settings are all-or-nothing:
//! without them the contact endpoint answers with a configuration error.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use folio_shared::constants::{DEFAULT_HTTP_PORT, DEFAULT_TIMEOUT_SECS};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Outbound mail account.
#[derive(Clone)]
pub struct MailSettings {
    /// Account the mail is sent from.
    /// Env: `EMAIL_USER`
    pub user: String,

    /// Account password (for Gmail, an app password).
    /// Env: `EMAIL_PASS`
    pub password: String,

    /// Where contact messages are delivered.
    /// Env: `EMAIL_TO`
    pub to: String,

    /// SMTP relay host.
    /// Env: `SMTP_HOST`
    /// Default: `smtp.gmail.com`
    pub smtp_host: String,

    /// Upper bound on a single dispatch.
    /// Env: `MAIL_TIMEOUT_SECS`
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("to", &self.to)
            .field("smtp_host", &self.smtp_host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP API, built from `PORT`.
    /// Default: `0.0.0.0:5000`
    pub http_addr: SocketAddr,

    /// SQLite content database.
    /// Env: `DATABASE_PATH`
    /// No default: the server refuses to start without a store.
    pub database_path: Option<PathBuf>,

    /// JSON file imported into the store when it is empty.
    /// Env: `SEED_PATH`
    pub seed_path: Option<PathBuf>,

    /// Present only when `EMAIL_USER`, `EMAIL_PASS` and `EMAIL_TO` are all set.
    pub mail: Option<MailSettings>,

    /// Allowed CORS origins. Empty means any origin.
    /// Env: `CORS_ORIGIN` (comma-separated)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], DEFAULT_HTTP_PORT).into(),
            database_path: None,
            seed_path: None,
            mail: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = var("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.http_addr.set_port(port),
                Err(_) => tracing::warn!(value = %port, "Invalid PORT, using default"),
            }
        }

        config.database_path = var("DATABASE_PATH").map(PathBuf::from);
        config.seed_path = var("SEED_PATH").map(PathBuf::from);

        if let (Some(user), Some(password), Some(to)) =
            (var("EMAIL_USER"), var("EMAIL_PASS"), var("EMAIL_TO"))
        {
            let timeout = var("MAIL_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS);

            config.mail = Some(MailSettings {
                user,
                password,
                to,
                smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                timeout: Duration::from_secs(timeout),
            });
        }

        if let Some(origins) = var("CORS_ORIGIN") {
            config.cors_origins = parse_origins(&origins);
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

/// Split a comma-separated origin list, trimming and dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Plain-text body served on `GET /`
pub const LIVENESS_TEXT: &str = "Portfolio API running ✅";

/// Default HTTP API port (server)
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// API base used by the client when none is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Maximum accepted request body in bytes (1 MiB)
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Tag prefixed to every contact mail subject
pub const SUBJECT_TAG: &str = "[Portfolio]";

/// Subject used when the submitter leaves it blank
pub const DEFAULT_SUBJECT: &str = "New message";

/// Display name on the `From:` header of relayed contact mail
pub const CONTACT_SENDER_NAME: &str = "Portfolio Contact";

/// Default request / mail dispatch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

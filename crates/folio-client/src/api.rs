//! HTTP access to the content API.
//!
//! Views depend on the [`ContentSource`] and [`ContactSender`] traits rather
//! than on [`ContentClient`] directly, so tests can count and script calls.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use folio_shared::api::ContactReply;
use folio_shared::contact::ContactMessage;
use folio_shared::models::{Education, Experience, Profile, Project};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Read side of the content API.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// `null` from the API is `Ok(None)`.
    async fn profile(&self) -> Result<Option<Profile>>;

    async fn projects(&self) -> Result<Vec<Project>>;

    async fn education(&self) -> Result<Vec<Education>>;

    async fn experience(&self) -> Result<Vec<Experience>>;

    /// A single project by id or slug. Unknown ids are `Ok(None)`.
    async fn project(&self, id: &str) -> Result<Option<Project>>;
}

/// Write side of the content API.
#[async_trait]
pub trait ContactSender: Send + Sync {
    /// Submit `message`; on success returns the relayed mail's id.
    async fn send_contact(&self, message: &ContactMessage) -> Result<String>;
}

/// reqwest-backed client for the content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base: Url,
}

impl ContentClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base)
            .map_err(|_| ClientError::InvalidBase(config.api_base.clone()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBase(config.api_base.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("folio-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base })
    }

    /// `base` with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments);
        debug!(url = %url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn profile(&self) -> Result<Option<Profile>> {
        self.get_json(&["api", "profile"]).await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.get_json(&["api", "projects"]).await
    }

    async fn education(&self) -> Result<Vec<Education>> {
        self.get_json(&["api", "education"]).await
    }

    async fn experience(&self) -> Result<Vec<Experience>> {
        self.get_json(&["api", "experience"]).await
    }

    async fn project(&self, id: &str) -> Result<Option<Project>> {
        match self.get_json(&["api", "projects", id]).await {
            Ok(project) => Ok(Some(project)),
            Err(ClientError::Status(StatusCode::NOT_FOUND)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ContactSender for ContentClient {
    async fn send_contact(&self, message: &ContactMessage) -> Result<String> {
        let url = self.endpoint(&["api", "contact"]);
        debug!(url = %url, "POST");

        let response = self.http.post(url).json(message).send().await?;
        let status = response.status();
        let body = response.text().await?;

        interpret_contact_reply(status, &body)
    }
}

/// A reply is a success only with a 2xx status and `ok: true` in the body.
fn interpret_contact_reply(status: StatusCode, body: &str) -> Result<String> {
    let reply: ContactReply = match serde_json::from_str(body) {
        Ok(reply) => reply,
        Err(e) if status.is_success() => return Err(ClientError::Decode(e.to_string())),
        Err(_) => return Err(ClientError::Status(status)),
    };

    if status.is_success() && reply.ok {
        return Ok(reply.id.unwrap_or_default());
    }

    Err(ClientError::Rejected(
        reply
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "Failed to send email".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ContentClient {
        ContentClient::new(&ClientConfig {
            api_base: base.into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.endpoint(&["api", "projects", "a b/c"]).as_str(),
            "http://localhost:5000/api/projects/a%20b%2Fc"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let c = client("https://example.dev/backend/");
        assert_eq!(
            c.endpoint(&["api", "health"]).as_str(),
            "https://example.dev/backend/api/health"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        let err = ContentClient::new(&ClientConfig {
            api_base: "not a url".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidBase(_)));
    }

    #[test]
    fn contact_reply_success() {
        let id = interpret_contact_reply(StatusCode::OK, r#"{"ok":true,"id":"<1@x>"}"#).unwrap();
        assert_eq!(id, "<1@x>");
    }

    #[test]
    fn contact_reply_server_message_is_kept() {
        let err = interpret_contact_reply(
            StatusCode::BAD_REQUEST,
            r#"{"ok":false,"error":"Invalid email"}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email");
    }

    #[test]
    fn contact_reply_ok_false_on_2xx_is_failure() {
        let err = interpret_contact_reply(StatusCode::OK, r#"{"ok":false}"#).unwrap_err();
        assert!(matches!(err, ClientError::Rejected(ref m) if m == "Failed to send email"));
    }

    #[test]
    fn contact_reply_non_json_error_page() {
        let err = interpret_contact_reply(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
            .unwrap_err();
        assert!(matches!(err, ClientError::Status(StatusCode::BAD_GATEWAY)));
    }
}

//! Outbound mail for the contact endpoint.
//!
//! Routes only see the [`Mailer`] trait. The production implementation,
//! [`SmtpMailer`], holds one pooled SMTP transport for the life of the
//! process.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use folio_shared::constants::CONTACT_SENDER_NAME;
use folio_shared::contact::MailContent;

use crate::config::MailSettings;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address {address:?}: {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Sends one contact message to the site owner.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatch `mail` and return the message id it was sent under.
    async fn send(&self, mail: MailContent) -> Result<String, MailError>;
}

/// [`Mailer`] over an authenticated SMTP relay (Gmail by default).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    id_domain: String,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(settings.timeout))
            .build();

        let from = Mailbox::new(
            Some(CONTACT_SENDER_NAME.to_string()),
            parse_address(&settings.user)?.email,
        );

        Ok(Self {
            transport,
            from,
            to: parse_address(&settings.to)?,
            id_domain: message_id_domain(&settings.user),
        })
    }
}

impl SmtpMailer {
    /// Build the outgoing message. A reply-to that lettre cannot parse is
    /// left off; the visitor's address is still in both bodies.
    fn compose(&self, mail: MailContent, message_id: &str) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(mail.subject)
            .message_id(Some(message_id.to_string()));

        match parse_address(&mail.reply_to) {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => warn!(error = %e, "Sending without reply-to"),
        }

        builder
            .multipart(MultiPart::alternative_plain_html(mail.text, mail.html))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: MailContent) -> Result<String, MailError> {
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.id_domain);
        let message = self.compose(mail, &message_id)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        debug!(
            message_id = %message_id,
            code = %response.code(),
            "SMTP relay accepted message"
        );

        Ok(message_id)
    }
}

/// The mailer for the contact endpoint, if one can be built.
///
/// Absent or unusable settings leave the endpoint disabled; the server keeps
/// serving content either way.
pub fn from_settings(settings: Option<&MailSettings>) -> Option<Arc<dyn Mailer>> {
    let Some(settings) = settings else {
        warn!("EMAIL_USER / EMAIL_PASS / EMAIL_TO not all set; contact endpoint disabled");
        return None;
    };

    match SmtpMailer::new(settings) {
        Ok(mailer) => {
            info!(host = %settings.smtp_host, to = %settings.to, "Contact mail enabled");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            error!(error = %e, "Invalid mail settings; contact endpoint disabled");
            None
        }
    }
}

fn parse_address(address: &str) -> Result<Mailbox, MailError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| MailError::Address {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Domain half of the sending account, used to scope generated message ids.
fn message_id_domain(user: &str) -> String {
    user.rsplit_once('@')
        .map(|(_, domain)| domain.trim())
        .filter(|d| !d.is_empty())
        .unwrap_or("localhost")
        .to_string()
}

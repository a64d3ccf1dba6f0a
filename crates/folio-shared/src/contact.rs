//! Contact-form submissions: validation and the mail derived from them.
//!
//! A [`ContactMessage`] is never stored. It is validated, turned into a
//! [`MailContent`] and handed to whatever mailer the server was built with.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUBJECT, SUBJECT_TAG};
use crate::error::ContactError;

/// A visitor's message from the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Everything the mailer needs besides the sender/recipient addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailContent {
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl ContactMessage {
    /// Check required fields first, then the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_plausible_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// The subject as typed, or `None` when blank.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }

    pub fn mail_subject(&self) -> String {
        format!("{SUBJECT_TAG} {}", self.subject().unwrap_or(DEFAULT_SUBJECT))
    }

    pub fn text_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
        .trim()
        .to_string()
    }

    pub fn html_body(&self) -> String {
        let subject_line = self
            .subject()
            .map(|s| format!("<p><strong>Subject:</strong> {}</p>\n", escape_markup(s)))
            .unwrap_or_default();

        format!(
            concat!(
                "<div style=\"font-family:system-ui,Segoe UI,Roboto,Arial\">\n",
                "<h2 style=\"margin:0 0 8px\">New portfolio message</h2>\n",
                "<p><strong>Name:</strong> {name}</p>\n",
                "<p><strong>Email:</strong> {email}</p>\n",
                "{subject}",
                "<hr style=\"border:none;border-top:1px solid #eee;margin:12px 0\" />\n",
                "<p style=\"white-space:pre-wrap\">{message}</p>\n",
                "</div>",
            ),
            name = escape_markup(&self.name),
            email = escape_markup(&self.email),
            subject = subject_line,
            message = escape_markup(&self.message),
        )
    }

    /// Address for the reply-to header: the part of `email` that matched
    /// the shape check, so surrounding text does not end up in the header.
    pub fn reply_address(&self) -> String {
        email_span(&self.email)
            .unwrap_or_else(|| self.email.trim())
            .to_string()
    }

    pub fn to_mail(&self) -> MailContent {
        MailContent {
            reply_to: self.reply_address(),
            subject: self.mail_subject(),
            text: self.text_body(),
            html: self.html_body(),
        }
    }
}

/// Replace `<` so submitted text cannot open tags in the HTML mail.
pub fn escape_markup(s: &str) -> String {
    s.replace('<', "&lt;")
}

/// Unanchored email shape: a non-space run with an `@`, then a later `.`.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

/// Whether `s` contains something shaped like an email address anywhere.
pub fn is_plausible_email(s: &str) -> bool {
    email_pattern().is_match(s)
}

/// The address-shaped part of `s`, with wrapping punctuation stripped.
fn email_span(s: &str) -> Option<&str> {
    email_pattern()
        .find(s)
        .map(|m| m.as_str().trim_matches(|c: char| "<>()[],;:\"'".contains(c)))
        .filter(|span| !span.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, subject: Option<&str>, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            subject: subject.map(Into::into),
            message: body.into(),
        }
    }

    #[test]
    fn missing_fields_are_rejected_before_email_shape() {
        assert_eq!(
            message("", "a@b.com", None, "hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            message("Jo", "", None, "hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            message("Jo", "not-an-email", None, "").validate(),
            Err(ContactError::MissingFields)
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["jo", "jo@x", "@x.com", "jo@.com", "jo@x.", "jo @x .com"] {
            assert_eq!(
                message("Jo", email, None, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn plausible_emails_pass() {
        for email in ["jo@x.com", "a.b@c.d.e", "first+tag@sub.example.org", "x jo@x.co y"] {
            assert!(is_plausible_email(email), "{email} should be valid");
        }
        assert_eq!(message("Jo", "jo@x.com", None, "hi").validate(), Ok(()));
    }

    #[test]
    fn reply_address_is_the_matched_span() {
        assert_eq!(message("Jo", "jo@x.com", None, "hi").reply_address(), "jo@x.com");
        assert_eq!(
            message("Jo", "Jo Smith jo@x.com", None, "hi").reply_address(),
            "jo@x.com"
        );
        assert_eq!(message("Jo", "jo@x.com,", None, "hi").reply_address(), "jo@x.com");
        assert_eq!(message("Jo", "<jo@x.com>", None, "hi").reply_address(), "jo@x.com");
        assert_eq!(
            message("Jo", "Jo Smith jo@x.com", None, "hi").to_mail().reply_to,
            "jo@x.com"
        );
    }

    #[test]
    fn subject_is_tagged() {
        let msg = message("Jo", "jo@x.com", Some("Hi"), "Hello");
        assert_eq!(msg.mail_subject(), "[Portfolio] Hi");
    }

    #[test]
    fn blank_subject_uses_default() {
        assert_eq!(
            message("Jo", "jo@x.com", None, "Hello").mail_subject(),
            "[Portfolio] New message"
        );
        assert_eq!(
            message("Jo", "jo@x.com", Some(""), "Hello").mail_subject(),
            "[Portfolio] New message"
        );
    }

    #[test]
    fn html_body_escapes_angle_brackets_text_body_does_not() {
        let msg = message("Jo", "jo@x.com", None, "<script>alert(1)</script>");
        let mail = msg.to_mail();

        assert!(mail.html.contains("&lt;script>alert(1)&lt;/script>"));
        assert!(!mail.html.contains("<script>"));
        assert!(mail.text.contains("<script>alert(1)</script>"));
        assert_eq!(mail.reply_to, "jo@x.com");
    }

    #[test]
    fn text_body_layout() {
        let msg = message("Jo", "jo@x.com", Some("Hi"), "Hello\n");
        assert_eq!(msg.text_body(), "Name: Jo\nEmail: jo@x.com\n\nMessage:\nHello");
    }

    #[test]
    fn html_body_includes_subject_only_when_given() {
        let with = message("Jo", "jo@x.com", Some("Hi"), "Hello").html_body();
        let without = message("Jo", "jo@x.com", None, "Hello").html_body();
        assert!(with.contains("<strong>Subject:</strong> Hi"));
        assert!(!without.contains("Subject:"));
    }
}

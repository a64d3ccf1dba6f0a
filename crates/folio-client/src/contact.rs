//! Contact form state machine.
//!
//! `idle → sending → idle`, with the outcome left in a status banner. The
//! form can be shared between tasks; a submission that arrives while another
//! is in flight is turned away without touching the network.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use folio_shared::contact::ContactMessage;

use crate::api::ContactSender;
use crate::error::ClientError;

pub const SENT_MESSAGE: &str = "Message sent! I’ll get back to you soon.";
pub const GENERIC_FAILURE: &str = "Something went wrong.";
pub const INCOMPLETE_MESSAGE: &str = "Please fill in your name, email and message.";

/// What the visitor has typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: Some(self.subject.clone()).filter(|s| !s.is_empty()),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// The banner under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub ok: bool,
    pub message: String,
}

/// Result of one call to [`ContactForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Relayed; carries the mail id.
    Sent(String),
    /// Dispatched but refused or failed; carries the banner text.
    Failed(String),
    /// Required fields were blank; nothing was sent.
    Incomplete,
    /// Another submission is still in flight; nothing was sent.
    Busy,
}

#[derive(Debug)]
struct FormState {
    fields: ContactFields,
    phase: Phase,
    status: Option<Status>,
}

#[derive(Debug)]
pub struct ContactForm {
    state: Mutex<FormState>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_fields(ContactFields::default())
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            state: Mutex::new(FormState {
                fields,
                phase: Phase::Idle,
                status: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Edit the fields in place.
    pub fn edit(&self, f: impl FnOnce(&mut ContactFields)) {
        f(&mut self.lock().fields);
    }

    pub fn fields(&self) -> ContactFields {
        self.lock().fields.clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn status(&self) -> Option<Status> {
        self.lock().status.clone()
    }

    /// Submit the current fields through `sender`.
    ///
    /// On success the fields are cleared; on failure they are kept so the
    /// visitor can try again. Either way the form is back to
    /// [`Phase::Idle`] when this returns. There is no automatic retry.
    pub async fn submit(&self, sender: &dyn ContactSender) -> SubmitOutcome {
        let message = {
            let mut state = self.lock();
            if state.phase == Phase::Sending {
                return SubmitOutcome::Busy;
            }
            if !state.fields.is_complete() {
                state.status = Some(Status {
                    ok: false,
                    message: INCOMPLETE_MESSAGE.into(),
                });
                return SubmitOutcome::Incomplete;
            }
            state.phase = Phase::Sending;
            state.status = None;
            state.fields.to_message()
        };

        let in_flight = InFlight { form: Some(self) };
        let result = sender.send_contact(&message).await;
        in_flight.disarm();

        let mut state = self.lock();
        state.phase = Phase::Idle;

        match result {
            Ok(id) => {
                info!(message_id = %id, "Contact message sent");
                state.fields = ContactFields::default();
                state.status = Some(Status {
                    ok: true,
                    message: SENT_MESSAGE.into(),
                });
                SubmitOutcome::Sent(id)
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                let text = match e {
                    ClientError::Rejected(reason) => reason,
                    _ => GENERIC_FAILURE.to_string(),
                };
                state.status = Some(Status {
                    ok: false,
                    message: text.clone(),
                });
                SubmitOutcome::Failed(text)
            }
        }
    }
}

/// Returns the form to [`Phase::Idle`] if a submission is dropped mid-send.
struct InFlight<'a> {
    form: Option<&'a ContactForm>,
}

impl InFlight<'_> {
    /// The submission finished normally and resets the phase itself.
    fn disarm(mut self) {
        self.form = None;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(form) = self.form {
            form.lock().phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::error::Result;

    enum Reply {
        Accept,
        Reject(&'static str),
        Unreachable,
    }

    struct FakeSender {
        reply: Reply,
        calls: AtomicUsize,
        /// When set, each send waits here until released.
        gate: Option<Notify>,
    }

    impl FakeSender {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated(reply: Reply) -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::new(reply)
            }
        }

        fn release(&self) {
            if let Some(gate) = &self.gate {
                gate.notify_one();
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContactSender for FakeSender {
        async fn send_contact(&self, _message: &ContactMessage) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match self.reply {
                Reply::Accept => Ok("<1@test>".into()),
                Reply::Reject(reason) => Err(ClientError::Rejected(reason.into())),
                Reply::Unreachable => Err(ClientError::Decode("connection refused".into())),
            }
        }
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn success_clears_fields_and_confirms() {
        let form = ContactForm::with_fields(filled());
        let sender = FakeSender::new(Reply::Accept);

        assert_eq!(
            form.submit(&sender).await,
            SubmitOutcome::Sent("<1@test>".into())
        );
        assert_eq!(form.fields(), ContactFields::default());
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(
            form.status(),
            Some(Status {
                ok: true,
                message: SENT_MESSAGE.into()
            })
        );
    }

    #[tokio::test]
    async fn server_rejection_keeps_fields_and_shows_reason() {
        let form = ContactForm::with_fields(filled());
        let sender = FakeSender::new(Reply::Reject("Invalid email"));

        assert_eq!(
            form.submit(&sender).await,
            SubmitOutcome::Failed("Invalid email".into())
        );
        assert_eq!(form.fields(), filled());
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.status().unwrap().message, "Invalid email");
    }

    #[tokio::test]
    async fn transport_failure_shows_generic_message() {
        let form = ContactForm::with_fields(filled());
        let sender = FakeSender::new(Reply::Unreachable);

        assert_eq!(
            form.submit(&sender).await,
            SubmitOutcome::Failed(GENERIC_FAILURE.into())
        );
        assert_eq!(form.fields(), filled());
    }

    #[tokio::test]
    async fn incomplete_form_is_not_sent() {
        let form = ContactForm::with_fields(ContactFields {
            message: String::new(),
            ..filled()
        });
        let sender = FakeSender::new(Reply::Accept);

        assert_eq!(form.submit(&sender).await, SubmitOutcome::Incomplete);
        assert_eq!(sender.calls(), 0);
        assert!(!form.status().unwrap().ok);
    }

    #[tokio::test]
    async fn blank_subject_is_sent_as_absent() {
        let fields = ContactFields {
            subject: String::new(),
            ..filled()
        };
        assert_eq!(fields.to_message().subject, None);
        assert_eq!(filled().to_message().subject.as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn resubmission_while_sending_is_turned_away() {
        let form = Arc::new(ContactForm::with_fields(filled()));
        let sender = FakeSender::gated(Reply::Accept);

        let first = form.submit(&sender);
        let second = async {
            while form.phase() != Phase::Sending {
                tokio::task::yield_now().await;
            }
            let outcome = form.submit(&sender).await;
            sender.release();
            outcome
        };

        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, SubmitOutcome::Sent("<1@test>".into()));
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(sender.calls(), 1);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn abandoned_submission_returns_form_to_idle() {
        let form = ContactForm::with_fields(filled());
        let stuck = FakeSender::gated(Reply::Accept);

        let timed_out =
            tokio::time::timeout(Duration::from_millis(20), form.submit(&stuck)).await;
        assert!(timed_out.is_err());
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.fields(), filled());

        let sender = FakeSender::new(Reply::Accept);
        assert_eq!(
            form.submit(&sender).await,
            SubmitOutcome::Sent("<1@test>".into())
        );
    }

    #[tokio::test]
    async fn each_new_attempt_is_a_fresh_request() {
        let form = ContactForm::with_fields(filled());
        let sender = FakeSender::new(Reply::Reject("Failed to send email"));

        form.submit(&sender).await;
        form.submit(&sender).await;
        assert_eq!(sender.calls(), 2);
    }

    #[test]
    fn edit_updates_fields() {
        let form = ContactForm::new();
        form.edit(|f| f.name = "Jo".into());
        assert_eq!(form.fields().name, "Jo");
    }
}

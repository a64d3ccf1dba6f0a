use thiserror::Error;

/// Reasons a contact submission is rejected before it reaches the mailer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid email")]
    InvalidEmail,
}

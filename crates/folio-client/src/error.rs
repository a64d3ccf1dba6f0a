use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API base {0:?}")]
    InvalidBase(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The server refused the request and said why.
    #[error("{0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

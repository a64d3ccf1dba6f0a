use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use folio_shared::api::ErrorBody;
use folio_shared::error::ContactError;
use folio_store::Collection;

/// Every failure a route can answer with. Rendered as `{ok:false, error}`.
///
/// Collaborator detail (store or SMTP errors) is logged where it happens and
/// never makes it into the response body.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Email is not configured on the server")]
    MailNotConfigured,

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Failed to fetch {0}")]
    Store(Resource),

    #[error("Failed to send email")]
    Dispatch,

    #[error("{0} not found")]
    NotFound(&'static str),
}

/// What a failed read was fetching, for the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    Project,
    Collection(Collection),
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Profile => f.write_str("profile"),
            Resource::Project => f.write_str("project"),
            Resource::Collection(c) => write!(f, "{c}"),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Contact(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::MailNotConfigured | ServerError::Store(_) | ServerError::Dispatch => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, axum::Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(
            ServerError::Store(Resource::Profile).to_string(),
            "Failed to fetch profile"
        );
        assert_eq!(
            ServerError::Store(Resource::Collection(Collection::Services)).to_string(),
            "Failed to fetch services"
        );
        assert_eq!(
            ServerError::from(ContactError::InvalidEmail).to_string(),
            "Invalid email"
        );
        assert_eq!(ServerError::NotFound("Project").to_string(), "Project not found");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ServerError::MailNotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Contact(ContactError::MissingFields).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServerError::Dispatch.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ServerError::NotFound("Project").status(), StatusCode::NOT_FOUND);
    }
}

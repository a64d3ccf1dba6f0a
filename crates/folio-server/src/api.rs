use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use folio_shared::api::{ContactReply, HealthResponse};
use folio_shared::constants::{LIVENESS_TEXT, MAX_BODY_SIZE};
use folio_shared::contact::ContactMessage;
use folio_shared::error::ContactError;
use folio_shared::models::{Education, Experience, Profile, Project, Service};
use folio_store::{Collection, ContentRepository, StoreError};

use crate::config::ServerConfig;
use crate::error::{Resource, ServerError};
use crate::mailer::Mailer;

/// Long-lived collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ContentRepository>,
    /// `None` when the mail settings are incomplete.
    pub mailer: Option<Arc<dyn Mailer>>,
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/profile", get(get_profile))
        .route("/api/services", get(list_services))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:id", get(get_project))
        .route("/api/education", get(list_education))
        .route("/api/experience", get(list_experience))
        .route("/api/contact", post(submit_contact))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        warn!("CORS_ORIGIN is empty: allowing any origin (not suitable for production)");
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

// ─── Liveness ───

async fn root() -> &'static str {
    LIVENESS_TEXT
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        ts: Utc::now().timestamp_millis(),
    })
}

// ─── Content reads ───

/// Log the store failure and replace it with a generic per-resource error.
fn store_failure(resource: Resource) -> impl FnOnce(StoreError) -> ServerError {
    move |e| {
        error!(error = %e, resource = %resource, "Store query failed");
        ServerError::Store(resource)
    }
}

async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<Option<Profile>>, ServerError> {
    let profile = state
        .repo
        .profile()
        .await
        .map_err(store_failure(Resource::Profile))?;
    Ok(Json(profile))
}

async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ServerError> {
    let services = state
        .repo
        .services()
        .await
        .map_err(store_failure(Resource::Collection(Collection::Services)))?;
    Ok(Json(services))
}

async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ServerError> {
    let projects = state
        .repo
        .projects()
        .await
        .map_err(store_failure(Resource::Collection(Collection::Projects)))?;
    Ok(Json(projects))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ServerError> {
    state
        .repo
        .project(&id)
        .await
        .map_err(store_failure(Resource::Project))?
        .map(Json)
        .ok_or(ServerError::NotFound("Project"))
}

async fn list_education(
    State(state): State<AppState>,
) -> Result<Json<Vec<Education>>, ServerError> {
    let education = state
        .repo
        .education()
        .await
        .map_err(store_failure(Resource::Collection(Collection::Education)))?;
    Ok(Json(education))
}

async fn list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ServerError> {
    let experience = state
        .repo
        .experience()
        .await
        .map_err(store_failure(Resource::Collection(Collection::Experience)))?;
    Ok(Json(experience))
}

// ─── Contact ───

/// Raw contact payload. Fields may be absent or `null`; validation decides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactRequest {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl ContactRequest {
    fn into_message(self) -> ContactMessage {
        ContactMessage {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject: self.subject,
            message: self.message.unwrap_or_default(),
        }
    }
}

/// Checks run in order: mailer configured, required fields, email shape.
/// Only a message that passes all three reaches the mailer.
async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactReply>, ServerError> {
    let Some(mailer) = state.mailer.as_ref() else {
        warn!("Contact submission received but mail is not configured");
        return Err(ServerError::MailNotConfigured);
    };

    let message = match payload {
        Ok(Json(request)) => request.into_message(),
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable contact payload");
            return Err(ContactError::MissingFields.into());
        }
    };

    message.validate()?;

    let id = mailer.send(message.to_mail()).await.map_err(|e| {
        error!(error = %e, "Email send error");
        ServerError::Dispatch
    })?;

    info!(message_id = %id, "Contact message relayed");

    Ok(Json(ContactReply::accepted(id)))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

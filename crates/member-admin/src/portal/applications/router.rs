use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};

use super::contracts::{
    ApplicationGateway, CollectionField, DocumentStore, DocumentUpload, LookupProvider,
};
use super::service::{AdminPortalService, PortalError};
use super::view::MembershipType;

/// Router builder exposing the portal core over HTTP. Thin by design: every
/// handler parses the path, delegates to the service, and maps errors to
/// status codes.
pub fn portal_router<G, L, D>(service: Arc<AdminPortalService<G, L, D>>) -> Router
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/admin/applications/:membership/:id",
            get(view_handler::<G, L, D>),
        )
        .route(
            "/api/v1/admin/applications/:membership/:id/:collection",
            put(save_handler::<G, L, D>),
        )
        .route(
            "/api/v1/admin/applications/:membership/:id/documents",
            post(upload_document_handler::<G, L, D>),
        )
        .route(
            "/api/v1/admin/documents/:id",
            delete(delete_document_handler::<G, L, D>),
        )
        .route(
            "/api/v1/admin/lookups/industrial-groups",
            get(industrial_groups_handler::<G, L, D>),
        )
        .route(
            "/api/v1/admin/lookups/provincial-chapters",
            get(provincial_chapters_handler::<G, L, D>),
        )
        .with_state(service)
}

async fn view_handler<G, L, D>(
    State(service): State<Arc<AdminPortalService<G, L, D>>>,
    Path((membership, id)): Path<(String, String)>,
) -> Response
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    let Some(membership) = MembershipType::parse_slug(&membership) else {
        return unknown_membership(&membership);
    };
    match service.load_application(membership, &id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn save_handler<G, L, D>(
    State(service): State<Arc<AdminPortalService<G, L, D>>>,
    Path((membership, id, collection)): Path<(String, String, String)>,
    axum::Json(payload): axum::Json<Value>,
) -> Response
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    let Some(membership) = MembershipType::parse_slug(&membership) else {
        return unknown_membership(&membership);
    };
    let Some(field) = CollectionField::parse_key(&collection) else {
        let body = json!({ "error": format!("unknown collection '{collection}'") });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
    };
    match service.save_collection(membership, &id, field, &payload) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn upload_document_handler<G, L, D>(
    State(service): State<Arc<AdminPortalService<G, L, D>>>,
    Path((membership, id)): Path<(String, String)>,
    axum::Json(mut upload): axum::Json<DocumentUpload>,
) -> Response
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    if MembershipType::parse_slug(&membership).is_none() {
        return unknown_membership(&membership);
    }
    if upload.record_id.is_empty() {
        upload.record_id = id;
    }
    match service.upload_document(upload) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn delete_document_handler<G, L, D>(
    State(service): State<Arc<AdminPortalService<G, L, D>>>,
    Path(id): Path<String>,
) -> Response
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    match service.delete_document(&id) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn industrial_groups_handler<G, L, D>(
    State(service): State<Arc<AdminPortalService<G, L, D>>>,
) -> Response
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    (StatusCode::OK, axum::Json(service.industrial_groups())).into_response()
}

async fn provincial_chapters_handler<G, L, D>(
    State(service): State<Arc<AdminPortalService<G, L, D>>>,
) -> Response
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    (StatusCode::OK, axum::Json(service.provincial_chapters())).into_response()
}

fn unknown_membership(slug: &str) -> Response {
    let body = json!({ "error": format!("unknown membership type '{slug}'") });
    (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
}

fn error_response(error: PortalError) -> Response {
    let status = match &error {
        PortalError::NotFound => StatusCode::NOT_FOUND,
        PortalError::Editor(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PortalError::SaveFailed { .. } | PortalError::DocumentFailed { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };
    let body = json!({ "error": error.to_string() });
    (status, axum::Json(body)).into_response()
}

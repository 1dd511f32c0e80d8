use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response, routing, Router};
use folio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use tracing::info;

use super::{failure, internal_server_error, success};
use crate::models::contact::ApiContactRequest;

pub const CONTACT_ROUTE: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    body: Bytes,
) -> Response {
    // The body is parsed regardless of the content type header.
    let request = match serde_json::from_slice::<ApiContactRequest>(&body) {
        Ok(request) => request,
        Err(err) => return internal_server_error(err),
    };

    match service.send_message(request.into()).await {
        Ok(report) => {
            info!(notification = ?report.notification, "Contact message relayed");
            success("Message sent successfully")
        }
        Err(ContactSendMessageError::MissingFields) => {
            failure(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        Err(ContactSendMessageError::Rejected { message }) => failure(
            StatusCode::BAD_REQUEST,
            message.unwrap_or_else(|| "Failed to send message".into()),
        ),
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}

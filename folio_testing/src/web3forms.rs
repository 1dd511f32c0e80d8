use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing, Form, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const SUBMIT_ROUTE: &str = "/submit";

pub fn router(access_key: impl Into<Arc<str>>) -> Router<()> {
    Router::new()
        .route(SUBMIT_ROUTE, routing::post(submit))
        .with_state(access_key.into())
}

#[derive(Deserialize)]
struct SubmitRequest {
    access_key: String,
    name: String,
    email: String,
    subject: String,
    message: String,
    from_name: String,
    from_email: String,
}

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    message: &'static str,
}

async fn submit(
    state: State<Arc<str>>,
    Form(request): Form<SubmitRequest>,
) -> (StatusCode, Json<SubmitResponse>) {
    if *request.access_key != **state {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse {
                success: false,
                message: "invalid key",
            }),
        );
    }

    if request.from_name != request.name || request.from_email != request.email {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse {
                success: false,
                message: "sender mismatch",
            }),
        );
    }

    info!(
        name = %request.name,
        email = %request.email,
        subject = %request.subject,
        "Received submission: {}",
        request.message
    );

    (
        StatusCode::OK,
        Json(SubmitResponse {
            success: true,
            message: "Email sent successfully!",
        }),
    )
}

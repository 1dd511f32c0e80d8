use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn success(message: impl Into<String>) -> Response {
    respond(StatusCode::OK, true, message)
}

fn failure(code: StatusCode, message: impl Into<String>) -> Response {
    respond(code, false, message)
}

fn respond(code: StatusCode, success: bool, message: impl Into<String>) -> Response {
    let body = ApiResponse {
        success,
        message: message.into(),
    };
    (code, Json(body)).into_response()
}

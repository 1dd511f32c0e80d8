use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

pub const WEBHOOK_ROUTE: &str = "/webhook";

/// Payloads received by the fake webhook, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct ReceivedEvents(Arc<Mutex<Vec<Value>>>);

impl ReceivedEvents {
    pub async fn get(&self) -> Vec<Value> {
        self.0.lock().await.clone()
    }
}

#[derive(Clone)]
struct WebhookState {
    status: StatusCode,
    received: ReceivedEvents,
}

/// Accepts any json payload, records it and answers with `status`.
pub fn router(status: StatusCode, received: ReceivedEvents) -> Router<()> {
    Router::new()
        .route(WEBHOOK_ROUTE, routing::post(webhook))
        .with_state(WebhookState { status, received })
}

async fn webhook(state: State<WebhookState>, Json(payload): Json<Value>) -> (StatusCode, String) {
    info!("Received webhook event: {payload}");
    state.received.0.lock().await.push(payload);
    (state.status, format!("status {}", state.status.as_u16()))
}

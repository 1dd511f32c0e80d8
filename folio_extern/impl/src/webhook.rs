use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use folio_di::Build;
use folio_extern_contracts::webhook::{ContactFormEvent, WebhookApiService, WebhookResponse};
use folio_utils::trace_instrument;
use serde::Serialize;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Default, Build)]
pub struct WebhookApiServiceImpl {
    #[state]
    http: HttpClient,
}

impl WebhookApiService for WebhookApiServiceImpl {
    #[trace_instrument(skip(self))]
    async fn send_contact_form(
        &self,
        url: &Url,
        event: &ContactFormEvent,
    ) -> anyhow::Result<WebhookResponse> {
        let response = self
            .http
            .post(url.clone())
            .json(&WebhookPayload::from(event))
            .send()
            .await
            .context("Failed to send webhook request")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read webhook response")?;

        Ok(WebhookResponse { status, body })
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: WebhookContactData<'a>,
    timestamp: String,
}

#[derive(Serialize)]
struct WebhookContactData<'a> {
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
    message: &'a str,
}

impl<'a> From<&'a ContactFormEvent> for WebhookPayload<'a> {
    fn from(event: &'a ContactFormEvent) -> Self {
        Self {
            kind: "contact_form",
            data: WebhookContactData {
                name: &event.name,
                email: &event.email,
                subject: event.subject.as_deref(),
                message: &event.message,
            },
            timestamp: iso_timestamp(event.timestamp),
        }
    }
}

fn iso_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn payload() {
        let event = ContactFormEvent {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            subject: None,
            message: "Hello there, I would like to connect.".into(),
            timestamp: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
        };

        let payload = serde_json::to_value(WebhookPayload::from(&event)).unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "type": "contact_form",
                "data": {
                    "name": "Jane Doe",
                    "email": "jane@x.com",
                    "message": "Hello there, I would like to connect.",
                },
                "timestamp": "2023-11-14T22:13:20.123Z",
            })
        );
    }
}

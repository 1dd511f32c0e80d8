use std::future::Future;

use chrono::{DateTime, Utc};
use url::Url;

/// Client for the optional contact notification webhook.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait WebhookApiService: Send + Sync + 'static {
    /// Post a contact form event to `url`.
    ///
    /// Only transport failures are errors; any HTTP status is returned as
    /// part of the [`WebhookResponse`].
    fn send_contact_form(
        &self,
        url: &Url,
        event: &ContactFormEvent,
    ) -> impl Future<Output = anyhow::Result<WebhookResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormEvent {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(feature = "mock")]
impl MockWebhookApiService {
    pub fn with_send_contact_form(
        mut self,
        url: Url,
        event: ContactFormEvent,
        result: Result<WebhookResponse, &'static str>,
    ) -> Self {
        self.expect_send_contact_form()
            .once()
            .withf(move |u, e| *u == url && *e == event)
            .return_once(move |_, _| {
                Box::pin(std::future::ready(result.map_err(anyhow::Error::msg)))
            });
        self
    }
}

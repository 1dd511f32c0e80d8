use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::relay::{ContactRelayApiResponse, ContactRelayApiService};
use folio_models::contact::ContactFormData;
use folio_utils::trace_instrument;
use serde::Deserialize;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct ContactRelayApiServiceImpl {
    config: ContactRelayApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactRelayApiServiceConfig {
    pub relay_url: Arc<Url>,
}

impl ContactRelayApiServiceImpl {
    pub fn new(config: ContactRelayApiServiceConfig) -> Self {
        Self {
            config,
            http: HttpClient::default(),
        }
    }
}

impl ContactRelayApiService for ContactRelayApiServiceImpl {
    #[trace_instrument(skip(self))]
    async fn submit(&self, form: ContactFormData) -> anyhow::Result<ContactRelayApiResponse> {
        self.http
            .post((*self.config.relay_url).clone())
            .json(&form)
            .send()
            .await
            .context("Failed to send contact relay request")?
            .json::<RelayResponse>()
            .await
            .map(Into::into)
            .context("Failed to deserialize contact relay response")
    }
}

#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
    message: String,
}

impl From<RelayResponse> for ContactRelayApiResponse {
    fn from(value: RelayResponse) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}

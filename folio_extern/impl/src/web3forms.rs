use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::web3forms::{
    Web3FormsApiService, Web3FormsSubmission, Web3FormsSubmitResponse,
};
use folio_utils::trace_instrument;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const SUBMIT_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, Build)]
pub struct Web3FormsApiServiceImpl {
    config: Web3FormsApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct Web3FormsApiServiceConfig {
    access_key: Arc<str>,
    submit_endpoint: Arc<Url>,
}

impl Web3FormsApiServiceConfig {
    pub fn new(access_key: impl Into<Arc<str>>, submit_endpoint_override: Option<Url>) -> Self {
        Self {
            access_key: access_key.into(),
            submit_endpoint: submit_endpoint_override
                .unwrap_or_else(|| SUBMIT_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl Web3FormsApiServiceImpl {
    pub fn new(config: Web3FormsApiServiceConfig) -> Self {
        Self {
            config,
            http: HttpClient::default(),
        }
    }
}

impl Web3FormsApiService for Web3FormsApiServiceImpl {
    #[trace_instrument(skip(self))]
    async fn submit(
        &self,
        submission: Web3FormsSubmission,
    ) -> anyhow::Result<Web3FormsSubmitResponse> {
        let request = SubmitRequest {
            access_key: &self.config.access_key,
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
            from_name: &submission.name,
            from_email: &submission.email,
        };

        // Rejections come with a non-2xx status and a json body, so the
        // status is not checked here.
        self.http
            .post((*self.config.submit_endpoint).clone())
            .form(&request)
            .send()
            .await
            .context("Failed to send web3forms submit request")?
            .json::<SubmitResponse>()
            .await
            .map(Into::into)
            .context("Failed to deserialize web3forms submit response")
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    from_name: &'a str,
    from_email: &'a str,
}

#[derive(Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl From<SubmitResponse> for Web3FormsSubmitResponse {
    fn from(value: SubmitResponse) -> Self {
        Self {
            success: value.success,
            message: value.message.filter(|message| !message.is_empty()),
        }
    }
}

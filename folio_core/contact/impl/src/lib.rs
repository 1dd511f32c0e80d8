use std::sync::Arc;

use anyhow::Context;
use folio_core_contact_contracts::{
    ContactFeatureService, ContactSendMessageError, ContactSendMessageReport, WebhookNotification,
};
use folio_di::Build;
use folio_extern_contracts::{
    web3forms::{Web3FormsApiService, Web3FormsSubmission},
    webhook::{ContactFormEvent, WebhookApiService},
};
use folio_models::contact::{ContactRelayRequest, ContactSubmission};
use folio_shared_contracts::time::TimeService;
use folio_utils::trace_instrument;
use tracing::{debug, error, info, warn};
use url::Url;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Web3FormsApi, WebhookApi, Time> {
    web3forms_api: Web3FormsApi,
    webhook_api: WebhookApi,
    time: Time,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Subject forwarded when the submission has none.
    pub default_subject: Arc<str>,
    /// Notified after every accepted submission, if set.
    pub webhook_url: Option<Arc<Url>>,
}

impl<Web3FormsApi, WebhookApi, Time> ContactFeatureService
    for ContactFeatureServiceImpl<Web3FormsApi, WebhookApi, Time>
where
    Web3FormsApi: Web3FormsApiService,
    WebhookApi: WebhookApiService,
    Time: TimeService,
{
    #[trace_instrument(skip(self))]
    async fn send_message(
        &self,
        request: ContactRelayRequest,
    ) -> Result<ContactSendMessageReport, ContactSendMessageError> {
        let submission = ContactSubmission::try_from(request)
            .map_err(|_| ContactSendMessageError::MissingFields)?;

        let response = self
            .web3forms_api
            .submit(Web3FormsSubmission {
                name: submission.name.to_string(),
                email: submission.email.to_string(),
                subject: submission.subject_or(&self.config.default_subject).into(),
                message: submission.message.to_string(),
            })
            .await
            .context("Failed to submit contact form to web3forms")?;

        if !response.success {
            return Err(ContactSendMessageError::Rejected {
                message: response.message,
            });
        }

        let notification = match &self.config.webhook_url {
            Some(url) => self.notify(url, submission).await,
            None => {
                debug!("No webhook configured, skipping notification");
                WebhookNotification::Skipped
            }
        };

        Ok(ContactSendMessageReport { notification })
    }
}

impl<Web3FormsApi, WebhookApi, Time> ContactFeatureServiceImpl<Web3FormsApi, WebhookApi, Time>
where
    WebhookApi: WebhookApiService,
    Time: TimeService,
{
    async fn notify(&self, url: &Url, submission: ContactSubmission) -> WebhookNotification {
        let event = ContactFormEvent {
            name: submission.name.into_inner(),
            email: submission.email.into_inner(),
            subject: submission.subject,
            message: submission.message.into_inner(),
            timestamp: self.time.now(),
        };

        match self.webhook_api.send_contact_form(url, &event).await {
            Ok(response) if response.is_success() => {
                info!(status = response.status, "Webhook notified");
                WebhookNotification::Delivered {
                    status: response.status,
                }
            }
            Ok(response) => {
                warn!(
                    status = response.status,
                    "Webhook failed: {}", response.body
                );
                WebhookNotification::Rejected {
                    status: response.status,
                    body: response.body,
                }
            }
            Err(err) => {
                error!("Webhook error: {err:#}");
                WebhookNotification::Failed {
                    error: format!("{err:#}"),
                }
            }
        }
    }
}

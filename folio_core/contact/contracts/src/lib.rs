use std::future::Future;

use folio_models::contact::ContactRelayRequest;
use thiserror::Error;

/// Relays contact form submissions to the form delivery service and the
/// optional notification webhook.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Forward a submission.
    ///
    /// Succeeds iff the form delivery service accepted the submission. The
    /// outcome of the webhook notification never affects the result and is
    /// only reported via [`ContactSendMessageReport`].
    fn send_message(
        &self,
        request: ContactRelayRequest,
    ) -> impl Future<Output = Result<ContactSendMessageReport, ContactSendMessageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSendMessageReport {
    pub notification: WebhookNotification,
}

/// Side channel result of the webhook notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookNotification {
    /// No webhook is configured.
    Skipped,
    /// The webhook answered with a success status.
    Delivered { status: u16 },
    /// The webhook answered with an error status.
    Rejected { status: u16, body: String },
    /// The webhook could not be reached.
    Failed { error: String },
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("Missing required fields.")]
    MissingFields,
    #[error("The form delivery service rejected the submission.")]
    Rejected { message: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_message(
        mut self,
        request: ContactRelayRequest,
        result: Result<ContactSendMessageReport, ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

use std::future::Future;

use folio_models::{contact::ContactFormData, validation::ContactFormValidation};
use thiserror::Error;

/// Client side of the contact form: checks user input locally and hands
/// valid submissions to the relay.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Validate, sanitize and submit the raw user input.
    ///
    /// Invalid input and spam never cause a network request.
    fn submit(
        &self,
        form: ContactFormData,
    ) -> impl Future<Output = Result<(), ContactFormSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The form contains invalid fields.")]
    Invalid(ContactFormValidation),
    #[error("The submission looks automated.")]
    Spam,
    #[error("The relay rejected the submission: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use anyhow::Context;
use folio_core_form_contracts::{ContactFormService, ContactFormSubmitError};
use folio_di::Build;
use folio_extern_contracts::relay::ContactRelayApiService;
use folio_models::{
    contact::ContactFormData,
    sanitize::sanitize_form_data,
    validation::{is_form_valid, validate_contact_form},
};
use folio_utils::trace_instrument;
use tracing::{debug, info};

#[derive(Debug, Clone, Build)]
pub struct ContactFormServiceImpl<RelayApi> {
    relay_api: RelayApi,
}

impl<RelayApi> ContactFormService for ContactFormServiceImpl<RelayApi>
where
    RelayApi: ContactRelayApiService,
{
    #[trace_instrument(skip(self))]
    async fn submit(&self, form: ContactFormData) -> Result<(), ContactFormSubmitError> {
        let validation = validate_contact_form(&form);
        if validation
            .honeypot
            .as_ref()
            .is_some_and(|honeypot| !honeypot.is_valid)
        {
            debug!("Rejecting contact form with filled honeypot");
            return Err(ContactFormSubmitError::Spam);
        }

        if !is_form_valid(&validation) {
            debug!("Rejecting invalid contact form");
            return Err(ContactFormSubmitError::Invalid(validation));
        }

        let response = self
            .relay_api
            .submit(sanitize_form_data(&form))
            .await
            .context("Failed to submit contact form to relay")?;

        if !response.success {
            return Err(ContactFormSubmitError::Rejected(response.message));
        }

        info!("Contact form submitted: {}", response.message);
        Ok(())
    }
}

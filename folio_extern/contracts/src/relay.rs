use std::future::Future;

use folio_models::contact::ContactFormData;

/// Client for the contact relay endpoint served by `folio serve`.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRelayApiService: Send + Sync + 'static {
    fn submit(
        &self,
        form: ContactFormData,
    ) -> impl Future<Output = anyhow::Result<ContactRelayApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRelayApiResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(feature = "mock")]
impl MockContactRelayApiService {
    pub fn with_submit(mut self, form: ContactFormData, result: ContactRelayApiResponse) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}

use std::future::Future;

/// Client for the Web3Forms form delivery service.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Web3FormsApiService: Send + Sync + 'static {
    /// Submit a contact form. The access key is added by the implementation.
    ///
    /// A rejected submission is not an error; it is reported via
    /// [`Web3FormsSubmitResponse::success`].
    fn submit(
        &self,
        submission: Web3FormsSubmission,
    ) -> impl Future<Output = anyhow::Result<Web3FormsSubmitResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3FormsSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3FormsSubmitResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(feature = "mock")]
impl MockWeb3FormsApiService {
    pub fn with_submit(
        mut self,
        submission: Web3FormsSubmission,
        result: Web3FormsSubmitResponse,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_error(
        mut self,
        submission: Web3FormsSubmission,
        error: &'static str,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}

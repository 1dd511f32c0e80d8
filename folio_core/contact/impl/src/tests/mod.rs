use std::sync::Arc;

use folio_demo::WEBHOOK_URL;
use folio_extern_contracts::{
    web3forms::{MockWeb3FormsApiService, Web3FormsSubmission},
    webhook::{ContactFormEvent, MockWebhookApiService},
};
use folio_models::contact::DEFAULT_CONTACT_SUBJECT;
use folio_shared_contracts::time::MockTimeService;

use crate::{ContactFeatureConfig, ContactFeatureServiceImpl};

mod send_message;

type Sut =
    ContactFeatureServiceImpl<MockWeb3FormsApiService, MockWebhookApiService, MockTimeService>;

fn config(webhook: bool) -> ContactFeatureConfig {
    ContactFeatureConfig {
        default_subject: DEFAULT_CONTACT_SUBJECT.into(),
        webhook_url: webhook.then(|| Arc::new(WEBHOOK_URL.parse().unwrap())),
    }
}

fn sut(
    web3forms_api: MockWeb3FormsApiService,
    webhook_api: MockWebhookApiService,
    time: MockTimeService,
    webhook: bool,
) -> Sut {
    ContactFeatureServiceImpl {
        web3forms_api,
        webhook_api,
        time,
        config: config(webhook),
    }
}

fn jane_submission() -> Web3FormsSubmission {
    Web3FormsSubmission {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        subject: "Portfolio Contact".into(),
        message: "Hello there, I would like to connect.".into(),
    }
}

fn jane_event() -> ContactFormEvent {
    ContactFormEvent {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        subject: None,
        message: "Hello there, I would like to connect.".into(),
        timestamp: *folio_demo::NOW,
    }
}

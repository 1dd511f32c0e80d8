use folio_core_contact_contracts::{
    ContactFeatureService, ContactSendMessageError, ContactSendMessageReport, WebhookNotification,
};
use folio_demo::{JANE_RELAY_REQUEST, NOW, WEBHOOK_URL};
use folio_extern_contracts::{
    web3forms::{MockWeb3FormsApiService, Web3FormsSubmission, Web3FormsSubmitResponse},
    webhook::{ContactFormEvent, MockWebhookApiService, WebhookResponse},
};
use folio_models::contact::ContactRelayRequest;
use folio_shared_contracts::time::MockTimeService;
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::{jane_event, jane_submission, sut};

fn accepted() -> Web3FormsSubmitResponse {
    Web3FormsSubmitResponse {
        success: true,
        message: Some("Email sent successfully!".into()),
    }
}

#[tokio::test]
async fn ok_without_webhook() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(jane_submission(), accepted());

    let sut = sut(
        web3forms_api,
        MockWebhookApiService::new(),
        MockTimeService::new(),
        false,
    );

    // Act
    let result = sut.send_message(JANE_RELAY_REQUEST.clone()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSendMessageReport {
            notification: WebhookNotification::Skipped
        }
    );
}

#[tokio::test]
async fn ok_with_subject() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(
        Web3FormsSubmission {
            subject: "Freelance project".into(),
            ..jane_submission()
        },
        accepted(),
    );

    let time = MockTimeService::new().with_now(*NOW);

    let webhook_api = MockWebhookApiService::new().with_send_contact_form(
        WEBHOOK_URL.parse().unwrap(),
        ContactFormEvent {
            subject: Some("Freelance project".into()),
            ..jane_event()
        },
        Ok(WebhookResponse {
            status: 204,
            body: String::new(),
        }),
    );

    let sut = sut(web3forms_api, webhook_api, time, true);

    // Act
    let result = sut
        .send_message(ContactRelayRequest {
            subject: Some("Freelance project".into()),
            ..JANE_RELAY_REQUEST.clone()
        })
        .await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSendMessageReport {
            notification: WebhookNotification::Delivered { status: 204 }
        }
    );
}

#[tokio::test]
async fn ok_empty_subject_uses_default_but_is_notified_as_is() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(jane_submission(), accepted());

    let time = MockTimeService::new().with_now(*NOW);

    let webhook_api = MockWebhookApiService::new().with_send_contact_form(
        WEBHOOK_URL.parse().unwrap(),
        ContactFormEvent {
            subject: Some(String::new()),
            ..jane_event()
        },
        Ok(WebhookResponse {
            status: 200,
            body: "ok".into(),
        }),
    );

    let sut = sut(web3forms_api, webhook_api, time, true);

    // Act
    let result = sut
        .send_message(ContactRelayRequest {
            subject: Some(String::new()),
            ..JANE_RELAY_REQUEST.clone()
        })
        .await;

    // Assert
    assert_eq!(
        result.unwrap().notification,
        WebhookNotification::Delivered { status: 200 }
    );
}

#[tokio::test]
async fn ok_webhook_unreachable() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(jane_submission(), accepted());

    let time = MockTimeService::new().with_now(*NOW);

    let webhook_api = MockWebhookApiService::new().with_send_contact_form(
        WEBHOOK_URL.parse().unwrap(),
        jane_event(),
        Err("connection refused"),
    );

    let sut = sut(web3forms_api, webhook_api, time, true);

    // Act
    let result = sut.send_message(JANE_RELAY_REQUEST.clone()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSendMessageReport {
            notification: WebhookNotification::Failed {
                error: "connection refused".into()
            }
        }
    );
}

#[tokio::test]
async fn ok_webhook_error_status() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(jane_submission(), accepted());

    let time = MockTimeService::new().with_now(*NOW);

    let webhook_api = MockWebhookApiService::new().with_send_contact_form(
        WEBHOOK_URL.parse().unwrap(),
        jane_event(),
        Ok(WebhookResponse {
            status: 500,
            body: "boom".into(),
        }),
    );

    let sut = sut(web3forms_api, webhook_api, time, true);

    // Act
    let result = sut.send_message(JANE_RELAY_REQUEST.clone()).await;

    // Assert
    assert_eq!(
        result.unwrap().notification,
        WebhookNotification::Rejected {
            status: 500,
            body: "boom".into()
        }
    );
}

#[tokio::test]
async fn missing_fields() {
    for request in [
        ContactRelayRequest {
            name: None,
            ..JANE_RELAY_REQUEST.clone()
        },
        ContactRelayRequest {
            email: Some(String::new()),
            ..JANE_RELAY_REQUEST.clone()
        },
        ContactRelayRequest {
            message: None,
            ..JANE_RELAY_REQUEST.clone()
        },
    ] {
        // Arrange
        let sut = sut(
            MockWeb3FormsApiService::new(),
            MockWebhookApiService::new(),
            MockTimeService::new(),
            true,
        );

        // Act
        let result = sut.send_message(request).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::MissingFields));
    }
}

#[tokio::test]
async fn rejected_with_message() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(
        jane_submission(),
        Web3FormsSubmitResponse {
            success: false,
            message: Some("invalid key".into()),
        },
    );

    let sut = sut(
        web3forms_api,
        MockWebhookApiService::new(),
        MockTimeService::new(),
        true,
    );

    // Act
    let result = sut.send_message(JANE_RELAY_REQUEST.clone()).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSendMessageError::Rejected {
            message: Some(message)
        }) if message == "invalid key"
    );
}

#[tokio::test]
async fn rejected_without_message() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new().with_submit(
        jane_submission(),
        Web3FormsSubmitResponse {
            success: false,
            message: None,
        },
    );

    let sut = sut(
        web3forms_api,
        MockWebhookApiService::new(),
        MockTimeService::new(),
        false,
    );

    // Act
    let result = sut.send_message(JANE_RELAY_REQUEST.clone()).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSendMessageError::Rejected { message: None })
    );
}

#[tokio::test]
async fn web3forms_unreachable() {
    // Arrange
    let web3forms_api = MockWeb3FormsApiService::new()
        .with_submit_error(jane_submission(), "connection refused");

    let sut = sut(
        web3forms_api,
        MockWebhookApiService::new(),
        MockTimeService::new(),
        true,
    );

    // Act
    let result = sut.send_message(JANE_RELAY_REQUEST.clone()).await;

    // Assert
    assert_matches!(result, Err(ContactSendMessageError::Other(_)));
}

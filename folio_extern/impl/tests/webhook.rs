use chrono::{DateTime, Utc};
use folio_extern_contracts::webhook::{ContactFormEvent, WebhookApiService, WebhookResponse};
use folio_extern_impl::webhook::WebhookApiServiceImpl;
use folio_testing::{
    webhook::{self, ReceivedEvents, WEBHOOK_ROUTE},
    StatusCode,
};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;
use url::Url;

#[tokio::test]
async fn delivered() {
    let received = ReceivedEvents::default();
    let url = spawn_webhook(StatusCode::OK, received.clone()).await;
    let sut = WebhookApiServiceImpl::default();

    let result = sut.send_contact_form(&url, &event()).await.unwrap();

    assert_eq!(
        result,
        WebhookResponse {
            status: 200,
            body: "status 200".into()
        }
    );
    assert!(result.is_success());
    assert_eq!(
        received.get().await,
        [serde_json::json!({
            "type": "contact_form",
            "data": {
                "name": "Jane Doe",
                "email": "jane@x.com",
                "subject": "Hello",
                "message": "Hello there, I would like to connect.",
            },
            "timestamp": "2023-11-14T22:13:20.000Z",
        })]
    );
}

#[tokio::test]
async fn error_status_is_not_an_error() {
    let url = spawn_webhook(StatusCode::SERVICE_UNAVAILABLE, Default::default()).await;
    let sut = WebhookApiServiceImpl::default();

    let result = sut.send_contact_form(&url, &event()).await.unwrap();

    assert_eq!(result.status, 503);
    assert!(!result.is_success());
}

#[tokio::test]
async fn unreachable() {
    let url = "http://127.0.0.1:1/webhook".parse().unwrap();
    let sut = WebhookApiServiceImpl::default();

    let result = sut.send_contact_form(&url, &event()).await;

    assert_matches!(result, Err(_));
}

fn event() -> ContactFormEvent {
    ContactFormEvent {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        subject: Some("Hello".into()),
        message: "Hello there, I would like to connect.".into(),
        timestamp: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

async fn spawn_webhook(status: StatusCode, received: ReceivedEvents) -> Url {
    let addr = folio_testing::spawn(webhook::router(status, received))
        .await
        .unwrap();
    format!("http://{addr}{WEBHOOK_ROUTE}").parse().unwrap()
}

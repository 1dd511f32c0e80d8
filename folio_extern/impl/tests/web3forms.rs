use folio_extern_contracts::web3forms::{
    Web3FormsApiService, Web3FormsSubmission, Web3FormsSubmitResponse,
};
use folio_extern_impl::web3forms::{Web3FormsApiServiceConfig, Web3FormsApiServiceImpl};
use folio_testing::web3forms::{self, SUBMIT_ROUTE};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

const ACCESS_KEY: &str = "test-access-key";

#[tokio::test]
async fn success() {
    let sut = make_sut(ACCESS_KEY).await;
    let result = sut.submit(submission()).await.unwrap();
    assert_eq!(
        result,
        Web3FormsSubmitResponse {
            success: true,
            message: Some("Email sent successfully!".into())
        }
    );
}

#[tokio::test]
async fn invalid_key() {
    let sut = make_sut("wrong-access-key").await;
    let result = sut.submit(submission()).await.unwrap();
    assert_eq!(
        result,
        Web3FormsSubmitResponse {
            success: false,
            message: Some("invalid key".into())
        }
    );
}

#[tokio::test]
async fn unreachable() {
    let config = Web3FormsApiServiceConfig::new(
        ACCESS_KEY,
        Some("http://127.0.0.1:1/submit".parse().unwrap()),
    );
    let sut = Web3FormsApiServiceImpl::new(config);
    let result = sut.submit(submission()).await;
    assert_matches!(result, Err(_));
}

fn submission() -> Web3FormsSubmission {
    Web3FormsSubmission {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        subject: "Portfolio Contact".into(),
        message: "Hello there, I would like to connect.".into(),
    }
}

async fn make_sut(access_key: &str) -> Web3FormsApiServiceImpl {
    let addr = folio_testing::spawn(web3forms::router(ACCESS_KEY))
        .await
        .unwrap();
    let endpoint = format!("http://{addr}{SUBMIT_ROUTE}").parse().unwrap();
    Web3FormsApiServiceImpl::new(Web3FormsApiServiceConfig::new(access_key, Some(endpoint)))
}

//! Fixtures shared by the tests of the whole workspace.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use folio_models::contact::{ContactFormData, ContactRelayRequest};

pub const WEB3FORMS_ACCESS_KEY: &str = "test-access-key";

pub const WEBHOOK_URL: &str = "https://hooks.example.com/contact";

/// 2023-11-14T22:13:20.123Z
pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| DateTime::from_timestamp_millis(1_700_000_000_123).unwrap());

/// A valid submission without subject and honeypot.
pub static JANE: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: "Jane Doe".into(),
    email: "jane@x.com".into(),
    subject: None,
    message: "Hello there, I would like to connect.".into(),
    honeypot: None,
});

/// A valid submission in need of sanitization.
pub static JOHN_UNTRIMMED: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: " John O'Brien ".into(),
    email: " John.OBrien@Example.COM ".into(),
    subject: Some("  Freelance project ".into()),
    message: " I have a project you might be interested in. \n".into(),
    honeypot: Some(String::new()),
});

/// [`JANE`] as received by the relay.
pub static JANE_RELAY_REQUEST: LazyLock<ContactRelayRequest> =
    LazyLock::new(|| JANE.clone().into());

use folio_models::contact::ContactRelayRequest;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Fields which are missing or not strings are treated as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    /// Full name of the sender
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    /// Email address of the sender
    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,
    /// Subject of the message
    #[serde(default, deserialize_with = "string_or_none")]
    pub subject: Option<String>,
    /// Content of the message
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

impl From<ApiContactRequest> for ContactRelayRequest {
    fn from(value: ApiContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject used for submissions which do not provide one.
pub const DEFAULT_CONTACT_SUBJECT: &str = "Portfolio Contact";

/// Raw contact form input as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    /// Hidden field which is only ever filled in by bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
}

/// Submission as received by the relay. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRelayRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Submission whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactAuthorName,
    pub email: ContactAuthorEmail,
    pub subject: Option<String>,
    pub message: ContactMessageContent,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Serialize, Deserialize)
)]
pub struct ContactAuthorName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Serialize, Deserialize)
)]
pub struct ContactAuthorEmail(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing required fields")]
pub struct MissingContactFields;

impl ContactSubmission {
    /// Returns the subject, falling back to `default` if it is absent or empty.
    pub fn subject_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.subject
            .as_deref()
            .filter(|subject| !subject.is_empty())
            .unwrap_or(default)
    }
}

impl TryFrom<ContactRelayRequest> for ContactSubmission {
    type Error = MissingContactFields;

    fn try_from(value: ContactRelayRequest) -> Result<Self, Self::Error> {
        let name = value
            .name
            .and_then(|name| ContactAuthorName::try_new(name).ok())
            .ok_or(MissingContactFields)?;
        let email = value
            .email
            .and_then(|email| ContactAuthorEmail::try_new(email).ok())
            .ok_or(MissingContactFields)?;
        let message = value
            .message
            .and_then(|message| ContactMessageContent::try_new(message).ok())
            .ok_or(MissingContactFields)?;

        Ok(Self {
            name,
            email,
            subject: value.subject,
            message,
        })
    }
}

impl From<ContactFormData> for ContactRelayRequest {
    fn from(value: ContactFormData) -> Self {
        Self {
            name: Some(value.name),
            email: Some(value.email),
            subject: value.subject,
            message: Some(value.message),
        }
    }
}

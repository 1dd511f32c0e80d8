//! Field validation for the contact form.
//!
//! Each validator checks a single raw field and reports at most one error,
//! in the order presence, length, format. Lengths are measured on the
//! trimmed value in characters.

use std::{str::FromStr, sync::LazyLock, time::Duration};

use chrono::{DateTime, Utc};
use regex::Regex;
use url::Url;

use crate::contact::ContactFormData;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const EMAIL_MAX_LENGTH: usize = 100;
pub const SUBJECT_MIN_LENGTH: usize = 3;
pub const SUBJECT_MAX_LENGTH: usize = 100;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// Minimum time between two submissions of the same client.
pub const DEFAULT_RATE_LIMIT_INTERVAL: Duration = Duration::from_secs(60);

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

static PHONE_SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-()]").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    fn error(error: impl Into<String>) -> Self {
        Self::from_errors(vec![error.into()])
    }
}

/// Per-field validation results of a complete contact form.
///
/// Optional fields only carry a result if the user provided a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormValidation {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub subject: Option<ValidationResult>,
    pub message: ValidationResult,
    pub honeypot: Option<ValidationResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
    Honeypot,
}

impl FromStr for FormField {
    type Err = UnknownFormField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            "honeypot" => Ok(Self::Honeypot),
            _ => Err(UnknownFormField),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field")]
pub struct UnknownFormField;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Shared email shape check: one `@`, no whitespace and a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_name(name: &str) -> ValidationResult {
    let len = char_len(name.trim());

    if len == 0 {
        ValidationResult::error("Name is required")
    } else if len < NAME_MIN_LENGTH {
        ValidationResult::error("Name must be at least 2 characters long")
    } else if len > NAME_MAX_LENGTH {
        ValidationResult::error("Name must be less than 50 characters")
    } else if !NAME_REGEX.is_match(name) {
        ValidationResult::error("Name can only contain letters, spaces, hyphens, and apostrophes")
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        ValidationResult::error("Email is required")
    } else if !is_valid_email(trimmed) {
        ValidationResult::error("Please enter a valid email address")
    } else if char_len(trimmed) > EMAIL_MAX_LENGTH {
        ValidationResult::error("Email must be less than 100 characters")
    } else {
        ValidationResult::valid()
    }
}

/// An absent or blank subject is valid.
pub fn validate_subject(subject: Option<&str>) -> ValidationResult {
    let len = subject.map(|s| char_len(s.trim())).unwrap_or(0);

    if len == 0 {
        ValidationResult::valid()
    } else if len < SUBJECT_MIN_LENGTH {
        ValidationResult::error("Subject must be at least 3 characters long")
    } else if len > SUBJECT_MAX_LENGTH {
        ValidationResult::error("Subject must be less than 100 characters")
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_message(message: &str) -> ValidationResult {
    let len = char_len(message.trim());

    if len == 0 {
        ValidationResult::error("Message is required")
    } else if len < MESSAGE_MIN_LENGTH {
        ValidationResult::error("Message must be at least 10 characters long")
    } else if len > MESSAGE_MAX_LENGTH {
        ValidationResult::error("Message must be less than 1000 characters")
    } else {
        ValidationResult::valid()
    }
}

/// Fails if the hidden honeypot field carries any content.
pub fn validate_honeypot(honeypot: Option<&str>) -> ValidationResult {
    match honeypot {
        Some(honeypot) if !honeypot.trim().is_empty() => ValidationResult::error("Spam detected"),
        _ => ValidationResult::valid(),
    }
}

pub fn validate_contact_form(form: &ContactFormData) -> ContactFormValidation {
    fn provided(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|x| !x.is_empty())
    }

    ContactFormValidation {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        subject: provided(&form.subject).map(|subject| validate_subject(Some(subject))),
        message: validate_message(&form.message),
        honeypot: provided(&form.honeypot).map(|honeypot| validate_honeypot(Some(honeypot))),
    }
}

pub fn is_form_valid(validation: &ContactFormValidation) -> bool {
    let required = [&validation.name, &validation.email, &validation.message];
    let optional = [&validation.subject, &validation.honeypot];

    required
        .into_iter()
        .chain(optional.into_iter().flatten())
        .all(|result| result.is_valid)
}

/// Collects all error messages, required fields (name, email, message)
/// first, then the optional ones (subject, honeypot).
pub fn get_form_errors(validation: &ContactFormValidation) -> Vec<String> {
    let required = [&validation.name, &validation.email, &validation.message];
    let optional = [&validation.subject, &validation.honeypot];

    required
        .into_iter()
        .chain(optional.into_iter().flatten())
        .filter(|result| !result.is_valid)
        .flat_map(|result| result.errors.iter().cloned())
        .collect()
}

/// Validates a single field while the user is typing. Unknown fields are
/// always valid.
pub fn validate_field(field: &str, value: &str) -> ValidationResult {
    match field.parse::<FormField>() {
        Ok(FormField::Name) => validate_name(value),
        Ok(FormField::Email) => validate_email(value),
        Ok(FormField::Subject) => validate_subject(Some(value)),
        Ok(FormField::Message) => validate_message(value),
        Ok(FormField::Honeypot) => validate_honeypot(Some(value)),
        Err(UnknownFormField) => ValidationResult::valid(),
    }
}

/// Fails if less than `min_interval` passed since `last_submission`.
///
/// Not part of the submission path; callers which track submission times
/// may use it to throttle clients.
pub fn validate_rate_limit(
    last_submission: DateTime<Utc>,
    min_interval: Duration,
    now: DateTime<Utc>,
) -> ValidationResult {
    let elapsed_ms = (now - last_submission).num_milliseconds();
    let min_interval_ms = i64::try_from(min_interval.as_millis()).unwrap_or(i64::MAX);

    if elapsed_ms >= min_interval_ms {
        return ValidationResult::valid();
    }

    let remaining_secs = min_interval_ms
        .saturating_sub(elapsed_ms)
        .saturating_add(999)
        / 1000;
    ValidationResult::error(format!(
        "Please wait {remaining_secs} seconds before submitting again"
    ))
}

pub fn validate_url(url: &str) -> ValidationResult {
    if url.trim().is_empty() {
        ValidationResult::error("URL is required")
    } else if Url::parse(url).is_err() {
        ValidationResult::error("Please enter a valid URL")
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        ValidationResult::error("URL must start with http:// or https://")
    } else {
        ValidationResult::valid()
    }
}

/// An absent or blank phone number is valid.
pub fn validate_phone(phone: Option<&str>) -> ValidationResult {
    let Some(phone) = phone.filter(|phone| !phone.trim().is_empty()) else {
        return ValidationResult::valid();
    };

    let digits = PHONE_SEPARATOR_REGEX.replace_all(phone, "");
    if PHONE_REGEX.is_match(&digits) {
        ValidationResult::valid()
    } else {
        ValidationResult::error("Please enter a valid phone number")
    }
}

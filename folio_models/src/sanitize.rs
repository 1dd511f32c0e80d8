use crate::contact::ContactFormData;

/// Normalizes an already validated form before it is transmitted.
///
/// Trims every field and lowercases the email address.
pub fn sanitize_form_data(form: &ContactFormData) -> ContactFormData {
    ContactFormData {
        name: form.name.trim().into(),
        email: form.email.trim().to_lowercase(),
        subject: form.subject.as_deref().map(|subject| subject.trim().into()),
        message: form.message.trim().into(),
        honeypot: form.honeypot.as_deref().map(|honeypot| honeypot.trim().into()),
    }
}

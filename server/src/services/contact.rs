//! Contact enquiry validation and email relay.
//!
//! Submissions are normalized into a [`ContactMessage`] and handed to a
//! [`ContactMailer`]. The production mailer sends through Resend; tests plug
//! in a recording mock.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use sebat_client::net::types::ContactRequest;
use uuid::Uuid;

use crate::config::RelayConfig;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_PHONE_LEN: usize = 50;
pub const MAX_MESSAGE_LEN: usize = 5000;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    Missing(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your {field} is too long (max {max} characters).")]
    TooLong { field: &'static str, max: usize },
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A validated enquiry ready to relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub reference: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn subject(&self) -> String {
        format!("Website enquiry from {}", self.name)
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty()
        || domain.contains('@')
        || normalized.chars().any(char::is_whitespace)
        || !domain.contains('.')
        || domain.split('.').any(str::is_empty)
    {
        return None;
    }
    Some(normalized)
}

fn required(value: &str, label: &'static str, max: usize) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactError::Missing(label));
    }
    if trimmed.chars().count() > max {
        return Err(ContactError::TooLong { field: label, max });
    }
    Ok(trimmed.to_owned())
}

/// Validate a raw request and assign it a fresh reference.
///
/// # Errors
///
/// Returns [`ContactError`] for a blank required field, a malformed email, or
/// an over-long field.
pub fn validate(request: &ContactRequest) -> Result<ContactMessage, ContactError> {
    let name = required(&request.name, "name", MAX_NAME_LEN)?;
    let email = required(&request.email, "email address", MAX_EMAIL_LEN)?;
    let email = normalize_email(&email).ok_or(ContactError::InvalidEmail)?;
    let phone = request.phone.trim();
    if phone.chars().count() > MAX_PHONE_LEN {
        return Err(ContactError::TooLong { field: "phone number", max: MAX_PHONE_LEN });
    }
    let message = required(&request.message, "message", MAX_MESSAGE_LEN)?;

    Ok(ContactMessage {
        reference: Uuid::new_v4(),
        name,
        email,
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        message,
    })
}

/// Escape text for interpolation into HTML element content or attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fill the enquiry template in one pass; substituted text is never rescanned.
#[must_use]
pub fn render_contact_template(message: &ContactMessage) -> String {
    let mut out = String::with_capacity(CONTACT_TEMPLATE.len() + message.message.len());
    let mut rest = CONTACT_TEMPLATE;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        match template_value(message, &after[..end]) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn template_value(message: &ContactMessage, key: &str) -> Option<String> {
    let value = match key {
        "REFERENCE" => message.reference.to_string(),
        "NAME" => escape_html(&message.name),
        "EMAIL" => escape_html(&message.email),
        "PHONE" => escape_html(message.phone.as_deref().unwrap_or("Not provided")),
        "MESSAGE" => escape_html(&message.message),
        _ => return None,
    };
    Some(value)
}

// =============================================================================
// MAILER
// =============================================================================

/// Delivers a validated enquiry to the company inbox.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] if the provider rejects or cannot
    /// be reached.
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// [`ContactMailer`] backed by the Resend API.
pub struct ResendMailer {
    client: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &RelayConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl ContactMailer for ResendMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let to = [self.to.as_str()];
        let subject = message.subject();
        let html = render_contact_template(message);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject)
            .with_html(&html)
            .with_reply(&message.email);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

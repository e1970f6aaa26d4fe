//! Contact form fields and submission status.
//!
//! Status moves `Idle -> Submitting -> Success | Error`. A successful
//! submission clears every field; a failed one keeps them so the visitor can
//! retry without retyping.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Map an input's `name` attribute to a field.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in your {0}.")]
    Missing(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your message is already being sent.")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: FormStatus,
}

impl ContactForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Validate the fields and enter `Submitting`.
    ///
    /// Returns the request to send. On validation failure the status is left
    /// untouched so the form can surface the problem inline.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when a required field is blank, the email is
    /// malformed, or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        let request = ContactRequest {
            name: self.fields.name.trim().to_owned(),
            email: self.fields.email.trim().to_owned(),
            phone: self.fields.phone.trim().to_owned(),
            message: self.fields.message.trim().to_owned(),
        };
        if request.name.is_empty() {
            return Err(FormError::Missing("name"));
        }
        if request.email.is_empty() {
            return Err(FormError::Missing("email address"));
        }
        if !looks_like_email(&request.email) {
            return Err(FormError::InvalidEmail);
        }
        if request.message.is_empty() {
            return Err(FormError::Missing("message"));
        }
        self.status = FormStatus::Submitting;
        Ok(request)
    }

    /// Settle an in-flight submission. Ignored unless currently submitting.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = FormStatus::Success;
            }
            Err(message) => self.status = FormStatus::Error(message),
        }
    }
}

/// Single `@` with a non-empty local part and a dotted domain.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

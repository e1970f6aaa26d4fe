//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's contact route payloads field for field so
//! serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Optional; sent as an empty string when left blank.
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

/// Response of `POST /api/contact`, for both success and failure statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    /// Submission reference, present when `ok`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Human-readable failure reason, present when not `ok`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn accepted(reference: impl Into<String>) -> Self {
        Self { ok: true, reference: Some(reference.into()), error: None }
    }

    #[must_use]
    pub fn rejected(error: impl Into<String>) -> Self {
        Self { ok: false, reference: None, error: Some(error.into()) }
    }
}

//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submitting only makes
//! sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a visitor-facing message instead of
//! panics, so a failed submission degrades to an inline error banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactRequest;
#[cfg(feature = "hydrate")]
use super::types::ContactResponse;

#[cfg(any(test, feature = "hydrate"))]
const CONTACT_ENDPOINT: &str = "/api/contact";

/// Pick the message shown under the form for a failed submission.
///
/// The server's own explanation wins for validation and rate-limit responses;
/// anything else gets a generic retry hint.
#[cfg(any(test, feature = "hydrate"))]
fn contact_failure_message(status: u16, server_error: Option<&str>) -> String {
    match (status, server_error) {
        (400 | 429, Some(reason)) if !reason.trim().is_empty() => reason.trim().to_owned(),
        (429, _) => "Too many messages. Please wait a few minutes and try again.".to_owned(),
        (0, _) => "Sorry, there was an error sending your message. Please try again.".to_owned(),
        _ => format!("Sorry, there was an error sending your message. Please try again. ({status})"),
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// Returns the server-issued submission reference on success.
///
/// # Errors
///
/// Returns a displayable error string if the request cannot be sent, the
/// server responds with a non-OK status, or the body reports failure.
pub async fn submit_contact(request: &ContactRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                leptos::logging::warn!("contact submit failed: {e}");
                contact_failure_message(0, None)
            })?;
        let status = resp.status();
        let body = resp.json::<ContactResponse>().await.ok();
        match body {
            Some(ContactResponse { ok: true, reference: Some(reference), .. }) if resp.ok() => Ok(reference),
            Some(body) => Err(contact_failure_message(status, body.error.as_deref())),
            None => Err(contact_failure_message(status, None)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

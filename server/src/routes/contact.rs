//! Contact form submission endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome answers with a [`ContactResponse`] body so the browser can
//! show the message inline. Relay failures are logged with the submission
//! reference; the client only sees a generic retry hint.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use sebat_client::net::types::{ContactRequest, ContactResponse};

use crate::rate_limit::RateLimitError;
use crate::services::contact::{self, ContactError};
use crate::state::AppState;

const RELAY_UNAVAILABLE: &str = "Our contact form is temporarily unavailable. Please email us directly.";
const RELAY_FAILED: &str = "Sorry, there was an error sending your message. Please try again.";
const RATE_LIMITED: &str = "Too many messages. Please wait a few minutes and try again.";

type ContactReply = (StatusCode, Json<ContactResponse>);

fn reject(status: StatusCode, message: impl Into<String>) -> ContactReply {
    (status, Json(ContactResponse::rejected(message)))
}

/// Map a service error to the status and visitor-facing text.
fn contact_error_reply(err: &ContactError) -> ContactReply {
    match err {
        ContactError::Missing(_) | ContactError::InvalidEmail | ContactError::TooLong { .. } => {
            reject(StatusCode::BAD_REQUEST, err.to_string())
        }
        ContactError::Delivery(_) => reject(StatusCode::BAD_GATEWAY, RELAY_FAILED),
    }
}

/// `POST /api/contact` — validate, rate-limit, and relay an enquiry.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactReply {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact payload rejected");
            return reject(StatusCode::BAD_REQUEST, "Invalid submission.");
        }
    };

    let message = match contact::validate(&request) {
        Ok(message) => message,
        Err(e) => return contact_error_reply(&e),
    };

    let Some(mailer) = state.mailer.as_ref() else {
        tracing::warn!(reference = %message.reference, "contact relay not configured; submission dropped");
        return reject(StatusCode::SERVICE_UNAVAILABLE, RELAY_UNAVAILABLE);
    };

    if let Err(e) = state.rate_limiter.check_and_record(peer.ip()) {
        match e {
            RateLimitError::PerClientExceeded { .. } => {
                tracing::info!(client = %peer.ip(), error = %e, "contact submission rate limited");
            }
            RateLimitError::GlobalExceeded { .. } => {
                tracing::warn!(error = %e, "contact submission rate limited globally");
            }
        }
        return reject(StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED);
    }

    if let Err(e) = mailer.send(&message).await {
        tracing::error!(reference = %message.reference, error = %e, "contact relay failed");
        return contact_error_reply(&e);
    }

    tracing::info!(reference = %message.reference, from = %message.email, "contact enquiry relayed");
    (StatusCode::OK, Json(ContactResponse::accepted(message.reference.to_string())))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use super::*;

#[test]
fn contact_endpoint_is_same_origin_api_path() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

#[test]
fn validation_failure_uses_server_reason() {
    assert_eq!(contact_failure_message(400, Some(" email is invalid ")), "email is invalid");
}

#[test]
fn rate_limit_without_reason_gets_wait_hint() {
    assert!(contact_failure_message(429, None).starts_with("Too many messages"));
}

#[test]
fn server_errors_get_generic_retry_message() {
    let msg = contact_failure_message(502, Some("resend: upstream exploded"));
    assert!(msg.starts_with("Sorry, there was an error sending your message."));
    assert!(msg.ends_with("(502)"));
    assert!(!msg.contains("resend"));
}

#[test]
fn network_failure_has_no_status_suffix() {
    assert_eq!(
        contact_failure_message(0, None),
        "Sorry, there was an error sending your message. Please try again."
    );
}

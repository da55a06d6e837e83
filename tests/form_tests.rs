// Host-side tests for quote form encoding and status mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod form {
        include!("../src/core/form.rs");
    }
}

use crate::core::form::*;

#[test]
fn success_reply_renders_green_confirmation() {
    let outcome = interpret_response(200, r#"{"success":true}"#);
    assert!(outcome.is_ok());
    let msg = StatusMessage::from_outcome(&outcome);
    assert_eq!(msg.text, "Form submitted successfully!");
    assert_eq!(msg.color, "#4CAF50");
}

#[test]
fn rejection_surfaces_server_message_in_red() {
    let outcome = interpret_response(422, r#"{"message":"Invalid email"}"#);
    match &outcome {
        Err(SubmitError::Rejected { status, message }) => {
            assert_eq!(*status, 422);
            assert_eq!(message.as_deref(), Some("Invalid email"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    let msg = StatusMessage::from_outcome(&outcome);
    assert_eq!(msg.text, "Invalid email");
    assert_eq!(msg.color, "#f44336");
}

#[test]
fn rejection_without_message_falls_back_to_generic_text() {
    let outcome = interpret_response(500, r#"{"success":false}"#);
    let msg = StatusMessage::from_outcome(&outcome);
    assert_eq!(msg.text, "Something went wrong!");
    assert_eq!(msg.color, "#f44336");
}

#[test]
fn unparseable_body_is_a_failure_even_on_200() {
    let outcome = interpret_response(200, "<html>gateway</html>");
    assert!(matches!(outcome, Err(SubmitError::Decode(_))));
    assert_eq!(
        StatusMessage::from_outcome(&outcome).text,
        "Something went wrong!"
    );
}

#[test]
fn network_failure_renders_generic_error() {
    let outcome: Result<(), SubmitError> = Err(SubmitError::Network("TypeError: Failed to fetch".into()));
    let msg = StatusMessage::from_outcome(&outcome);
    assert_eq!(msg.text, "Something went wrong!");
    assert_eq!(msg.color, "#f44336");
}

#[test]
fn sending_status_is_white() {
    let msg = StatusMessage::sending();
    assert_eq!(msg.text, "Sending...");
    assert_eq!(msg.color, "white");
}

#[test]
fn encode_fields_builds_flat_json_object() {
    let json = encode_fields([
        ("access_key", Some("abc-123")),
        ("name", Some("Ada")),
        ("attachment", None),
        ("message", Some("Quote for \"roof\"\nplease")),
    ]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let obj = value.as_object().expect("object");
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["access_key"], "abc-123");
    assert_eq!(obj["name"], "Ada");
    assert_eq!(obj["message"], "Quote for \"roof\"\nplease");
    assert!(!obj.contains_key("attachment"));
}

#[test]
fn encode_fields_keeps_last_duplicate() {
    let json = encode_fields([("topic", Some("a")), ("topic", Some("b"))]);
    assert_eq!(json, r#"{"topic":"b"}"#);
}

#[test]
fn encode_no_fields_is_empty_object() {
    assert_eq!(encode_fields(std::iter::empty::<(&str, Option<&str>)>()), "{}");
}

#[test]
fn any_json_body_counts_as_success_on_200() {
    for body in ["null", r#""ok""#, "[]", "true", "{}"] {
        let outcome = interpret_response(200, body);
        assert!(outcome.is_ok(), "body {body}");
        assert_eq!(StatusMessage::from_outcome(&outcome).color, "#4CAF50");
    }
}

#[test]
fn non_string_message_is_shown_as_json_text() {
    let outcome = interpret_response(422, r#"{"message":42}"#);
    match &outcome {
        Err(SubmitError::Rejected { status, message }) => {
            assert_eq!(*status, 422);
            assert_eq!(message.as_deref(), Some("42"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    let msg = StatusMessage::from_outcome(&outcome);
    assert_eq!(msg.text, "42");
    assert_eq!(msg.color, "#f44336");
}

#[test]
fn null_message_or_non_object_reply_uses_generic_text() {
    for body in [r#"{"message":null}"#, "[1,2]", r#""denied""#] {
        let outcome = interpret_response(400, body);
        assert!(
            matches!(outcome, Err(SubmitError::Rejected { message: None, .. })),
            "body {body}"
        );
        assert_eq!(StatusMessage::from_outcome(&outcome).text, "Something went wrong!");
    }
}

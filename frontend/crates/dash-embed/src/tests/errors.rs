use crate::{EmbedError, SessionOutcome};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_token_fetch_error_when_displayed_then_carries_status() {
    let err = EmbedError::token_fetch(503);

    assert!(err.to_string().contains("HTTP 503"));
    assert_that!(err.status(), some(eq(503)));
}

#[test]
fn given_non_fetch_error_when_status_then_none() {
    assert_that!(EmbedError::token_format("missing token").status(), none());
    assert_that!(EmbedError::container_missing("c").status(), none());
}

#[test]
fn given_server_side_statuses_when_is_transient_then_true() {
    assert!(EmbedError::token_fetch(503).is_transient());
    assert!(EmbedError::token_fetch(500).is_transient());
    assert!(EmbedError::token_fetch(429).is_transient());
}

#[test]
fn given_client_side_failures_when_is_transient_then_false() {
    assert!(!EmbedError::token_fetch(403).is_transient());
    assert!(!EmbedError::token_format("bad").is_transient());
    assert!(!EmbedError::container_missing("superset-container").is_transient());
    assert!(!EmbedError::embedding("sdk crashed").is_transient());
}

#[test]
fn given_any_error_when_recovery_hint_then_non_empty() {
    let errors = [
        EmbedError::token_fetch(401),
        EmbedError::token_fetch(503),
        EmbedError::token_format("bad"),
        EmbedError::container_missing("superset-container"),
        EmbedError::embedding("boom"),
    ];

    for err in errors {
        assert!(!err.recovery_hint().is_empty(), "{err}");
    }
}

#[test]
fn given_container_missing_when_displayed_then_names_element() {
    let err = EmbedError::container_missing("superset-container");

    assert!(err.to_string().contains("'superset-container'"));
}

#[test]
fn given_token_fetch_error_when_user_message_then_no_source_location() {
    let err = EmbedError::token_fetch(503);

    let message = err.user_message();

    assert_that!(message.as_str(), eq("Failed to fetch guest token: HTTP 503"));
    assert!(err.to_string().starts_with(&message));
    assert!(err.to_string().len() > message.len());
}

#[test]
fn given_each_variant_when_user_message_then_prefix_of_display() {
    let errors = [
        EmbedError::token_format("missing token"),
        EmbedError::container_missing("superset-container"),
        EmbedError::embedding("sdk crashed"),
    ];

    for err in errors {
        let message = err.user_message();
        assert!(err.to_string().starts_with(&message), "{err}");
        assert!(!message.contains(".rs"), "{message}");
    }
}

#[test]
fn given_rejected_token_when_outcome_built_then_carries_hint_and_transience() {
    let err = EmbedError::token_fetch(503);

    let outcome = SessionOutcome::failed(&err);

    assert_that!(
        outcome,
        eq(&SessionOutcome::Failed {
            error: String::from("Failed to fetch guest token: HTTP 503"),
            recovery_hint: err.recovery_hint().to_string(),
            transient: true,
        })
    );
}

#[test]
fn given_failed_outcome_when_serialized_then_flat_object() {
    let outcome = SessionOutcome::failed(&EmbedError::token_fetch(403));

    let value = serde_json::to_value(&outcome).unwrap();

    assert_that!(value["outcome"].as_str(), eq(Some("failed")));
    assert_that!(
        value["error"].as_str(),
        eq(Some("Failed to fetch guest token: HTTP 403"))
    );
    assert_that!(value["transient"].as_bool(), eq(Some(false)));
    assert!(value["recovery_hint"].as_str().is_some_and(|hint| hint.contains("refused")));
}

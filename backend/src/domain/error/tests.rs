//! Tests for the domain error payload formatting and propagation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_color()
}

#[rstest]
#[case(Error::unauthenticated(), ErrorCode::Unauthenticated, "can't get your soul")]
#[case(Error::malformed_request(), ErrorCode::MalformedRequest, "invalid form")]
#[case(Error::invalid_color(), ErrorCode::InvalidColor, "invalid color")]
#[case(Error::invalid_coordinate(), ErrorCode::InvalidCoordinate, "invalid x/y")]
#[case(Error::store_unavailable(), ErrorCode::StoreUnavailable, "can't get pixels")]
#[case(
    Error::store_write_failed(),
    ErrorCode::StoreWriteFailed,
    "can't paint this pixel"
)]
fn canvas_constructors_use_fixed_messages(
    #[case] error: Error,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    assert_eq!(error.code(), code);
    assert_eq!(error.message(), message);
    assert!(error.details().is_none());
}

#[rstest]
#[case(ErrorCode::Unauthenticated, true)]
#[case(ErrorCode::MalformedRequest, true)]
#[case(ErrorCode::InvalidColor, true)]
#[case(ErrorCode::InvalidCoordinate, true)]
#[case(ErrorCode::StoreUnavailable, false)]
#[case(ErrorCode::StoreWriteFailed, false)]
#[case(ErrorCode::InternalError, false)]
fn client_errors_are_caller_fixable(#[case] code: ErrorCode, #[case] expected: bool) {
    assert_eq!(code.is_client_error(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InternalError, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_replaces_blank_message() {
    let error = Error::new(ErrorCode::InternalError, "");
    assert_eq!(error.message(), "Internal server error");
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::store_unavailable() }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_with_camel_case_and_snake_case_code(base_error: Error) {
    let value = serde_json::to_value(base_error.with_trace_id(TRACE_ID)).expect("serialise");
    assert_eq!(
        value,
        json!({
            "code": "invalid_color",
            "message": "invalid color",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn deserialise_rejects_blank_trace_id() {
    let payload = json!({
        "code": "invalid_coordinate",
        "message": "invalid x/y",
        "traceId": " ",
    });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialise_accepts_snake_case_trace_id_alias() {
    let payload = json!({
        "code": "store_write_failed",
        "message": "can't paint this pixel",
        "trace_id": TRACE_ID,
    });
    let error: Error = serde_json::from_value(payload).expect("deserialise");
    assert_eq!(error.code(), ErrorCode::StoreWriteFailed);
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

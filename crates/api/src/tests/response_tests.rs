// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, parse_create_policy_response};

#[test]
fn test_numeric_policy_id() {
    let id: String =
        parse_create_policy_response(r#"{"status":"ok","result":{"policy_id":91234}}"#).unwrap();
    assert_eq!(id, "91234");
}

#[test]
fn test_string_policy_id() {
    let id: String =
        parse_create_policy_response(r#"{"status":"ok","result":{"policy_id":"abc-1"}}"#)
            .unwrap();
    assert_eq!(id, "abc-1");
}

#[test]
fn test_error_status_is_rejected() {
    let err: ApiError =
        parse_create_policy_response(r#"{"status":"error","message":"Invalid parameter"}"#)
            .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            message: String::from("Invalid parameter"),
        }
    );
}

#[test]
fn test_error_status_without_message() {
    let err: ApiError = parse_create_policy_response(r#"{"status":"error"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Request rejected: status 'error'");
}

#[test]
fn test_ok_without_result_is_malformed() {
    let err: ApiError = parse_create_policy_response(r#"{"status":"ok"}"#).unwrap_err();
    assert!(matches!(err, ApiError::MalformedJson { .. }));
}

#[test]
fn test_garbage_body_is_malformed() {
    let err: ApiError = parse_create_policy_response("<html>502</html>").unwrap_err();
    assert!(matches!(err, ApiError::MalformedJson { .. }));
}

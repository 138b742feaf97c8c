use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_401_is_unauthorized_regardless_of_body() {
    let err = ApiError::from_status(401, Some(r#"{"detail":"Incorrect username or password"}"#));
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn other_4xx_is_validation_with_service_detail() {
    let err = ApiError::from_status(400, Some(r#"{"detail":"Email already registered"}"#));
    assert_eq!(
        err,
        ApiError::Validation {
            status: 400,
            detail: "Email already registered".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn validation_without_usable_detail_gets_generic_message() {
    // FastAPI request-validation errors carry a list, not a string.
    let err = ApiError::from_status(422, Some(r#"{"detail":[{"loc":["body"],"msg":"bad"}]}"#));
    assert_eq!(
        err,
        ApiError::Validation {
            status: 422,
            detail: "request rejected (status 422)".to_owned(),
        }
    );

    let err = ApiError::from_status(404, Some("not json"));
    assert_eq!(
        err,
        ApiError::Validation {
            status: 404,
            detail: "request rejected (status 404)".to_owned(),
        }
    );
}

#[test]
fn fivexx_is_server() {
    let err = ApiError::from_status(503, None);
    assert_eq!(err, ApiError::Server { status: 503 });
    assert_eq!(err.to_string(), "server error (status 503)");
}

#[test]
fn only_unauthorized_reports_unauthorized() {
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
    assert!(!ApiError::Server { status: 500 }.is_unauthorized());
    assert!(!ApiError::Decode.is_unauthorized());
    assert!(
        !ApiError::Validation {
            status: 400,
            detail: "nope".to_owned()
        }
        .is_unauthorized()
    );
}

use super::*;

#[test]
fn status_helpers_classify_codes() {
    let unauthorized = ApiError::Status { status: 401 };
    assert!(unauthorized.is_unauthorized());
    assert!(!unauthorized.is_bad_request());

    let bad_request = ApiError::Status { status: 400 };
    assert!(bad_request.is_bad_request());
    assert_eq!(bad_request.status(), Some(400));
}

#[test]
fn non_status_errors_carry_no_code() {
    let network = ApiError::Network("connection refused".to_owned());
    assert_eq!(network.status(), None);
    assert!(!network.is_unauthorized());
}

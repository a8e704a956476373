use super::*;

#[test]
fn empty_form_reports_both_fields() {
    let errors = LoginForm::default()
        .validate()
        .expect_err("empty form must not build a request");
    assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
    assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
}

#[test]
fn missing_password_flags_only_password() {
    let form = LoginForm {
        email: "user@test.com".to_owned(),
        password: String::new(),
    };
    let errors = form.validate().expect_err("password is required");
    assert!(errors.email.is_none());
    assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
}

#[test]
fn missing_email_flags_only_email() {
    let form = LoginForm {
        email: String::new(),
        password: "password123".to_owned(),
    };
    let errors = form.validate().expect_err("email is required");
    assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
    assert!(errors.password.is_none());
}

#[test]
fn complete_form_builds_the_request_verbatim() {
    let form = LoginForm {
        email: "user@test.com".to_owned(),
        password: "password123".to_owned(),
    };
    let request = form.validate().expect("valid form");
    assert_eq!(request.email, "user@test.com");
    assert_eq!(request.password, "password123");
}

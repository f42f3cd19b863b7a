use super::*;

#[test]
fn user_message_prefers_validation_text() {
    let err = ApiError::Validation("Passwords do not match".to_owned());
    assert_eq!(err.user_message("Registration failed"), "Passwords do not match");
}

#[test]
fn user_message_uses_server_message_when_present() {
    let err = ApiError::Status {
        status: 400,
        message: Some("Email already registered".to_owned()),
    };
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_without_server_message() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Login failed"), "Login failed");
}

#[test]
fn status_reports_http_codes_only_for_backend_errors() {
    assert_eq!(ApiError::Unauthorized { message: None }.status(), Some(401));
    assert_eq!(ApiError::Status { status: 404, message: None }.status(), Some(404));
    assert_eq!(ApiError::SessionEnded.status(), None);
}

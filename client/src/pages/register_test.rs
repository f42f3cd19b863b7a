use super::*;

#[test]
fn mismatched_confirmation_is_rejected_locally() {
    assert_eq!(register_form("a@b.c", "one", "two"), Err("Passwords do not match"));
}

#[test]
fn matching_passwords_build_request() {
    let form = register_form(" a@b.c ", "pw", "pw").expect("valid");
    assert_eq!(form.email, "a@b.c");
    assert_eq!(form.confirm_password, "pw");
}

#[test]
fn blank_email_is_rejected() {
    assert_eq!(register_form("  ", "pw", "pw"), Err("Email is required"));
}

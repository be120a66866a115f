use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  admin  ", "secret"),
        Ok(("admin".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("admin", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with whitespace.
    assert_eq!(
        validate_login_input("admin", " spaced pw "),
        Ok(("admin".to_owned(), " spaced pw ".to_owned()))
    );
}

use super::*;

#[test]
fn basic_auth_header_encodes_username_colon_password() {
    let credentials =
        Credentials { username: "admin".to_owned(), password: "secret".to_owned() };
    // base64("admin:secret")
    assert_eq!(basic_auth_header(&credentials), "Basic YWRtaW46c2VjcmV0");
}

#[test]
fn basic_auth_header_handles_empty_password() {
    let credentials = Credentials { username: "admin".to_owned(), password: String::new() };
    assert_eq!(basic_auth_header(&credentials), "Basic YWRtaW46");
}

#[test]
fn load_is_none_outside_the_browser() {
    assert_eq!(load(), None);
}

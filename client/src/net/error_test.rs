use super::*;

#[test]
fn backend_errors_surface_detail_verbatim() {
    let err = ApiError::Backend { status: 422, detail: "unsupported file type".to_owned() };
    assert_eq!(err.user_message(), "unsupported file type");
}

#[test]
fn network_errors_use_generic_wording() {
    let err = ApiError::Network("fetch failed".to_owned());
    let message = err.user_message();
    assert!(message.contains("Could not reach the server"));
    assert!(!message.contains("fetch failed"));
}

#[test]
fn unauthorized_prompts_reauthentication() {
    assert!(ApiError::Unauthorized.user_message().contains("sign in"));
}

use super::*;

#[tokio::test]
async fn healthz_answers_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

use super::*;

#[test]
fn endpoints_live_under_api_auth() {
    assert_eq!(ME_ENDPOINT, "/api/auth/me");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
}

#[test]
fn unexpected_status_message_names_endpoint_and_status() {
    assert_eq!(unexpected_status_message(ME_ENDPOINT, 401), "/api/auth/me returned 401");
}

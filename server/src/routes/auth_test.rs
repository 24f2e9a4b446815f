use super::*;

// =============================================================================
// Cookie builders
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_root_path() {
    let cookie = session_cookie("tok".to_owned(), false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), None);
}

#[test]
fn session_cookie_secure_flag_follows_config() {
    assert_eq!(session_cookie("tok".to_owned(), true).secure(), Some(true));
}

#[test]
fn oauth_state_cookie_expires_in_ten_minutes() {
    let cookie = oauth_state_cookie("st".to_owned(), false);
    assert_eq!(cookie.name(), OAUTH_STATE_COOKIE_NAME);
    assert_eq!(cookie.max_age(), Some(Duration::minutes(10)));
}

#[test]
fn expired_cookie_clears_value_immediately() {
    let cookie = expired_cookie(COOKIE_NAME, true);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(true));
}

// =============================================================================
// oauth_state_matches
// =============================================================================

#[test]
fn oauth_state_matches_equal_values() {
    assert!(oauth_state_matches(Some("abc"), Some("abc")));
}

#[test]
fn oauth_state_rejects_mismatch() {
    assert!(!oauth_state_matches(Some("abc"), Some("abd")));
}

#[test]
fn oauth_state_rejects_missing_sides() {
    assert!(!oauth_state_matches(None, Some("abc")));
    assert!(!oauth_state_matches(Some("abc"), None));
    assert!(!oauth_state_matches(None, None));
}

#[test]
fn oauth_state_rejects_empty_cookie() {
    assert!(!oauth_state_matches(Some(""), Some("")));
}

use super::*;

fn config() -> GitHubConfig {
    GitHubConfig {
        client_id: "cid".to_owned(),
        client_secret: "secret".to_owned(),
        redirect_uri: "http://localhost:3000/auth/github/callback".to_owned(),
    }
}

fn gh_user(name: Option<&str>) -> GitHubUser {
    GitHubUser { id: 1, login: "octocat".to_owned(), name: name.map(str::to_owned), avatar_url: None }
}

// =============================================================================
// GitHubConfig
// =============================================================================

fn query_pairs(url: &str) -> Vec<(String, String)> {
    reqwest::Url::parse(url)
        .expect("absolute url")
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[test]
fn authorize_url_carries_client_redirect_and_state() {
    let url = config().authorize_url("abc123").unwrap();
    assert!(url.starts_with("https://github.com/login/oauth/authorize?"));

    let pairs = query_pairs(&url);
    assert_eq!(param(&pairs, "client_id"), Some("cid"));
    assert_eq!(param(&pairs, "redirect_uri"), Some("http://localhost:3000/auth/github/callback"));
    assert_eq!(param(&pairs, "scope"), Some("read:user"));
    assert_eq!(param(&pairs, "state"), Some("abc123"));
}

#[test]
fn authorize_url_keeps_redirect_query_inside_redirect_uri() {
    let cfg = GitHubConfig {
        redirect_uri: "https://dash.example/auth/github/callback?next=/app&x=1".to_owned(),
        ..config()
    };
    let url = cfg.authorize_url("abc123").unwrap();
    assert!(!url.contains("&x=1"), "{url}");

    let pairs = query_pairs(&url);
    assert_eq!(param(&pairs, "redirect_uri"), Some(cfg.redirect_uri.as_str()));
    assert_eq!(param(&pairs, "x"), None);
    assert_eq!(param(&pairs, "next"), None);
    assert_eq!(param(&pairs, "state"), Some("abc123"));
    assert_eq!(pairs.len(), 4);
}

#[test]
fn authorize_url_escapes_reserved_characters_in_client_id() {
    let cfg = GitHubConfig { client_id: "a&b=c d".to_owned(), ..config() };
    let pairs = query_pairs(&cfg.authorize_url("s").unwrap());
    assert_eq!(param(&pairs, "client_id"), Some("a&b=c d"));
    assert_eq!(param(&pairs, "b"), None);
}

#[test]
fn from_lookup_rejects_blank_values() {
    let lookup = |key: &str| match key {
        "GITHUB_CLIENT_ID" => Some("cid".to_owned()),
        "GITHUB_CLIENT_SECRET" => Some("   ".to_owned()),
        "GITHUB_REDIRECT_URI" => Some("http://x".to_owned()),
        _ => None,
    };
    assert!(GitHubConfig::from_lookup(&lookup).is_none());
}

// =============================================================================
// Token response parsing
// =============================================================================

#[test]
fn parse_token_response_extracts_access_token() {
    let token = parse_token_response(r#"{"access_token":"gho_x","token_type":"bearer"}"#).unwrap();
    assert_eq!(token, "gho_x");
}

#[test]
fn parse_token_response_error_body_is_token_exchange_error() {
    let err = parse_token_response(r#"{"error":"bad_verification_code"}"#).unwrap_err();
    assert!(matches!(err, AuthError::TokenExchange(ref msg) if msg.contains("bad_verification_code")));
    assert!(err.is_upstream());
}

// =============================================================================
// GitHubUser
// =============================================================================

#[test]
fn display_name_prefers_profile_name() {
    assert_eq!(gh_user(Some("The Octocat")).display_name(), "The Octocat");
}

#[test]
fn display_name_falls_back_to_login() {
    assert_eq!(gh_user(None).display_name(), "octocat");
    assert_eq!(gh_user(Some("  ")).display_name(), "octocat");
}

#[test]
fn github_user_deserializes_null_name() {
    let user: GitHubUser =
        serde_json::from_str(r#"{"id":583231,"login":"octocat","name":null,"avatar_url":"https://a/x.png"}"#).unwrap();
    assert_eq!(user.id, 583_231);
    assert!(user.name.is_none());
}

// =============================================================================
// AuthError
// =============================================================================

#[test]
fn db_errors_are_not_upstream() {
    let err = AuthError::from(sqlx::Error::RowNotFound);
    assert!(!err.is_upstream());
    assert!(err.to_string().starts_with("database error"));
}

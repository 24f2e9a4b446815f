use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// is_well_formed_token
// =============================================================================

#[test]
fn generated_tokens_are_well_formed() {
    for _ in 0..8 {
        assert!(is_well_formed_token(&generate_token()));
    }
}

#[test]
fn wrong_length_is_rejected() {
    assert!(!is_well_formed_token(""));
    assert!(!is_well_formed_token("abc123"));
    assert!(!is_well_formed_token(&"a".repeat(65)));
}

#[test]
fn uppercase_and_non_hex_are_rejected() {
    assert!(!is_well_formed_token(&"A".repeat(64)));
    assert!(!is_well_formed_token(&"g".repeat(64)));
    assert!(!is_well_formed_token(&format!("{}'", "a".repeat(63))));
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_for_me_endpoint() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "octocat".to_owned(),
        avatar_url: None,
        auth_method: "github".to_owned(),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "octocat",
            "avatar_url": null,
            "auth_method": "github",
        })
    );
}

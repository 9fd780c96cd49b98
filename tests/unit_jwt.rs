use chrono::Utc;
use edusphere_auth::{create_access_token, create_token_at, verify_token};
use edusphere_config::JwtConfig;
use edusphere_core::{AuthError, InvalidTokenReason, UserRole};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        expires_in: 86_400,
    }
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();

    for role in UserRole::ALL {
        let token = create_access_token(7, role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(1, UserRole::Student, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.exp - claims.iat, jwt_config.expires_in);
    assert!((claims.iat - Utc::now().timestamp()).abs() <= 5);
}

#[test]
fn test_token_within_lifetime_is_accepted() {
    let jwt_config = get_test_jwt_config();
    let issued_at = Utc::now().timestamp() - 86_000;

    let token = create_token_at(3, UserRole::Parent, issued_at, &jwt_config).unwrap();

    assert!(verify_token(&token, &jwt_config).is_ok());
}

#[test]
fn test_token_past_expiry_is_expired() {
    let jwt_config = get_test_jwt_config();
    let issued_at = Utc::now().timestamp() - 2 * 86_400;

    let token = create_token_at(3, UserRole::Parent, issued_at, &jwt_config).unwrap();

    assert_eq!(
        verify_token(&token, &jwt_config).unwrap_err(),
        AuthError::TokenExpired
    );
}

#[test]
fn test_verify_token_wrong_secret() {
    let token = create_access_token(1, UserRole::Admin, &get_test_jwt_config()).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        expires_in: 86_400,
    };

    assert_eq!(
        verify_token(&token, &wrong_jwt_config).unwrap_err(),
        AuthError::InvalidToken(InvalidTokenReason::Malformed)
    );
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = [
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert_eq!(
            verify_token(token, &jwt_config).unwrap_err(),
            AuthError::InvalidToken(InvalidTokenReason::Malformed),
            "token {token:?}"
        );
    }
}

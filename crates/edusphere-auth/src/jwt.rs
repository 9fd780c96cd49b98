//! Token minting and verification (HS256).
//!
//! Verification separates expiry from every other failure: an expired token yields
//! [`AuthError::TokenExpired`], anything else (bad signature, malformed, wrong
//! algorithm) yields [`AuthError::InvalidToken`] with [`InvalidTokenReason::Malformed`].

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use edusphere_config::JwtConfig;
use edusphere_core::{AppError, AuthError, InvalidTokenReason, UserRole};

use crate::claims::Claims;

/// Mints a token for `user_id` that expires `jwt_config.expires_in` seconds from now.
pub fn create_access_token(
    user_id: i64,
    role: UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_token_at(user_id, role, Utc::now().timestamp(), jwt_config)
}

/// Mints a token as if issued at `issued_at` (Unix seconds).
pub fn create_token_at(
    user_id: i64,
    role: UserRole,
    issued_at: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let claims = Claims {
        user_id,
        role,
        iat: issued_at,
        exp: issued_at + jwt_config.expires_in,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Checks signature and expiry, returning the embedded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // No grace period: a token is expired the second `exp` passes.
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(InvalidTokenReason::Malformed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            expires_in: 3600,
        }
    }

    #[test]
    fn test_create_and_verify() {
        let config = get_test_jwt_config();
        let token = create_access_token(42, UserRole::Student, &config).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, UserRole::Student);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token() {
        let config = get_test_jwt_config();
        let two_hours_ago = Utc::now().timestamp() - 7200;
        let token = create_token_at(42, UserRole::Admin, two_hours_ago, &config).unwrap();

        assert_eq!(verify_token(&token, &config), Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_token_seconds_past_expiry_is_expired() {
        let config = JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            expires_in: 10,
        };
        let issued_at = Utc::now().timestamp() - 15;
        let token = create_token_at(1, UserRole::Admin, issued_at, &config).unwrap();

        assert_eq!(verify_token(&token, &config), Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_token_just_before_expiry_is_valid() {
        let config = get_test_jwt_config();
        let issued_at = Utc::now().timestamp() - 3590;
        let token = create_token_at(1, UserRole::Admin, issued_at, &config).unwrap();

        assert!(verify_token(&token, &config).is_ok());
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let config = get_test_jwt_config();
        let token = create_access_token(1, UserRole::Admin, &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            expires_in: 3600,
        };

        assert_eq!(
            verify_token(&token, &wrong_config),
            Err(AuthError::InvalidToken(InvalidTokenReason::Malformed))
        );
    }

    #[test]
    fn test_garbage_is_invalid() {
        let config = get_test_jwt_config();
        assert_eq!(
            verify_token("not.a.token", &config),
            Err(AuthError::InvalidToken(InvalidTokenReason::Malformed))
        );
        assert_eq!(
            verify_token("", &config),
            Err(AuthError::InvalidToken(InvalidTokenReason::Malformed))
        );
    }

    #[test]
    fn test_expired_with_wrong_secret_is_invalid_not_expired() {
        let config = get_test_jwt_config();
        let token = create_token_at(1, UserRole::Admin, 1_000_000, &config).unwrap();
        let wrong_config = JwtConfig {
            secret: "another-secret".to_string(),
            expires_in: 3600,
        };
        assert_eq!(
            verify_token(&token, &wrong_config),
            Err(AuthError::InvalidToken(InvalidTokenReason::Malformed))
        );
    }
}

//! Access-token claims handling
//!
//! The client never verifies token signatures; tokens are opaque credentials
//! issued and checked by the API. Decoding here only extracts the payload
//! into a typed structure, failing explicitly on missing or malformed
//! fields instead of producing a partially-populated identity.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token errors
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Required claim missing: {0}")]
    MissingClaim(String),

    #[error("Token decoding failed: {0}")]
    DecodingError(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidToken | ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::Malformed
            }
            ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim(claim.clone()),
            _ => TokenError::DecodingError(err.to_string()),
        }
    }
}

/// Claims carried in an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// User role
    pub role: String,
    /// Username
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check whether the token has expired relative to `now` (Unix seconds)
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Get user ID as UUID
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }
}

/// Token pair as returned by the API on sign-in and refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Access token (short-lived)
    pub access_token: String,
    /// Refresh token (long-lived)
    pub refresh_token: String,
}

/// Decode the payload of a token without verifying its signature or expiry.
///
/// Expiry is checked separately via [`Claims::is_expired`] so that an
/// expired token can still be read (e.g. to recover the username for a
/// refresh request).
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp"]);

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;

    Ok(token_data.claims)
}

/// Current Unix timestamp in seconds
#[cfg(feature = "ssr")]
pub fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Current Unix timestamp in seconds
#[cfg(not(feature = "ssr"))]
pub fn now_timestamp() -> i64 {
    js_sys::Date::now() as i64 / 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn mint_token(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"test_secret_key_for_testing_only"),
        )
        .unwrap()
    }

    fn test_claims(exp: i64) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role: "user".to_string(),
            username: "testuser".to_string(),
            iat: exp - 900,
            exp,
        }
    }

    #[test]
    fn test_decode_without_verification() {
        let now = now_timestamp();
        let claims = test_claims(now + 900);
        let token = mint_token(&claims);

        let decoded = decode_claims(&token).unwrap();

        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, "test@example.com");
        assert_eq!(decoded.role, "user");
        assert_eq!(decoded.username, "testuser");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_decode_expired_token_still_readable() {
        // Expired tokens must decode: the refresh flow reads the username
        // out of an expired access token.
        let now = now_timestamp();
        let claims = test_claims(now - 60);
        let token = mint_token(&claims);

        let decoded = decode_claims(&token).unwrap();
        assert!(decoded.is_expired(now));
    }

    #[test]
    fn test_is_expired() {
        let claims = test_claims(1_000);

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1_000));
        assert!(claims.is_expired(1_001));
    }

    #[test]
    fn test_decode_malformed_token() {
        let result = decode_claims("not.a.token");
        assert!(result.is_err());

        let result = decode_claims("garbage");
        assert!(matches!(result, Err(TokenError::Malformed)));
    }

    #[test]
    fn test_decode_missing_claim_fails() {
        // A payload without a username must not produce a partial identity
        #[derive(Serialize)]
        struct Partial {
            sub: String,
            exp: i64,
        }

        let token = encode(
            &Header::default(),
            &Partial {
                sub: Uuid::new_v4().to_string(),
                exp: now_timestamp() + 900,
            },
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn test_user_id() {
        let claims = test_claims(now_timestamp() + 900);
        assert!(claims.user_id().is_ok());

        let mut bad = claims.clone();
        bad.sub = "not-a-uuid".to_string();
        assert!(matches!(bad.user_id(), Err(TokenError::Malformed)));
    }

    #[test]
    fn test_token_pair_wire_format() {
        let json = r#"{
            "accessToken": "access123",
            "refreshToken": "refresh456"
        }"#;

        let pair: TokenPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.access_token, "access123");
        assert_eq!(pair.refresh_token, "refresh456");

        let round = serde_json::to_string(&pair).unwrap();
        assert!(round.contains("accessToken"));
        assert!(round.contains("refreshToken"));
    }
}

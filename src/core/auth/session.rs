//! Client-side session lifecycle
//!
//! A [`Session`] owns the stored token pair and the in-memory user identity
//! derived from the access-token claims. It is storage-agnostic so the same
//! code runs against localStorage in the browser and an in-memory map in
//! tests.

use serde::{Deserialize, Serialize};

use super::claims::{TokenPair, decode_claims};
use super::store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};

/// User identity derived from access-token claims.
///
/// Never persisted on its own: it is reconstructed from the stored access
/// token on each application load and dropped on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: String,
    pub username: String,
}

impl From<super::claims::Claims> for User {
    fn from(claims: super::claims::Claims) -> Self {
        User {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            username: claims.username,
        }
    }
}

/// Authentication session over a token store
#[derive(Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    user: Option<User>,
}

impl<S: TokenStore> Session<S> {
    /// Create a session, restoring the user from a stored access token if
    /// one is present.
    pub fn new(store: S) -> Self {
        let mut session = Self { store, user: None };
        session.load_user();
        session
    }

    /// Re-derive the in-memory user from the stored access token.
    ///
    /// An absent token or a token that fails to decode yields no current
    /// user; neither is an error.
    pub fn load_user(&mut self) -> Option<&User> {
        self.user = self
            .store
            .read(ACCESS_TOKEN_KEY)
            .and_then(|token| decode_claims(&token).ok())
            .map(User::from);
        self.user.as_ref()
    }

    /// Persist a token pair and re-derive the user from it.
    pub fn store_tokens(&mut self, tokens: &TokenPair) {
        self.store.write(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.store.write(REFRESH_TOKEN_KEY, &tokens.refresh_token);
        self.load_user();
    }

    /// Clear both stored tokens and the in-memory user.
    ///
    /// Purely local; there is no server-side invalidation call.
    pub fn sign_out(&mut self) {
        self.store.delete(ACCESS_TOKEN_KEY);
        self.store.delete(REFRESH_TOKEN_KEY);
        self.user = None;
    }

    /// True iff a user is held in memory and both tokens are present in
    /// storage. The two can diverge if storage is cleared externally, in
    /// which case this reports false.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some() && self.tokens_exist()
    }

    /// True if the stored access token is absent, undecodable, or expired
    /// relative to `now` (Unix seconds).
    pub fn is_token_expired(&self, now: i64) -> bool {
        match self.store.read(ACCESS_TOKEN_KEY) {
            Some(token) => match decode_claims(&token) {
                Ok(claims) => claims.is_expired(now),
                Err(_) => true,
            },
            None => true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.read(REFRESH_TOKEN_KEY)
    }

    fn tokens_exist(&self) -> bool {
        self.store.read(ACCESS_TOKEN_KEY).is_some() && self.store.read(REFRESH_TOKEN_KEY).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::claims::{Claims, now_timestamp};
    use crate::core::auth::store::MemoryStore;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn mint_access_token(username: &str, exp: i64) -> String {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: format!("{username}@example.com"),
            role: "user".to_string(),
            username: username.to_string(),
            iat: exp - 900,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server_side_secret"),
        )
        .unwrap()
    }

    fn valid_pair(username: &str) -> TokenPair {
        TokenPair {
            access_token: mint_access_token(username, now_timestamp() + 900),
            refresh_token: "opaque_refresh_token".to_string(),
        }
    }

    #[test]
    fn test_no_token_means_no_user() {
        let session = Session::new(MemoryStore::new());

        assert!(session.user().is_none());
        assert!(!session.is_logged_in());
        assert!(session.is_token_expired(now_timestamp()));
    }

    #[test]
    fn test_store_tokens_round_trip() {
        let pair = valid_pair("alice");
        let mut session = Session::new(MemoryStore::new());
        session.store_tokens(&pair);

        // Stored tokens equal exactly what the server returned
        assert_eq!(session.access_token(), Some(pair.access_token.clone()));
        assert_eq!(session.refresh_token(), Some(pair.refresh_token.clone()));

        let user = session.user().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, "user");
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_user_restored_on_construction() {
        let store = MemoryStore::new();
        store.write(ACCESS_TOKEN_KEY, &mint_access_token("bob", now_timestamp() + 900));
        store.write(REFRESH_TOKEN_KEY, "refresh");

        let session = Session::new(store);
        assert_eq!(session.user().unwrap().username, "bob");
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let mut session = Session::new(MemoryStore::new());
        session.store_tokens(&valid_pair("alice"));
        assert!(session.is_logged_in());

        session.sign_out();

        assert!(session.user().is_none());
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_undecodable_token_yields_no_user() {
        let store = MemoryStore::new();
        store.write(ACCESS_TOKEN_KEY, "definitely not a jwt");
        store.write(REFRESH_TOKEN_KEY, "refresh");

        let session = Session::new(store);
        assert!(session.user().is_none());
        assert!(!session.is_logged_in());
        assert!(session.is_token_expired(now_timestamp()));
    }

    #[test]
    fn test_missing_refresh_token_is_not_logged_in() {
        let store = MemoryStore::new();
        store.write(ACCESS_TOKEN_KEY, &mint_access_token("carol", now_timestamp() + 900));

        let session = Session::new(store);
        // User derives from the access token alone...
        assert!(session.user().is_some());
        // ...but the session only counts as logged in with both tokens
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_externally_cleared_storage_diverges() {
        let store = MemoryStore::new();
        store.write(ACCESS_TOKEN_KEY, &mint_access_token("dave", now_timestamp() + 900));
        store.write(REFRESH_TOKEN_KEY, "refresh");

        let mut session = Session::new(store);
        assert!(session.is_logged_in());

        // Another tab clears storage; the in-memory user survives but the
        // session no longer reports logged in.
        session.store.delete(ACCESS_TOKEN_KEY);
        session.store.delete(REFRESH_TOKEN_KEY);

        assert!(session.user().is_some());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_expired_token_still_has_user() {
        let now = now_timestamp();
        let pair = TokenPair {
            access_token: mint_access_token("erin", now - 60),
            refresh_token: "refresh".to_string(),
        };

        let mut session = Session::new(MemoryStore::new());
        session.store_tokens(&pair);

        // Expiry is not checked when deriving the user; the refresh flow
        // needs the username from the expired token.
        assert_eq!(session.user().unwrap().username, "erin");
        assert!(session.is_token_expired(now));
    }

    #[test]
    fn test_fresh_token_is_not_expired() {
        let mut session = Session::new(MemoryStore::new());
        session.store_tokens(&valid_pair("frank"));
        assert!(!session.is_token_expired(now_timestamp()));
    }
}

//! Authentication core
//!
//! Client-side session management:
//! - Typed access-token claims, decoded without signature verification
//! - Token persistence behind a storage trait
//! - Session lifecycle (sign-in, sign-out, login/expiry state)
//! - HTTP calls for sign-up, sign-in, and token refresh

pub mod api;
pub mod claims;
pub mod session;
pub mod store;

pub use api::{ApiError, RefreshRequest, SignInRequest, SignUpRequest};
pub use claims::{Claims, TokenError, TokenPair, decode_claims, now_timestamp};
pub use session::{Session, User};
pub use store::{ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY, TokenStore};

#[cfg(not(feature = "ssr"))]
pub use store::BrowserStorage;

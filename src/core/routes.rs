//! API route constants
//!
//! The REST API is external to this application; these are the paths it is
//! reached under.

/// User creation (sign-up)
pub const USERS: &str = "/api/users";

/// Token creation (sign-in)
pub const TOKENS_CREATE: &str = "/api/tokens";

/// Refresh-token exchange
pub const TOKENS_CREATE_REFRESH: &str = "/api/tokens/refresh";

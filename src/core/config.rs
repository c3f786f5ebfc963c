//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration loaded from environment variables.
///
/// The SPA talks to the REST API at relative `/api` paths; `api_upstream`
/// names where that API actually lives so a reverse proxy (or the deployer)
/// can be pointed at it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API backing the application
    /// Example: https://api.example.com
    pub api_upstream: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_upstream: std::env::var("API_UPSTREAM").ok(),
        }
    }

    /// Check if an API upstream is configured
    pub fn has_api_upstream(&self) -> bool {
        self.api_upstream.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test to avoid concurrent mutation of the process environment
    #[test]
    fn test_from_env() {
        let original = std::env::var("API_UPSTREAM").ok();

        // SAFETY: test environment
        unsafe { std::env::remove_var("API_UPSTREAM") };
        assert!(!Config::from_env().has_api_upstream());

        // SAFETY: test environment
        unsafe { std::env::set_var("API_UPSTREAM", "https://api.example.com") };
        let config = Config::from_env();
        assert_eq!(
            config.api_upstream.as_deref(),
            Some("https://api.example.com")
        );

        // SAFETY: test environment
        unsafe {
            match original {
                Some(val) => std::env::set_var("API_UPSTREAM", val),
                None => std::env::remove_var("API_UPSTREAM"),
            }
        }
    }
}

//! Core domain logic: session/token lifecycle and form validation

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod routes;
pub mod validation;

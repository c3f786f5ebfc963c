//! Authentication UI module
//!
//! Auth-related components and the reactive auth context.

mod context;
mod login_form;
mod register_form;

pub use context::{
    AuthContext, AuthState, User, logout, provide_auth_context, refresh_session, use_auth_context,
};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;

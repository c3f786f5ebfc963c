//! Application pages module
//!
//! Page components:
//! - Home page
//! - Login page
//! - Register page
//! - Not found (404)

mod home;
mod login;
mod not_found;
mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;

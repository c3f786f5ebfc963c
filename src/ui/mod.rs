pub mod auth;
pub mod icon;
pub mod layout;
pub mod pages;

pub use icon::{Icon, icons};
pub use layout::{Footer, Header};

pub mod auth;
pub mod validation;

//! Helpers shared by controllers: CSRF validation for the login flow and resolving the signed
//! in user for protected endpoints.

pub mod csrf;
pub mod get_user;

//! Client state shared through the Dioxus context.

pub mod tracker;
pub mod user;

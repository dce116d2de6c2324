pub mod auth;
pub mod bears;

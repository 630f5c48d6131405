//! HTTP inbound adapter for the admin panel.

pub mod admin;
pub mod cookies;
pub mod error;
pub mod presenter;
pub mod session;
pub mod state;

pub use error::ApiResult;

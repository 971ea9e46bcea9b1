//! HTTP inbound adapter serving server-rendered pages.

pub mod auth;
pub mod campgrounds;
pub mod error;
pub mod flash;
pub mod home;
pub mod locals;
pub mod method_override;
pub mod reviews;
pub mod sanitize;
pub mod security;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

pub use error::ApiResult;

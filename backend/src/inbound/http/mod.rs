//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod pixels;
pub mod schemas;
pub mod session;
pub mod souls;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

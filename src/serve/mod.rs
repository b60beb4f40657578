//! HTTP adapter: query validation, response shaping and the axum server.

pub mod config;
pub mod http;
pub mod query;

pub use config::ServeConfig;
pub use http::{router, serve};
pub use query::{AvatarQuery, AvatarRequest, AvatarResponse, RequestError, respond};

pub use axum_core::extract::FromRequestParts;
pub use http::request::Parts;

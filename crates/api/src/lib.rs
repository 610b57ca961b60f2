//! HTTP boundary: header extraction, auth middleware, and response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;

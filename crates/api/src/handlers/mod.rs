//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod blueprint;
pub mod chat;
pub mod upload;

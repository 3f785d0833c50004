//! Row models and DTOs, one module per table group.

pub mod blueprint;
pub mod chat;
pub mod user;

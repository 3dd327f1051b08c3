//! Application services.

pub mod chat;

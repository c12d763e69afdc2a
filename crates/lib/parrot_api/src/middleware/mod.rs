//! Middleware.

pub mod panic;

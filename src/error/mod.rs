// src/error/mod.rs
//
// Crate-wide error types

mod types;

pub use types::{AppError, AppResult};

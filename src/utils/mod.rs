//! Utility module

pub mod error;

pub use error::{AppError, AppResult};

//! Shared configuration, error and value types for the care roster service.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod validate;

//! Persistence layer for the care roster: diesel schema, models and queries.

pub mod db;
pub mod error;
pub mod model;

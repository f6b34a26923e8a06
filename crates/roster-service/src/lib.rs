//! Business operations for the care roster: validation, reference checks and
//! the one-assignment-per-day rule.

pub mod assignment;
pub mod availability;
pub mod error;
pub mod need;
pub mod service_user;
pub mod staff;

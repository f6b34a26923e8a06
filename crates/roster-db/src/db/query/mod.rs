pub mod assignment;
pub mod availability;
pub mod need;
pub mod service_user;
pub mod staff;

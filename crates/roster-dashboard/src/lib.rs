pub mod cli;
pub mod client;
pub mod error;
pub mod filter;
pub mod render;

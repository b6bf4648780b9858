//! Command implementations for the todoctl CLI

pub mod serve;

pub use serve::run_serve;

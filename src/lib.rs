//! multirip - batch optical media ripping with one encoder worker per drive
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod jobs;
pub mod scheduler;

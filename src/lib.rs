//! MATCHCAST — Football Over/Under Betting Predictions
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod data;
pub mod model;
pub mod report;
pub mod server;

//! Movie Night - shared movie catalog server
//!
//! This library crate exposes the core functionality for integration testing.

pub mod catalog;
pub mod config;
pub mod poster;
pub mod server;

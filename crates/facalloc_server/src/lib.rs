//! HTTP surface for the faculty course allocation service.

pub mod api;
pub mod config;
pub mod state;

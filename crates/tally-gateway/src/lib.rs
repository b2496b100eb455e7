//! tally gateway library entry.
//!
//! This crate wires the counter core into an axum HTTP service: config
//! loading, routing, status mapping, and metrics. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;

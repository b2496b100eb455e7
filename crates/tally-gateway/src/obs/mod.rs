//! Lightweight in-process metrics (dependency-free).
//!
//! Exposes the counter service's Prometheus series without pulling in a
//! metrics client. Metrics are stored as atomics, owned by `AppState`, and
//! rendered by the `/metrics` handler.

pub mod metrics;

pub use metrics::GatewayMetrics;

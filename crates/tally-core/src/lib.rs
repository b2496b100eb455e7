//! tally core: counter entity, concurrent store, and lifecycle manager.
//!
//! This crate owns all counter state and the rules around it (create only
//! if absent, not-found on read/delete, atomic increment). It carries no
//! transport or runtime dependencies so the HTTP gateway, tests, and any
//! other front end can share it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod manager;
pub mod store;

pub use counter::Counter;
/// Shared result type.
pub use error::{Result, TallyError};
pub use manager::{CounterManager, Manager};
pub use store::{MemoryStore, Store};

//! HTTP boundary for the counter manager.
//!
//! Maps verbs and paths to `CounterManager` calls and manager errors to
//! status codes:
//!
//! | call   | ok  | domain error              | anything else |
//! |--------|-----|---------------------------|---------------|
//! | add    | 201 | 400 (`AlreadyExists`)     | 500           |
//! | get    | 200 | 404 (`NotFound`)          | 500           |
//! | inc    | 200 | 404 (`NotFound`)          | 500           |
//! | delete | 204 | 404 (`NotFound`)          | 500           |

pub mod counters;
pub mod track;

pub use counters::{add_counter, delete_counter, get_counter, inc_counter, not_found};
pub use track::track_server_errors;

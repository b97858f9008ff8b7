//! # tend-observability
//!
//! Subscriber setup and span macros shared by the Tend engines.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};

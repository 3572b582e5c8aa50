//! Logging for the shoe listing renderers.
//!
//! - `StructuredLogger` - Structured logging with render context
//! - `LogBuilder` - Fluent field builder for a single entry

mod logging;

pub use logging::*;

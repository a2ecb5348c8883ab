//! Shared utilities for transcoder pool tooling.

pub mod logging;

pub use logging::{init_logging, LogFormat, ParseLogFormatError};

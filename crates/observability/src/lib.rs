//! Structured logging shared by the binaries and the test harnesses.

pub mod logging;

pub use logging::{init, LogFormat, LogSettings, ParseLogFormatError};

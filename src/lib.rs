//! Flowrec: captures user interactions on web pages and normalizes them
//! into named, replayable action logs.
//!
//! The kernel lives in the workspace crates; this crate wires file-backed
//! ports to the authority loop and puts a terminal surface on top.

pub mod app;
pub mod config;
pub mod script;
pub mod surface;

pub use app::RecorderApp;
pub use config::{ConfigError, RecorderConfig};
pub use script::{play, SessionScript};

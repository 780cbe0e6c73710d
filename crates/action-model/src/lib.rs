//! Data model for the outbound action log.
//!
//! The `Action` sum type is the contract handed to a replay engine: an
//! ordered, self-describing list of tagged records. Everything here is
//! immutable once emitted and serializes losslessly through serde_json.

pub mod action;
pub mod geometry;
pub mod recording;
pub mod wait;

pub use action::Action;
pub use geometry::{Coordinates, ElementRect, MaxScroll, Viewport};
pub use recording::{RecorderSnapshot, SavedRecording};
pub use wait::WaitConditions;

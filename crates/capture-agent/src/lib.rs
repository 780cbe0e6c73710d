//! Capture agent: the role that runs inside the observed page.
//!
//! It reads DOM facts (structure, computed style, geometry, scroll state),
//! derives locators and readiness conditions through the selector engine,
//! and emits one capture message per observed event. It never holds
//! recording state; the authority decides what is accepted.

pub mod agent;
pub mod context;
pub mod scroll;

pub use agent::{CaptureAgent, PointerInput};
pub use context::PageContext;
pub use scroll::ScrollGate;

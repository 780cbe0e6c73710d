//! Selector Resolution Engine.
//!
//! Given a node in an immutable DOM snapshot, derives one primary selector,
//! an ordered list of fallback selectors, a readiness snapshot and a
//! human-facing description. Everything here is a pure function of the
//! snapshot: the same snapshot yields the same selectors on every run,
//! which is what makes recorded logs diffable.
//!
//! The primary selector trades robustness for brevity on purpose: a short
//! `tag > tag:nth-of-type(n)` path reads well and replays fine on stable
//! pages, and the fallback chain covers the rest.

pub mod describe;
pub mod dom;
pub mod fallback;
pub mod readiness;
pub mod selector;

pub use describe::describe;
pub use dom::{ComputedStyle, DomSnapshot, ElementBuilder, NodeId};
pub use fallback::fallback_selectors;
pub use readiness::{is_clickable, is_visible, wait_conditions};
pub use selector::primary_selector;

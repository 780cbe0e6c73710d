//! Control Authority.
//!
//! One instance per browser session. Owns the canonical recording state
//! (on/off, tab scope, accumulated actions, in-progress typing buffer),
//! enforces tab scoping, coalesces keystrokes, persists finished
//! recordings, and answers every action and recording query. All mutation
//! flows through one serialized message loop, so ordering guards the
//! session instead of locking.

pub mod authority;
pub mod errors;
pub mod runtime;
pub mod session;
pub mod typing;
pub mod vault;

pub use authority::{Authority, AuthorityConfig, DeadlineScheduler};
pub use errors::AuthorityError;
pub use runtime::{spawn_authority, AuthorityHandle};
pub use session::RecordingSession;
pub use typing::TypingBuffer;
pub use vault::RecordingVault;

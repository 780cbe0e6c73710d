//! External collaboration surfaces.
//!
//! The core only ever talks to the outside world through the four narrow
//! ports defined here: a key-value store for persisted recordings, a page
//! injector for installing the capture agent, an export sink for download
//! artifacts, and a tab registry for active-tab facts. Each port ships an
//! in-memory implementation used by tests and the CLI harness.

pub mod errors;
pub mod export;
pub mod inject;
pub mod kv;
pub mod tabs;

pub use errors::{InjectError, StorageError};
pub use export::{DirExportSink, ExportHandle, ExportSink, MemoryExportSink};
pub use inject::{MemoryInjector, PageInjector};
pub use kv::{JsonFileKvStore, KvStore, MemoryKvStore};
pub use tabs::{FixedTabs, TabRegistry};

//! Page-injection port.

use std::collections::HashSet;

use async_trait::async_trait;
use flowrec_core_types::TabId;
use parking_lot::Mutex;

use crate::errors::InjectError;

#[async_trait]
pub trait PageInjector: Send + Sync {
    /// Install the capture agent into `tab`. Idempotence is not required of
    /// implementations; re-injection surfaces as `AlreadyInjected` and the
    /// caller discards it.
    async fn inject(&self, tab: TabId) -> Result<(), InjectError>;
}

/// In-memory injector tracking which tabs already carry an agent.
#[derive(Default)]
pub struct MemoryInjector {
    injected: Mutex<HashSet<TabId>>,
    fail_with: Mutex<Option<String>>,
}

impl MemoryInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent injection fail; exercises the best-effort path.
    pub fn fail_injections(&self, reason: impl Into<String>) {
        *self.fail_with.lock() = Some(reason.into());
    }

    pub fn is_injected(&self, tab: TabId) -> bool {
        self.injected.lock().contains(&tab)
    }
}

#[async_trait]
impl PageInjector for MemoryInjector {
    async fn inject(&self, tab: TabId) -> Result<(), InjectError> {
        if let Some(reason) = self.fail_with.lock().clone() {
            return Err(InjectError::Failed(reason));
        }
        if !self.injected.lock().insert(tab) {
            return Err(InjectError::AlreadyInjected {
                tab: tab.to_string(),
            });
        }
        Ok(())
    }
}

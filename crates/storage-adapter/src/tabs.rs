//! Active-tab facts.

use async_trait::async_trait;
use flowrec_core_types::TabInfo;
use parking_lot::RwLock;

#[async_trait]
pub trait TabRegistry: Send + Sync {
    /// The currently focused tab, if any.
    async fn active_tab(&self) -> Option<TabInfo>;
}

/// Registry whose active tab is set by the harness.
#[derive(Default)]
pub struct FixedTabs {
    active: RwLock<Option<TabInfo>>,
}

impl FixedTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(tab: TabInfo) -> Self {
        Self {
            active: RwLock::new(Some(tab)),
        }
    }

    pub fn focus(&self, tab: TabInfo) {
        *self.active.write() = Some(tab);
    }

    pub fn clear(&self) {
        *self.active.write() = None;
    }
}

#[async_trait]
impl TabRegistry for FixedTabs {
    async fn active_tab(&self) -> Option<TabInfo> {
        self.active.read().clone()
    }
}

//! Process wiring: builds the ports and spawns the authority loop.

use std::sync::Arc;

use action_model::RecorderSnapshot;
use flowrec_core_types::TabInfo;
use flowrec_event_bus::InMemoryBus;
use recording_authority::{spawn_authority, Authority, AuthorityHandle};
use storage_adapter::{DirExportSink, FixedTabs, JsonFileKvStore, MemoryInjector};
use tracing::info;

use crate::config::RecorderConfig;

/// A running recorder: authority loop plus the handles the CLI needs.
pub struct RecorderApp {
    handle: AuthorityHandle,
    bus: Arc<InMemoryBus<RecorderSnapshot>>,
    tabs: Arc<FixedTabs>,
}

impl RecorderApp {
    /// Wire file-backed ports from `config` and start the loop. There is no
    /// real browser here; the tab registry is driven by the caller and the
    /// injector accepts everything.
    pub fn bootstrap(config: &RecorderConfig) -> Self {
        let store = Arc::new(JsonFileKvStore::new(config.store_path()));
        let exporter = Arc::new(DirExportSink::new(config.export_dir.clone()));
        let tabs = Arc::new(FixedTabs::new());
        let bus: Arc<InMemoryBus<RecorderSnapshot>> = InMemoryBus::new(config.bus_capacity);

        let authority_config = config.authority_config();
        let handle = {
            let store = store.clone();
            let exporter = exporter.clone();
            let tabs = tabs.clone();
            let bus = bus.clone();
            spawn_authority(move |deadlines| {
                Authority::new(
                    authority_config,
                    store,
                    Arc::new(MemoryInjector::new()),
                    exporter,
                    tabs,
                    bus,
                    deadlines,
                )
            })
        };

        info!(store = %config.store_path().display(), "recorder ready");
        Self { handle, bus, tabs }
    }

    pub fn handle(&self) -> &AuthorityHandle {
        &self.handle
    }

    pub fn bus(&self) -> &Arc<InMemoryBus<RecorderSnapshot>> {
        &self.bus
    }

    /// Make `tab` the focused tab and tell the authority about the change.
    pub async fn focus_tab(&self, tab: TabInfo) {
        let id = tab.id;
        self.tabs.focus(tab);
        self.handle.notify_tab_activated(id).await;
    }
}

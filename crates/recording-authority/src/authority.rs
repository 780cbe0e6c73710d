//! Message handlers and the recording state machine.
//!
//! `Authority` is plain owned state; it is only ever driven by the
//! serialized loop in [`crate::runtime`]. Handlers validate first and
//! mutate after, so a refused message leaves session and typing buffer
//! exactly as they were.

use std::sync::Arc;
use std::time::Duration;

use action_model::{Action, RecorderSnapshot, SavedRecording, Viewport, WaitConditions};
use chrono::Utc;
use flowrec_core_types::TabId;
use flowrec_event_bus::InMemoryBus;
use flowrec_protocol::{
    CaptureMessage, ControlMessage, DownloadReceipt, KeystrokePayload, Message, Origin, Reply,
};
use storage_adapter::{ExportSink, KvStore, PageInjector, TabRegistry};
use tracing::{debug, info, warn};

use crate::errors::AuthorityError;
use crate::session::RecordingSession;
use crate::typing::TypingBuffer;
use crate::vault::RecordingVault;

/// Schedules a typing deadline that will re-enter the authority loop as a
/// [`crate::runtime`] deadline message carrying `generation`.
pub trait DeadlineScheduler: Send {
    fn schedule(&mut self, generation: u64, after: Duration);
}

#[derive(Clone, Debug)]
pub struct AuthorityConfig {
    /// Quiet period after the last keystroke or backspace before a typing
    /// burst finalizes.
    pub typing_timeout: Duration,
    /// Key under which the saved-recording collection lives.
    pub storage_key: String,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            typing_timeout: Duration::from_millis(1_000),
            storage_key: "recordings".into(),
        }
    }
}

pub struct Authority {
    session: RecordingSession,
    typing: TypingBuffer,
    config: AuthorityConfig,
    vault: RecordingVault,
    injector: Arc<dyn PageInjector>,
    exporter: Arc<dyn ExportSink>,
    tabs: Arc<dyn TabRegistry>,
    bus: Arc<InMemoryBus<RecorderSnapshot>>,
    deadlines: Box<dyn DeadlineScheduler>,
}

impl Authority {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: AuthorityConfig,
        store: Arc<dyn KvStore>,
        injector: Arc<dyn PageInjector>,
        exporter: Arc<dyn ExportSink>,
        tabs: Arc<dyn TabRegistry>,
        bus: Arc<InMemoryBus<RecorderSnapshot>>,
        deadlines: Box<dyn DeadlineScheduler>,
    ) -> Self {
        let vault = RecordingVault::new(store, config.storage_key.clone());
        Self {
            session: RecordingSession::default(),
            typing: TypingBuffer::new(),
            config,
            vault,
            injector,
            exporter,
            tabs,
            bus,
            deadlines,
        }
    }

    pub fn snapshot(&self) -> RecorderSnapshot {
        self.session.snapshot()
    }

    /// Handle one inbound message. At most one reply.
    pub async fn handle(
        &mut self,
        origin: Origin,
        message: Message,
    ) -> Result<Reply, AuthorityError> {
        match message {
            Message::Control(control) => self.handle_control(control).await,
            Message::Capture(capture) => self.handle_capture(origin, capture),
        }
    }

    /// The bound tab lost focus; besides explicit toggle, the only way an
    /// active session ends.
    pub fn tab_activated(&mut self, tab: TabId) {
        if self.session.is_recording && !self.session.in_scope(tab) {
            info!(%tab, "scope tab lost focus; stopping recording");
            self.stop_recording();
        }
    }

    /// A typing deadline fired. Stale generations are ignored: any
    /// keystroke, backspace or finalization since scheduling has already
    /// superseded this deadline.
    pub fn typing_deadline(&mut self, generation: u64) {
        if self.typing.generation() != generation {
            return;
        }
        debug!(generation, "typing burst settled");
        self.finalize_typing();
    }

    async fn handle_control(&mut self, control: ControlMessage) -> Result<Reply, AuthorityError> {
        match control {
            ControlMessage::ToggleRecording => {
                if self.session.is_recording {
                    self.stop_recording();
                } else {
                    self.start_recording().await;
                }
                Ok(Reply::State(self.snapshot()))
            }
            ControlMessage::GetState => Ok(Reply::State(self.snapshot())),
            ControlMessage::SaveRecording { name } => self.save_recording(name).await,
            ControlMessage::ListSaved => Ok(Reply::Recordings(self.vault.list().await?)),
            ControlMessage::DeleteRecording { id } => {
                self.vault.delete(&id).await?;
                Ok(Reply::Ack)
            }
            ControlMessage::DownloadRecording { id } => {
                let recording = self
                    .vault
                    .find(&id)
                    .await?
                    .ok_or(AuthorityError::NotFound(id))?;
                let content = serde_json::to_string_pretty(&recording)
                    .map_err(|err| AuthorityError::Export(err.to_string()))?;
                let filename = recording.export_filename();
                let handle = self
                    .exporter
                    .export_file(&filename, &content)
                    .await
                    .map_err(|err| AuthorityError::Export(err.to_string()))?;
                Ok(Reply::Download(DownloadReceipt {
                    filename,
                    handle: handle.0,
                }))
            }
        }
    }

    fn handle_capture(
        &mut self,
        origin: Origin,
        capture: CaptureMessage,
    ) -> Result<Reply, AuthorityError> {
        if !self.session.is_recording {
            return Err(AuthorityError::NotRecording);
        }
        if let Some(want) = self.session.scope_tab {
            let in_scope = origin.tab() == Some(want);
            if !in_scope {
                let got = origin
                    .tab()
                    .map(|tab| tab.to_string())
                    .unwrap_or_else(|| "surface".into());
                warn!(%got, %want, "capture message rejected; wrong tab");
                return Err(AuthorityError::WrongTab { got, want });
            }
        }

        match capture {
            CaptureMessage::Navigate(payload) => self.append_action(payload.into()),
            CaptureMessage::Click(payload) => self.append_action(payload.into()),
            CaptureMessage::Scroll(payload) => self.append_action(payload.into()),
            CaptureMessage::Keystroke(payload) => self.coalesce_keystroke(payload),
            CaptureMessage::Backspace(_) => {
                let generation = self.typing.backspace();
                self.deadlines
                    .schedule(generation, self.config.typing_timeout);
            }
        }
        Ok(Reply::Ack)
    }

    /// Append a fully-formed action. Any pending typing burst finalizes
    /// first so the log keeps user order.
    fn append_action(&mut self, action: Action) {
        self.finalize_typing();
        self.session.actions.push(action);
        self.broadcast();
    }

    fn coalesce_keystroke(&mut self, payload: KeystrokePayload) {
        if self.typing.is_open() && !self.typing.matches_target(&payload.selector) {
            // Focus moved mid-burst: close the old burst before opening
            // one for the new target.
            self.finalize_typing();
        }
        let generation =
            self.typing
                .push_key(&payload.key, &payload.target_tag, &payload.selector);
        self.deadlines
            .schedule(generation, self.config.typing_timeout);
    }

    /// Flush the typing buffer into the action list. Empty buffers clear
    /// silently.
    fn finalize_typing(&mut self) {
        if let Some(finalized) = self.typing.take() {
            self.session.actions.push(Action::Type {
                selector: finalized.selector,
                details: format!("\"{}\"", finalized.value),
                value: finalized.value,
                timestamp: Utc::now(),
            });
            self.broadcast();
        }
    }

    async fn start_recording(&mut self) {
        let Some(tab) = self.tabs.active_tab().await else {
            debug!("toggle ignored; no active tab");
            return;
        };
        if !tab.is_capturable() {
            debug!(url = %tab.url, "toggle ignored; tab is not capturable");
            return;
        }

        self.session.is_recording = true;
        self.session.scope_tab = Some(tab.id);
        self.session.actions.clear();
        self.session.actions.push(Action::Navigate {
            url: tab.url.clone(),
            wait: WaitConditions::for_navigation(),
            viewport: Viewport::default(),
            delay_ms: 0,
            details: format!("to {}", tab.host()),
            timestamp: Utc::now(),
        });

        // Best-effort: the agent may already be present from an earlier
        // session in this tab.
        if let Err(err) = self.injector.inject(tab.id).await {
            debug!(error = %err, "capture agent injection skipped");
        }

        info!(tab = %tab.id, "recording started");
        self.broadcast();
    }

    fn stop_recording(&mut self) {
        // Pending keystrokes land in the log before the state flips.
        self.finalize_typing();
        self.session.is_recording = false;
        self.session.scope_tab = None;
        info!(actions = self.session.actions.len(), "recording stopped");
        self.broadcast();
    }

    async fn save_recording(&mut self, name: String) -> Result<Reply, AuthorityError> {
        if self.session.is_recording {
            // Saving implies stopping; stop flushes the typing buffer.
            self.stop_recording();
        } else {
            self.finalize_typing();
        }

        let recording = SavedRecording::new(name, self.session.actions.clone());
        let id = recording.id.clone();
        // A failed write must lose nothing: actions are cleared only after
        // the collection landed.
        self.vault.prepend(recording).await?;
        self.session.actions.clear();
        info!(%id, "recording saved");
        self.broadcast();
        Ok(Reply::Ack)
    }

    fn broadcast(&self) {
        self.bus.publish_lossy(self.snapshot());
    }
}

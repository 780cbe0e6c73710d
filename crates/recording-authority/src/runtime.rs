//! The serialized authority loop.
//!
//! Every inbound (surface control, tab capture, tab-focus change, typing
//! deadline) travels the same mpsc channel into one task that owns the
//! [`Authority`]. Typing deadlines are scheduled as detached sleep tasks
//! that feed back into the same channel, so even the debounce resolves in
//! loop order.

use std::time::Duration;

use flowrec_core_types::TabId;
use flowrec_protocol::{Message, Origin, Reply};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::authority::{Authority, DeadlineScheduler};
use crate::errors::AuthorityError;

const INBOUND_CAPACITY: usize = 64;

enum Inbound {
    Request {
        origin: Origin,
        message: Message,
        reply: oneshot::Sender<Result<Reply, AuthorityError>>,
    },
    TabActivated(TabId),
    TypingDeadline { generation: u64 },
}

/// Cloneable front door to the authority loop.
#[derive(Clone)]
pub struct AuthorityHandle {
    tx: mpsc::Sender<Inbound>,
}

impl AuthorityHandle {
    /// Send a control message on behalf of a presentation surface.
    pub async fn control(
        &self,
        message: impl Into<Message>,
    ) -> Result<Reply, AuthorityError> {
        self.request(Origin::Surface, message.into()).await
    }

    /// Send a capture message on behalf of the agent in `tab`.
    pub async fn capture(
        &self,
        tab: TabId,
        message: impl Into<Message>,
    ) -> Result<Reply, AuthorityError> {
        self.request(Origin::Tab(tab), message.into()).await
    }

    pub async fn notify_tab_activated(&self, tab: TabId) {
        let _ = self.tx.send(Inbound::TabActivated(tab)).await;
    }

    async fn request(&self, origin: Origin, message: Message) -> Result<Reply, AuthorityError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Inbound::Request {
                origin,
                message,
                reply: reply_tx,
            })
            .await
            .map_err(|_| AuthorityError::Unavailable)?;
        reply_rx.await.map_err(|_| AuthorityError::Unavailable)?
    }
}

/// Arms typing deadlines as sleep tasks that re-enter the loop.
struct TokioScheduler {
    tx: mpsc::Sender<Inbound>,
}

impl DeadlineScheduler for TokioScheduler {
    fn schedule(&mut self, generation: u64, after: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // Loop gone means shutdown; nothing left to finalize.
            let _ = tx.send(Inbound::TypingDeadline { generation }).await;
        });
    }
}

/// Spawn the authority loop. `build` receives the deadline scheduler wired
/// to the loop's own inbound channel.
pub fn spawn_authority<F>(build: F) -> AuthorityHandle
where
    F: FnOnce(Box<dyn DeadlineScheduler>) -> Authority,
{
    let (tx, mut rx) = mpsc::channel(INBOUND_CAPACITY);
    let scheduler = TokioScheduler { tx: tx.clone() };
    let mut authority = build(Box::new(scheduler));

    tokio::spawn(async move {
        info!("authority loop started");
        while let Some(inbound) = rx.recv().await {
            match inbound {
                Inbound::Request {
                    origin,
                    message,
                    reply,
                } => {
                    let result = authority.handle(origin, message).await;
                    if reply.send(result).is_err() {
                        debug!("caller went away before reply");
                    }
                }
                Inbound::TabActivated(tab) => authority.tab_activated(tab),
                Inbound::TypingDeadline { generation } => authority.typing_deadline(generation),
            }
        }
        info!("authority loop stopped");
    });

    AuthorityHandle { tx }
}

//! Session scripts: recorded wire traffic replayed through the authority.
//!
//! A script is what a browser surface and its capture agents would have sent
//! over one session, captured as raw envelopes. Feeding one through the
//! authority exercises the full pipeline (envelope decode, scoping, typing
//! coalescing, persistence) without a browser attached.

use std::path::Path;

use anyhow::{Context, Result};
use flowrec_core_types::{TabId, TabInfo};
use flowrec_protocol::{decode, Reply};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::app::RecorderApp;

#[derive(Debug, Deserialize)]
pub struct SessionScript {
    /// Tab the session plays in.
    pub tab: u32,
    pub url: String,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    /// Sender: "surface" or "tab". Defaults to the scripted tab.
    #[serde(default = "default_from")]
    pub from: String,
    pub message: Value,
    /// Pause before delivering, in milliseconds. Lets scripts cross the
    /// typing debounce on purpose.
    #[serde(default)]
    pub pause_ms: u64,
}

fn default_from() -> String {
    "tab".to_string()
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read script {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("cannot parse script {}", path.display()))
    }
}

/// Deliver every step in order. Refused steps are logged and skipped, the
/// way a browser surface shrugs off a rejected message.
pub async fn play(app: &RecorderApp, script: &SessionScript) -> Result<Vec<Reply>> {
    let tab = TabId(script.tab);
    app.focus_tab(TabInfo::new(tab, script.url.clone())).await;

    let mut replies = Vec::new();
    for (index, step) in script.steps.iter().enumerate() {
        if step.pause_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(step.pause_ms)).await;
        }
        let raw = serde_json::to_string(&step.message)?;
        let message = match decode(&raw) {
            Ok(message) => message,
            Err(err) => {
                warn!(step = index, %err, "skipping undecodable step");
                continue;
            }
        };
        let result = if step.from == "surface" {
            app.handle().control(message).await
        } else {
            app.handle().capture(tab, message).await
        };
        match result {
            Ok(reply) => {
                debug!(step = index, "step accepted");
                replies.push(reply);
            }
            Err(err) => warn!(step = index, %err, "step refused"),
        }
    }
    Ok(replies)
}

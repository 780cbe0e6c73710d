use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flowrec_core_types::RecordingId;
use flowrec_protocol::{ControlMessage, Reply};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowrec_cli::{play, surface, RecorderApp, RecorderConfig, SessionScript};

#[derive(Parser)]
#[command(
    name = "flowrec",
    version,
    about = "Capture and normalize web interactions into replayable action logs"
)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "flowrec.json")]
    config: PathBuf,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a session script through the recorder
    Play {
        /// Script file of recorded wire messages
        script: PathBuf,

        /// Save the resulting session under this name
        #[arg(short, long)]
        save: Option<String>,
    },
    /// List saved recordings, newest first
    List,
    /// Export a saved recording as a download artifact
    Download {
        /// Recording id, as shown by `list`
        id: String,
    },
    /// Delete a saved recording
    Delete {
        /// Recording id, as shown by `list`
        id: String,
    },
}

fn init_logging(level: &str) -> Result<()> {
    let level: tracing::Level = level.parse().context("invalid log level")?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = RecorderConfig::load(&cli.config)?;
    let app = RecorderApp::bootstrap(&config);

    match cli.command {
        Command::Play { script, save } => {
            let script = SessionScript::load(&script)?;
            play(&app, &script).await?;

            // Stop so the session is saveable, then show what was captured.
            let snapshot = app
                .handle()
                .control(ControlMessage::GetState)
                .await?
                .into_state()
                .context("state reply expected")?;
            let snapshot = if snapshot.is_recording {
                app.handle()
                    .control(ControlMessage::ToggleRecording)
                    .await?
                    .into_state()
                    .context("state reply expected")?
            } else {
                snapshot
            };

            println!("{}", surface::status_line(&snapshot));
            for line in surface::action_lines(&snapshot) {
                println!("{line}");
            }

            if let Some(name) = save {
                if surface::offer_save(&snapshot) {
                    app.handle()
                        .control(ControlMessage::SaveRecording { name: name.clone() })
                        .await?;
                    println!("saved as {name:?}");
                } else {
                    println!("nothing to save");
                }
            }
        }
        Command::List => {
            let recordings = app
                .handle()
                .control(ControlMessage::ListSaved)
                .await?
                .into_recordings()
                .context("recordings reply expected")?;
            if recordings.is_empty() {
                println!("no saved recordings");
            }
            for line in surface::recording_lines(&recordings) {
                println!("{line}");
            }
        }
        Command::Download { id } => {
            let reply = app
                .handle()
                .control(ControlMessage::DownloadRecording {
                    id: RecordingId(id),
                })
                .await?;
            if let Reply::Download(receipt) = reply {
                println!("exported {} -> {}", receipt.filename, receipt.handle);
            }
        }
        Command::Delete { id } => {
            app.handle()
                .control(ControlMessage::DeleteRecording {
                    id: RecordingId(id),
                })
                .await?;
            println!("deleted");
        }
    }

    Ok(())
}

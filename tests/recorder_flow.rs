//! End-to-end session flow against file-backed ports.

use std::path::Path;

use action_model::{Coordinates, ElementRect, Viewport, WaitConditions};
use chrono::Utc;
use flowrec_cli::{play, RecorderApp, RecorderConfig, SessionScript};
use flowrec_core_types::{RecordingId, TabId, TabInfo};
use flowrec_protocol::{CaptureMessage, ClickPayload, ControlMessage, Reply};

fn test_config(dir: &Path) -> RecorderConfig {
    RecorderConfig {
        data_dir: dir.join("data"),
        export_dir: dir.join("downloads"),
        ..RecorderConfig::default()
    }
}

fn click() -> CaptureMessage {
    CaptureMessage::Click(ClickPayload {
        selector: "#checkout".into(),
        fallback_selectors: vec!["button:contains(\"Checkout\")".into()],
        wait: WaitConditions::for_element(true, true, true),
        coordinates: Coordinates::default(),
        element_rect: ElementRect::new(10, 10, 120, 40),
        viewport: Viewport::new(1280, 800).with_scroll(0, 0),
        delay_ms: 300,
        details: "<button> text:\"Checkout\"".into(),
        timestamp: Utc::now(),
    })
}

#[tokio::test]
async fn record_save_download_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let app = RecorderApp::bootstrap(&config);

    app.focus_tab(TabInfo::new(TabId(1), "https://shop.example.com/cart"))
        .await;
    let state = app
        .handle()
        .control(ControlMessage::ToggleRecording)
        .await
        .unwrap()
        .into_state()
        .unwrap();
    assert!(state.is_recording);
    assert_eq!(state.actions.len(), 1);

    app.handle().capture(TabId(1), click()).await.unwrap();

    app.handle()
        .control(ControlMessage::SaveRecording {
            name: "Checkout flow".into(),
        })
        .await
        .unwrap();

    // Persisted collection survives a fresh bootstrap over the same files.
    let reopened = RecorderApp::bootstrap(&config);
    let recordings = reopened
        .handle()
        .control(ControlMessage::ListSaved)
        .await
        .unwrap()
        .into_recordings()
        .unwrap();
    assert_eq!(recordings.len(), 1);
    assert_eq!(recordings[0].name, "Checkout flow");
    assert_eq!(recordings[0].actions.len(), 2);

    let id = recordings[0].id.clone();
    let reply = reopened
        .handle()
        .control(ControlMessage::DownloadRecording { id })
        .await
        .unwrap();
    let Reply::Download(receipt) = reply else {
        panic!("expected download receipt");
    };
    assert!(receipt.filename.starts_with("Checkout_flow_"));
    let exported = std::fs::read_to_string(&receipt.handle).unwrap();
    assert!(exported.contains("\"#checkout\""));
}

#[tokio::test]
async fn delete_removes_only_the_named_recording() {
    let dir = tempfile::tempdir().unwrap();
    let app = RecorderApp::bootstrap(&test_config(dir.path()));

    for name in ["first", "second"] {
        app.focus_tab(TabInfo::new(TabId(1), "https://example.com"))
            .await;
        app.handle()
            .control(ControlMessage::ToggleRecording)
            .await
            .unwrap();
        app.handle()
            .control(ControlMessage::SaveRecording { name: name.into() })
            .await
            .unwrap();
    }

    let recordings = app
        .handle()
        .control(ControlMessage::ListSaved)
        .await
        .unwrap()
        .into_recordings()
        .unwrap();
    assert_eq!(recordings.len(), 2);
    // Newest first.
    assert_eq!(recordings[0].name, "second");

    app.handle()
        .control(ControlMessage::DeleteRecording {
            id: recordings[0].id.clone(),
        })
        .await
        .unwrap();
    app.handle()
        .control(ControlMessage::DeleteRecording {
            id: RecordingId("rec_0_absent".into()),
        })
        .await
        .unwrap();

    let remaining = app
        .handle()
        .control(ControlMessage::ListSaved)
        .await
        .unwrap()
        .into_recordings()
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "first");
}

#[tokio::test]
async fn script_playback_coalesces_typing_and_skips_junk() {
    let dir = tempfile::tempdir().unwrap();
    let app = RecorderApp::bootstrap(&test_config(dir.path()));

    let script: SessionScript = serde_json::from_str(
        r##"{
            "tab": 1,
            "url": "https://example.com/search",
            "steps": [
                {"from": "surface", "message": {"type": "TOGGLE_RECORDING"}},
                {"message": {"type": "RECORD_RAW_TYPE", "payload": {
                    "key": "h", "target_tag": "input", "selector": "#q",
                    "fallback_selectors": [],
                    "wait": {"waitForSelector": true, "waitForVisible": true,
                             "waitForEnabled": true, "waitForClickable": true,
                             "waitForNavigation": false, "timeoutMs": 5000},
                    "details": "<input>", "delay_ms": 10, "timestamp": 0}}},
                {"message": {"type": "RECORD_RAW_TYPE", "payload": {
                    "key": "i", "target_tag": "input", "selector": "#q",
                    "fallback_selectors": [],
                    "wait": {"waitForSelector": true, "waitForVisible": true,
                             "waitForEnabled": true, "waitForClickable": true,
                             "waitForNavigation": false, "timeoutMs": 5000},
                    "details": "<input>", "delay_ms": 40, "timestamp": 40}}},
                {"message": {"type": "RECORD_TELEPATHY"}},
                {"from": "surface", "message": {"type": "TOGGLE_RECORDING"}}
            ]
        }"##,
    )
    .unwrap();

    play(&app, &script).await.unwrap();

    let state = app
        .handle()
        .control(ControlMessage::GetState)
        .await
        .unwrap()
        .into_state()
        .unwrap();
    assert!(!state.is_recording);
    // Seeded navigate plus the burst flushed by stopping.
    assert_eq!(state.actions.len(), 2);
    assert_eq!(state.actions[1].kind(), "Type");
    assert_eq!(state.actions[1].selector(), Some("#q"));
    assert!(state.can_save());
}

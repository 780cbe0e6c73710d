//! Full pipeline: DOM events through the capture agent into the authority.

use capture_agent::{CaptureAgent, PageContext, PointerInput};
use chrono::{DateTime, Duration, Utc};
use flowrec_cli::{RecorderApp, RecorderConfig};
use flowrec_core_types::{TabId, TabInfo};
use flowrec_protocol::ControlMessage;
use selector_engine::{DomSnapshot, ElementBuilder};

fn at(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(ms)
}

fn search_page() -> DomSnapshot {
    DomSnapshot::from_root(
        ElementBuilder::new("body").child(
            ElementBuilder::new("div")
                .classes("search-container")
                .child(
                    ElementBuilder::new("input")
                        .attr("type", "search")
                        .attr("placeholder", "Search products"),
                )
                .child(ElementBuilder::new("button").text("Go")),
        ),
    )
}

#[tokio::test]
async fn observed_events_become_a_coalesced_action_log() {
    let dir = tempfile::tempdir().unwrap();
    let config = RecorderConfig {
        data_dir: dir.path().join("data"),
        export_dir: dir.path().join("downloads"),
        ..RecorderConfig::default()
    };
    let app = RecorderApp::bootstrap(&config);
    let tab = TabId(1);

    app.focus_tab(TabInfo::new(tab, "https://shop.example.com/search"))
        .await;
    app.handle()
        .control(ControlMessage::ToggleRecording)
        .await
        .unwrap();

    let dom = search_page();
    let container = dom.children(dom.root())[0];
    let input = dom.children(container)[0];
    let button = dom.children(container)[1];

    let page = PageContext::new("https://shop.example.com/search", 1280, 800);
    let mut agent = CaptureAgent::new(page, at(0));

    for (index, key) in ["m", "u", "g"].iter().enumerate() {
        let message = agent
            .observe_key(&dom, input, key, at(100 + index as i64 * 50))
            .unwrap();
        app.handle().capture(tab, message).await.unwrap();
    }
    let click = agent.observe_click(
        &dom,
        button,
        PointerInput {
            client_x: 300.0,
            client_y: 120.0,
            page_x: 300.0,
            page_y: 120.0,
        },
        at(400),
    );
    app.handle().capture(tab, click).await.unwrap();

    let state = app
        .handle()
        .control(ControlMessage::ToggleRecording)
        .await
        .unwrap()
        .into_state()
        .unwrap();

    // Seeded navigate, coalesced typing (flushed by the click), the click.
    let kinds: Vec<&str> = state.actions.iter().map(|action| action.kind()).collect();
    assert_eq!(kinds, vec!["Navigate", "Type", "Click"]);

    let typed = &state.actions[1];
    assert_eq!(typed.selector(), Some("body > div > input"));
    let clicked = &state.actions[2];
    assert_eq!(clicked.selector(), Some("body > div > button"));
    assert!(clicked.details().contains("SEARCH"));
}

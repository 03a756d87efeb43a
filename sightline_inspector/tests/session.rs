// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recorded session driven through both screens.

use std::time::Duration;

use kurbo::{Point, Rect};
use sightline_inspector::{
    Command, CommandType, DetailTab, LogLevels, NetworkInspector, Timeline, TimelineFilter,
    TimelineTab, commands_from_json, network_requests,
};
use sightline_window::WindowConfig;

const SESSION: &str = r#"[
    {"messageId": 1, "type": "log", "date": 1700000000000,
     "payload": {"level": "debug", "message": "app started"}},
    {"messageId": 2, "type": "api.response", "date": 1700000001000,
     "payload": {
        "duration": 120,
        "request": {"url": "https://api.example.com/session", "method": "post",
                    "headers": {"content-type": "application/json"},
                    "params": {"v": 1},
                    "data": {"user": "ada"}},
        "response": {"status": 201, "headers": {"x-request-id": "abc"},
                     "body": {"token": "t0k3n"}}
     }},
    {"messageId": 3, "type": "state.action.complete", "date": 1700000002000,
     "payload": {"name": "SESSION_STARTED", "action": {"type": "SESSION_STARTED"}}},
    {"messageId": 4, "type": "log", "date": 1700000003000,
     "payload": {"level": "warn", "message": "token expires soon"}},
    {"messageId": 5, "type": "api.response", "date": 1700000004000,
     "payload": {
        "request": {"url": "https://api.example.com/feed?page=2", "method": "get",
                    "params": {"page": 2}},
        "response": {"status": 500, "body": ""}
     }},
    {"messageId": 6, "type": "client.intro", "date": 1700000005000,
     "payload": {"name": "Demo App"}}
]"#;

fn session() -> Vec<Command> {
    commands_from_json(SESSION).unwrap()
}

#[test]
fn network_screen_lists_only_requests() {
    let commands = session();
    let requests = network_requests(&commands);
    let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
    assert!(inspector.sync(&requests));

    let rows = inspector.visible_requests(&requests);
    let urls: Vec<&str> = rows.iter().map(|row| row.row.short_url.as_str()).collect();
    assert_eq!(urls, vec!["api.example.com/session", "api.example.com/feed?page=2"]);
    assert_eq!(rows[0].row.method, "POST");
    assert_eq!(rows[0].row.status, "201");
    assert_eq!(rows[0].row.time, "22:13:21");
    assert_eq!(rows[1].row.status, "500");
    assert_eq!(rows[1].top, 50.0);
    assert!(rows[0].selected);
}

#[test]
fn detail_tabs_follow_the_selected_request() {
    let commands = session();
    let requests = network_requests(&commands);
    let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
    inspector.sync(&requests);

    assert_eq!(inspector.available_tabs(&requests), DetailTab::ALL.to_vec());
    inspector.set_tab(DetailTab::RequestBody);
    assert_eq!(
        inspector.tab_content(&requests),
        Some(&serde_json::json!({"user": "ada"}))
    );

    assert!(inspector.select_adjacent(&requests, 1));
    assert_eq!(inspector.selected_id(), Some(5));
    // An empty response body is not offered.
    assert_eq!(
        inspector.available_tabs(&requests),
        vec![DetailTab::RequestParams]
    );
    assert_eq!(inspector.tab_content(&requests), None);
}

#[test]
fn detail_pane_resizes_by_drag_and_window() {
    let commands = session();
    let requests = network_requests(&commands);
    let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
    inspector.sync(&requests);
    let container = Rect::new(0.0, 0.0, 1200.0, 640.0);

    // Window resize before any drag reseeds after the debounce.
    let layout = inspector.layout_mut();
    layout.on_window_resize(Duration::from_millis(0), 2400.0);
    assert!(!layout.tick(Duration::from_millis(100)));
    assert!(layout.tick(Duration::from_millis(150)));
    assert_eq!(layout.pane().leading_width(), 1400.0);

    let container_wide = Rect::new(0.0, 0.0, 2400.0, 640.0);
    layout.press_handle(Point::new(1405.0, 300.0));
    assert_eq!(layout.pointer_move(Point::new(900.0, 300.0), container_wide), Some(900.0));
    assert!(layout.release());

    // After a drag, window resizes keep the user's width.
    layout.on_window_resize(Duration::from_secs(1), 1200.0);
    layout.tick(Duration::from_secs(2));
    let (table, _, detail) = inspector.pane_rects(container);
    assert_eq!(table.width(), 900.0);
    assert_eq!(detail.width(), 290.0);
}

#[test]
fn timeline_tabs_and_levels() {
    let commands = session();
    let config = WindowConfig::new(40.0, 400.0).unwrap();
    let mut timeline = Timeline::new(config);

    let ids = |rows: &[sightline_inspector::TimelineRow<'_>]| -> Vec<u64> {
        rows.iter().map(|row| row.message_id).collect()
    };

    assert_eq!(ids(&timeline.refresh(&commands)), vec![1, 2, 3, 4, 5, 6]);

    timeline.set_filter(TimelineFilter::default().with_tab(TimelineTab::Logs));
    assert_eq!(ids(&timeline.refresh(&commands)), vec![1, 4]);

    timeline.update_filter(|filter| filter.toggle_level(LogLevels::WARN));
    assert_eq!(ids(&timeline.refresh(&commands)), vec![1]);

    timeline.set_filter(
        TimelineFilter::default()
            .with_search("api.example.com")
            .with_hidden(CommandType::Other("client.intro".into())),
    );
    assert_eq!(ids(&timeline.refresh(&commands)), vec![2, 5]);

    timeline.update_filter(|filter| filter.reversed = true);
    assert_eq!(ids(&timeline.refresh(&commands)), vec![5, 2]);
}

#[test]
fn timeline_keeps_up_with_a_growing_session() {
    let mut commands = session();
    let config = WindowConfig::new(40.0, 120.0).unwrap().with_overscan(1);
    let mut timeline = Timeline::new(config);
    timeline.refresh(&commands);

    for id in 7..=200 {
        commands.push(Command {
            message_id: id,
            command_type: CommandType::Log,
            date_ms: 1_700_000_010_000 + id,
            payload: serde_json::json!({"message": format!("tick {id}")}),
        });
        let rows = timeline.refresh(&commands);
        assert_eq!(rows.last().map(|row| row.message_id), Some(id));
    }

    // Scrolling away stops the follow.
    timeline.on_scroll(0.0);
    commands.push(Command {
        message_id: 201,
        command_type: CommandType::Log,
        date_ms: 0,
        payload: serde_json::Value::Null,
    });
    let rows = timeline.refresh(&commands);
    assert_eq!(rows.first().map(|row| row.message_id), Some(1));
    assert!(!timeline.list().is_at_tail());
}

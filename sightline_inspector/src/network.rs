// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Network inspector: a windowed request table beside a tabbed detail pane.

use kurbo::Rect;
use serde_json::Value;
use sightline_split::SplitLayout;
use sightline_window::{InvalidConfiguration, ScrollAlign, WindowConfig, WindowedList};

use crate::format::{
    NOT_AVAILABLE, display_value, format_size, format_time_of_day, is_truthy, payload_size,
    shorten_url,
};
use crate::{Command, CommandType, InspectorError};

/// Height of one request row.
pub const NETWORK_ROW_HEIGHT: f64 = 50.0;

/// Height of the column header above the request rows.
pub const NETWORK_TABLE_HEADER_HEIGHT: f64 = 40.0;

/// Display text for one request row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkRow {
    /// Id of the underlying command.
    pub message_id: u64,
    /// Receive time, `HH:MM:SS`.
    pub time: String,
    /// Upper-cased HTTP method, or `N/A`.
    pub method: String,
    /// Full request URL, for tooltips.
    pub url: Option<String>,
    /// URL without its scheme, or `N/A`.
    pub short_url: String,
    /// Response status, or `N/A`.
    pub status: String,
    /// Size of the whole payload as compact JSON.
    pub size_bytes: usize,
    /// `size_bytes` formatted for display.
    pub size: String,
}

impl NetworkRow {
    /// Builds the row text for an `api.response` command.
    #[must_use]
    pub fn from_command(command: &Command) -> Self {
        let url = command
            .payload_path(&["request", "url"])
            .and_then(Value::as_str)
            .map(str::to_owned);
        let method = command
            .payload_path(&["request", "method"])
            .and_then(Value::as_str)
            .filter(|method| !method.is_empty())
            .map_or_else(|| NOT_AVAILABLE.to_owned(), str::to_uppercase);
        let status = command
            .payload_path(&["response", "status"])
            .and_then(display_value)
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        let size_bytes = payload_size(&command.payload);

        Self {
            message_id: command.message_id,
            time: format_time_of_day(command.date_ms),
            method,
            short_url: shorten_url(url.as_deref()).to_owned(),
            url,
            status,
            size_bytes,
            size: format_size(size_bytes),
        }
    }
}

/// Sections of the request detail pane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    /// `request.headers`
    #[default]
    RequestHeaders,
    /// `request.params`
    RequestParams,
    /// `request.data`
    RequestBody,
    /// `response.headers`
    ResponseHeaders,
    /// `response.body`
    ResponseBody,
}

impl DetailTab {
    /// Every tab, in display order.
    pub const ALL: [Self; 5] = [
        Self::RequestHeaders,
        Self::RequestParams,
        Self::RequestBody,
        Self::ResponseHeaders,
        Self::ResponseBody,
    ];

    /// Tab caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RequestHeaders => "request headers",
            Self::RequestParams => "request params",
            Self::RequestBody => "request body",
            Self::ResponseHeaders => "response headers",
            Self::ResponseBody => "response body",
        }
    }

    fn path(self) -> [&'static str; 2] {
        match self {
            Self::RequestHeaders => ["request", "headers"],
            Self::RequestParams => ["request", "params"],
            Self::RequestBody => ["request", "data"],
            Self::ResponseHeaders => ["response", "headers"],
            Self::ResponseBody => ["response", "body"],
        }
    }

    /// Content shown under this tab, if the command has any.
    #[must_use]
    pub fn content(self, command: &Command) -> Option<&Value> {
        command
            .payload_path(&self.path())
            .filter(|value| is_truthy(value))
    }
}

/// Commands shown by the network inspector, in arrival order.
#[must_use]
pub fn network_requests(commands: &[Command]) -> Vec<&Command> {
    commands
        .iter()
        .filter(|command| command.command_type == CommandType::ApiResponse)
        .collect()
}

/// A request row the host should render.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleRequest {
    /// Stable render key (the message id as text).
    pub key: String,
    /// Absolute top edge within the scroll content.
    pub top: f64,
    /// Whether this row is the current selection.
    pub selected: bool,
    /// Row text.
    pub row: NetworkRow,
}

/// View state of the network inspector screen.
///
/// The inspector does not own the commands. Hosts filter them with
/// [`network_requests`] and pass the result to every call that needs rows.
#[derive(Clone, Debug)]
pub struct NetworkInspector {
    list: WindowedList<f64>,
    layout: SplitLayout,
    selected: Option<u64>,
    tab: DetailTab,
    raw_json: bool,
}

impl NetworkInspector {
    /// Creates the view state for a container `container_height` tall inside a
    /// window `window_width` wide.
    pub fn new(container_height: f64, window_width: f64) -> Result<Self, InspectorError> {
        let config = WindowConfig::new(
            NETWORK_ROW_HEIGHT,
            container_height - NETWORK_TABLE_HEADER_HEIGHT,
        )?;
        let mut list = WindowedList::new(config);
        list.set_follow(false);
        Ok(Self {
            list,
            layout: SplitLayout::new(window_width)?,
            selected: None,
            tab: DetailTab::default(),
            raw_json: false,
        })
    }

    /// The request list's windowing state.
    #[must_use]
    pub fn list(&self) -> &WindowedList<f64> {
        &self.list
    }

    /// The list/detail split.
    #[must_use]
    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    /// Mutable access to the list/detail split, for pointer and resize events.
    pub fn layout_mut(&mut self) -> &mut SplitLayout {
        &mut self.layout
    }

    /// Splits `container` into the request table, the drag handle, and the
    /// detail pane, left to right.
    #[must_use]
    pub fn pane_rects(&self, container: Rect) -> (Rect, Rect, Rect) {
        let pane = self.layout.pane();
        let handle_x0 = (container.x0 + pane.leading_width()).min(container.x1);
        let handle_x1 = (handle_x0 + pane.config().handle_width).min(container.x1);
        (
            Rect::new(container.x0, container.y0, handle_x0, container.y1),
            Rect::new(handle_x0, container.y0, handle_x1, container.y1),
            Rect::new(handle_x1, container.y0, container.x1, container.y1),
        )
    }

    /// Returns `true` when there are no requests to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.row_count() == 0
    }

    /// Records a new container height.
    pub fn set_container_height(&mut self, height: f64) -> Result<bool, InvalidConfiguration> {
        self.list
            .set_viewport_height(height - NETWORK_TABLE_HEADER_HEIGHT)
    }

    /// Forwards a scroll event to the request list.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.list.on_scroll(offset)
    }

    /// Brings the view state in line with the current requests.
    ///
    /// Selects the first request when nothing (or a request that no longer
    /// exists) is selected. Returns `true` if the visible range or the
    /// selection changed.
    pub fn sync(&mut self, requests: &[&Command]) -> bool {
        let range_changed = self.list.sync_row_count(requests.len());
        let still_present = self
            .selected
            .is_some_and(|id| requests.iter().any(|command| command.message_id == id));
        if still_present {
            return range_changed;
        }
        let first = requests.first().map(|command| command.message_id);
        let selection_changed = first != self.selected;
        self.set_selection(first);
        range_changed || selection_changed
    }

    /// Id of the selected request.
    #[must_use]
    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    /// Selects a request by id.
    pub fn select(&mut self, message_id: u64) {
        self.set_selection(Some(message_id));
    }

    /// The selected request, if it is among `requests`.
    #[must_use]
    pub fn selected<'a>(&self, requests: &[&'a Command]) -> Option<&'a Command> {
        let id = self.selected?;
        requests
            .iter()
            .copied()
            .find(|command| command.message_id == id)
    }

    /// Moves the selection `step` rows up (negative) or down (positive) and
    /// scrolls it into view. Returns `true` if the selection moved.
    pub fn select_adjacent(&mut self, requests: &[&Command], step: isize) -> bool {
        let Some(last) = requests.len().checked_sub(1) else {
            return false;
        };
        let current = self.selected.and_then(|id| {
            requests
                .iter()
                .position(|command| command.message_id == id)
        });
        let target = match current {
            Some(index) => index.saturating_add_signed(step).min(last),
            None => 0,
        };
        if current == Some(target) {
            return false;
        }
        self.set_selection(Some(requests[target].message_id));
        self.list.scroll_to_index(target, ScrollAlign::Nearest);
        true
    }

    /// Selected detail tab.
    #[must_use]
    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Switches the detail tab. Leaving the response body turns raw JSON off.
    pub fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
        if tab != DetailTab::ResponseBody {
            self.raw_json = false;
        }
    }

    /// Returns `true` if the response body is shown as raw JSON text.
    #[must_use]
    pub fn show_raw_json(&self) -> bool {
        self.raw_json
    }

    /// Turns the raw JSON view on or off. Only the response body tab offers
    /// it; returns `false` and leaves the toggle off on any other tab.
    pub fn set_show_raw_json(&mut self, raw_json: bool) -> bool {
        if self.tab != DetailTab::ResponseBody {
            self.raw_json = false;
            return false;
        }
        self.raw_json = raw_json;
        true
    }

    /// Pretty-printed JSON of the selected tab, when the raw view is on.
    #[must_use]
    pub fn raw_tab_content(&self, requests: &[&Command]) -> Option<String> {
        if !self.raw_json {
            return None;
        }
        serde_json::to_string_pretty(self.tab_content(requests)?).ok()
    }

    /// Tabs that have content for the selected request.
    #[must_use]
    pub fn available_tabs(&self, requests: &[&Command]) -> Vec<DetailTab> {
        let Some(command) = self.selected(requests) else {
            return Vec::new();
        };
        DetailTab::ALL
            .into_iter()
            .filter(|tab| tab.content(command).is_some())
            .collect()
    }

    /// Content of the selected tab for the selected request.
    #[must_use]
    pub fn tab_content<'a>(&self, requests: &[&'a Command]) -> Option<&'a Value> {
        self.tab.content(self.selected(requests)?)
    }

    /// Rows to render for the current scroll position.
    #[must_use]
    pub fn visible_requests(&self, requests: &[&Command]) -> Vec<VisibleRequest> {
        self.list
            .materialize(requests, |command| command.message_id.to_string())
            .into_iter()
            .map(|row| VisibleRequest {
                key: row.key,
                top: row.top,
                selected: self.selected == Some(row.item.message_id),
                row: NetworkRow::from_command(row.item),
            })
            .collect()
    }

    fn set_selection(&mut self, selected: Option<u64>) {
        if self.selected == selected {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?selected, "network selection changed");
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(message_id: u64, url: &str, method: &str, status: u16) -> Command {
        Command {
            message_id,
            command_type: CommandType::ApiResponse,
            date_ms: 1_700_000_000_000,
            payload: json!({
                "request": {"url": url, "method": method, "headers": {"accept": "*/*"}},
                "response": {"status": status, "body": {"ok": true}},
            }),
        }
    }

    #[test]
    fn row_text_for_a_complete_exchange() {
        let command = request(3, "https://api.example.com/users", "get", 200);
        let row = NetworkRow::from_command(&command);
        assert_eq!(row.message_id, 3);
        assert_eq!(row.time, "22:13:20");
        assert_eq!(row.method, "GET");
        assert_eq!(row.short_url, "api.example.com/users");
        assert_eq!(row.url.as_deref(), Some("https://api.example.com/users"));
        assert_eq!(row.status, "200");
        assert_eq!(row.size_bytes, command.payload.to_string().len());
        assert!(row.size.ends_with(" KB"));
    }

    #[test]
    fn row_text_for_a_bare_payload() {
        let command = Command {
            message_id: 1,
            command_type: CommandType::ApiResponse,
            date_ms: 0,
            payload: json!({}),
        };
        let row = NetworkRow::from_command(&command);
        assert_eq!(row.method, NOT_AVAILABLE);
        assert_eq!(row.status, NOT_AVAILABLE);
        assert_eq!(row.short_url, NOT_AVAILABLE);
        assert_eq!(row.url, None);
    }

    #[test]
    fn tabs_follow_payload_contents() {
        let command = request(1, "https://a.test", "POST", 201);
        let tabs: Vec<_> = DetailTab::ALL
            .into_iter()
            .filter(|tab| tab.content(&command).is_some())
            .collect();
        assert_eq!(tabs, vec![DetailTab::RequestHeaders, DetailTab::ResponseBody]);
        assert_eq!(DetailTab::ResponseBody.label(), "response body");
    }

    #[test]
    fn only_api_responses_are_requests() {
        let mut commands = vec![request(1, "https://a.test", "GET", 200)];
        commands.push(Command {
            message_id: 2,
            command_type: CommandType::Log,
            date_ms: 0,
            payload: json!({"message": "hi"}),
        });
        commands.push(request(3, "https://b.test", "GET", 500));
        let ids: Vec<u64> = network_requests(&commands)
            .iter()
            .map(|command| command.message_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn container_height_excludes_table_header() {
        let inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
        assert_eq!(inspector.list().config().viewport_height(), 600.0);
        assert!(inspector.is_empty());
    }

    #[test]
    fn first_request_is_selected_on_sync() {
        let commands: Vec<Command> = (1..=3)
            .map(|id| request(id, "https://a.test", "GET", 200))
            .collect();
        let requests = network_requests(&commands);
        let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();

        assert!(inspector.sync(&requests));
        assert_eq!(inspector.selected_id(), Some(1));

        inspector.select(3);
        assert!(!inspector.sync(&requests));
        assert_eq!(inspector.selected_id(), Some(3));
        assert_eq!(inspector.selected(&requests).map(|c| c.message_id), Some(3));
    }

    #[test]
    fn stale_selection_falls_back_to_first() {
        let commands = vec![request(10, "https://a.test", "GET", 200)];
        let requests = network_requests(&commands);
        let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
        inspector.select(99);
        inspector.sync(&requests);
        assert_eq!(inspector.selected_id(), Some(10));

        inspector.sync(&[]);
        assert_eq!(inspector.selected_id(), None);
        assert!(inspector.is_empty());
    }

    #[test]
    fn tab_content_tracks_selection() {
        let commands = vec![request(1, "https://a.test", "GET", 200)];
        let requests = network_requests(&commands);
        let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
        assert_eq!(inspector.tab_content(&requests), None);

        inspector.sync(&requests);
        assert_eq!(inspector.tab(), DetailTab::RequestHeaders);
        assert_eq!(
            inspector.tab_content(&requests),
            Some(&json!({"accept": "*/*"}))
        );
        inspector.set_tab(DetailTab::RequestParams);
        assert_eq!(inspector.tab_content(&requests), None);
        assert_eq!(
            inspector.available_tabs(&requests),
            vec![DetailTab::RequestHeaders, DetailTab::ResponseBody]
        );
    }

    #[test]
    fn keyboard_selection_scrolls_into_view() {
        let commands: Vec<Command> = (0..100)
            .map(|id| request(id, "https://a.test", "GET", 200))
            .collect();
        let requests = network_requests(&commands);
        let mut inspector = NetworkInspector::new(240.0, 1200.0).unwrap();
        inspector.sync(&requests);

        assert!(!inspector.select_adjacent(&requests, -1));
        for _ in 0..10 {
            assert!(inspector.select_adjacent(&requests, 1));
        }
        assert_eq!(inspector.selected_id(), Some(10));
        assert!(inspector.list().range().visible().contains(&10));

        assert!(inspector.select_adjacent(&requests, 1_000));
        assert_eq!(inspector.selected_id(), Some(99));
        assert!(!inspector.select_adjacent(&requests, 1));
        assert_eq!(inspector.list().range().tail, 100);
    }

    #[test]
    fn visible_requests_mark_the_selection() {
        let commands: Vec<Command> = (0..1000)
            .map(|id| request(id, "https://a.test", "GET", 200))
            .collect();
        let requests = network_requests(&commands);
        let mut inspector = NetworkInspector::new(240.0, 1200.0).unwrap();
        inspector.sync(&requests);
        inspector.on_scroll(5000.0);
        inspector.select(100);

        let rows = inspector.visible_requests(&requests);
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0].key, "95");
        assert_eq!(rows[0].top, 4750.0);
        let selected: Vec<&str> = rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.key.as_str())
            .collect();
        assert_eq!(selected, vec!["100"]);
    }

    #[test]
    fn pane_rects_follow_the_split() {
        let inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
        let (table, handle, detail) = inspector.pane_rects(Rect::new(0.0, 40.0, 1200.0, 640.0));
        assert_eq!(table, Rect::new(0.0, 40.0, 700.0, 640.0));
        assert_eq!(handle, Rect::new(700.0, 40.0, 710.0, 640.0));
        assert_eq!(detail, Rect::new(710.0, 40.0, 1200.0, 640.0));

        let (table, _, detail) = inspector.pane_rects(Rect::new(0.0, 0.0, 600.0, 100.0));
        assert_eq!(table.width(), 600.0);
        assert_eq!(detail.width(), 0.0);
    }

    #[test]
    fn raw_json_is_a_response_body_view() {
        let commands = vec![request(1, "https://a.test", "GET", 200)];
        let requests = network_requests(&commands);
        let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
        inspector.sync(&requests);

        assert!(!inspector.set_show_raw_json(true));
        assert!(!inspector.show_raw_json());
        assert_eq!(inspector.raw_tab_content(&requests), None);

        inspector.set_tab(DetailTab::ResponseBody);
        assert!(inspector.set_show_raw_json(true));
        assert_eq!(
            inspector.raw_tab_content(&requests).as_deref(),
            Some("{\n  \"ok\": true\n}")
        );

        inspector.set_tab(DetailTab::RequestHeaders);
        assert!(!inspector.show_raw_json());
        inspector.set_tab(DetailTab::ResponseBody);
        assert!(!inspector.show_raw_json());
    }
}

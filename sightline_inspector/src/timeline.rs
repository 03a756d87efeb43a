// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline: the full command log, filtered and windowed.

use std::time::Duration;

use bitflags::bitflags;
use serde_json::Value;
use sightline_split::ResizeDebounce;
use sightline_window::{WindowConfig, WindowedList};

use crate::{Command, CommandType};

/// Quiet period after the last keystroke before search text is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Top-level timeline filter tabs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimelineTab {
    /// Every command.
    #[default]
    All,
    /// Log commands, further filtered by [`LogLevels`].
    Logs,
    /// `api.response` commands.
    Network,
    /// `state.action.complete` commands.
    Actions,
}

bitflags! {
    /// Log levels shown on the [`TimelineTab::Logs`] tab.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct LogLevels: u8 {
        /// `debug` logs, and logs without a level.
        const DEBUG = 1 << 0;
        /// `warn` logs.
        const WARN = 1 << 1;
        /// `error` logs.
        const ERROR = 1 << 2;
    }
}

impl Default for LogLevels {
    fn default() -> Self {
        Self::all()
    }
}

impl LogLevels {
    /// Level named by a log payload. Unknown names map to `None`.
    #[must_use]
    pub fn from_level_name(name: &str) -> Option<Self> {
        match name {
            "debug" => Some(Self::DEBUG),
            "warn" => Some(Self::WARN),
            "error" => Some(Self::ERROR),
            _ => None,
        }
    }

    fn of(command: &Command) -> Option<Self> {
        match command.payload_path(&["level"]) {
            None => Some(Self::DEBUG),
            Some(level) => level.as_str().and_then(Self::from_level_name),
        }
    }
}

/// Which commands the timeline shows, and in what order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineFilter {
    /// Active tab.
    pub tab: TimelineTab,
    /// Levels shown on the logs tab.
    pub levels: LogLevels,
    /// Case-insensitive substring matched against the type name and payload.
    pub search: String,
    /// Command types never shown.
    pub hidden: Vec<CommandType>,
    /// Show newest first.
    pub reversed: bool,
}

impl TimelineFilter {
    /// Sets the active tab.
    #[must_use]
    pub fn with_tab(mut self, tab: TimelineTab) -> Self {
        self.tab = tab;
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Hides a command type.
    #[must_use]
    pub fn with_hidden(mut self, command_type: CommandType) -> Self {
        self.hidden.push(command_type);
        self
    }

    /// Flips a single log level on or off.
    pub fn toggle_level(&mut self, level: LogLevels) {
        self.levels.toggle(level);
    }

    /// Returns `true` if `command` passes every filter.
    #[must_use]
    pub fn matches(&self, command: &Command) -> bool {
        if self.hidden.contains(&command.command_type) {
            return false;
        }
        let on_tab = match self.tab {
            TimelineTab::All => true,
            TimelineTab::Logs => {
                command.command_type == CommandType::Log
                    && LogLevels::of(command).is_some_and(|level| self.levels.contains(level))
            }
            TimelineTab::Network => command.command_type == CommandType::ApiResponse,
            TimelineTab::Actions => command.command_type == CommandType::StateActionComplete,
        };
        on_tab && self.matches_search(command)
    }

    fn matches_search(&self, command: &Command) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if command.command_type.as_str().to_lowercase().contains(&needle) {
            return true;
        }
        match &command.payload {
            Value::Null => false,
            Value::String(text) => text.to_lowercase().contains(&needle),
            payload => payload.to_string().to_lowercase().contains(&needle),
        }
    }

    /// Filters and orders `commands`.
    #[must_use]
    pub fn apply<'a>(&self, commands: &'a [Command]) -> Vec<&'a Command> {
        let mut shown: Vec<&Command> = commands
            .iter()
            .filter(|command| self.matches(command))
            .collect();
        if self.reversed {
            shown.reverse();
        }
        shown
    }
}

/// A timeline row the host should render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimelineRow<'a> {
    /// Position in the filtered list.
    pub index: usize,
    /// Stable render key.
    pub message_id: u64,
    /// Absolute top edge within the scroll content.
    pub top: f64,
    /// The command.
    pub command: &'a Command,
}

/// Filtered, windowed view of the command log.
///
/// While showing oldest-first, the timeline stays pinned to the newest
/// command as long as the user has not scrolled away from the bottom. While
/// reversed, newest commands are on top and no pinning happens.
///
/// Search text typed by the user is debounced: [`Timeline::search_input`]
/// echoes it at once, while the filter only picks it up from
/// [`Timeline::tick`] after [`SEARCH_DEBOUNCE`] without further input.
#[derive(Clone, Debug)]
pub struct Timeline {
    filter: TimelineFilter,
    list: WindowedList<f64>,
    search_input: String,
    search_debounce: ResizeDebounce<String>,
}

impl Timeline {
    /// Creates a timeline with the default filter.
    #[must_use]
    pub fn new(config: WindowConfig<f64>) -> Self {
        Self {
            filter: TimelineFilter::default(),
            list: WindowedList::new(config),
            search_input: String::new(),
            search_debounce: ResizeDebounce::new(SEARCH_DEBOUNCE),
        }
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> &TimelineFilter {
        &self.filter
    }

    /// Windowing state.
    #[must_use]
    pub fn list(&self) -> &WindowedList<f64> {
        &self.list
    }

    /// Replaces the filter and jumps to the newest command.
    pub fn set_filter(&mut self, filter: TimelineFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.list.set_follow(!self.filter.reversed);
        if self.filter.reversed {
            self.list.on_scroll(0.0);
        } else {
            self.list.scroll_to_tail();
        }
    }

    /// Edits the filter in place; see [`Timeline::set_filter`].
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut TimelineFilter)) {
        let mut filter = self.filter.clone();
        edit(&mut filter);
        self.set_filter(filter);
    }

    /// Forwards a scroll event.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.list.on_scroll(offset)
    }

    /// Search text as typed, including text not yet applied to the filter.
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Records a keystroke in the search box at `now`.
    pub fn on_search_input(&mut self, now: Duration, text: impl Into<String>) {
        let text = text.into();
        self.search_input.clone_from(&text);
        self.search_debounce.notify(now, text);
    }

    /// Applies debounced search text if it is due. Returns `true` if the
    /// filter changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(search) = self.search_debounce.poll(now) else {
            return false;
        };
        if search == self.filter.search {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(search = %search, "timeline search applied");
        self.update_filter(|filter| filter.search = search);
        true
    }

    /// When [`Timeline::tick`] next has work to do, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.search_debounce.deadline()
    }

    /// Applies the filter to `commands` and returns the rows to render.
    ///
    /// New commands are expected to be appended to `commands`; the view keeps
    /// up with them if it was pinned to the tail.
    pub fn refresh<'a>(&mut self, commands: &'a [Command]) -> Vec<TimelineRow<'a>> {
        let shown = self.filter.apply(commands);
        self.list.append_rows(shown.len());
        self.list
            .materialize(&shown, |command| command.message_id)
            .into_iter()
            .map(|row| TimelineRow {
                index: row.index,
                message_id: row.key,
                top: row.top,
                command: *row.item,
            })
            .collect()
    }
}

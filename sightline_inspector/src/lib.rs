// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_inspector --heading-base-level=0

//! Sightline Inspector: view models for the inspector's connection list,
//! network inspector, and timeline.
//!
//! A debugging session produces an append-only log of [`Command`]s. This crate
//! turns that log into the state the screens need, leaving drawing to the host:
//!
//! - [`ConnectionList`]: attached client apps, the selected client, and the
//!   welcome state shown while nothing is attached.
//! - [`NetworkInspector`]: a windowed table of `api.response` commands on the
//!   left, a resizable detail pane on the right with one [`DetailTab`] per
//!   request/response section (the response body optionally as raw JSON), and
//!   keyboard selection that scrolls the selected row into view.
//! - [`Timeline`]: every command, narrowed by a [`TimelineFilter`] (tab, log
//!   levels, search text, hidden types, order) and windowed with tail follow so
//!   new commands stay in view while the user sits at the bottom. Search text
//!   is debounced by [`SEARCH_DEBOUNCE`].
//!
//! Row windowing comes from [`sightline_window`] and the split pane from
//! [`sightline_split`].
//!
//! ## Example
//!
//! ```rust
//! use sightline_inspector::{NetworkInspector, commands_from_json, network_requests};
//!
//! let commands = commands_from_json(
//!     r#"[
//!         {"messageId": 1, "type": "log", "payload": {"message": "boot"}},
//!         {"messageId": 2, "type": "api.response", "date": 0,
//!          "payload": {"request": {"url": "https://api.test/users", "method": "get"},
//!                      "response": {"status": 200}}}
//!     ]"#,
//! )
//! .unwrap();
//! let requests = network_requests(&commands);
//!
//! let mut inspector = NetworkInspector::new(640.0, 1200.0).unwrap();
//! inspector.sync(&requests);
//!
//! let rows = inspector.visible_requests(&requests);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].row.method, "GET");
//! assert_eq!(rows[0].row.short_url, "api.test/users");
//! assert!(rows[0].selected);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for selection changes, window range
//!   changes, and split resizes.

mod command;
mod connections;
mod error;
mod format;
mod network;
mod timeline;

pub use command::{Command, CommandType, commands_from_json};
pub use connections::{Connection, ConnectionList, ConnectionsView};
pub use error::InspectorError;
pub use format::{
    NOT_AVAILABLE, display_value, format_size, format_time_of_day, is_truthy, payload_size,
    shorten_url,
};
pub use network::{
    DetailTab, NETWORK_ROW_HEIGHT, NETWORK_TABLE_HEADER_HEIGHT, NetworkInspector, NetworkRow,
    VisibleRequest, network_requests,
};
pub use timeline::{
    LogLevels, SEARCH_DEBOUNCE, Timeline, TimelineFilter, TimelineRow, TimelineTab,
};

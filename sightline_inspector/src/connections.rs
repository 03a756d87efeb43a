// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connection list: the apps currently attached to the inspector.

use serde::{Deserialize, Serialize};

/// One attached client app, as announced by its handshake.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Stable id the client keeps across reconnects.
    pub client_id: String,
    /// App name.
    #[serde(default)]
    pub name: Option<String>,
    /// Platform identifier, e.g. `ios`, `android`, `browser`.
    #[serde(default)]
    pub platform: Option<String>,
    /// Platform or OS version.
    #[serde(default)]
    pub platform_version: Option<String>,
    /// Device model.
    #[serde(default)]
    pub model: Option<String>,
    /// Screen width in points.
    #[serde(default)]
    pub screen_width: Option<f64>,
    /// Screen height in points.
    #[serde(default)]
    pub screen_height: Option<f64>,
    /// Screen scale factor.
    #[serde(default)]
    pub screen_scale: Option<f64>,
}

impl Connection {
    /// Creates a connection with only an id.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// App name, or `Unknown`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub fn platform_name(&self) -> &str {
        match self.platform.as_deref() {
            Some("ios") => "iOS",
            Some("android") => "Android",
            Some("macos") => "macOS",
            Some("windows") => "Windows",
            Some("browser") => "Web",
            Some(other) if !other.is_empty() => other,
            _ => "Unknown",
        }
    }

    /// Version and model, space separated; empty when neither is known.
    #[must_use]
    pub fn platform_details(&self) -> String {
        [self.platform_version.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Screen size as `W x H`, with ` @ Nx` when the scale is known.
    #[must_use]
    pub fn screen(&self) -> Option<String> {
        let (width, height) = (self.screen_width?, self.screen_height?);
        Some(match self.screen_scale {
            Some(scale) => format!("{width} x {height} @ {scale}x"),
            None => format!("{width} x {height}"),
        })
    }
}

/// What the connections screen shows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConnectionsView<'a> {
    /// Nothing is attached; show onboarding help.
    Welcome,
    /// One card per attached client, in connection order.
    Cards(&'a [Connection]),
}

/// Attached clients and the one whose commands the other screens show.
#[derive(Clone, Debug, Default)]
pub struct ConnectionList {
    connections: Vec<Connection>,
    selected: Option<String>,
}

impl ConnectionList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached clients, in connection order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Returns `true` when no client is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Screen state for the current connections.
    #[must_use]
    pub fn view(&self) -> ConnectionsView<'_> {
        if self.connections.is_empty() {
            ConnectionsView::Welcome
        } else {
            ConnectionsView::Cards(&self.connections)
        }
    }

    /// Records a client handshake. A known `client_id` is updated in place.
    ///
    /// The first client to attach is selected.
    pub fn connect(&mut self, connection: Connection) {
        match self
            .connections
            .iter_mut()
            .find(|known| known.client_id == connection.client_id)
        {
            Some(known) => *known = connection,
            None => {
                if self.selected.is_none() {
                    self.selected = Some(connection.client_id.clone());
                }
                self.connections.push(connection);
            }
        }
    }

    /// Removes a client. If it was selected, the first remaining client is
    /// selected instead. Returns `true` if the client was attached.
    pub fn disconnect(&mut self, client_id: &str) -> bool {
        let before = self.connections.len();
        self.connections.retain(|known| known.client_id != client_id);
        if self.connections.len() == before {
            return false;
        }
        if self.selected.as_deref() == Some(client_id) {
            self.selected = self
                .connections
                .first()
                .map(|first| first.client_id.clone());
        }
        true
    }

    /// Selects an attached client. Returns `false` for unknown ids.
    pub fn select(&mut self, client_id: &str) -> bool {
        if !self.connections.iter().any(|known| known.client_id == client_id) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(client_id, "connection selected");
        self.selected = Some(client_id.to_owned());
        true
    }

    /// Id of the selected client.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected client.
    #[must_use]
    pub fn selected(&self) -> Option<&Connection> {
        let id = self.selected.as_deref()?;
        self.connections.iter().find(|known| known.client_id == id)
    }
}

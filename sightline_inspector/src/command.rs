// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commands reported by the debugged application.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a [`Command`], carried on the wire as its dotted name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommandType {
    /// A completed HTTP exchange (`api.response`).
    ApiResponse,
    /// A log line (`log`).
    Log,
    /// A dispatched state action (`state.action.complete`).
    StateActionComplete,
    /// Any other command type, kept verbatim.
    Other(String),
}

impl CommandType {
    /// Wire name of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ApiResponse => "api.response",
            Self::Log => "log",
            Self::StateActionComplete => "state.action.complete",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for CommandType {
    fn from(name: &str) -> Self {
        match name {
            "api.response" => Self::ApiResponse,
            "log" => Self::Log,
            "state.action.complete" => Self::StateActionComplete,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for CommandType {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<CommandType> for String {
    fn from(command_type: CommandType) -> Self {
        match command_type {
            CommandType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One command in the session log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Session-unique, monotonically assigned id.
    #[serde(rename = "messageId")]
    pub message_id: u64,
    /// What kind of command this is.
    #[serde(rename = "type")]
    pub command_type: CommandType,
    /// Receive time in milliseconds since the Unix epoch.
    #[serde(rename = "date", default)]
    pub date_ms: u64,
    /// Type-specific body.
    #[serde(default)]
    pub payload: Value,
}

impl Command {
    /// Parses a single command.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Looks up a nested payload field, treating `null` as absent.
    #[must_use]
    pub fn payload_path(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.payload, |value, key| value.get(key))
            .filter(|value| !value.is_null())
    }

    /// The `request` object of an `api.response` payload.
    #[must_use]
    pub fn request(&self) -> Option<&Value> {
        self.payload_path(&["request"])
    }

    /// The `response` object of an `api.response` payload.
    #[must_use]
    pub fn response(&self) -> Option<&Value> {
        self.payload_path(&["response"])
    }
}

/// Parses a JSON array of commands.
pub fn commands_from_json(json: &str) -> Result<Vec<Command>, serde_json::Error> {
    serde_json::from_str(json)
}

// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use sightline_split::InvalidSplitConfig;
use sightline_window::InvalidConfiguration;

/// Error returned when an inspector view model cannot be set up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InspectorError {
    /// The request list geometry was rejected.
    Window(InvalidConfiguration),
    /// The split layout widths were rejected.
    Split(InvalidSplitConfig),
}

impl fmt::Display for InspectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(err) => write!(f, "invalid list geometry: {err}"),
            Self::Split(err) => write!(f, "invalid split layout: {err}"),
        }
    }
}

impl std::error::Error for InspectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Window(err) => Some(err),
            Self::Split(err) => Some(err),
        }
    }
}

impl From<InvalidConfiguration> for InspectorError {
    fn from(err: InvalidConfiguration) -> Self {
        Self::Window(err)
    }
}

impl From<InvalidSplitConfig> for InspectorError {
    fn from(err: InvalidSplitConfig) -> Self {
        Self::Split(err)
    }
}

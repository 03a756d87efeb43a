// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading/trailing pane widths driven by a drag handle.
//!
//! ## Usage
//!
//! 1) Call [`SplitPane::press_handle`] when the pointer goes down on the handle.
//! 2) Forward every pointer move to [`SplitPane::pointer_move`] together with
//!    the container's bounds. Moves that would squeeze either pane below its
//!    minimum are ignored and leave the width untouched.
//! 3) Call [`SplitPane::release`] on pointer up.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use sightline_split::{SplitConfig, SplitPane};
//!
//! let mut pane = SplitPane::new(SplitConfig::default()).unwrap();
//! let container = Rect::new(100.0, 0.0, 1100.0, 600.0);
//!
//! pane.press_handle(Point::new(450.0, 300.0));
//! assert_eq!(pane.pointer_move(Point::new(600.0, 300.0), container), Some(500.0));
//! // Would leave the trailing pane narrower than its 200px minimum.
//! assert_eq!(pane.pointer_move(Point::new(1000.0, 300.0), container), None);
//! assert_eq!(pane.leading_width(), 500.0);
//! pane.release();
//! ```

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Error returned when a [`SplitConfig`] holds an unusable width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidSplitConfig {
    /// The named width was NaN or infinite.
    NonFinite(&'static str),
    /// The named width was negative.
    Negative(&'static str),
}

impl fmt::Display for InvalidSplitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(field) => write!(f, "split width `{field}` must be finite"),
            Self::Negative(field) => write!(f, "split width `{field}` must not be negative"),
        }
    }
}

impl core::error::Error for InvalidSplitConfig {}

/// Widths that constrain a [`SplitPane`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitConfig {
    /// Leading pane width before the user drags the handle.
    pub initial_leading: f64,
    /// Narrowest the leading pane may be dragged.
    pub min_leading: f64,
    /// Narrowest the trailing pane may be squeezed.
    pub min_trailing: f64,
    /// Width of the drag handle between the panes.
    pub handle_width: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            initial_leading: 350.0,
            min_leading: 200.0,
            min_trailing: 200.0,
            handle_width: 10.0,
        }
    }
}

impl SplitConfig {
    /// Layout used by the network inspector for a window `window_width` wide.
    ///
    /// The request list starts at seven twelfths of the window and never
    /// shrinks below 400px; the detail pane keeps at least one twelfth.
    #[must_use]
    pub fn for_window_width(window_width: f64) -> Self {
        let width = window_width.max(0.0);
        Self {
            initial_leading: (width * 7.0 / 12.0).floor(),
            min_leading: 400.0,
            min_trailing: (width / 12.0).floor(),
            handle_width: 10.0,
        }
    }

    /// Sets the initial leading width.
    #[must_use]
    pub fn with_initial_leading(mut self, width: f64) -> Self {
        self.initial_leading = width;
        self
    }

    /// Checks that every width is finite and non-negative.
    pub fn validate(self) -> Result<Self, InvalidSplitConfig> {
        for (field, value) in [
            ("initial_leading", self.initial_leading),
            ("min_leading", self.min_leading),
            ("min_trailing", self.min_trailing),
            ("handle_width", self.handle_width),
        ] {
            if !value.is_finite() {
                return Err(InvalidSplitConfig::NonFinite(field));
            }
            if value < 0.0 {
                return Err(InvalidSplitConfig::Negative(field));
            }
        }
        Ok(self)
    }

    /// Widest the leading pane may be inside a container `container_width` wide.
    #[must_use]
    pub fn max_leading(&self, container_width: f64) -> f64 {
        container_width - self.min_trailing - self.handle_width
    }

    /// Returns `true` if `width` keeps both panes at or above their minimums.
    #[must_use]
    pub fn accepts(&self, width: f64, container_width: f64) -> bool {
        width >= self.min_leading && width <= self.max_leading(container_width)
    }
}

/// State of a two-pane split with a draggable handle.
#[derive(Clone, Debug)]
pub struct SplitPane {
    config: SplitConfig,
    leading_width: f64,
    drag_origin: Option<Point>,
    user_resized: bool,
}

impl SplitPane {
    /// Creates a pane at the config's initial leading width.
    pub fn new(config: SplitConfig) -> Result<Self, InvalidSplitConfig> {
        let config = config.validate()?;
        Ok(Self {
            leading_width: config.initial_leading,
            config,
            drag_origin: None,
            user_resized: false,
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Current leading pane width.
    #[must_use]
    pub fn leading_width(&self) -> f64 {
        self.leading_width
    }

    /// Space left for the trailing pane in a container `container_width` wide.
    #[must_use]
    pub fn trailing_width(&self, container_width: f64) -> f64 {
        (container_width - self.leading_width - self.config.handle_width).max(0.0)
    }

    /// Returns `true` once a drag has changed the width.
    #[must_use]
    pub fn user_resized(&self) -> bool {
        self.user_resized
    }

    /// Returns `true` while the handle is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Starts a drag at `pos`.
    pub fn press_handle(&mut self, pos: Point) {
        self.drag_origin = Some(pos);
    }

    /// Horizontal pointer travel since the handle was pressed.
    #[must_use]
    pub fn drag_travel(&self, pos: Point) -> Option<f64> {
        self.drag_origin.map(|origin| pos.x - origin.x)
    }

    /// Applies a pointer move while dragging.
    ///
    /// The candidate width is the pointer's distance from the container's left
    /// edge. Returns the new width if it was accepted.
    pub fn pointer_move(&mut self, pos: Point, container: Rect) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let candidate = pos.x - container.x0;
        if !self.config.accepts(candidate, container.width()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(candidate, "split resize rejected");
            return None;
        }
        self.leading_width = candidate;
        self.user_resized = true;
        #[cfg(feature = "tracing")]
        tracing::trace!(width = candidate, "split resized");
        Some(candidate)
    }

    /// Ends the drag. Returns `true` if one was active.
    pub fn release(&mut self) -> bool {
        self.drag_origin.take().is_some()
    }

    /// Resets the leading width to a new initial value.
    ///
    /// Ignored while a drag is in progress. Non-finite or negative widths are
    /// ignored as well.
    pub fn reseed(&mut self, initial_leading: f64) -> bool {
        if self.is_dragging() || !initial_leading.is_finite() || initial_leading < 0.0 {
            return false;
        }
        self.config.initial_leading = initial_leading;
        self.leading_width = initial_leading;
        #[cfg(feature = "tracing")]
        tracing::debug!(width = initial_leading, "split reseeded");
        true
    }

    /// Replaces the configuration and re-seeds from its initial width.
    pub fn replace_config(&mut self, config: SplitConfig) -> Result<bool, InvalidSplitConfig> {
        let config = config.validate()?;
        if self.is_dragging() {
            return Ok(false);
        }
        self.config = config;
        Ok(self.reseed(config.initial_leading))
    }
}

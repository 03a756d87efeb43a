// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A split pane that follows the host window's width until the user takes over.

use core::time::Duration;

use kurbo::{Point, Rect};

use crate::{InvalidSplitConfig, ResizeDebounce, SplitConfig, SplitPane};

/// Combines a [`SplitPane`] with debounced window-resize re-seeding.
///
/// While the user has never dragged the handle, window resizes are debounced
/// and then rebuild the [`SplitConfig`] from the new window width via
/// [`SplitConfig::for_window_width`]. After the first accepted drag, window
/// resizes are ignored and the user's width sticks.
///
/// ```
/// use core::time::Duration;
/// use sightline_split::SplitLayout;
///
/// let mut layout = SplitLayout::new(1200.0).unwrap();
/// assert_eq!(layout.pane().leading_width(), 700.0);
///
/// layout.on_window_resize(Duration::ZERO, 2400.0);
/// assert!(!layout.tick(Duration::from_millis(100)));
/// assert!(layout.tick(Duration::from_millis(150)));
/// assert_eq!(layout.pane().leading_width(), 1400.0);
/// ```
#[derive(Clone, Debug)]
pub struct SplitLayout {
    pane: SplitPane,
    debounce: ResizeDebounce<f64>,
    window_width: f64,
}

impl SplitLayout {
    /// Creates a layout seeded for a window `window_width` wide.
    pub fn new(window_width: f64) -> Result<Self, InvalidSplitConfig> {
        Self::with_debounce(window_width, ResizeDebounce::default())
    }

    /// Creates a layout with a custom debounce.
    pub fn with_debounce(
        window_width: f64,
        debounce: ResizeDebounce<f64>,
    ) -> Result<Self, InvalidSplitConfig> {
        Ok(Self {
            pane: SplitPane::new(SplitConfig::for_window_width(window_width))?,
            debounce,
            window_width,
        })
    }

    /// The underlying pane.
    #[must_use]
    pub fn pane(&self) -> &SplitPane {
        &self.pane
    }

    /// Window width the pane was last seeded for.
    #[must_use]
    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    /// Records a window resize. Ignored once the user has resized manually.
    pub fn on_window_resize(&mut self, now: Duration, window_width: f64) {
        if self.pane.user_resized() {
            return;
        }
        self.debounce.notify(now, window_width);
    }

    /// Applies a debounced window resize if one is due. Returns `true` if the
    /// pane was re-seeded.
    ///
    /// A due resize stays pending while the handle is held.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.pane.is_dragging() {
            return false;
        }
        let Some(window_width) = self.debounce.poll(now) else {
            return false;
        };
        if self.pane.user_resized() {
            return false;
        }
        match self
            .pane
            .replace_config(SplitConfig::for_window_width(window_width))
        {
            Ok(true) => {
                self.window_width = window_width;
                #[cfg(feature = "tracing")]
                tracing::debug!(window_width, "split layout followed window resize");
                true
            }
            _ => false,
        }
    }

    /// When [`SplitLayout::tick`] next has work to do, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debounce.deadline()
    }

    /// See [`SplitPane::press_handle`].
    pub fn press_handle(&mut self, pos: Point) {
        self.pane.press_handle(pos);
    }

    /// See [`SplitPane::pointer_move`]. An accepted move cancels any pending
    /// window-resize re-seed.
    pub fn pointer_move(&mut self, pos: Point, container: Rect) -> Option<f64> {
        let width = self.pane.pointer_move(pos, container)?;
        self.debounce.cancel();
        Some(width)
    }

    /// See [`SplitPane::release`].
    pub fn release(&mut self) -> bool {
        self.pane.release()
    }
}

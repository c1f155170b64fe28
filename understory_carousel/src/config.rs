// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel tuning and the per-container layout handed over at construction.

use core::time::Duration;

use crate::host::ScrollIntoView;

/// Drag distance, in pixels, past which a release commits to the adjacent slide.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 50.0;
/// Accumulated horizontal wheel delta that fires one transition.
pub const DEFAULT_HORIZONTAL_SENSITIVITY: f64 = 100.0;
/// Wheel events with `|delta.y|` below this are horizontal intent.
pub const DEFAULT_VERTICAL_SENSITIVITY: f64 = 5.0;
/// Quiet period after a wheel-driven transition.
pub const DEFAULT_WHEEL_COOLDOWN: Duration = Duration::from_millis(750);

/// Errors reported when a configuration or layout is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A threshold was zero, negative, or not finite.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidThreshold {
        /// Which setting was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The viewport width was negative or not finite.
    #[error("viewport width must be finite and non-negative, got {0}")]
    InvalidViewportWidth(f64),
}

/// Tuning for a carousel instance.
///
/// The defaults match a typical desktop/trackpad setup; see the `DEFAULT_*` constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// See [`DEFAULT_DRAG_THRESHOLD`].
    pub drag_threshold: f64,
    /// See [`DEFAULT_HORIZONTAL_SENSITIVITY`].
    pub horizontal_sensitivity: f64,
    /// See [`DEFAULT_VERTICAL_SENSITIVITY`].
    pub vertical_sensitivity: f64,
    /// See [`DEFAULT_WHEEL_COOLDOWN`].
    pub wheel_cooldown: Duration,
    /// Options used whenever a settle requests scroll-into-view.
    pub scroll: ScrollIntoView,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            horizontal_sensitivity: DEFAULT_HORIZONTAL_SENSITIVITY,
            vertical_sensitivity: DEFAULT_VERTICAL_SENSITIVITY,
            wheel_cooldown: DEFAULT_WHEEL_COOLDOWN,
            scroll: ScrollIntoView::default(),
        }
    }
}

impl CarouselConfig {
    /// Set the drag commit threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, px: f64) -> Self {
        self.drag_threshold = px;
        self
    }

    /// Set the horizontal and vertical wheel sensitivities.
    #[must_use]
    pub fn with_wheel_sensitivity(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_sensitivity = horizontal;
        self.vertical_sensitivity = vertical;
        self
    }

    /// Set the wheel cooldown window.
    #[must_use]
    pub fn with_wheel_cooldown(mut self, cooldown: Duration) -> Self {
        self.wheel_cooldown = cooldown;
        self
    }

    /// Set the scroll-into-view options.
    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollIntoView) -> Self {
        self.scroll = scroll;
        self
    }

    /// Check that every threshold is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("drag threshold", self.drag_threshold),
            ("horizontal sensitivity", self.horizontal_sensitivity),
            ("vertical sensitivity", self.vertical_sensitivity),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// What the host found inside one matched container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeckLayout {
    /// Number of slide panels.
    pub slide_count: usize,
    /// Viewport width in pixels; one slide spans the full width.
    pub viewport_width: f64,
    /// Whether a "previous" control exists.
    pub has_prev: bool,
    /// Whether a "next" control exists.
    pub has_next: bool,
    /// Name of the container, used in log output.
    pub label: Option<&'static str>,
}

impl DeckLayout {
    /// A deck with `slide_count` slides, no controls.
    pub fn new(slide_count: usize, viewport_width: f64) -> Self {
        Self {
            slide_count,
            viewport_width,
            has_prev: false,
            has_next: false,
            label: None,
        }
    }

    /// Name the container for log output.
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Declare which controls are present.
    #[must_use]
    pub fn with_controls(mut self, has_prev: bool, has_next: bool) -> Self {
        self.has_prev = has_prev;
        self.has_next = has_next;
        self
    }

    /// Check the viewport width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_width(self.viewport_width)
    }
}

pub(crate) fn validate_width(width: f64) -> Result<(), ConfigError> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidViewportWidth(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CarouselConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.wheel_cooldown, Duration::from_millis(750));
        assert_eq!(config.drag_threshold, 50.0);
    }

    #[test]
    fn rejects_bad_thresholds() {
        let config = CarouselConfig::default().with_drag_threshold(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                name: "drag threshold",
                value: 0.0
            })
        );
        let config = CarouselConfig::default().with_wheel_sensitivity(f64::INFINITY, 5.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                name: "horizontal sensitivity",
                ..
            })
        ));
    }

    #[test]
    fn layout_builders() {
        let layout = DeckLayout::new(4, 960.0)
            .with_controls(true, false)
            .with_label("news");
        assert_eq!(layout.label, Some("news"));
        assert!(layout.has_prev && !layout.has_next);
        assert_eq!(DeckLayout::new(4, 960.0).label, None);
    }

    #[test]
    fn rejects_bad_widths() {
        assert_eq!(DeckLayout::new(3, 0.0).validate(), Ok(()));
        assert_eq!(
            DeckLayout::new(3, -1.0).validate(),
            Err(ConfigError::InvalidViewportWidth(-1.0))
        );
        assert!(DeckLayout::new(3, f64::NAN).validate().is_err());
    }
}

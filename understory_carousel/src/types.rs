// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the carousel: input events, navigation intents, steps, and dispositions.
//!
//! ## Overview
//!
//! These types describe what the host feeds in and what the carousel hands back.
//! [`InputEvent`] is the host-agnostic form of a DOM-level input; the
//! [`gesture`](crate::gesture) router classifies it, and every channel ends up as an
//! [`Intent`] before the [`Carousel`](crate::carousel::Carousel) mutates its state.

use kurbo::{Point, Vec2};

/// A single-page movement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// Toward index `0`.
    Prev,
    /// Toward index `slide_count - 1`.
    Next,
}

impl Step {
    /// Step in the direction of `sign`: positive is [`Next`](Self::Next), negative is
    /// [`Prev`](Self::Prev), zero (or NaN) is no step.
    pub fn from_sign(sign: f64) -> Option<Self> {
        if sign > 0.0 {
            Some(Self::Next)
        } else if sign < 0.0 {
            Some(Self::Prev)
        } else {
            None
        }
    }

    /// Apply the step to `index` within `0..slide_count`.
    ///
    /// Returns `None` when the step would leave the range.
    pub fn apply(self, index: usize, slide_count: usize) -> Option<usize> {
        match self {
            Self::Prev => index.checked_sub(1),
            Self::Next => {
                let next = index + 1;
                (next < slide_count).then_some(next)
            }
        }
    }
}

/// A navigation intent.
///
/// All three input channels (drag, buttons, wheel) are translated into one of these
/// before they reach the state machine, which keeps it input-source agnostic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// Live displacement in pixels from the drag anchor.
    Drag(f64),
    /// Jump to an absolute index (clamped to the slide range).
    StepTo(usize),
    /// Move one page.
    PageBy(Step),
}

/// Phases of a pointing-device gesture on a slide.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerPhase {
    /// Button pressed over a slide.
    Down,
    /// Pointer moved over a slide.
    Move,
    /// Button released over a slide.
    Up,
    /// Pointer left the slide area.
    Leave,
}

/// Phases of a touch gesture on a slide.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    /// A touch began on a slide.
    Start,
    /// An active touch moved.
    Move,
    /// The touch was lifted.
    End,
}

/// Optional prev/next control elements.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Control {
    /// The "previous slide" control.
    Prev,
    /// The "next slide" control.
    Next,
}

impl From<Control> for Step {
    fn from(control: Control) -> Self {
        match control {
            Control::Prev => Self::Prev,
            Control::Next => Self::Next,
        }
    }
}

/// A host input event, already stripped of its DOM wrapper.
///
/// The slide index is carried on the event itself rather than captured by a
/// per-slide handler, so one handler serves every slide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Mouse/pen event on the slide at `slide`, in page coordinates.
    Pointer {
        /// Gesture phase.
        phase: PointerPhase,
        /// Index of the slide that received the event.
        slide: usize,
        /// Page position of the pointer.
        page: Point,
    },
    /// Touch event on the slide at `slide`.
    Touch {
        /// Gesture phase.
        phase: TouchPhase,
        /// Index of the slide that received the event.
        slide: usize,
        /// Client positions of the active touch points (may be empty).
        touches: &'a [Point],
    },
    /// Wheel or trackpad scroll over a slide.
    Wheel {
        /// Scroll deltas as reported by the host.
        delta: Vec2,
    },
    /// Click on a prev/next control.
    Control(Control),
    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        viewport_width: f64,
    },
    /// Context menu requested on the slider surface (e.g. long press).
    ContextMenu,
    /// Native drag-image gesture started on slide contents.
    DragImage,
}

bitflags::bitflags! {
    /// What the host should suppress after an event was handled.
    ///
    /// An empty disposition means "let the default happen".
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Disposition: u8 {
        /// Prevent the host's default action.
        const PREVENT_DEFAULT  = 0b0000_0001;
        /// Stop the event from propagating further.
        const STOP_PROPAGATION = 0b0000_0010;
    }
}

impl Disposition {
    /// Prevent default and stop propagation.
    pub const CONSUMED: Self = Self::PREVENT_DEFAULT.union(Self::STOP_PROPAGATION);

    /// Whether the host's default action should be prevented.
    pub fn prevents_default(self) -> bool {
        self.contains(Self::PREVENT_DEFAULT)
    }
}

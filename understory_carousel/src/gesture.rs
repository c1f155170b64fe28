// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture router: classify host input events into carousel channels.
//!
//! ## Overview
//!
//! Pointer and touch events are normalized to a single horizontal coordinate with
//! [`extract_x`], then [`route`] sorts every [`InputEvent`] into one of the logical
//! channels described by [`Route`]:
//!
//! | Input | Route |
//! |---|---|
//! | pointer down / touch start | [`Route::DragStart`] |
//! | pointer move / touch move | [`Route::DragMove`] |
//! | pointer up / touch end / pointer leave | [`Route::DragEnd`] |
//! | wheel | [`Route::Wheel`] |
//! | prev/next control | [`Route::Button`] |
//! | resize | [`Route::Resize`] |
//! | context menu / drag image | [`Route::Suppress`] |
//!
//! Routing is pure; the [`Carousel`](crate::carousel::Carousel) decides what each
//! channel does to its state.

use kurbo::Vec2;

use crate::types::{Disposition, InputEvent, PointerPhase, Step, TouchPhase};

/// How a drag ended.
///
/// The release kind decides whether the settle that follows requests
/// scroll-into-view.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Release {
    /// Deliberate pointer release; scrolls the carousel into view.
    Pointer,
    /// Touch lifted; never scrolls.
    Touch,
    /// Pointer left the slide area; a soft end that never scrolls.
    Leave,
}

impl Release {
    /// Whether the settle after this release asks the host to scroll into view.
    pub fn scrolls_into_view(self) -> bool {
        matches!(self, Self::Pointer)
    }
}

/// Logical input channel for an event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Route {
    /// Begin a drag on `slide`. `x` is `None` for a touch event without touch points.
    DragStart {
        /// Slide that received the event.
        slide: usize,
        /// Horizontal anchor coordinate.
        x: Option<f64>,
    },
    /// Update the live drag offset.
    DragMove {
        /// Current horizontal coordinate, if the event carried one.
        x: Option<f64>,
    },
    /// Finish the drag.
    DragEnd(Release),
    /// Feed the wheel debouncer.
    Wheel(Vec2),
    /// Direct page step from a control, bypassing drag state.
    Button(Step),
    /// Re-layout for a new viewport width.
    Resize(f64),
    /// No state change; only suppress host defaults.
    Suppress(Disposition),
}

/// Extract the horizontal coordinate of a pointer or touch event.
///
/// Touch events read the first active touch point (client space); pointer events
/// read the page position. Returns `None` for a touch event with no active touch
/// points and for events that carry no position at all.
pub fn extract_x(event: &InputEvent<'_>) -> Option<f64> {
    match event {
        InputEvent::Pointer { page, .. } => Some(page.x),
        InputEvent::Touch { touches, .. } => touches.first().map(|p| p.x),
        _ => None,
    }
}

/// Classify an input event into its channel.
pub fn route(event: &InputEvent<'_>) -> Route {
    let x = extract_x(event);
    match *event {
        InputEvent::Pointer { phase, slide, .. } => match phase {
            PointerPhase::Down => Route::DragStart { slide, x },
            PointerPhase::Move => Route::DragMove { x },
            PointerPhase::Up => Route::DragEnd(Release::Pointer),
            PointerPhase::Leave => Route::DragEnd(Release::Leave),
        },
        InputEvent::Touch { phase, slide, .. } => match phase {
            TouchPhase::Start => Route::DragStart { slide, x },
            TouchPhase::Move => Route::DragMove { x },
            TouchPhase::End => Route::DragEnd(Release::Touch),
        },
        InputEvent::Wheel { delta } => Route::Wheel(delta),
        InputEvent::Control(control) => Route::Button(control.into()),
        InputEvent::Resize { viewport_width } => Route::Resize(viewport_width),
        InputEvent::ContextMenu => Route::Suppress(Disposition::CONSUMED),
        InputEvent::DragImage => Route::Suppress(Disposition::PREVENT_DEFAULT),
    }
}

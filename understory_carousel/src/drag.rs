// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state and the release-time commit rule.
//!
//! ## States
//!
//! A carousel is either [`Idle`](DragState::Idle) or [`Dragging`](DragState::Dragging).
//! While dragging it remembers the horizontal anchor of the gesture and the repaint
//! loop registered for it. Move events only update the live offset; the repaint loop
//! forwards it to the surface, so input frequency and paint frequency stay decoupled.
//!
//! ## Commit rule
//!
//! At release the net displacement decides the outcome, see [`commit_step`].
//! The rule is distance based; there is no velocity or fling.

use crate::host::FrameHandle;
use crate::types::Step;

/// Drag state of a carousel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress.
    Dragging {
        /// Horizontal coordinate at drag start; `None` if the start event had none.
        anchor: Option<f64>,
        /// Repaint loop registered for this gesture.
        frame: FrameHandle,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Repaint loop of the current drag, if any.
    pub fn frame(&self) -> Option<FrameHandle> {
        match self {
            Self::Dragging { frame, .. } => Some(*frame),
            Self::Idle => None,
        }
    }
}

/// Displacement of `x` from `anchor`.
///
/// Either side being unknown (a touch event without touch points) counts as no
/// movement.
pub fn displacement(anchor: Option<f64>, x: Option<f64>) -> f64 {
    match (anchor, x) {
        (Some(a), Some(x)) if a.is_finite() && x.is_finite() => x - a,
        _ => 0.0,
    }
}

/// Decide whether a drag that moved the track by `moved_by` pixels commits to an
/// adjacent slide.
///
/// Dragging left past `-threshold` moves to the next slide, dragging right past
/// `threshold` to the previous one. Both comparisons are strict, and a step that
/// would leave `0..slide_count` is dropped.
pub fn commit_step(
    moved_by: f64,
    threshold: f64,
    index: usize,
    slide_count: usize,
) -> Option<Step> {
    let step = if moved_by < -threshold {
        Step::Next
    } else if moved_by > threshold {
        Step::Prev
    } else {
        return None;
    };
    step.apply(index, slide_count).map(|_| step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(commit_step(-51.0, 50.0, 0, 3), Some(Step::Next));
        assert_eq!(commit_step(-50.0, 50.0, 0, 3), None);
        assert_eq!(commit_step(-49.0, 50.0, 0, 3), None);
        assert_eq!(commit_step(50.0, 50.0, 1, 3), None);
        assert_eq!(commit_step(50.5, 50.0, 1, 3), Some(Step::Prev));
    }

    #[test]
    fn commit_respects_bounds() {
        assert_eq!(commit_step(-400.0, 50.0, 2, 3), None);
        assert_eq!(commit_step(400.0, 50.0, 0, 3), None);
    }

    #[test]
    fn unknown_coordinates_do_not_move() {
        assert_eq!(displacement(Some(100.0), Some(40.0)), -60.0);
        assert_eq!(displacement(None, Some(40.0)), 0.0);
        assert_eq!(displacement(Some(100.0), None), 0.0);
        assert_eq!(displacement(Some(f64::NAN), Some(1.0)), 0.0);
    }

    #[test]
    fn idle_has_no_frame() {
        assert!(!DragState::Idle.is_dragging());
        assert_eq!(DragState::Idle.frame(), None);
        let dragging = DragState::Dragging {
            anchor: Some(0.0),
            frame: FrameHandle::new(7),
        };
        assert!(dragging.is_dragging());
        assert_eq!(dragging.frame(), Some(FrameHandle::new(7)));
    }
}

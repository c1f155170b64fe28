// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contracts: the rendering surface, repaint loop, timers, and page navigation.
//!
//! ## Overview
//!
//! The carousel never paints, schedules, or scrolls on its own. It calls into a
//! [`Host`] for each of those side effects and expects the host to call back for the
//! asynchronous tails:
//!
//! - After [`Host::request_frame_loop`], call
//!   [`Carousel::on_frame`](crate::carousel::Carousel::on_frame) once per frame with the
//!   returned handle until it returns `false` or the loop is cancelled.
//! - After [`Host::schedule_cooldown`], call
//!   [`Carousel::on_cooldown_elapsed`](crate::carousel::Carousel::on_cooldown_elapsed)
//!   with the token once the delay has passed. Stale tokens are ignored, so firing
//!   late or twice is harmless.

use core::time::Duration;

use crate::track::Controls;

/// Handle for an active repaint-loop registration, minted by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wrap a host-specific id (for example a `requestAnimationFrame` id).
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host-specific id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Token identifying one wheel cooldown window, minted by the carousel.
///
/// Hosts store it and hand it back when the delay has elapsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CooldownToken(pub(crate) u32);

/// Options for [`Host::scroll_into_view`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ScrollIntoView {
    /// Animate the scroll instead of jumping.
    pub smooth: bool,
    /// Center the container in the viewport on both axes.
    pub centered: bool,
}

impl Default for ScrollIntoView {
    fn default() -> Self {
        Self {
            smooth: true,
            centered: true,
        }
    }
}

/// Side effects the carousel needs from its environment.
pub trait Host {
    /// Apply a horizontal translation, in pixels, to the slide track.
    fn apply_offset(&mut self, px: f64);

    /// Start calling back once per frame; see the module docs.
    fn request_frame_loop(&mut self) -> FrameHandle;

    /// Stop a loop started by [`request_frame_loop`](Self::request_frame_loop).
    fn cancel_frame_loop(&mut self, handle: FrameHandle);

    /// Call back with `token` after `delay`.
    fn schedule_cooldown(&mut self, delay: Duration, token: CooldownToken);

    /// Scroll the carousel container into the viewport.
    fn scroll_into_view(&mut self, options: ScrollIntoView);

    /// Update the enabled state of the prev/next controls.
    fn set_controls(&mut self, controls: Controls);

    /// Toggle the "grabbing" state on the slider surface.
    fn set_grabbing(&mut self, grabbing: bool);
}

#[cfg(test)]
pub(crate) mod recording {
    //! A host that records every call and runs a fake clock.

    use alloc::vec::Vec;
    use core::time::Duration;

    use super::{CooldownToken, FrameHandle, Host, ScrollIntoView};
    use crate::carousel::Carousel;
    use crate::track::Controls;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub(crate) now: Duration,
        pub(crate) offsets: Vec<f64>,
        pub(crate) scrolls: Vec<ScrollIntoView>,
        pub(crate) controls: Option<Controls>,
        pub(crate) grabbing: bool,
        pub(crate) frame: Option<FrameHandle>,
        pub(crate) cancelled: Vec<FrameHandle>,
        pub(crate) pending: Vec<(Duration, CooldownToken)>,
        next_frame_id: u64,
    }

    impl RecordingHost {
        pub(crate) fn last_offset(&self) -> Option<f64> {
            self.offsets.last().copied()
        }

        /// Advance the clock, delivering every cooldown that falls due.
        pub(crate) fn advance(&mut self, carousel: &mut Carousel, by: Duration) {
            self.now += by;
            let now = self.now;
            let (due, pending): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = pending;
            for (_, token) in due {
                carousel.on_cooldown_elapsed(token);
            }
        }

        /// Run one frame of the active repaint loop, if any.
        pub(crate) fn pump_frame(&mut self, carousel: &mut Carousel) {
            if let Some(handle) = self.frame
                && !carousel.on_frame(handle, self)
            {
                self.frame = None;
            }
        }
    }

    impl Host for RecordingHost {
        fn apply_offset(&mut self, px: f64) {
            self.offsets.push(px);
        }

        fn request_frame_loop(&mut self) -> FrameHandle {
            self.next_frame_id += 1;
            let handle = FrameHandle::new(self.next_frame_id);
            self.frame = Some(handle);
            handle
        }

        fn cancel_frame_loop(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
            if self.frame == Some(handle) {
                self.frame = None;
            }
        }

        fn schedule_cooldown(&mut self, delay: Duration, token: CooldownToken) {
            self.pending.push((self.now + delay, token));
        }

        fn scroll_into_view(&mut self, options: ScrollIntoView) {
            self.scrolls.push(options);
        }

        fn set_controls(&mut self, controls: Controls) {
            self.controls = Some(controls);
        }

        fn set_grabbing(&mut self, grabbing: bool) {
            self.grabbing = grabbing;
        }
    }
}

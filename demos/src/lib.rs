// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the carousel demos: a simulated page and logging setup.

use core::time::Duration;

use understory_carousel::carousel::Carousel;
use understory_carousel::host::{CooldownToken, FrameHandle, Host, ScrollIntoView};
use understory_carousel::track::Controls;

/// Install a `tracing` subscriber honoring `RUST_LOG` (default: `debug` for the carousel).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("understory_carousel=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A pretend browser page: one slider surface, a frame clock, and timers.
#[derive(Debug, Default)]
pub struct SimPage {
    /// Name used in printed output.
    pub name: &'static str,
    /// Last translation applied to the track.
    pub offset: f64,
    /// Whether the slider surface carries the "grabbing" state.
    pub grabbing: bool,
    /// Last control state published.
    pub controls: Controls,
    /// Number of scroll-into-view requests.
    pub scrolls: usize,
    /// Frames painted by the repaint loop.
    pub frames_painted: usize,
    now: Duration,
    frame: Option<FrameHandle>,
    next_frame: u64,
    timers: Vec<(Duration, CooldownToken)>,
}

impl SimPage {
    /// A page labelled `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Render one animation frame.
    pub fn frame(&mut self, carousel: &mut Carousel) {
        if let Some(handle) = self.frame {
            if carousel.on_frame(handle, self) {
                self.frames_painted += 1;
            } else {
                self.frame = None;
            }
        }
    }

    /// Let `by` of wall time pass, firing due timers.
    pub fn sleep(&mut self, carousel: &mut Carousel, by: Duration) {
        self.now += by;
        let now = self.now;
        self.timers.retain(|&(at, token)| {
            if at <= now {
                carousel.on_cooldown_elapsed(token);
                false
            } else {
                true
            }
        });
    }

    /// One-line summary of what a viewer would see.
    pub fn describe(&self, carousel: &Carousel) -> String {
        format!(
            "[{}] slide {}/{} offset {:>7.1}px prev:{} next:{}{}",
            self.name,
            carousel.current_index() + 1,
            carousel.slide_count(),
            self.offset,
            on_off(self.controls.contains(Controls::PREV_ENABLED)),
            on_off(self.controls.contains(Controls::NEXT_ENABLED)),
            if self.grabbing { " (grabbing)" } else { "" },
        )
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

impl Host for SimPage {
    fn apply_offset(&mut self, px: f64) {
        self.offset = px;
    }

    fn request_frame_loop(&mut self) -> FrameHandle {
        self.next_frame += 1;
        let handle = FrameHandle::new(self.next_frame);
        self.frame = Some(handle);
        handle
    }

    fn cancel_frame_loop(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) {
            self.frame = None;
        }
    }

    fn schedule_cooldown(&mut self, delay: Duration, token: CooldownToken) {
        self.timers.push((self.now + delay, token));
    }

    fn scroll_into_view(&mut self, options: ScrollIntoView) {
        tracing::info!(page = self.name, ?options, "scroll into view");
        self.scrolls += 1;
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }
}

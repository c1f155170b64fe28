// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-container carousel record and its handlers.
//!
//! ## Overview
//!
//! A [`Carousel`] exclusively owns the navigation state of one container: the
//! current index, the drag state, the track offsets, and the wheel debouncer.
//! Instances never share state, so any number of carousels can live on one page.
//!
//! ## Flow
//!
//! raw input → [`route`](crate::gesture::route) → drag state machine | buttons | wheel
//! debouncer → [`Intent`] → settle → [`Host`].
//!
//! Every committed index change funnels through one settle step which:
//! 1) recomputes the prev/next [`Controls`],
//! 2) collapses the track onto `current_index * -viewport_width`,
//! 3) forwards the offset to the host,
//! 4) optionally asks the host to scroll the container into view.
//!
//! Scroll-into-view is requested for button navigation and pointer releases only.
//! Wheel transitions, touch releases, pointer-leave releases, and resize re-layout
//! never scroll.
//!
//! ## Inert decks
//!
//! With fewer than two slides there is nowhere to go: drag, touch, and wheel input
//! is ignored and both controls stay disabled.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::config::{self, CarouselConfig, ConfigError, DeckLayout};
use crate::drag::{self, DragState};
use crate::gesture::{self, Release, Route};
use crate::host::{CooldownToken, FrameHandle, Host};
use crate::track::{Controls, Track};
use crate::types::{Disposition, InputEvent, Intent, Step};
use crate::wheel::WheelDebouncer;

/// Navigation state for one carousel container.
///
/// ## Usage
///
/// - Construct with [`Carousel::mount`] (or [`Carousel::new`] and settle later).
/// - Feed every host event to [`Carousel::handle`] and honor the returned
///   [`Disposition`].
/// - Drive the asynchronous tails: [`Carousel::on_frame`] for the repaint loop and
///   [`Carousel::on_cooldown_elapsed`] for the wheel cooldown.
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    label: Option<&'static str>,
    slide_count: usize,
    viewport_width: f64,
    has_prev: bool,
    has_next: bool,
    current_index: usize,
    controls: Controls,
    drag: DragState,
    track: Track,
    wheel: WheelDebouncer,
}

impl Carousel {
    /// Create a carousel for `layout` without touching any host.
    pub fn new(layout: DeckLayout, config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        layout.validate()?;
        tracing::debug!(
            label = layout.label,
            slide_count = layout.slide_count,
            viewport_width = layout.viewport_width,
            interactive = layout.slide_count >= 2,
            "spawning carousel"
        );
        Ok(Self {
            config,
            label: layout.label,
            slide_count: layout.slide_count,
            viewport_width: layout.viewport_width,
            has_prev: layout.has_prev,
            has_next: layout.has_next,
            current_index: 0,
            controls: Controls::for_index(0, layout.slide_count),
            drag: DragState::Idle,
            track: Track::default(),
            wheel: WheelDebouncer::new(config.horizontal_sensitivity, config.vertical_sensitivity),
        })
    }

    /// Create a carousel and publish its initial position and control state.
    pub fn mount<H: Host + ?Sized>(
        layout: DeckLayout,
        config: CarouselConfig,
        host: &mut H,
    ) -> Result<Self, ConfigError> {
        let mut carousel = Self::new(layout, config)?;
        carousel.settle(host, false);
        Ok(carousel)
    }

    /// Mount one independent carousel per matched container.
    ///
    /// Stops at the first rejected layout.
    pub fn mount_all<'h, H, I>(decks: I, config: CarouselConfig) -> Result<Vec<Self>, ConfigError>
    where
        H: Host + ?Sized + 'h,
        I: IntoIterator<Item = (DeckLayout, &'h mut H)>,
    {
        decks
            .into_iter()
            .map(|(layout, host)| Self::mount(layout, config, host))
            .collect()
    }

    /// Container name given in the [`DeckLayout`], if any.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Number of navigable slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the current slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether drag, touch, and wheel input is honored (two or more slides).
    pub fn is_interactive(&self) -> bool {
        self.slide_count >= 2
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Committed offset for the current index.
    pub fn prev_translate(&self) -> f64 {
        self.track.prev_translate()
    }

    /// Live offset, including any in-flight drag.
    pub fn current_translate(&self) -> f64 {
        self.track.current_translate()
    }

    /// Horizontal wheel delta accumulated toward the next transition.
    pub fn cumulative_wheel_delta(&self) -> f64 {
        self.wheel.accumulated()
    }

    /// Whether wheel-driven transitions are suppressed.
    pub fn wheel_cooldown_active(&self) -> bool {
        self.wheel.cooldown_active()
    }

    /// Control state as of the last settle.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Current viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Route one host event and apply it.
    ///
    /// Returns what the host should suppress for the event.
    pub fn handle<H: Host + ?Sized>(
        &mut self,
        event: &InputEvent<'_>,
        host: &mut H,
    ) -> Disposition {
        let route = gesture::route(event);
        tracing::trace!(?route, index = self.current_index, "routing carousel input");
        match route {
            Route::Suppress(disposition) => disposition,
            Route::Button(step) => {
                self.page_by(step, host);
                Disposition::CONSUMED
            }
            Route::Resize(width) => {
                if let Err(err) = self.set_viewport_width(width, host) {
                    tracing::warn!(%err, "ignoring resize");
                }
                Disposition::empty()
            }
            Route::DragStart { slide, x } => {
                self.begin_drag(slide, x, host);
                Disposition::empty()
            }
            Route::DragMove { x } => {
                self.drag_to(x);
                Disposition::empty()
            }
            Route::DragEnd(release) => {
                self.end_drag(release, host);
                Disposition::empty()
            }
            Route::Wheel(delta) => self.wheel(delta, host),
        }
    }

    /// Move to the previous slide, scrolling into view. Returns whether it moved.
    pub fn go_prev<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        self.page_by(Step::Prev, host)
    }

    /// Move to the next slide, scrolling into view. Returns whether it moved.
    pub fn go_next<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        self.page_by(Step::Next, host)
    }

    /// Jump to `index` (clamped to the last slide), scrolling into view.
    ///
    /// Returns whether the index changed.
    pub fn go_to<H: Host + ?Sized>(&mut self, index: usize, host: &mut H) -> bool {
        self.apply(Intent::StepTo(index), true, host)
    }

    fn page_by<H: Host + ?Sized>(&mut self, step: Step, host: &mut H) -> bool {
        self.apply(Intent::PageBy(step), true, host)
    }

    /// Apply a navigation intent, settling when the index changes.
    ///
    /// Returns whether the index changed.
    fn apply<H: Host + ?Sized>(&mut self, intent: Intent, scroll: bool, host: &mut H) -> bool {
        let Some(index) = self.resolve(intent) else {
            return false;
        };
        tracing::debug!(from = self.current_index, to = index, ?intent, "carousel navigated");
        self.current_index = index;
        self.settle(host, scroll);
        true
    }

    /// Resolve an intent against the current state.
    ///
    /// A drag intent only moves the live offset. The others yield the index to settle
    /// on, or `None` when it is out of range or already current.
    fn resolve(&mut self, intent: Intent) -> Option<usize> {
        let target = match intent {
            Intent::Drag(dx) => {
                self.track.drag_to(dx);
                return None;
            }
            Intent::StepTo(index) => Some(index.min(self.slide_count.saturating_sub(1))),
            Intent::PageBy(step) => step.apply(self.current_index, self.slide_count),
        };
        target.filter(|&index| index != self.current_index)
    }

    /// Begin a drag on `slide` anchored at `x`.
    ///
    /// Any repaint loop left over from an unfinished gesture is cancelled first.
    pub fn begin_drag<H: Host + ?Sized>(&mut self, slide: usize, x: Option<f64>, host: &mut H) {
        if !self.is_interactive() {
            return;
        }
        if slide >= self.slide_count {
            tracing::warn!(slide, slide_count = self.slide_count, "drag start on unknown slide");
            return;
        }
        if let Some(stale) = self.drag.frame() {
            tracing::trace!(?stale, "cancelling repaint loop of unfinished drag");
            host.cancel_frame_loop(stale);
        }
        self.current_index = slide;
        let frame = host.request_frame_loop();
        self.drag = DragState::Dragging { anchor: x, frame };
        host.set_grabbing(true);
        tracing::trace!(slide, ?x, "drag started");
    }

    /// Update the live offset from a move to `x`.
    ///
    /// Ignored when no drag is in progress or the event carried no coordinate.
    pub fn drag_to(&mut self, x: Option<f64>) {
        let DragState::Dragging { anchor, .. } = self.drag else {
            return;
        };
        if x.is_none() {
            return;
        }
        let dx = drag::displacement(anchor, x);
        tracing::trace!(dx, "drag moved");
        self.resolve(Intent::Drag(dx));
    }

    /// Finish the drag, committing to an adjacent slide when it moved far enough.
    ///
    /// Always settles; only [`Release::Pointer`] scrolls into view.
    pub fn end_drag<H: Host + ?Sized>(&mut self, release: Release, host: &mut H) {
        let DragState::Dragging { frame, .. } = self.drag else {
            return;
        };
        host.cancel_frame_loop(frame);
        self.drag = DragState::Idle;

        let moved_by = self.track.moved_by();
        if let Some(index) = drag::commit_step(
            moved_by,
            self.config.drag_threshold,
            self.current_index,
            self.slide_count,
        )
        .and_then(|step| step.apply(self.current_index, self.slide_count))
        {
            tracing::debug!(from = self.current_index, to = index, moved_by, "drag committed");
            self.current_index = index;
        }
        host.set_grabbing(false);
        self.settle(host, release.scrolls_into_view());
    }

    /// Feed a wheel event to the debouncer.
    ///
    /// Wheel transitions never scroll into view.
    pub fn wheel<H: Host + ?Sized>(&mut self, delta: Vec2, host: &mut H) -> Disposition {
        if !self.is_interactive() {
            return Disposition::empty();
        }
        let out = self.wheel.feed(delta);
        if let Some(token) = out.cooldown {
            host.schedule_cooldown(self.config.wheel_cooldown, token);
        }
        if let Some(step) = out.fire {
            self.apply(Intent::PageBy(step), false, host);
        }
        out.disposition
    }

    /// Re-layout for a new viewport width, keeping the current index.
    pub fn set_viewport_width<H: Host + ?Sized>(
        &mut self,
        width: f64,
        host: &mut H,
    ) -> Result<(), ConfigError> {
        config::validate_width(width)?;
        self.viewport_width = width;
        self.settle(host, false);
        Ok(())
    }

    /// Repaint-loop tick.
    ///
    /// Forwards the live offset to the host and returns `true` while `handle` belongs
    /// to the drag in progress; returns `false` once the loop should stop.
    pub fn on_frame<H: Host + ?Sized>(&mut self, handle: FrameHandle, host: &mut H) -> bool {
        if self.drag.frame() != Some(handle) {
            tracing::trace!(?handle, "stopping stale repaint loop");
            return false;
        }
        host.apply_offset(self.track.current_translate());
        true
    }

    /// Wheel cooldown expiry. Returns whether `token` ended the active cooldown.
    pub fn on_cooldown_elapsed(&mut self, token: CooldownToken) -> bool {
        self.wheel.clear_cooldown(token)
    }

    fn settle<H: Host + ?Sized>(&mut self, host: &mut H, scroll: bool) {
        self.controls = Controls::for_index(self.current_index, self.slide_count);
        if self.has_prev || self.has_next {
            host.set_controls(self.controls);
        }
        let offset = self.track.settle(self.current_index, self.viewport_width);
        host.apply_offset(offset);
        if scroll {
            host.scroll_into_view(self.config.scroll);
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a deterministic, `no_std` gesture-to-navigation state machine.
//!
//! ## Overview
//!
//! This crate drives a single-slide carousel: a track of full-width slides of which
//! exactly one is visible, snapped to the viewport edge. It unifies three input
//! streams into one "current index + in-flight drag offset" model:
//!
//! - pointer and touch drags, committed at release by a distance threshold,
//! - prev/next controls, which step directly,
//! - horizontal wheel/trackpad swipes, debounced to one step per swipe.
//!
//! It does not paint, schedule frames, run timers, or find elements.
//! Those are side effects of the [`Host`](crate::host::Host), which also feeds the
//! carousel its [`InputEvent`](crate::types::InputEvent)s.
//!
//! ## Channels
//!
//! The [`gesture`](crate::gesture) router normalizes pointer vs. touch coordinates and
//! sorts events into channels. Each channel becomes an [`Intent`](crate::types::Intent)
//! (`Drag`, `StepTo`, `PageBy`) before the [`Carousel`](crate::carousel::Carousel)
//! acts on it, so the state machine does not care where an input came from.
//!
//! ## Drags
//!
//! A drag start records the anchor and registers a repaint loop with the host. Moves
//! only update the live offset; the loop paints it. At release, the net displacement
//! commits to the adjacent slide when it exceeds the threshold (50 px by default) and
//! the slide exists; otherwise the track snaps back. See [`drag`](crate::drag).
//!
//! ## Wheel
//!
//! Wheel events with a small vertical delta are horizontal intent; they accumulate
//! until the sum reaches the horizontal sensitivity, fire one step, and start a
//! cooldown during which further deltas are discarded. See [`wheel`](crate::wheel).
//!
//! ## Settle
//!
//! Every committed change funnels through one settle step: recompute the control
//! state, collapse the track to `index * -viewport_width`, hand the offset to the host,
//! and optionally scroll the container into view.
//!
//! ## Workflow
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use understory_carousel::carousel::Carousel;
//! use understory_carousel::config::{CarouselConfig, DeckLayout};
//! use understory_carousel::host::{CooldownToken, FrameHandle, Host, ScrollIntoView};
//! use understory_carousel::track::Controls;
//! use understory_carousel::types::{InputEvent, PointerPhase};
//!
//! #[derive(Default)]
//! struct Page {
//!     offset: f64,
//!     cooldowns: Vec<CooldownToken>,
//! }
//!
//! impl Host for Page {
//!     fn apply_offset(&mut self, px: f64) { self.offset = px; }
//!     fn request_frame_loop(&mut self) -> FrameHandle { FrameHandle::new(1) }
//!     fn cancel_frame_loop(&mut self, _: FrameHandle) {}
//!     fn schedule_cooldown(&mut self, _: Duration, token: CooldownToken) {
//!         self.cooldowns.push(token);
//!     }
//!     fn scroll_into_view(&mut self, _: ScrollIntoView) {}
//!     fn set_controls(&mut self, _: Controls) {}
//!     fn set_grabbing(&mut self, _: bool) {}
//! }
//!
//! let mut page = Page::default();
//! let layout = DeckLayout::new(3, 800.0).with_controls(true, true);
//! let mut carousel = Carousel::mount(layout, CarouselConfig::default(), &mut page).unwrap();
//!
//! // Drag left by 120 px and release.
//! for (phase, x) in [(PointerPhase::Down, 400.0), (PointerPhase::Move, 280.0), (PointerPhase::Up, 280.0)] {
//!     let ev = InputEvent::Pointer { phase, slide: carousel.current_index(), page: Point::new(x, 0.0) };
//!     carousel.handle(&ev, &mut page);
//! }
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(page.offset, -800.0);
//!
//! // One trackpad swipe, one step.
//! for _ in 0..30 {
//!     carousel.handle(&InputEvent::Wheel { delta: Vec2::new(12.0, 0.0) }, &mut page);
//! }
//! assert_eq!(carousel.current_index(), 2);
//! assert_eq!(page.cooldowns.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod carousel;
pub mod config;
pub mod drag;
pub mod gesture;
pub mod host;
pub mod track;
pub mod types;
pub mod wheel;

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel debouncer: at most one page transition per trackpad swipe.
//!
//! ## Overview
//!
//! Trackpads report a single physical swipe as dozens of wheel events. The
//! [`WheelDebouncer`] turns that stream into at most one [`Step`] per swipe:
//!
//! 1) An event is *horizontal intent* when `|delta.y|` is below the vertical
//!    sensitivity. Only those accumulate, and only those have their default
//!    (page scroll) suppressed. Anything else is left to the host.
//! 2) Once the accumulated horizontal delta reaches the horizontal sensitivity in
//!    either direction, one step fires in the direction of its sign and the debouncer
//!    enters cooldown with the accumulator reset.
//! 3) During cooldown every event resets the accumulator, so a swipe that keeps going
//!    past the firing point cannot queue further steps.
//! 4) Cooldown ends when the host hands back the [`CooldownToken`].
//!
//! The debounce saturates: no matter how large the swipe, one cooldown window yields
//! at most one step.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_carousel::types::Step;
//! use understory_carousel::wheel::WheelDebouncer;
//!
//! let mut wheel = WheelDebouncer::new(100.0, 5.0);
//! let mut fired = Vec::new();
//! for _ in 0..20 {
//!     let out = wheel.feed(Vec2::new(10.0, 0.0));
//!     fired.extend(out.fire);
//! }
//! assert_eq!(fired, vec![Step::Next]);
//! assert!(wheel.cooldown_active());
//! ```

use kurbo::Vec2;

use crate::host::CooldownToken;
use crate::types::{Disposition, Step};

/// Result of feeding one wheel event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WheelOutcome {
    /// What the host should suppress for this event.
    pub disposition: Disposition,
    /// Direction of the transition that fired, if any.
    pub fire: Option<Step>,
    /// Newly entered cooldown; schedule its expiry with the host.
    pub cooldown: Option<CooldownToken>,
}

/// Accumulating, non-queueing wheel debouncer.
#[derive(Clone, Debug)]
pub struct WheelDebouncer {
    horizontal_sensitivity: f64,
    vertical_sensitivity: f64,
    accumulated: f64,
    cooldown: Option<CooldownToken>,
    generation: u32,
}

impl WheelDebouncer {
    /// Create a debouncer that fires once `horizontal_sensitivity` units accumulate and
    /// treats events with `|delta.y| < vertical_sensitivity` as horizontal intent.
    pub fn new(horizontal_sensitivity: f64, vertical_sensitivity: f64) -> Self {
        Self {
            horizontal_sensitivity,
            vertical_sensitivity,
            accumulated: 0.0,
            cooldown: None,
            generation: 0,
        }
    }

    /// Running sum of horizontal deltas since the last reset.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Whether wheel-driven transitions are currently suppressed.
    pub fn cooldown_active(&self) -> bool {
        self.cooldown.is_some()
    }

    /// Whether `delta` reads as a horizontal gesture.
    pub fn is_horizontal_intent(&self, delta: Vec2) -> bool {
        delta.y > -self.vertical_sensitivity && delta.y < self.vertical_sensitivity
    }

    /// Feed one wheel event.
    ///
    /// Non-finite components count as zero.
    pub fn feed(&mut self, delta: Vec2) -> WheelOutcome {
        let delta = Vec2::new(finite_or_zero(delta.x), finite_or_zero(delta.y));
        let mut out = WheelOutcome::default();
        if self.is_horizontal_intent(delta) {
            out.disposition = Disposition::CONSUMED;
            self.accumulated += delta.x;
        }

        if self.cooldown.is_some() {
            self.accumulated = 0.0;
            return out;
        }

        let threshold = self.horizontal_sensitivity;
        if self.accumulated >= threshold || self.accumulated <= -threshold {
            out.disposition = Disposition::CONSUMED;
            out.fire = Step::from_sign(self.accumulated);
            self.accumulated = 0.0;
            self.generation = self.generation.wrapping_add(1);
            let token = CooldownToken(self.generation);
            self.cooldown = Some(token);
            out.cooldown = Some(token);
            tracing::debug!(step = ?out.fire, "wheel threshold crossed, entering cooldown");
        }
        out
    }

    /// End the cooldown identified by `token`.
    ///
    /// Returns `false` and changes nothing when `token` is stale, so delivering a
    /// timer late or twice is safe.
    pub fn clear_cooldown(&mut self, token: CooldownToken) -> bool {
        if self.cooldown != Some(token) {
            tracing::trace!(?token, "ignoring stale wheel cooldown");
            return false;
        }
        self.cooldown = None;
        self.accumulated = 0.0;
        tracing::debug!("wheel cooldown elapsed");
        true
    }

    /// Drop the accumulator and any active cooldown.
    ///
    /// Timers still pending for the old cooldown become stale.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.cooldown = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn debouncer() -> WheelDebouncer {
        WheelDebouncer::new(100.0, 5.0)
    }

    #[test]
    fn twenty_small_events_fire_once() {
        let mut wheel = debouncer();
        let fired: Vec<Step> = (0..20)
            .filter_map(|_| wheel.feed(Vec2::new(10.0, 0.0)).fire)
            .collect();
        assert_eq!(fired, [Step::Next]);
        assert_eq!(wheel.accumulated(), 0.0);
    }

    #[test]
    fn fires_on_reaching_threshold_exactly() {
        let mut wheel = debouncer();
        for _ in 0..9 {
            assert_eq!(wheel.feed(Vec2::new(10.0, 0.0)).fire, None);
        }
        let out = wheel.feed(Vec2::new(10.0, 0.0));
        assert_eq!(out.fire, Some(Step::Next));
        assert!(out.cooldown.is_some());
        assert_eq!(out.disposition, Disposition::CONSUMED);
    }

    #[test]
    fn negative_accumulation_steps_back() {
        let mut wheel = debouncer();
        let out = wheel.feed(Vec2::new(-150.0, 1.0));
        assert_eq!(out.fire, Some(Step::Prev));
    }

    #[test]
    fn vertical_gesture_is_left_alone() {
        let mut wheel = debouncer();
        let out = wheel.feed(Vec2::new(100.0, 10.0));
        assert_eq!(out, WheelOutcome::default());
        assert_eq!(wheel.accumulated(), 0.0);
        // The gate is strict: |dy| == 5 is vertical.
        let out = wheel.feed(Vec2::new(100.0, -5.0));
        assert!(out.disposition.is_empty());
    }

    #[test]
    fn non_finite_deltas_do_not_poison_accumulator() {
        let mut wheel = debouncer();
        wheel.feed(Vec2::new(f64::NAN, 0.0));
        wheel.feed(Vec2::new(f64::INFINITY, f64::NAN));
        assert_eq!(wheel.accumulated(), 0.0);
        let fired: Vec<Step> = (0..10)
            .filter_map(|_| wheel.feed(Vec2::new(10.0, 0.0)).fire)
            .collect();
        assert_eq!(fired, [Step::Next]);
    }

    #[test]
    fn opposing_deltas_cancel() {
        let mut wheel = debouncer();
        wheel.feed(Vec2::new(60.0, 0.0));
        wheel.feed(Vec2::new(-60.0, 0.0));
        assert_eq!(wheel.accumulated(), 0.0);
        assert_eq!(wheel.feed(Vec2::new(60.0, 0.0)).fire, None);
    }

    #[test]
    fn cooldown_swallows_and_resets() {
        let mut wheel = debouncer();
        let token = wheel.feed(Vec2::new(100.0, 0.0)).cooldown.unwrap();
        let out = wheel.feed(Vec2::new(500.0, 0.0));
        assert_eq!(out.fire, None);
        assert_eq!(out.disposition, Disposition::CONSUMED);
        assert_eq!(wheel.accumulated(), 0.0);
        // Vertical events during cooldown keep their default.
        assert!(wheel.feed(Vec2::new(0.0, 30.0)).disposition.is_empty());

        assert!(wheel.clear_cooldown(token));
        assert!(!wheel.cooldown_active());
        assert_eq!(wheel.feed(Vec2::new(100.0, 0.0)).fire, Some(Step::Next));
    }

    #[test]
    fn stale_tokens_are_ignored() {
        let mut wheel = debouncer();
        let first = wheel.feed(Vec2::new(100.0, 0.0)).cooldown.unwrap();
        assert!(wheel.clear_cooldown(first));
        let second = wheel.feed(Vec2::new(100.0, 0.0)).cooldown.unwrap();
        assert_ne!(first, second);
        // A late duplicate of the first timer must not end the second window.
        assert!(!wheel.clear_cooldown(first));
        assert!(wheel.cooldown_active());
        assert!(wheel.clear_cooldown(second));
        assert!(!wheel.clear_cooldown(second));
    }

    #[test]
    fn reset_invalidates_pending_cooldown() {
        let mut wheel = debouncer();
        let token = wheel.feed(Vec2::new(-100.0, 0.0)).cooldown.unwrap();
        wheel.reset();
        assert!(!wheel.cooldown_active());
        assert!(!wheel.clear_cooldown(token));
    }
}

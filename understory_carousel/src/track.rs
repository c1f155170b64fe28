// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track offsets and control state used by the settle step.

/// Horizontal offsets of the slide track.
///
/// `prev_translate` is the committed offset for the current index. `current_translate`
/// is the live offset; it differs from `prev_translate` only while a drag is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Track {
    prev_translate: f64,
    current_translate: f64,
}

impl Track {
    /// Committed offset for the current index.
    pub fn prev_translate(&self) -> f64 {
        self.prev_translate
    }

    /// Live offset (equal to [`prev_translate`](Self::prev_translate) at rest).
    pub fn current_translate(&self) -> f64 {
        self.current_translate
    }

    /// Net displacement of the live offset from the committed one.
    pub fn moved_by(&self) -> f64 {
        self.current_translate - self.prev_translate
    }

    /// Set the live offset to `dx` pixels away from the committed offset.
    pub fn drag_to(&mut self, dx: f64) {
        self.current_translate = self.prev_translate + dx;
    }

    /// Collapse onto `index` for a viewport `width` pixels wide.
    ///
    /// Returns the new offset, `index * -width`.
    pub fn settle(&mut self, index: usize, width: f64) -> f64 {
        let offset = index as f64 * -width;
        self.current_translate = offset;
        self.prev_translate = offset;
        offset
    }
}

bitflags::bitflags! {
    /// Enabled state of the prev/next controls.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Controls: u8 {
        /// The "previous" control is interactive.
        const PREV_ENABLED = 0b0000_0001;
        /// The "next" control is interactive.
        const NEXT_ENABLED = 0b0000_0010;
    }
}

impl Controls {
    /// Control state for `index` in a deck of `slide_count` slides.
    ///
    /// A control is disabled when `index` already sits at its bound, so decks with
    /// fewer than two slides have both controls disabled.
    pub fn for_index(index: usize, slide_count: usize) -> Self {
        let mut controls = Self::empty();
        if index > 0 {
            controls |= Self::PREV_ENABLED;
        }
        if index + 1 < slide_count {
            controls |= Self::NEXT_ENABLED;
        }
        controls
    }
}

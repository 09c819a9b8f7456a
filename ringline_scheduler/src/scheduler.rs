// Copyright 2026 the Ringline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowed index scheduler.

use smallvec::SmallVec;

use crate::effects::Changes;
use crate::index::{clamp_index, shortest_step, wrap_index};

/// Configuration for a [`WindowScheduler`] and wrappers built on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowOptions {
    /// Initial position within the full list.
    pub start: usize,
    /// Minimum window width. Normalized to an odd value of at least 3, so the
    /// current item always has an equal number of neighbor slots on each side.
    pub min_window: usize,
    /// Circular navigation: both coordinate spaces wrap instead of clamping,
    /// and the window width never grows past `min_window`.
    pub looped: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            start: 0,
            min_window: 3,
            looped: false,
        }
    }
}

/// Maps a fixed set of rendering slots over a much larger ordered list.
///
/// The scheduler owns two coordinate spaces: the *position* of the current
/// item within the full list (`0..len`), and the *slot* it occupies within
/// the window (`0..window_size()`). Every navigation step recomputes which
/// position occupies which slot while keeping adjacent steps cheap for a
/// renderer: in steady state the window lays the current item's neighbors
/// symmetrically around it, and only non-adjacent jumps force a full reset.
///
/// In bounded mode (`looped == false`) both spaces clamp at their ends and
/// the window near the tail of the list grows up to `2 * min_window - 1`
/// slots so the final partial group is absorbed rather than left undersized.
/// In loop mode both spaces wrap and the window width is always `min_window`.
///
/// The scheduler knows nothing about items; wrappers materialize the window
/// through a backing list (see the `ringline_window` crate).
#[derive(Clone, Debug)]
pub struct WindowScheduler {
    len: usize,
    min_window: usize,
    looped: bool,
    position: usize,
    slot: usize,
    window: SmallVec<[usize; 8]>,
}

impl WindowScheduler {
    /// Creates a scheduler over `len` items.
    ///
    /// The initial position is normalized into range. The window is empty
    /// until the first [`rebuild_window`](Self::rebuild_window).
    #[must_use]
    pub fn new(len: usize, options: WindowOptions) -> Self {
        let min_window = options.min_window.max(3) | 1;
        let mut scheduler = Self {
            len,
            min_window,
            looped: options.looped,
            position: 0,
            slot: 0,
            window: SmallVec::new(),
        };
        scheduler.position = scheduler.normalize_position(options.start as isize);
        scheduler.slot = scheduler.slot_for_step(0);
        scheduler
    }

    /// Number of items in the full list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the full list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if navigation wraps circularly.
    #[must_use]
    pub const fn looped(&self) -> bool {
        self.looped
    }

    /// The configured minimum window width (odd, `>= 3`).
    #[must_use]
    pub const fn min_window(&self) -> usize {
        self.min_window
    }

    /// Number of neighbor slots on each side of the current item.
    #[must_use]
    pub const fn half_window(&self) -> usize {
        self.min_window / 2
    }

    /// Current position within the full list.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Slot currently holding the current item.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Largest valid position. Falls back to `min_window - 1` when the list
    /// is empty so slot arithmetic stays well-defined.
    #[must_use]
    pub const fn max_position(&self) -> usize {
        if self.len > 0 {
            self.len - 1
        } else {
            self.min_window - 1
        }
    }

    /// Largest valid slot, with the same empty-list fallback as
    /// [`max_position`](Self::max_position).
    #[must_use]
    pub fn max_slot(&self) -> usize {
        if self.len > 0 {
            self.window_size() - 1
        } else {
            self.min_window - 1
        }
    }

    /// Current window width.
    ///
    /// Loop mode always uses `min_window`. Bounded mode uses `min_window`
    /// through the bulk of the list, then grows one slot per step across a
    /// short threshold span near the tail until the window has absorbed the
    /// final `len % min_window` remainder items, peaking at
    /// `min_window + len % min_window`.
    #[must_use]
    pub fn window_size(&self) -> usize {
        if self.looped {
            return self.min_window;
        }
        if self.len <= self.min_window {
            return self.len;
        }
        let over = self.len % self.min_window;
        let grow_end = self.len - self.half_window() - 2;
        let grow_start = (grow_end + 1).saturating_sub(over);
        if self.position <= grow_start {
            self.min_window
        } else if self.position <= grow_end {
            self.min_window + (self.position - grow_start)
        } else {
            self.min_window + over
        }
    }

    /// The slot→position mapping materialized by the last
    /// [`rebuild_window`](Self::rebuild_window). Empty before the first
    /// rebuild and stale between a navigation step and the next rebuild,
    /// which is what lets renderers finish a transition against the old
    /// layout before refreshing.
    #[must_use]
    pub fn window(&self) -> &[usize] {
        &self.window
    }

    /// Position mapped into `slot` by the last rebuild, if any.
    #[must_use]
    pub fn position_at(&self, slot: usize) -> Option<usize> {
        self.window.get(slot).copied()
    }

    /// Replaces the list length. The window is not rebuilt; callers follow
    /// up with [`rebuild_window`](Self::rebuild_window) once their own state
    /// is consistent.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Normalizes a prospective position: wrapped in loop mode, clamped in
    /// bounded mode.
    #[must_use]
    pub fn normalize_position(&self, target: isize) -> usize {
        if self.looped {
            wrap_index(target, self.max_position())
        } else {
            clamp_index(target, self.max_position())
        }
    }

    /// Shortest signed step from the current position to the (normalized)
    /// target, circular-aware in loop mode.
    #[must_use]
    pub fn step_to(&self, target: isize) -> isize {
        shortest_step(
            self.position,
            self.normalize_position(target),
            self.max_position(),
            self.looped,
        )
    }

    /// Moves to `target`, normalizing it into range, and re-derives the slot.
    ///
    /// The returned [`Changes`] report, for the renderer's benefit:
    /// [`Changes::POSITION`] and [`Changes::SLOT`] when those values actually
    /// changed, [`Changes::RESTART`] for a non-adjacent bounded-mode jump
    /// (the window needs a full re-key), and [`Changes::REMAP`] for a
    /// wrapped loop-mode jump (the mapping needs rebuilding around the
    /// unchanged slot).
    pub fn set_position(&mut self, target: isize) -> Changes {
        let previous = self.position;
        self.position = self.normalize_position(target);

        let mut changes = Changes::empty();
        if self.set_slot(self.slot_for_step(0)) {
            changes |= Changes::SLOT;
        }
        if previous != self.position {
            changes |= Changes::POSITION;
        }
        if !self.looped && previous.abs_diff(self.position) > 1 {
            changes |= Changes::RESTART;
        }
        if self.looped
            && shortest_step(previous, self.position, self.max_position(), true).unsigned_abs() > 1
        {
            changes |= Changes::REMAP;
        }
        changes
    }

    /// Assigns the slot directly, reporting whether it changed.
    pub fn set_slot(&mut self, slot: usize) -> bool {
        let changed = self.slot != slot;
        self.slot = slot;
        changed
    }

    /// Slot for the current position after an optional pending step.
    ///
    /// Loop mode moves the slot itself: `slot + step`, wrapped. Bounded mode
    /// ignores `step` and derives the slot from the position: identity while
    /// the whole list fits in one window, modular through the bulk of the
    /// list, and offset from the tail-group start once the tail absorbs the
    /// remainder.
    #[must_use]
    pub fn slot_for_step(&self, step: isize) -> usize {
        if self.looped {
            return wrap_index(self.slot as isize + step, self.max_slot());
        }
        if self.len <= 2 * self.min_window - 1 {
            return self.position;
        }
        let tail_start = self.tail_start();
        if self.position <= tail_start {
            self.position % self.min_window
        } else {
            self.position - tail_start
        }
    }

    /// Rebuilds the slot→position mapping and returns the materialized
    /// window.
    ///
    /// Returns an empty slice when the list is empty. The position is
    /// re-normalized first, so a [`set_len`](Self::set_len) shrink applied
    /// since the last navigation clamps (or wraps) instead of leaving the
    /// mapping out of range.
    pub fn rebuild_window(&mut self) -> &[usize] {
        if self.len == 0 {
            self.window.clear();
            return &self.window;
        }
        self.position = self.normalize_position(self.position as isize);
        self.slot = self.slot_for_step(0);
        self.fill_window();
        &self.window
    }

    /// Start of the absorbed tail group in bounded mode.
    fn tail_start(&self) -> usize {
        if self.len <= self.min_window {
            return 0;
        }
        self.len - self.len % self.min_window - self.min_window
    }

    /// Head boundary layout: the first `half_window` positions share the
    /// identity group.
    fn in_head_group(&self) -> bool {
        self.position <= self.half_window()
    }

    /// Tail boundary layout. When the list divides evenly the tail group is
    /// only the final full window; otherwise any position that has grown the
    /// window past `min_window` is inside the absorbed tail.
    fn in_tail_group(&self) -> bool {
        if self.len % self.min_window == 0 {
            return self.position >= self.max_position().saturating_sub(self.half_window());
        }
        self.window_size() > self.min_window
    }

    fn fill_window(&mut self) {
        let size = self.window_size();
        self.window.clear();
        self.window.resize(size, 0);

        if !self.looped {
            if self.in_head_group() {
                for (slot, position) in self.window.iter_mut().enumerate() {
                    *position = slot;
                }
                return;
            }
            if self.in_tail_group() {
                let start = self.tail_start();
                for (slot, position) in self.window.iter_mut().enumerate() {
                    *position = start + slot;
                }
                return;
            }
        }

        // Steady state: the current item sits at `slot` and its neighbors
        // fan out on both sides, wrapping in both coordinate spaces.
        let max_slot = size - 1;
        let max_position = self.max_position();
        self.window[self.slot] = wrap_index(self.position as isize, max_position);
        for k in 1..=self.half_window() {
            let step = k as isize;
            let before = wrap_index(self.slot as isize - step, max_slot);
            let after = wrap_index(self.slot as isize + step, max_slot);
            self.window[before] = wrap_index(self.position as isize - step, max_position);
            self.window[after] = wrap_index(self.position as isize + step, max_position);
        }
    }
}

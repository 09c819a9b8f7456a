// Copyright 2026 the Ringline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowed source: scheduler plus a concrete backing list.

use alloc::vec::Vec;

use ringline_scheduler::{Changes, WindowOptions, WindowScheduler};

/// Approves or vetoes a pending navigation before any state mutates.
///
/// The gate runs strictly before the move is applied; returning `false`
/// aborts the navigation entirely and no state changes. Once a gate has
/// approved a move, the mutation is unconditional.
///
/// Any `FnMut(usize, usize) -> bool` closure is a gate, so hosts usually
/// pass a closure that consults their own transition state:
///
/// ```rust
/// use ringline_window::{NavGate, WindowOptions, WindowedSource};
///
/// let mut source = WindowedSource::new(vec![10, 20, 30, 40], WindowOptions::default());
/// let mut block_all = |_from: usize, _to: usize| false;
/// assert!(source.try_next(&mut block_all).is_none());
/// assert_eq!(source.position(), 0);
/// ```
pub trait NavGate {
    /// Decides whether a move from `from` to `to` may proceed.
    ///
    /// `to` is the normalized prospective position: what the source will
    /// actually land on if the move is approved.
    fn allow(&mut self, from: usize, to: usize) -> bool;
}

impl<F> NavGate for F
where
    F: FnMut(usize, usize) -> bool,
{
    fn allow(&mut self, from: usize, to: usize) -> bool {
        self(from, to)
    }
}

/// Result of a mutating operation on a [`WindowedSource`].
///
/// Carries the settled position and slot, the set of [`Changes`] the
/// operation produced, and the current restart `epoch`. The epoch increases
/// on every restart; renderers use it as a remount key so a restarted
/// window is rebuilt from scratch instead of animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    /// Position within the full list after the operation.
    pub position: usize,
    /// Slot holding the current item after the operation.
    pub slot: usize,
    /// Which observable changes the operation produced.
    pub changes: Changes,
    /// Restart epoch after the operation.
    pub epoch: u64,
}

/// A [`WindowScheduler`] paired with a backing list, materializing the
/// window of positions into a window of cloned items.
///
/// Navigation is re-exposed at item level: [`next`](Self::next),
/// [`prev`](Self::prev), and [`jump_to`](Self::jump_to) move the current
/// position, and every mutation reports an [`Update`] so the host renderer
/// can animate slot moves, re-render on window changes, and re-key on
/// restarts, without the core ever calling back into host code.
///
/// Materialization is deliberately decoupled from navigation: an adjacent
/// step leaves the previous window in place so the renderer can finish its
/// transition against the old layout, then calls [`refresh`](Self::refresh)
/// to settle. Restarts and loop-mode remaps refresh immediately, since the
/// renderer is re-keying rather than animating. [`is_active`](Self::is_active)
/// compares against the position captured by the last completed refresh, not
/// the live one, so slot highlighting cannot flicker mid-transition.
#[derive(Clone, Debug)]
pub struct WindowedSource<T> {
    scheduler: WindowScheduler,
    items: Vec<T>,
    window_items: Vec<T>,
    settled_position: usize,
    epoch: u64,
}

impl<T: Clone + PartialEq> WindowedSource<T> {
    /// Creates a source over `items` and materializes the initial window.
    #[must_use]
    pub fn new(items: Vec<T>, options: WindowOptions) -> Self {
        let scheduler = WindowScheduler::new(items.len(), options);
        let mut source = Self {
            settled_position: scheduler.position(),
            scheduler,
            items,
            window_items: Vec::new(),
            epoch: 0,
        };
        source.refresh();
        source
    }

    /// The full backing list.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The materialized visible window from the last refresh.
    #[must_use]
    pub fn window_items(&self) -> &[T] {
        &self.window_items
    }

    /// The underlying scheduler, for index-level queries.
    #[must_use]
    pub fn scheduler(&self) -> &WindowScheduler {
        &self.scheduler
    }

    /// Current position within the full list.
    #[must_use]
    pub fn position(&self) -> usize {
        self.scheduler.position()
    }

    /// Slot currently holding the current item.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.scheduler.slot()
    }

    /// Position captured by the last completed refresh.
    #[must_use]
    pub const fn settled_position(&self) -> usize {
        self.settled_position
    }

    /// Current restart epoch.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the renderer may treat the window as seamlessly wrapping.
    ///
    /// Always `true` in loop mode. In bounded mode, `true` only while the
    /// settled position is strictly interior; the settled value is used so
    /// the flag does not flip mid-transition and cancel a running animation.
    #[must_use]
    pub fn circular(&self) -> bool {
        if self.scheduler.looped() {
            return true;
        }
        self.settled_position != 0 && self.settled_position != self.scheduler.max_position()
    }

    /// Whether `slot` holds the current item, judged against the settled
    /// position so in-flight transitions do not flicker.
    #[must_use]
    pub fn is_active(&self, slot: usize) -> bool {
        self.scheduler.position_at(slot) == Some(self.settled_position)
    }

    /// Replaces the backing list.
    ///
    /// A deep-equal replacement is a no-op. A real replacement is a restart:
    /// the scheduler length is updated, the window is rebuilt and
    /// re-materialized, and the epoch is bumped so the renderer re-keys.
    pub fn set_items(&mut self, items: Vec<T>) -> Update {
        if items == self.items {
            return self.report(Changes::empty());
        }
        let previous_position = self.scheduler.position();
        self.items = items;
        self.scheduler.set_len(self.items.len());
        self.epoch += 1;

        let mut changes = Changes::RESTART;
        if self.refresh() {
            changes |= Changes::WINDOW;
        }
        if self.scheduler.position() != previous_position {
            changes |= Changes::POSITION;
        }
        self.report(changes)
    }

    /// Steps forward by one position.
    pub fn next(&mut self) -> Update {
        self.offset(1)
    }

    /// Steps backward by one position.
    pub fn prev(&mut self) -> Update {
        self.offset(-1)
    }

    /// Navigates to `target`.
    ///
    /// A target one step away delegates to offset navigation, which a
    /// renderer can animate cheaply. Anything further is a direct jump: the
    /// position moves straight to the normalized target and the slot is
    /// re-derived. In bounded mode this is the path that forces a restart.
    pub fn jump_to(&mut self, target: isize) -> Update {
        let step = self.scheduler.step_to(target);
        if step.unsigned_abs() == 1 {
            return self.offset(step);
        }
        let changes = self.scheduler.set_position(target);
        self.finish(changes)
    }

    /// [`next`](Self::next), gated. Returns `None` without mutating when the
    /// gate vetoes.
    pub fn try_next(&mut self, gate: &mut impl NavGate) -> Option<Update> {
        self.try_offset(1, gate)
    }

    /// [`prev`](Self::prev), gated.
    pub fn try_prev(&mut self, gate: &mut impl NavGate) -> Option<Update> {
        self.try_offset(-1, gate)
    }

    /// [`jump_to`](Self::jump_to), gated.
    pub fn try_jump_to(&mut self, target: isize, gate: &mut impl NavGate) -> Option<Update> {
        let from = self.scheduler.position();
        let to = self.scheduler.normalize_position(target);
        if !gate.allow(from, to) {
            return None;
        }
        Some(self.jump_to(target))
    }

    /// Rebuilds and re-materializes the window, settling the active-status
    /// position. Returns `true` if the visible items actually changed.
    ///
    /// Hosts call this once their own transition for an adjacent step has
    /// finished; restarts and remaps have already refreshed by the time
    /// their [`Update`] is returned.
    pub fn refresh(&mut self) -> bool {
        let positions = self.scheduler.rebuild_window();
        let next: Vec<T> = positions
            .iter()
            .map(|&position| self.items[position].clone())
            .collect();
        self.settled_position = self.scheduler.position();
        if next == self.window_items {
            return false;
        }
        self.window_items = next;
        true
    }

    fn offset(&mut self, step: isize) -> Update {
        let target = self.scheduler.position() as isize + step;
        let mut changes = self.scheduler.set_position(target);
        if self.scheduler.set_slot(self.scheduler.slot_for_step(step)) {
            changes |= Changes::SLOT;
        }
        self.finish(changes)
    }

    fn try_offset(&mut self, step: isize, gate: &mut impl NavGate) -> Option<Update> {
        let from = self.scheduler.position();
        let to = self.scheduler.normalize_position(from as isize + step);
        if !gate.allow(from, to) {
            return None;
        }
        Some(self.offset(step))
    }

    fn finish(&mut self, mut changes: Changes) -> Update {
        if changes.contains(Changes::RESTART) {
            self.epoch += 1;
        }
        if changes.intersects(Changes::RESTART | Changes::REMAP) && self.refresh() {
            changes |= Changes::WINDOW;
        }
        self.report(changes)
    }

    fn report(&self, changes: Changes) -> Update {
        Update {
            position: self.scheduler.position(),
            slot: self.scheduler.slot(),
            changes,
            epoch: self.epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use ringline_scheduler::{Changes, WindowOptions};

    use super::WindowedSource;

    fn letters(len: usize) -> Vec<char> {
        ('a'..).take(len).collect()
    }

    fn bounded(len: usize) -> WindowedSource<char> {
        WindowedSource::new(letters(len), WindowOptions::default())
    }

    fn looped(len: usize) -> WindowedSource<char> {
        WindowedSource::new(
            letters(len),
            WindowOptions {
                looped: true,
                ..WindowOptions::default()
            },
        )
    }

    #[test]
    fn materializes_the_initial_window() {
        let source = bounded(6);
        assert_eq!(source.window_items(), &['a', 'b', 'c']);
        assert_eq!(source.position(), 0);
        assert_eq!(source.slot(), 0);
        assert!(source.is_active(0));
        assert!(!source.is_active(1));
    }

    #[test]
    fn adjacent_steps_defer_materialization_to_refresh() {
        let mut source = bounded(6);

        let update = source.next();
        assert_eq!(update.position, 1);
        assert_eq!(update.slot, 1);
        assert!(update.changes.contains(Changes::POSITION));
        assert!(update.changes.contains(Changes::SLOT));
        assert!(
            !update.changes.contains(Changes::WINDOW),
            "the window must stay untouched while the transition runs"
        );

        // Active status still points at the settled position.
        assert!(source.is_active(0));
        assert!(!source.is_active(1));

        // The host's transition finishes; now the window settles.
        source.refresh();
        assert!(source.is_active(1));
        assert_eq!(source.window_items(), &['a', 'b', 'c']);

        // Two more steps walk into the steady state.
        source.next();
        source.refresh();
        source.next();
        source.refresh();
        assert_eq!(source.position(), 3);
        assert_eq!(source.slot(), 0);
        assert_eq!(source.window_items(), &['d', 'e', 'c']);
    }

    #[test]
    fn bounded_steps_saturate_at_both_ends() {
        let mut source = bounded(3);
        let update = source.prev();
        assert!(update.changes.is_empty(), "clamped steps report nothing");
        assert_eq!(source.position(), 0);

        source.jump_to(2);
        source.refresh();
        let update = source.next();
        assert!(update.changes.is_empty());
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn loop_steps_wrap_across_the_seam() {
        let mut source = looped(6);
        let update = source.prev();
        assert_eq!(update.position, 5);
        assert_eq!(update.slot, 2);
        assert!(update.changes.contains(Changes::POSITION));
        assert!(update.changes.contains(Changes::SLOT));
        assert!(
            !update.changes.intersects(Changes::RESTART | Changes::REMAP),
            "a seam-adjacent step is still a plain step"
        );

        source.refresh();
        assert_eq!(source.window_items(), &['a', 'e', 'f']);
        assert!(source.is_active(2));
    }

    #[test]
    fn bounded_jump_restarts_and_rekeys() {
        let mut source = bounded(6);
        let epoch = source.epoch();

        let update = source.jump_to(3);
        assert!(update.changes.contains(Changes::RESTART));
        assert!(update.changes.contains(Changes::WINDOW));
        assert_eq!(update.epoch, epoch + 1, "restart must bump the epoch");
        assert_eq!(update.position, 3);
        assert_eq!(update.slot, 0);
        // Restarts refresh immediately; there is no transition to wait for.
        assert_eq!(source.window_items(), &['d', 'e', 'c']);
        assert!(source.is_active(0));
    }

    #[test]
    fn loop_jump_remaps_without_rekeying() {
        let mut source = looped(6);
        let epoch = source.epoch();

        let update = source.jump_to(3);
        assert!(update.changes.contains(Changes::REMAP));
        assert!(!update.changes.contains(Changes::RESTART));
        assert_eq!(update.epoch, epoch, "remaps must not re-key");
        assert_eq!(update.slot, 0, "a wrapped jump keeps the slot fixed");
        assert_eq!(source.window_items(), &['d', 'e', 'c']);
    }

    #[test]
    fn jump_to_adjacent_target_degrades_to_a_step() {
        let mut source = bounded(6);
        let update = source.jump_to(1);
        assert!(!update.changes.contains(Changes::RESTART));
        assert!(update.changes.contains(Changes::POSITION));

        // Jumping to the current position is a no-op.
        let update = source.jump_to(1);
        assert!(update.changes.is_empty());
    }

    #[test]
    fn jumps_round_trip_by_position() {
        let mut source = bounded(10);
        source.jump_to(7);
        source.jump_to(0);
        assert_eq!(source.position(), 0);
        assert_eq!(source.window_items(), &['a', 'b', 'c']);
    }

    #[test]
    fn replacing_items_is_a_restart() {
        let mut source = bounded(6);
        let epoch = source.epoch();

        // Deep-equal replacement: nothing happens.
        let update = source.set_items(letters(6));
        assert!(update.changes.is_empty());
        assert_eq!(update.epoch, epoch);

        // Real replacement: restart, re-key, new window.
        let update = source.set_items(vec!['x', 'y', 'z']);
        assert!(update.changes.contains(Changes::RESTART));
        assert!(update.changes.contains(Changes::WINDOW));
        assert_eq!(update.epoch, epoch + 1);
        assert_eq!(source.window_items(), &['x', 'y', 'z']);
    }

    #[test]
    fn shrinking_items_clamps_the_position() {
        let mut source = bounded(10);
        source.jump_to(9);
        let update = source.set_items(letters(4));
        assert!(update.changes.contains(Changes::POSITION));
        assert_eq!(update.position, 3);
        assert_eq!(source.window_items(), &['a', 'b', 'c', 'd']);
    }

    #[test]
    fn gate_vetoes_abort_before_any_mutation() {
        let mut source = bounded(6);
        let mut veto = |_from: usize, _to: usize| false;

        assert!(source.try_next(&mut veto).is_none());
        assert!(source.try_jump_to(4, &mut veto).is_none());
        assert_eq!(source.position(), 0);
        assert_eq!(source.epoch(), 0);
        assert_eq!(source.window_items(), &['a', 'b', 'c']);
    }

    #[test]
    fn gate_sees_the_normalized_target() {
        let mut source = bounded(6);
        source.jump_to(5);
        source.refresh();

        let mut seen = (0, 0);
        let mut record = |from: usize, to: usize| {
            seen = (from, to);
            true
        };
        // Stepping past the end clamps; the gate sees where we actually land.
        source.try_next(&mut record);
        assert_eq!(seen, (5, 5));

        let mut source = looped(6);
        let mut seen = (0, 0);
        let mut record = |from: usize, to: usize| {
            seen = (from, to);
            true
        };
        source.try_prev(&mut record);
        assert_eq!(seen, (0, 5));
    }

    #[test]
    fn gate_approval_applies_the_move() {
        let mut source = bounded(6);
        let mut allow = |_from: usize, _to: usize| true;
        let update = source.try_next(&mut allow).expect("gate approved");
        assert_eq!(update.position, 1);
    }

    #[test]
    fn circular_flag_tracks_the_settled_interior() {
        let mut source = bounded(6);
        assert!(!source.circular(), "at the head the window must not wrap");

        source.jump_to(3);
        assert!(source.circular());

        source.next();
        source.next();
        assert_eq!(source.position(), 5);
        // Not yet settled: the flag holds until the refresh completes.
        assert!(source.circular());
        source.refresh();
        assert!(!source.circular(), "at the tail the window must not wrap");

        assert!(looped(6).circular(), "loop mode always wraps");
    }

    #[test]
    fn empty_list_stays_inert() {
        let mut source: WindowedSource<char> = bounded(0);
        assert!(source.window_items().is_empty());
        assert!(!source.refresh(), "an empty rebuild changes nothing");
        assert!(!source.is_active(0));
    }

    #[test]
    fn struct_items_diff_by_value() {
        #[derive(Clone, Debug, PartialEq)]
        struct Card {
            id: u32,
            title: &'static str,
        }

        let cards = vec![
            Card { id: 1, title: "one" },
            Card { id: 2, title: "two" },
            Card { id: 3, title: "three" },
        ];
        let mut source = WindowedSource::new(cards.clone(), WindowOptions::default());
        assert_eq!(source.window_items(), &cards[..]);

        // Same ids, changed payload: a real replacement.
        let mut retitled = cards.clone();
        retitled[1].title = "deux";
        let update = source.set_items(retitled);
        assert!(update.changes.contains(Changes::WINDOW));
    }
}

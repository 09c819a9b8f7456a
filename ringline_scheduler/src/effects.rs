// Copyright 2026 the Ringline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change reporting for mutating scheduler operations.

bitflags::bitflags! {
    /// Which observable changes a mutating operation produced.
    ///
    /// Mutating operations on [`WindowScheduler`](crate::WindowScheduler)
    /// (and on wrappers built over it) return a `Changes` value instead of
    /// invoking callbacks, so the caller decides how to react after the
    /// mutation has fully settled. An empty set means the operation was a
    /// no-op from the renderer's point of view.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The position within the full list changed.
        const POSITION = 1 << 0;
        /// The slot holding the current item changed; a renderer should move
        /// its viewport to the new slot (typically with a transition).
        const SLOT = 1 << 1;
        /// A non-adjacent jump or list replacement occurred in bounded mode.
        /// The window must be fully reset and re-keyed rather than animated.
        const RESTART = 1 << 2;
        /// A wrapped jump occurred in loop mode; the slot→position mapping
        /// was rebuilt around the unchanged slot.
        const REMAP = 1 << 3;
        /// The materialized window contents changed. Never set by the
        /// scheduler itself; reserved for wrappers that materialize items.
        const WINDOW = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::Changes;

    #[test]
    fn flags_compose_and_intersect() {
        let changes = Changes::POSITION | Changes::SLOT;
        assert!(changes.contains(Changes::POSITION));
        assert!(!changes.contains(Changes::RESTART));
        assert!(changes.intersects(Changes::SLOT | Changes::WINDOW));
        assert_eq!(Changes::default(), Changes::empty());
    }
}

// Copyright 2026 the Ringline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure index arithmetic shared by the scheduler and wrappers built on it.
//!
//! All helpers operate on inclusive ranges `[0, max_index]`; the range size is
//! therefore `max_index + 1`. Out-of-range inputs are normalized, never
//! rejected.

/// Clamps `index` into `[0, max_index]`.
#[must_use]
pub const fn clamp_index(index: isize, max_index: usize) -> usize {
    if index <= 0 {
        return 0;
    }
    let index = index as usize;
    if index > max_index { max_index } else { index }
}

/// Wraps `index` into `[0, max_index]` using Euclidean remainder.
///
/// Unlike a plain `%`, negative inputs wrap backwards from the end of the
/// range, so `wrap_index(-1, 4) == 4` and `wrap_index(5, 4) == 0`.
#[must_use]
pub const fn wrap_index(index: isize, max_index: usize) -> usize {
    let size = max_index as isize + 1;
    index.rem_euclid(size) as usize
}

/// Shortest signed step from `from` to `to` within `[0, max_index]`.
///
/// When `circular` is false this is the plain difference `to - from`. When
/// `circular` is true the step is taken around the ring in whichever
/// direction has the smaller magnitude; a tie at exactly half the ring
/// resolves to the forward direction.
#[must_use]
pub fn shortest_step(from: usize, to: usize, max_index: usize, circular: bool) -> isize {
    let raw = to as isize - from as isize;
    if !circular || raw == 0 {
        return raw;
    }
    let size = max_index as isize + 1;
    let forward = raw.rem_euclid(size);
    if forward > size / 2 {
        forward - size
    } else {
        forward
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_index, shortest_step, wrap_index};

    #[test]
    fn clamp_saturates_at_both_ends() {
        assert_eq!(clamp_index(-3, 4), 0);
        assert_eq!(clamp_index(0, 4), 0);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(4, 4), 4);
        assert_eq!(clamp_index(9, 4), 4);
    }

    #[test]
    fn wrap_covers_the_inclusive_range() {
        assert_eq!(wrap_index(0, 4), 0);
        assert_eq!(wrap_index(4, 4), 4);
        assert_eq!(wrap_index(5, 4), 0);
        assert_eq!(wrap_index(-1, 4), 4);
        // Overshoots of more than one full range still land in range.
        assert_eq!(wrap_index(12, 4), 2);
        assert_eq!(wrap_index(-7, 4), 3);
    }

    #[test]
    fn non_circular_step_is_the_plain_difference() {
        assert_eq!(shortest_step(2, 5, 9, false), 3);
        assert_eq!(shortest_step(5, 2, 9, false), -3);
        assert_eq!(shortest_step(5, 5, 9, false), 0);
    }

    #[test]
    fn circular_step_takes_the_short_way_around() {
        // Adjacent across the seam in both directions.
        assert_eq!(shortest_step(0, 5, 5, true), -1);
        assert_eq!(shortest_step(5, 0, 5, true), 1);
        // Interior moves are unaffected.
        assert_eq!(shortest_step(1, 3, 5, true), 2);
        // Backwards is shorter than forwards here: 4 → 1 is -3, not +3.
        assert_eq!(shortest_step(4, 1, 6, true), -3);
        // A tie at exactly half the ring resolves forward.
        assert_eq!(shortest_step(0, 3, 5, true), 3);
    }
}

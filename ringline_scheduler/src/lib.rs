// Copyright 2026 the Ringline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ringline Scheduler: windowed index mapping over a large ordered list.
//!
//! This crate provides a small, renderer-agnostic core for showing a bounded
//! "window" of slots over a much larger list of items indexed `0..len`, so
//! that only a handful of slots ever exist while the user navigates through
//! the full list. It owns two coordinate spaces, the *position* within the
//! full list and the *slot* within the fixed-size window, and recomputes
//! which position occupies which slot on every navigation step.
//!
//! The core concepts are:
//!
//! - [`clamp_index`], [`wrap_index`], [`shortest_step`]: pure index
//!   arithmetic over inclusive ranges, with circular wraparound awareness.
//! - [`WindowScheduler`]: position/slot state plus the minimal-window-width
//!   policy. In steady state the current item's neighbors surround it
//!   symmetrically; at the ends of a bounded list the layout switches to
//!   identity-like boundary groups, with the tail group grown to absorb the
//!   remainder so no undersized group is ever shown.
//! - [`Changes`]: an effects value returned by mutating operations, telling
//!   the caller which of {position, slot, restart, remap} actually happened
//!   so a renderer only re-keys or re-renders when topologically necessary.
//!
//! This crate deliberately does **not** know about items, widgets, or any UI
//! framework, and performs no I/O. Host code is expected to:
//!
//! - Map the rebuilt window of positions through its backing list (the
//!   `ringline_window` crate does this generically).
//! - React to the returned [`Changes`]: animate slot moves, re-key on
//!   restarts, and call [`WindowScheduler::rebuild_window`] once its own
//!   transition has finished.
//!
//! ## Minimal example
//!
//! ```rust
//! use ringline_scheduler::{Changes, WindowOptions, WindowScheduler};
//!
//! // Six items behind a three-slot window, bounded mode.
//! let mut scheduler = WindowScheduler::new(6, WindowOptions::default());
//! assert_eq!(scheduler.rebuild_window(), &[0, 1, 2]);
//!
//! // Adjacent steps keep the window stable wherever possible.
//! scheduler.set_position(1);
//! assert_eq!(scheduler.rebuild_window(), &[0, 1, 2]);
//! assert_eq!(scheduler.slot(), 1);
//!
//! // A non-adjacent jump in bounded mode demands a full re-key.
//! let changes = scheduler.set_position(4);
//! assert!(changes.contains(Changes::RESTART));
//! assert_eq!(scheduler.rebuild_window(), &[3, 4, 5]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod effects;
mod index;
mod scheduler;

pub use effects::Changes;
pub use index::{clamp_index, shortest_step, wrap_index};
pub use scheduler::{WindowOptions, WindowScheduler};

// Copyright 2026 the Ringline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ringline Window: a materialized windowed source over a backing list.
//!
//! This crate pairs a [`ringline_scheduler::WindowScheduler`] with a concrete
//! list of items, turning the scheduler's slot→position mapping into a
//! materialized visible slice and re-exposing navigation as item-level
//! operations. Hosts own the rendering surface; this crate tells them, via
//! returned [`Update`] values, exactly which of {position, slot, window,
//! restart} changed so they can animate, re-render, or re-key with no
//! guesswork.
//!
//! The core types are:
//!
//! - [`WindowedSource`]: the backing list plus the scheduler, the
//!   materialized window, a restart epoch for re-keying, and the settled
//!   position used for flicker-free active-slot queries.
//! - [`Update`]: the effects value returned by every mutating operation.
//! - [`NavGate`]: an optional pre-navigation gate that can veto a move
//!   before any state mutates.
//!
//! ## Minimal example
//!
//! ```rust
//! use ringline_window::{Changes, WindowOptions, WindowedSource};
//!
//! let mut source = WindowedSource::new(
//!     vec!["intro", "basics", "slots", "loops", "tails", "wrap"],
//!     WindowOptions::default(),
//! );
//! assert_eq!(source.window_items(), &["intro", "basics", "slots"]);
//!
//! // An adjacent step: animate the viewport to the new slot, then settle.
//! let update = source.next();
//! assert!(update.changes.contains(Changes::SLOT));
//! source.refresh();
//! assert!(source.is_active(update.slot));
//!
//! // A far jump: restart with a fresh epoch and a rebuilt window.
//! let update = source.jump_to(4);
//! assert!(update.changes.contains(Changes::RESTART));
//! assert_eq!(source.window_items(), &["loops", "tails", "wrap"]);
//! ```
//!
//! Navigation is single-threaded and synchronous; the only cooperative
//! suspension point is the [`NavGate`], which runs strictly before any
//! mutation. Hosts that animate transitions are expected to serialize their
//! navigation calls and invoke [`WindowedSource::refresh`] once a transition
//! finishes, particularly in loop mode where wrapped neighbors must be
//! refreshed after, not during, the visual move.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod source;

pub use ringline_scheduler::{Changes, WindowOptions, WindowScheduler};
pub use source::{NavGate, Update, WindowedSource};

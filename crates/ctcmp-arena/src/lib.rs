// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Page-anchored byte arenas for boundary tests.
//!
//! A [`PageArena`] is a plain heap allocation (no alignment stronger than the
//! allocator default) inside which an *anchor* index is computed so that the
//! anchor sits exactly `max_offset` bytes before a page boundary. Windows
//! starting at `anchor + offset` for `offset < max_offset` therefore sit right
//! next to, and for large enough sizes straddle, that boundary. All memory
//! touched is part of the allocation: this probes page locality, not access
//! violations.
//!
//! A [`GuardedWindow`] poisons the byte immediately before and immediately
//! after a window with sentinels and puts the original bytes back when it is
//! dropped, on every exit path.
//!
//! # Example
//!
//! ```rust
//! use ctcmp_arena::{ArenaError, GuardSentinels, PageArena};
//!
//! fn example() -> Result<(), ArenaError> {
//!     let mut arena = PageArena::new(4096, 32, 100)?;
//!     arena.fill_cyclic(132, b'A', 32)?;
//!
//!     assert_eq!(arena.boundary() - arena.anchor(), 32);
//!
//!     {
//!         let window = arena.guard(3, 5, GuardSentinels::default())?;
//!         assert_eq!(window.window(), b"DEFGH");
//!         assert_eq!(window.tail()[5], b'1');
//!     }
//!
//!     // Guards restored on drop.
//!     assert_eq!(arena.data()[8], b'I');
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod arena;
mod error;
mod guard;
mod page;

pub use arena::PageArena;
pub use error::ArenaError;
pub use guard::{GuardSentinels, GuardedWindow};
pub use page::{DEFAULT_PAGE_SIZE, page_size};

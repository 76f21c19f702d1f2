// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ctcmp-arena.
use thiserror::Error;

/// Errors that can occur when building or slicing a [`PageArena`](crate::PageArena).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArenaError {
    /// Page size is zero or not a power of two.
    #[error("invalid page size: {0}")]
    InvalidPageSize(usize),

    /// `max_offset` must be in `1..page_size`.
    #[error("max_offset {max_offset} must be in 1..{page_size}")]
    InvalidOffset {
        /// Requested maximum offset.
        max_offset: usize,
        /// Page granularity in use.
        page_size: usize,
    },

    /// `max_size` must be in `1..page_size`.
    #[error("max_size {max_size} must be in 1..{page_size}")]
    InvalidSize {
        /// Requested maximum window size.
        max_size: usize,
        /// Page granularity in use.
        page_size: usize,
    },

    /// Backing allocation size overflows `usize`.
    #[error("arena allocation size overflows")]
    AllocationOverflow,

    /// Window or its guard bytes fall outside the arena.
    #[error("window [{start}, {start}+{len}) and its guards exceed arena of {capacity} bytes")]
    WindowOutOfBounds {
        /// Absolute start index of the window.
        start: usize,
        /// Window length in bytes.
        len: usize,
        /// Total arena length.
        capacity: usize,
    },

    /// Fill pattern period of zero.
    #[error("fill pattern period must be non-zero")]
    InvalidPeriod,
}

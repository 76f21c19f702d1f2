// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PageArena - heap buffer with a page-boundary anchor.
//!
//! The anchor is derived from the allocation's address with integer
//! arithmetic only; no pointer is ever offset outside the buffer.

use alloc::boxed::Box;
use alloc::vec;

use crate::error::ArenaError;
use crate::guard::{GuardSentinels, GuardedWindow};

/// Pages allocated per arena. Two pages cover the window; the third absorbs
/// however far the allocator's base address sits from the next boundary.
const ARENA_PAGES: usize = 3;

/// A heap buffer with an anchor placed `max_offset` bytes before a page boundary.
pub struct PageArena {
    inner: Box<[u8]>,
    anchor: usize,
    page_size: usize,
    max_offset: usize,
    max_size: usize,
}

impl PageArena {
    /// Allocates an arena for windows of up to `max_size` bytes starting up
    /// to `max_offset` bytes after the anchor.
    ///
    /// Requires `page_size` to be a power of two and both `max_offset` and
    /// `max_size` to be in `1..page_size`.
    pub fn new(page_size: usize, max_offset: usize, max_size: usize) -> Result<Self, ArenaError> {
        if page_size == 0 || !page_size.is_power_of_two() {
            return Err(ArenaError::InvalidPageSize(page_size));
        }

        if max_offset == 0 || max_offset >= page_size {
            return Err(ArenaError::InvalidOffset {
                max_offset,
                page_size,
            });
        }

        if max_size == 0 || max_size >= page_size {
            return Err(ArenaError::InvalidSize {
                max_size,
                page_size,
            });
        }

        let capacity = page_size
            .checked_mul(ARENA_PAGES)
            .ok_or(ArenaError::AllocationOverflow)?;

        let inner = vec![0u8; capacity].into_boxed_slice();
        let boundary = Self::first_boundary(inner.as_ptr().addr(), page_size, max_offset + 1);
        let anchor = boundary - max_offset;

        // Last byte touched: the after-guard of the widest window at the farthest offset.
        if boundary + max_size > capacity {
            return Err(ArenaError::WindowOutOfBounds {
                start: anchor,
                len: max_offset + max_size,
                capacity,
            });
        }

        Ok(Self {
            inner,
            anchor,
            page_size,
            max_offset,
            max_size,
        })
    }

    /// Smallest index `i >= min_index` such that `base + i` is page aligned.
    pub(crate) fn first_boundary(base: usize, page_size: usize, min_index: usize) -> usize {
        let misalignment = base.wrapping_add(min_index) & (page_size - 1);
        let padding = (page_size - misalignment) & (page_size - 1);

        min_index + padding
    }

    /// Index of the anchor inside the arena.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Index of the page boundary the anchor is placed against.
    pub fn boundary(&self) -> usize {
        self.anchor + self.max_offset
    }

    /// Page granularity the anchor was computed for.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Exclusive upper bound on window offsets from the anchor.
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Exclusive upper bound on window sizes.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Total arena length in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the arena has zero length.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The whole backing buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// The whole backing buffer, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    /// The buffer from the anchor onwards.
    pub fn data(&self) -> &[u8] {
        &self.inner[self.anchor..]
    }

    /// The buffer from the anchor onwards, mutable.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner[self.anchor..]
    }

    /// Fills `len` bytes from the anchor with `base + (i % period)`.
    pub fn fill_cyclic(&mut self, len: usize, base: u8, period: u8) -> Result<(), ArenaError> {
        if period == 0 {
            return Err(ArenaError::InvalidPeriod);
        }

        let anchor = self.anchor;
        let capacity = self.inner.len();
        let data = self
            .inner
            .get_mut(anchor..anchor.saturating_add(len))
            .ok_or(ArenaError::WindowOutOfBounds {
                start: anchor,
                len,
                capacity,
            })?;

        for (i, byte) in data.iter_mut().enumerate() {
            *byte = base.wrapping_add((i % period as usize) as u8);
        }

        Ok(())
    }

    /// Poisons the bytes around the window `[anchor + offset, anchor + offset + len)`.
    ///
    /// The returned guard restores both bytes when dropped.
    pub fn guard(
        &mut self,
        offset: usize,
        len: usize,
        sentinels: GuardSentinels,
    ) -> Result<GuardedWindow<'_>, ArenaError> {
        let start = self
            .anchor
            .checked_add(offset)
            .ok_or(ArenaError::WindowOutOfBounds {
                start: self.anchor,
                len,
                capacity: self.inner.len(),
            })?;

        GuardedWindow::poison(&mut self.inner, start, len, sentinels)
    }
}

impl core::fmt::Debug for PageArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageArena")
            .field("len", &self.inner.len())
            .field("anchor", &self.anchor)
            .field("page_size", &self.page_size)
            .field("max_offset", &self.max_offset)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

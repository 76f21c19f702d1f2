// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GuardedWindow - scoped poisoning of the bytes around a window.

use crate::error::ArenaError;

/// Sentinel values written immediately before and after a window.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GuardSentinels {
    /// Written at `start - 1`.
    pub before: u8,
    /// Written at `start + len`.
    pub after: u8,
}

impl Default for GuardSentinels {
    fn default() -> Self {
        Self {
            before: b'0',
            after: b'1',
        }
    }
}

/// A window `[start, start + len)` whose neighbouring bytes hold sentinels.
///
/// The original neighbours are saved on creation and written back on drop.
#[derive(Debug)]
pub struct GuardedWindow<'a> {
    buf: &'a mut [u8],
    start: usize,
    len: usize,
    saved_before: u8,
    saved_after: u8,
}

impl<'a> GuardedWindow<'a> {
    /// Saves `buf[start - 1]` and `buf[start + len]`, then overwrites them with `sentinels`.
    pub fn poison(
        buf: &'a mut [u8],
        start: usize,
        len: usize,
        sentinels: GuardSentinels,
    ) -> Result<Self, ArenaError> {
        let capacity = buf.len();
        let out_of_bounds = ArenaError::WindowOutOfBounds {
            start,
            len,
            capacity,
        };

        let before = start.checked_sub(1).ok_or(out_of_bounds)?;
        let after = start.checked_add(len).ok_or(out_of_bounds)?;

        if after >= capacity {
            return Err(out_of_bounds);
        }

        let saved_before = core::mem::replace(&mut buf[before], sentinels.before);
        let saved_after = core::mem::replace(&mut buf[after], sentinels.after);

        Ok(Self {
            buf,
            start,
            len,
            saved_before,
            saved_after,
        })
    }

    /// The guarded window.
    pub fn window(&self) -> &[u8] {
        &self.buf[self.start..self.start + self.len]
    }

    /// The guarded window, mutable. Guard bytes are not reachable through it.
    pub fn window_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.start..self.start + self.len]
    }

    /// Everything from the window start to the end of the buffer, after-guard included.
    pub fn tail(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// Current value of the byte before the window.
    pub fn before(&self) -> u8 {
        self.buf[self.start - 1]
    }

    /// Current value of the byte after the window.
    pub fn after(&self) -> u8 {
        self.buf[self.start + self.len]
    }

    /// Values the guard bytes held before poisoning, as `(before, after)`.
    pub fn saved(&self) -> (u8, u8) {
        (self.saved_before, self.saved_after)
    }

    /// Window length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the window has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for GuardedWindow<'_> {
    fn drop(&mut self) {
        self.buf[self.start - 1] = self.saved_before;
        self.buf[self.start + self.len] = self.saved_after;
    }
}

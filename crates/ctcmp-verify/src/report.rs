// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Counters of a successful verification run.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct VerifyReport {
    /// `(size, offset)` cells checked.
    pub cells: usize,
    /// Single-byte mutations checked across all cells.
    pub mismatch_probes: usize,
    /// Total comparator invocations, the zero-length check included.
    pub comparisons: usize,
}

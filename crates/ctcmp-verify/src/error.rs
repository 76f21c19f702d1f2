// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ctcmp-verify.
use ctcmp_arena::ArenaError;
use thiserror::Error;

use crate::config::ConfigError;

/// Reasons a verification run stops.
///
/// Every comparator failure is fatal: the run aborts at the first failing
/// cell and the variant carries the exact coordinates to reproduce it.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VerifyError {
    /// The configuration was rejected before anything was allocated.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Arena allocation or window placement failed.
    #[error("arena error: {0}")]
    Arena(#[from] ArenaError),

    /// A zero-length comparison reported a difference.
    #[error("comparison failed for 0 length case")]
    ZeroLength,

    /// Identical windows were reported as different.
    ///
    /// Either the result depends on bytes outside the window (the guards
    /// differ between the two buffers) or on the window's alignment.
    #[error("false negative. size={size}, offset={offset}")]
    FalseNegative {
        /// Window length.
        size: usize,
        /// Window start relative to the anchor.
        offset: usize,
    },

    /// Windows differing in exactly one byte were reported as equal.
    #[error("false positive. size={size}, offset={offset}, index={byte_index}")]
    FalsePositive {
        /// Window length.
        size: usize,
        /// Window start relative to the anchor.
        offset: usize,
        /// Index of the mutated byte inside the window.
        byte_index: usize,
    },
}

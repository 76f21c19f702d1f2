// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verifier configuration.

use ctcmp_arena::{GuardSentinels, page_size};
use thiserror::Error;

/// First byte of the cyclic payload pattern.
pub const PATTERN_BASE: u8 = b'A';

/// Period of the cyclic payload pattern: bytes run `'A'..='`'`.
pub const PATTERN_PERIOD: u8 = 32;

/// Default exclusive upper bound on window sizes.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Default exclusive upper bound on window offsets from the anchor.
pub const DEFAULT_MAX_OFFSET: usize = 32;

/// Rejected [`VerifierConfig`] values.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    /// `max_size` must be at least 1.
    #[error("max_size must be at least 1")]
    ZeroMaxSize,

    /// `max_offset` must be at least 1 so the leading guard stays inside the arena.
    #[error("max_offset must be at least 1")]
    ZeroMaxOffset,

    /// Page size is zero or not a power of two.
    #[error("page_size {0} is not a power of two")]
    InvalidPageSize(usize),

    /// `max_offset` must be smaller than a page.
    #[error("max_offset {max_offset} must be smaller than page_size {page_size}")]
    OffsetNotBelowPage {
        /// Requested maximum offset.
        max_offset: usize,
        /// Page granularity in use.
        page_size: usize,
    },

    /// `max_size` must be smaller than a page.
    #[error("max_size {max_size} must be smaller than page_size {page_size}")]
    SizeNotBelowPage {
        /// Requested maximum window size.
        max_size: usize,
        /// Page granularity in use.
        page_size: usize,
    },

    /// A sentinel collides with the payload alphabet and could not reveal leakage.
    #[error("sentinel {0:#04x} is part of the payload pattern")]
    SentinelInPattern(u8),
}

/// Parameters of one verification run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct VerifierConfig {
    /// Exclusive upper bound on tested window sizes.
    pub max_size: usize,
    /// Exclusive upper bound on window start offsets from the anchor.
    pub max_offset: usize,
    /// Page granularity the anchor is placed against.
    pub page_size: usize,
    /// Guard values around windows in the first buffer.
    pub sentinels_a: GuardSentinels,
    /// Guard values around windows in the second buffer.
    pub sentinels_b: GuardSentinels,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            max_offset: DEFAULT_MAX_OFFSET,
            page_size: page_size(),
            sentinels_a: GuardSentinels::default(),
            sentinels_b: GuardSentinels {
                before: b'2',
                after: b'3',
            },
        }
    }
}

impl VerifierConfig {
    /// Sets the exclusive upper bound on window sizes.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the exclusive upper bound on window offsets.
    pub fn with_max_offset(mut self, max_offset: usize) -> Self {
        self.max_offset = max_offset;
        self
    }

    /// Sets the page granularity.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the guard values for both buffers.
    pub fn with_sentinels(mut self, a: GuardSentinels, b: GuardSentinels) -> Self {
        self.sentinels_a = a;
        self.sentinels_b = b;
        self
    }

    /// Bytes filled with the payload pattern from each anchor.
    pub fn fill_len(&self) -> usize {
        self.max_size + self.max_offset
    }

    /// Checks every constraint a run relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }

        if self.max_offset == 0 {
            return Err(ConfigError::ZeroMaxOffset);
        }

        if !self.page_size.is_power_of_two() {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }

        if self.max_offset >= self.page_size {
            return Err(ConfigError::OffsetNotBelowPage {
                max_offset: self.max_offset,
                page_size: self.page_size,
            });
        }

        if self.max_size >= self.page_size {
            return Err(ConfigError::SizeNotBelowPage {
                max_size: self.max_size,
                page_size: self.page_size,
            });
        }

        let sentinels = [
            self.sentinels_a.before,
            self.sentinels_a.after,
            self.sentinels_b.before,
            self.sentinels_b.after,
        ];

        for sentinel in sentinels {
            if is_pattern_byte(sentinel) {
                return Err(ConfigError::SentinelInPattern(sentinel));
            }
        }

        Ok(())
    }
}

/// Whether `byte` can appear in the payload pattern.
pub(crate) fn is_pattern_byte(byte: u8) -> bool {
    (PATTERN_BASE..PATTERN_BASE + PATTERN_PERIOD).contains(&byte)
}

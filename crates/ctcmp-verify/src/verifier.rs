// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verifier - drives a comparator through the boundary matrix.

use ctcmp_arena::PageArena;
use log::{debug, error, trace};

use crate::config::{PATTERN_BASE, PATTERN_PERIOD, VerifierConfig};
use crate::error::VerifyError;
use crate::report::VerifyReport;

/// Runs the `(size, offset, byte_index)` matrix against a comparator.
#[derive(Debug, Clone)]
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    /// Validates `config` and builds a verifier for it.
    pub fn new(config: VerifierConfig) -> Result<Self, VerifyError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verifies `compare` over the whole matrix.
    ///
    /// `compare(a, b, len)` must return `true` iff the first `len` bytes of
    /// `a` and `b` are identical. Both arenas are released on every return
    /// path, and guard bytes are restored after each cell whether it passed
    /// or not.
    pub fn run<F>(&self, compare: F) -> Result<VerifyReport, VerifyError>
    where
        F: Fn(&[u8], &[u8], usize) -> bool,
    {
        let config = &self.config;

        debug!(
            "verifying comparator: max_size={}, max_offset={}, page_size={}",
            config.max_size, config.max_offset, config.page_size
        );

        let mut arena_a = PageArena::new(config.page_size, config.max_offset, config.max_size)?;
        let mut arena_b = PageArena::new(config.page_size, config.max_offset, config.max_size)?;

        arena_a.fill_cyclic(config.fill_len(), PATTERN_BASE, PATTERN_PERIOD)?;
        arena_b.fill_cyclic(config.fill_len(), PATTERN_BASE, PATTERN_PERIOD)?;

        let mut report = VerifyReport::default();

        report.comparisons += 1;
        if !compare(arena_a.data(), arena_b.data(), 0) {
            error!("comparison failed for 0 length case");
            return Err(VerifyError::ZeroLength);
        }

        for size in 1..config.max_size {
            trace!("size={size}");

            for offset in 0..config.max_offset {
                self.check_cell(&compare, &mut arena_a, &mut arena_b, size, offset, &mut report)?;
            }
        }

        debug!(
            "comparator verified: cells={}, mismatch_probes={}, comparisons={}",
            report.cells, report.mismatch_probes, report.comparisons
        );

        Ok(report)
    }

    fn check_cell<F>(
        &self,
        compare: &F,
        arena_a: &mut PageArena,
        arena_b: &mut PageArena,
        size: usize,
        offset: usize,
        report: &mut VerifyReport,
    ) -> Result<(), VerifyError>
    where
        F: Fn(&[u8], &[u8], usize) -> bool,
    {
        // Guards come back when `a` and `b` drop, on success and on error.
        let mut a = arena_a.guard(offset, size, self.config.sentinels_a)?;
        let b = arena_b.guard(offset, size, self.config.sentinels_b)?;

        report.cells += 1;
        report.comparisons += 1;

        if !compare(a.tail(), b.tail(), size) {
            error!("false negative. size={size}, offset={offset}");
            return Err(VerifyError::FalseNegative { size, offset });
        }

        for byte_index in 0..size {
            let prev = a.window()[byte_index];
            a.window_mut()[byte_index] = prev.wrapping_add(1);

            let equal = compare(a.tail(), b.tail(), size);

            a.window_mut()[byte_index] = prev;
            report.mismatch_probes += 1;
            report.comparisons += 1;

            if equal {
                error!("false positive. size={size}, offset={offset}, index={byte_index}");
                return Err(VerifyError::FalsePositive {
                    size,
                    offset,
                    byte_index,
                });
            }
        }

        Ok(())
    }
}

/// Verifies [`ctcmp::ct_memeq`] with `config`.
pub fn verify_ct_memeq(config: VerifierConfig) -> Result<VerifyReport, VerifyError> {
    Verifier::new(config)?.run(ctcmp::ct_memeq)
}

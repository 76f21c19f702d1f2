// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Boundary-safety verifier for constant-time comparators.
//!
//! The verifier builds two page-anchored arenas filled with the same cyclic
//! pattern and drives a comparator through every `(size, offset)` cell of
//! the matrix `[1, max_size) x [0, max_offset)`:
//!
//! 1. the bytes just before and just after the window are poisoned with
//!    sentinels in both arenas,
//! 2. the comparator must report the windows equal,
//! 3. each byte of the window in turn is incremented and the comparator must
//!    report them different, then the byte is restored,
//! 4. the sentinels are removed and the original neighbours written back.
//!
//! A zero-length comparison is checked once up front. The run stops at the
//! first failing cell and reports its exact coordinates.
//!
//! The comparator receives each arena from the window start to its end, so an
//! implementation that reads past `len` sees the after-guard sentinel.
//!
//! # Example
//!
//! ```rust
//! use ctcmp_verify::{VerifierConfig, VerifyError, verify_ct_memeq};
//!
//! fn example() -> Result<(), VerifyError> {
//!     let report = verify_ct_memeq(VerifierConfig::default().with_max_size(16))?;
//!
//!     assert_eq!(report.cells, 15 * 32);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod report;
mod verifier;

pub use config::{
    ConfigError, DEFAULT_MAX_OFFSET, DEFAULT_MAX_SIZE, PATTERN_BASE, PATTERN_PERIOD, VerifierConfig,
};
pub use ctcmp_arena::GuardSentinels;
pub use error::VerifyError;
pub use report::VerifyReport;
pub use verifier::{Verifier, verify_ct_memeq};

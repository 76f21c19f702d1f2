// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time byte comparison.
//!
//! Every function in this crate answers a single question, "are these bytes
//! identical?", and answers it in time that depends only on the number of
//! bytes examined. There is no early exit on the first difference and no
//! branch on byte values inside the loop, so neither timing nor the memory
//! access pattern reveal where (or whether) the inputs differ.
//!
//! Only equality is reported. Nothing here produces an ordering.
//!
//! # Example
//!
//! ```
//! use ctcmp::{constant_time_eq, ct_memeq};
//!
//! let tag = [0xde, 0xad, 0xbe, 0xef];
//! let received = [0xde, 0xad, 0xbe, 0xee];
//!
//! assert!(!constant_time_eq(&tag, &received));
//!
//! // Only the first three bytes are examined.
//! assert!(ct_memeq(&tag, &received, 3));
//!
//! // Zero bytes examined: always equal.
//! assert!(ct_memeq(&tag, &received, 0));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use subtle::Choice;

/// XOR/OR accumulation over exactly `len` byte pairs.
///
/// Returns `0` iff the first `len` bytes of `a` and `b` are identical.
/// Both slices are cut to `len` up front, so a short input panics before
/// any byte is combined and nothing past `len` is ever read.
#[inline(always)]
fn accumulate(a: &[u8], b: &[u8], len: usize) -> u8 {
    let a = &a[..len];
    let b = &b[..len];

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }

    // Keep the optimizer from turning the fold into an early-exit compare.
    core::hint::black_box(acc)
}

/// Maps `0 -> 0` and any non-zero byte to `1` without a comparison.
#[inline(always)]
fn reduce(acc: u8) -> u8 {
    (acc | acc.wrapping_neg()) >> 7
}

/// Compares the first `len` bytes of `a` and `b` in constant time.
///
/// Returns `true` if they are identical. `len == 0` is always equal.
///
/// The amount of work performed is a function of `len` only: every index
/// in `[0, len)` is visited regardless of intermediate results.
///
/// # Panics
///
/// Panics if either slice is shorter than `len`. The check happens before
/// the comparison loop, so it does not affect timing of the in-bounds path.
///
/// # Example
///
/// ```
/// use ctcmp::ct_memeq;
///
/// let a = b"ABCDE";
/// let mut b = *a;
///
/// assert!(ct_memeq(a, &b, 5));
///
/// b[2] += 1;
/// assert!(!ct_memeq(a, &b, 5));
/// assert!(ct_memeq(a, &b, 2));
/// ```
#[inline(never)]
pub fn ct_memeq(a: &[u8], b: &[u8], len: usize) -> bool {
    reduce(accumulate(a, b, len)) == 0
}

/// Compares the first `len` bytes of `a` and `b`, `CRYPTO_memcmp` style.
///
/// Returns `0` if they are identical and `1` otherwise. The value is never
/// an ordering: `1` only means "different".
///
/// # Panics
///
/// Panics if either slice is shorter than `len`.
///
/// # Example
///
/// ```
/// use ctcmp::ct_memcmp;
///
/// assert_eq!(ct_memcmp(&[1, 2, 3], &[1, 2, 3], 3), 0);
/// assert_eq!(ct_memcmp(&[1, 2, 3], &[1, 2, 4], 3), 1);
/// assert_eq!(ct_memcmp(&[9, 9, 9], &[1, 2, 4], 0), 0);
/// ```
#[inline(never)]
pub fn ct_memcmp(a: &[u8], b: &[u8], len: usize) -> u8 {
    reduce(accumulate(a, b, len))
}

/// Compares the first `len` bytes of `a` and `b`, returning a [`Choice`].
///
/// `Choice(1)` means equal. Useful when the result feeds further
/// constant-time selection and should not be turned into a `bool` yet.
///
/// # Panics
///
/// Panics if either slice is shorter than `len`.
///
/// # Example
///
/// ```
/// use ctcmp::ct_memeq_choice;
///
/// let expected = [7u8; 16];
/// let received = [7u8; 16];
///
/// let ok = ct_memeq_choice(&expected, &received, 16);
/// assert!(bool::from(ok));
/// ```
#[inline(never)]
pub fn ct_memeq_choice(a: &[u8], b: &[u8], len: usize) -> Choice {
    Choice::from(reduce(accumulate(a, b, len)) ^ 1)
}

/// Constant-time equality for whole slices.
///
/// Slice lengths are treated as public: if they differ the function returns
/// `false` without looking at the contents. Equal-length slices are compared
/// with [`ct_memeq`].
///
/// # Example
///
/// ```
/// use ctcmp::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    ct_memeq(a, b, a.len())
}

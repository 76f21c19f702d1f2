// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Page granularity lookup.

/// Page size assumed where the platform cannot be queried.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// Returns the system page size.
///
/// Uses `sysconf(_SC_PAGESIZE)` on unix and falls back to
/// [`DEFAULT_PAGE_SIZE`] elsewhere or when the query fails.
#[cfg(unix)]
pub fn page_size() -> usize {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

    if size <= 0 {
        return DEFAULT_PAGE_SIZE;
    }

    size as usize
}

/// Returns the system page size.
///
/// Non-unix targets always report [`DEFAULT_PAGE_SIZE`].
#[cfg(not(unix))]
pub fn page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ctcmp_arena::GuardSentinels;

use crate::config::{ConfigError, VerifierConfig, is_pattern_byte};

// =============================================================================
// default()
// =============================================================================

#[test]
fn test_default_matrix_dimensions() {
    let config = VerifierConfig::default();

    assert_eq!(config.max_size, 100);
    assert_eq!(config.max_offset, 32);
    assert_eq!(config.fill_len(), 132);
}

#[test]
fn test_default_is_valid() {
    assert_eq!(VerifierConfig::default().validate(), Ok(()));
}

#[test]
fn test_default_sentinels_differ_between_buffers() {
    let config = VerifierConfig::default();

    assert_eq!(
        config.sentinels_a,
        GuardSentinels {
            before: b'0',
            after: b'1'
        }
    );
    assert_eq!(
        config.sentinels_b,
        GuardSentinels {
            before: b'2',
            after: b'3'
        }
    );
}

#[test]
fn test_with_sentinels_sets_both_buffers() {
    let a = GuardSentinels {
        before: 0xF0,
        after: 0xF1,
    };
    let b = GuardSentinels {
        before: 0xE0,
        after: 0xE1,
    };
    let config = VerifierConfig::default().with_sentinels(a, b);

    assert_eq!(config.sentinels_a, a);
    assert_eq!(config.sentinels_b, b);
    assert_eq!(config.validate(), Ok(()));
}

// =============================================================================
// validate()
// =============================================================================

#[test]
fn test_validate_rejects_zero_max_size() {
    let config = VerifierConfig::default().with_max_size(0);

    assert_eq!(config.validate(), Err(ConfigError::ZeroMaxSize));
}

#[test]
fn test_validate_rejects_zero_max_offset() {
    let config = VerifierConfig::default().with_max_offset(0);

    assert_eq!(config.validate(), Err(ConfigError::ZeroMaxOffset));
}

#[test]
fn test_validate_rejects_non_power_of_two_page() {
    let config = VerifierConfig::default().with_page_size(3000);

    assert_eq!(config.validate(), Err(ConfigError::InvalidPageSize(3000)));
}

#[test]
fn test_validate_rejects_zero_page() {
    let config = VerifierConfig::default().with_page_size(0);

    assert_eq!(config.validate(), Err(ConfigError::InvalidPageSize(0)));
}

#[test]
fn test_validate_rejects_offset_of_a_full_page() {
    let config = VerifierConfig::default()
        .with_page_size(64)
        .with_max_size(16)
        .with_max_offset(64);

    assert_eq!(
        config.validate(),
        Err(ConfigError::OffsetNotBelowPage {
            max_offset: 64,
            page_size: 64
        })
    );
}

#[test]
fn test_validate_rejects_size_of_a_full_page() {
    let config = VerifierConfig::default()
        .with_page_size(64)
        .with_max_size(64)
        .with_max_offset(8);

    assert_eq!(
        config.validate(),
        Err(ConfigError::SizeNotBelowPage {
            max_size: 64,
            page_size: 64
        })
    );
}

#[test]
fn test_validate_rejects_sentinel_from_pattern() {
    let config = VerifierConfig::default().with_sentinels(
        GuardSentinels {
            before: b'0',
            after: b'A',
        },
        GuardSentinels::default(),
    );

    assert_eq!(config.validate(), Err(ConfigError::SentinelInPattern(b'A')));
}

#[test]
fn test_validate_accepts_identical_sentinels() {
    let config =
        VerifierConfig::default().with_sentinels(GuardSentinels::default(), GuardSentinels::default());

    assert_eq!(config.validate(), Ok(()));
}

// =============================================================================
// is_pattern_byte()
// =============================================================================

#[test]
fn test_pattern_alphabet_bounds() {
    assert!(!is_pattern_byte(b'@'));
    assert!(is_pattern_byte(b'A'));
    assert!(is_pattern_byte(b'`'));
    assert!(!is_pattern_byte(b'a'));
}

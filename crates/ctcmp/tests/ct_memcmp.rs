// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod ct_memcmp_tests {
    use ctcmp::{ct_memcmp, ct_memeq_choice};
    use subtle::ConditionallySelectable;

    #[test]
    fn test_equal_is_zero() {
        assert_eq!(ct_memcmp(b"secret", b"secret", 6), 0);
    }

    #[test]
    fn test_different_is_one_not_an_ordering() {
        // "a" < "b" and "b" > "a" both report the same value.
        assert_eq!(ct_memcmp(b"a", b"b", 1), 1);
        assert_eq!(ct_memcmp(b"b", b"a", 1), 1);
    }

    #[test]
    fn test_every_byte_value_difference_is_one() {
        for delta in 1..=u8::MAX {
            assert_eq!(ct_memcmp(&[0], &[delta], 1), 1, "delta={delta}");
        }
    }

    #[test]
    fn test_choice_drives_conditional_select() {
        let equal = ct_memeq_choice(b"tag", b"tag", 3);
        let different = ct_memeq_choice(b"tag", b"tab", 3);

        assert_eq!(u8::conditional_select(&0xAA, &0x55, equal), 0x55);
        assert_eq!(u8::conditional_select(&0xAA, &0x55, different), 0xAA);
    }

    #[test]
    fn test_choice_composes() {
        let first = ct_memeq_choice(b"abc", b"abc", 3);
        let second = ct_memeq_choice(b"xyz", b"xyq", 3);

        assert!(!bool::from(first & second));
        assert!(bool::from(first | second));
    }
}

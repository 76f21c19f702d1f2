// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{constant_time_eq, ct_memcmp, ct_memeq, ct_memeq_choice};

proptest! {
    #[test]
    fn zero_length_is_always_equal(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assert!(ct_memeq(&a, &b, 0));
        prop_assert_eq!(ct_memcmp(&a, &b, 0), 0);
        prop_assert!(bool::from(ct_memeq_choice(&a, &b, 0)));
    }

    #[test]
    fn identical_inputs_are_equal(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let copy = data.clone();

        prop_assert!(ct_memeq(&data, &copy, data.len()));
        prop_assert!(constant_time_eq(&data, &copy));
    }

    #[test]
    fn single_byte_difference_is_detected(
        data in proptest::collection::vec(any::<u8>(), 1..256),
        index in any::<proptest::sample::Index>(),
        delta in 1..=u8::MAX,
    ) {
        let mut other = data.clone();
        let i = index.index(data.len());
        other[i] = other[i].wrapping_add(delta);

        prop_assert!(!ct_memeq(&data, &other, data.len()));
        prop_assert_eq!(ct_memcmp(&data, &other, data.len()), 1);
        prop_assert!(!bool::from(ct_memeq_choice(&data, &other, data.len())));

        // Restoring the byte restores equality.
        other[i] = data[i];
        prop_assert!(ct_memeq(&data, &other, data.len()));
    }

    #[test]
    fn agrees_with_slice_eq(
        a in proptest::collection::vec(0u8..4, 0..32),
        b in proptest::collection::vec(0u8..4, 0..32),
    ) {
        let len = a.len().min(b.len());

        prop_assert_eq!(ct_memeq(&a, &b, len), a[..len] == b[..len]);
        prop_assert_eq!(constant_time_eq(&a, &b), a == b);
    }

    #[test]
    fn repeated_calls_are_idempotent(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let len = a.len().min(b.len());
        let first = ct_memeq(&a, &b, len);

        for _ in 0..4 {
            prop_assert_eq!(ct_memeq(&a, &b, len), first);
        }
    }
}

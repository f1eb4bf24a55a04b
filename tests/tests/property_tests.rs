//! Property-based tests

use kemcheck::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn filter_family_keeps_matching_names_in_order(
        names in prop::collection::vec("[A-Za-z0-9-]{0,12}", 0..16),
        family in "[A-Za-z]{0,4}",
    ) {
        let filtered = filter_family(&names, &family);

        prop_assert!(filtered.iter().all(|name| name.contains(&family)));
        prop_assert_eq!(
            filtered.len(),
            names.iter().filter(|name| name.contains(&family)).count()
        );

        // Order is preserved: filtered is a subsequence of names
        let mut rest = names.iter();
        for name in &filtered {
            prop_assert!(rest.any(|candidate| candidate == name));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn seeded_ml_kem_roundtrips_agree(seed in any::<u64>(), level in 0usize..3) {
        let name = ["ML-KEM-512", "ML-KEM-768", "ML-KEM-1024"][level];
        let provider = SystemProvider::seeded(seed);

        let report = roundtrip_with(&provider, name).unwrap();
        let params = KemParams::by_name(name).unwrap();
        prop_assert_eq!(report.public_key_len, params.public_key_size);
        prop_assert_eq!(report.ciphertext_len, params.ciphertext_size);
    }
}

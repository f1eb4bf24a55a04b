//! Integration tests for mechanism enumeration

use kemcheck::prelude::*;

#[test]
fn test_kyber_family_is_enabled() {
    let names = list_enabled_kem_mechanisms().unwrap();
    let kyber = filter_family(&names, "Kyber");

    assert!(kyber.contains(&"Kyber512".to_string()));
    assert!(kyber.iter().all(|name| name.contains("Kyber")));
}

#[test]
fn test_every_filtered_name_opens() {
    let names = list_enabled_kem_names().unwrap();

    for family in ["Kyber", "ML-KEM"] {
        for name in filter_family(&names, family) {
            let ctx = open_kem_context(&name).unwrap();
            assert_eq!(ctx.mechanism(), name);
            assert_eq!(ctx.params().family, family);
            ctx.close();
        }
    }
}

#[test]
fn test_enumerator_matches_provider() {
    let provider = SystemProvider::new();
    assert_eq!(
        kemcheck::harness::list_enabled_kem_names_with(&provider).unwrap(),
        provider.enabled_mechanisms().unwrap()
    );
}

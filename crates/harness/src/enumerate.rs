//! Mechanism enumeration

use kemcheck_api::{KemProvider, Result};
use kemcheck_kem::SystemProvider;
use tracing::debug;

/// Names of the mechanisms enabled in this build, in provider order
pub fn list_enabled_kem_names() -> Result<Vec<String>> {
    list_enabled_kem_names_with(&SystemProvider::new())
}

/// Names of the mechanisms `provider` reports as enabled
pub fn list_enabled_kem_names_with<P: KemProvider + ?Sized>(provider: &P) -> Result<Vec<String>> {
    let names = provider.enabled_mechanisms()?;
    debug!(count = names.len(), "enumerated enabled KEM mechanisms");
    Ok(names)
}

/// Keep the names containing `family`, preserving order
pub fn filter_family(names: &[String], family: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.contains(family))
        .cloned()
        .collect()
}

//! Account identity registry
//!
//! Raw addresses contain characters that are not legal DOT identifiers, so
//! account nodes are named by a dense integer id assigned on first sight.

use std::collections::HashMap;

/// Bijective address/id mapping scoped to one graph build
///
/// Ids start at 1 and grow densely; an address keeps its id for the lifetime
/// of the registry.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    ids: HashMap<String, usize>,
    addresses: Vec<String>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `address`, allocating the next id on first sight
    pub fn register(&mut self, address: &str) -> usize {
        if let Some(&id) = self.ids.get(address) {
            return id;
        }
        self.addresses.push(address.to_string());
        let id = self.addresses.len();
        self.ids.insert(address.to_string(), id);
        id
    }

    /// Id previously assigned to `address`, if any
    pub fn id_of(&self, address: &str) -> Option<usize> {
        self.ids.get(address).copied()
    }

    /// Address owning `id`, if assigned
    pub fn address_of(&self, id: usize) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|index| self.addresses.get(index))
            .map(String::as_str)
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_from_one() {
        let mut registry = AccountRegistry::new();
        assert_eq!(registry.register("0xA"), 1);
        assert_eq!(registry.register("0xB"), 2);
        assert_eq!(registry.register("0xC"), 3);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = AccountRegistry::new();
        let first = registry.register("0xA");
        registry.register("0xB");
        let again = registry.register("0xA");
        assert_eq!(first, again);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_round_trip() {
        let mut registry = AccountRegistry::new();
        let id = registry.register("0xA");
        assert_eq!(registry.id_of("0xA"), Some(id));
        assert_eq!(registry.address_of(id), Some("0xA"));
    }

    #[test]
    fn test_unknown_lookups() {
        let registry = AccountRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.id_of("0xA"), None);
        assert_eq!(registry.address_of(0), None);
        assert_eq!(registry.address_of(1), None);
    }
}

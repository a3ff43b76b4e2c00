use crate::{ids::UnitName, log, log::Topic, utils::hash};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

///
/// LoadedUnit
///
/// A registered unit: final bytes plus the identity they were defined
/// under. Handles are shared as `Arc<LoadedUnit>`; the bytes never change
/// after registration.
///

#[derive(Debug)]
pub struct LoadedUnit {
    name: UnitName,
    bytes: Vec<u8>,
}

impl LoadedUnit {
    pub(crate) const fn new(name: UnitName, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    #[must_use]
    pub const fn name(&self) -> &UnitName {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// SHA-256 fingerprint of the registered bytes.
    #[must_use]
    pub fn unit_hash(&self) -> Vec<u8> {
        hash::unit_hash(&self.bytes)
    }

    /// Hex rendering of [`unit_hash`](Self::unit_hash).
    #[must_use]
    pub fn unit_hash_hex(&self) -> String {
        hash::unit_hash_hex(&self.bytes)
    }
}

///
/// UnitRegistry
///
/// The runtime's shared identity → unit map. An identity is defined at most
/// once for the lifetime of the registry: `define` on an existing identity
/// returns the already-registered handle and discards the new bytes, so a
/// lost registration race is benign. Nothing is ever removed.
///

#[derive(Debug, Default)]
pub struct UnitRegistry {
    units: RwLock<HashMap<UnitName, Arc<LoadedUnit>>>,
}

impl UnitRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &UnitName) -> Option<Arc<LoadedUnit>> {
        self.units
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Register `bytes` under `name`, or return the existing handle if the
    /// identity is already defined.
    #[allow(clippy::cast_precision_loss)]
    pub fn define(&self, name: UnitName, bytes: Vec<u8>) -> Arc<LoadedUnit> {
        let mut units = self.units.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = units.get(&name) {
            return existing.clone();
        }

        let unit = Arc::new(LoadedUnit::new(name.clone(), bytes));
        units.insert(name.clone(), unit.clone());

        log!(
            Topic::Registry,
            Info,
            "📦 registry.define: {name} ({:.2} KB)",
            unit.len() as f64 / 1000.0,
        );

        unit
    }

    #[must_use]
    pub fn contains(&self, name: &UnitName) -> bool {
        self.units
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// TESTS
///

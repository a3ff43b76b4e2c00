use crate::{
    ids::UnitName,
    log,
    log::Topic,
    resolver::{Resolver, ResolverError},
};
use std::collections::HashMap;

///
/// EmbeddedResolver
///
/// In-memory unit source for embedders and tests: identities mapped to
/// container bytes imported up front, typically at startup. Fully built
/// before it is shared; resolution never blocks.
///

#[derive(Debug, Default)]
pub struct EmbeddedResolver {
    units: HashMap<UnitName, Vec<u8>>,
}

impl EmbeddedResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a static slice of (name, unit bytes).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_static(units: &[(&str, &[u8])]) -> Self {
        let mut resolver = Self::new();
        for (name, bytes) in units {
            log!(
                Topic::Resolver,
                Info,
                "📄 resolver.import: {name} ({:.2} KB)",
                bytes.len() as f64 / 1000.0,
            );
            resolver.insert(UnitName::new(*name), bytes.to_vec());
        }
        resolver
    }

    pub fn insert(&mut self, name: UnitName, bytes: Vec<u8>) {
        self.units.insert(name, bytes);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Resolver for EmbeddedResolver {
    fn resolve(&self, name: &UnitName) -> Result<Vec<u8>, ResolverError> {
        self.units
            .get(name)
            .cloned()
            .ok_or_else(|| ResolverError::NotFound(name.clone()))
    }
}

///
/// TESTS
///

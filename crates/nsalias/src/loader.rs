use crate::{
    Error, NamespaceMapping, SymbolRewriter, ThisError,
    config::schema::ConfigModel,
    ids::UnitName,
    log,
    log::Topic,
    registry::{LoadedUnit, UnitRegistry},
    resolver::{DirResolver, Resolver, ResolverError},
};
use nsalias_container::ContainerError;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

///
/// LoaderError
///
/// Fatal per-request failures, each carrying the originally requested
/// identity (and the computed target identity where one exists) so a
/// failure deep in the fetch/rewrite pipeline stays attributable.
///

#[derive(Debug, ThisError)]
pub enum LoaderError {
    #[error("requested unit name is empty")]
    EmptyName,

    #[error("unit '{requested}' (target '{target}') could not be fetched: {source}")]
    FetchFailed {
        requested: UnitName,
        target: UnitName,
        source: ResolverError,
    },

    #[error("unit '{requested}' (target '{target}') is not a valid unit container: {source}")]
    Malformed {
        requested: UnitName,
        target: UnitName,
        source: ContainerError,
    },

    #[error("unit '{requested}' not found: {source}")]
    NotFound {
        requested: UnitName,
        source: ResolverError,
    },
}

impl From<LoaderError> for Error {
    fn from(err: LoaderError) -> Self {
        match &err {
            LoaderError::EmptyName => Self::invalid(err.to_string()),
            LoaderError::FetchFailed { .. } => Self::fetch(err.to_string()),
            LoaderError::Malformed { .. } => Self::parse(err.to_string()),
            LoaderError::NotFound { .. } => Self::not_found(err.to_string()),
        }
    }
}

///
/// AliasingLoader
///
/// Loads units by dotted name. Requests inside the source namespace are
/// redirected: the target-namespace bytes are fetched, every internal
/// source-namespace reference is rewritten, and the result is registered
/// under the **target** identity. Everything else is delegated to the
/// parent resolver untouched.
///
/// Requests for the same identity serialize on an in-progress marker, so
/// fetch + rewrite + register runs at most once per identity and every
/// caller observes the single registered handle.
///

pub struct AliasingLoader {
    mapping: NamespaceMapping,
    resolver: Arc<dyn Resolver>,
    parent: Arc<dyn Resolver>,
    registry: Arc<UnitRegistry>,
    in_flight: Mutex<HashMap<UnitName, Arc<Mutex<()>>>>,
}

impl AliasingLoader {
    /// Loader whose parent is the same resolver used for target fetches,
    /// the usual single-search-path setup.
    #[must_use]
    pub fn new(
        mapping: NamespaceMapping,
        resolver: Arc<dyn Resolver>,
        registry: Arc<UnitRegistry>,
    ) -> Self {
        let parent = resolver.clone();
        Self::with_parent(mapping, resolver, parent, registry)
    }

    /// Loader with an explicit delegation parent for out-of-scope requests.
    #[must_use]
    pub fn with_parent(
        mapping: NamespaceMapping,
        resolver: Arc<dyn Resolver>,
        parent: Arc<dyn Resolver>,
        registry: Arc<UnitRegistry>,
    ) -> Self {
        Self {
            mapping,
            resolver,
            parent,
            registry,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Wire a loader from a validated [`ConfigModel`]: mapping from the
    /// `[alias]` section, a [`DirResolver`] from `[resolver]`.
    pub fn from_config(config: &ConfigModel, registry: Arc<UnitRegistry>) -> Result<Self, Error> {
        let mapping = NamespaceMapping::new(&config.alias.source, &config.alias.target)?;
        let resolver = Arc::new(DirResolver::new(
            config.resolver.roots.clone(),
            config.resolver.extension.clone(),
        ));

        Ok(Self::new(mapping, resolver, registry))
    }

    #[must_use]
    pub const fn mapping(&self) -> &NamespaceMapping {
        &self.mapping
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<UnitRegistry> {
        &self.registry
    }

    /// Load the unit for a dotted identifier.
    ///
    /// NOTE: for in-scope requests the returned handle reports the
    /// **target** identity, not the requested one: asking for
    /// `jakarta.ws.rs.core.Application` under a `jakarta.ws -> javax.ws`
    /// mapping yields a handle named `javax.ws.rs.core.Application`.
    /// Downstream code relies on identity equality against the target
    /// namespace; do not compare the handle name against the requested
    /// string.
    pub fn load(&self, requested: &str) -> Result<Arc<LoadedUnit>, Error> {
        if requested.is_empty() {
            return Err(LoaderError::EmptyName.into());
        }
        let requested = UnitName::new(requested);

        // classification is pure: no locks, no I/O
        match self.mapping.map(requested.as_str(), '.') {
            Some(target) => self.load_mapped(&requested, &UnitName::new(target)),
            None => self.load_delegated(&requested),
        }
    }

    /// In-scope path: fetch target bytes, rewrite, register under target.
    fn load_mapped(
        &self,
        requested: &UnitName,
        target: &UnitName,
    ) -> Result<Arc<LoadedUnit>, Error> {
        if let Some(unit) = self.registry.get(target) {
            return Ok(unit);
        }

        let marker = self.marker(target);
        let _serial = marker.lock().unwrap_or_else(PoisonError::into_inner);

        // a racing request may have finished while we waited
        if let Some(unit) = self.registry.get(target) {
            return Ok(unit);
        }

        log!(Topic::Loader, Info, "🔁 loader.map: {requested} -> {target}");

        let bytes = self
            .resolver
            .resolve(target)
            .map_err(|err| LoaderError::FetchFailed {
                requested: requested.clone(),
                target: target.clone(),
                source: err,
            })?;

        let rewritten =
            SymbolRewriter::rewrite(&bytes, &self.mapping).map_err(|err| LoaderError::Malformed {
                requested: requested.clone(),
                target: target.clone(),
                source: err,
            })?;

        Ok(self.registry.define(target.clone(), rewritten))
    }

    /// Out-of-scope path: hand the request to the parent resolver and
    /// register its bytes verbatim under the requested identity.
    fn load_delegated(&self, requested: &UnitName) -> Result<Arc<LoadedUnit>, Error> {
        if let Some(unit) = self.registry.get(requested) {
            return Ok(unit);
        }

        let marker = self.marker(requested);
        let _serial = marker.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(unit) = self.registry.get(requested) {
            return Ok(unit);
        }

        log!(Topic::Loader, Debug, "↪️ loader.delegate: {requested}");

        let bytes = self
            .parent
            .resolve(requested)
            .map_err(|err| LoaderError::NotFound {
                requested: requested.clone(),
                source: err,
            })?;

        Ok(self.registry.define(requested.clone(), bytes))
    }

    /// In-progress marker for one identity. Markers persist for the loader
    /// lifetime, one per distinct identity.
    fn marker(&self, name: &UnitName) -> Arc<Mutex<()>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.clone())
            .or_default()
            .clone()
    }
}

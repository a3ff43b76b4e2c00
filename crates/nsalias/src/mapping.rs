use crate::{
    Error, ThisError,
    ids::{base_name_of, package_of},
};

///
/// MappingError
///

#[derive(Debug, ThisError)]
pub enum MappingError {
    #[error("{0} namespace is empty")]
    EmptyNamespace(&'static str),
}

impl From<MappingError> for Error {
    fn from(err: MappingError) -> Self {
        Self::invalid(err.to_string())
    }
}

///
/// NamespaceMapping
///
/// Immutable (source, target) namespace pair with the rename function over
/// identifiers. Both namespaces are held in dotted and slash form so the
/// same logic serves the public request serialization and the
/// binary-internal symbol serialization.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamespaceMapping {
    source: String,
    target: String,
    source_path: String,
    target_path: String,
}

impl NamespaceMapping {
    pub const DEFAULT_SOURCE: &'static str = "jakarta";
    pub const DEFAULT_TARGET: &'static str = "javax";

    /// Build a mapping, stripping a single trailing delimiter from either
    /// namespace. Empty namespaces are rejected.
    pub fn new(source: &str, target: &str) -> Result<Self, MappingError> {
        let source = source.strip_suffix('.').unwrap_or(source);
        let target = target.strip_suffix('.').unwrap_or(target);

        if source.is_empty() {
            return Err(MappingError::EmptyNamespace("source"));
        }
        if target.is_empty() {
            return Err(MappingError::EmptyNamespace("target"));
        }

        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
            source_path: source.replace('.', "/"),
            target_path: target.replace('.', "/"),
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Rename `name` into the target namespace, or `None` when it is out of
    /// scope.
    ///
    /// In scope means the identifier's package equals the source namespace
    /// or has it as a segment-bounded prefix: `jakarta` matches packages
    /// `jakarta` and `jakarta.ws`, never `jakartax`. Single-segment
    /// identifiers have no package and are never mapped.
    #[must_use]
    pub fn map(&self, name: &str, delim: char) -> Option<String> {
        if !name.contains(delim) {
            return None;
        }

        let package = package_of(name, delim);
        let base = base_name_of(name, delim);
        let (source, target) = self.namespaces_for(delim);

        let rest = if package == source {
            ""
        } else if package.starts_with(source) && package[source.len()..].starts_with(delim) {
            &package[source.len()..]
        } else {
            return None;
        };

        Some(format!("{target}{rest}{delim}{base}"))
    }

    /// Rename `name` when in scope, return it unchanged otherwise.
    #[must_use]
    pub fn apply(&self, name: &str, delim: char) -> String {
        self.map(name, delim)
            .unwrap_or_else(|| name.to_string())
    }

    /// True if [`map`](Self::map) would rename this identifier.
    #[must_use]
    pub fn in_scope(&self, name: &str, delim: char) -> bool {
        self.map(name, delim).is_some()
    }

    fn namespaces_for(&self, delim: char) -> (&str, &str) {
        if delim == '/' {
            (&self.source_path, &self.target_path)
        } else {
            (&self.source, &self.target)
        }
    }
}

impl Default for NamespaceMapping {
    fn default() -> Self {
        Self {
            source: Self::DEFAULT_SOURCE.to_string(),
            target: Self::DEFAULT_TARGET.to_string(),
            source_path: Self::DEFAULT_SOURCE.to_string(),
            target_path: Self::DEFAULT_TARGET.to_string(),
        }
    }
}

///
/// TESTS
///

use crate::ids::{base_name_of, package_of};
use derive_more::Display;
use nsalias_container::TypePath;
use std::{borrow::Borrow, str::FromStr};

///
/// UnitName
///
/// The dotted public identity of a loadable unit
/// (e.g. `jakarta.ws.rs.core.Application`).
///
/// The binary-internal serialization of the same identity is the
/// slash-delimited [`TypePath`]; both normalize to the same segment
/// sequence and convert losslessly in either direction.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnitName(String);

impl UnitName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Namespace part of this name, or the whole name for single-segment
    /// identifiers (see [`package_of`]).
    #[must_use]
    pub fn package(&self) -> &str {
        package_of(&self.0, '.')
    }

    /// Trailing segment after the last dot.
    #[must_use]
    pub fn base_name(&self) -> &str {
        base_name_of(&self.0, '.')
    }

    /// True if this identifier has no namespace.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.0.contains('.')
    }

    /// Binary-internal form: dots become slashes.
    #[must_use]
    pub fn to_type_path(&self) -> TypePath {
        TypePath::new(self.0.replace('.', "/"))
    }

    /// Public form of a binary-internal path: slashes become dots.
    #[must_use]
    pub fn from_type_path(path: &TypePath) -> Self {
        Self(path.as_str().replace('/', "."))
    }
}

impl FromStr for UnitName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for UnitName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UnitName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<UnitName> for String {
    fn from(name: UnitName) -> Self {
        name.into_string()
    }
}

impl AsRef<str> for UnitName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for UnitName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

///
/// TESTS
///

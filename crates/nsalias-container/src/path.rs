use derive_more::Display;
use std::{borrow::Borrow, str::FromStr};

///
/// TypePath
///
/// A slash-delimited type path as it appears inside a unit container
/// (e.g. `jakarta/ws/rs/core/Application`). This is the binary-internal
/// serialization of a unit name; the dotted public form lives upstream.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TypePath(String);

impl TypePath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Ordered path segments (`jakarta/ws` yields `["jakarta", "ws"]`).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl FromStr for TypePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for TypePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<TypePath> for String {
    fn from(path: TypePath) -> Self {
        path.0
    }
}

impl AsRef<str> for TypePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for TypePath {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

///
/// TESTS
///

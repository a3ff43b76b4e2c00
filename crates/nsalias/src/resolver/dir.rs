use crate::{
    ids::UnitName,
    log,
    log::Topic,
    resolver::{Resolver, ResolverError},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

///
/// DirResolver
///
/// Search-path lookup: each root directory is probed for
/// `<root>/<segment>/.../<base>.<extension>` in order; the first readable
/// hit wins. Missing files move to the next root, other I/O failures stop
/// the request.
///

#[derive(Clone, Debug)]
pub struct DirResolver {
    roots: Vec<PathBuf>,
    extension: String,
}

impl DirResolver {
    #[must_use]
    pub fn new(roots: impl IntoIterator<Item = PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn candidate(&self, root: &Path, name: &UnitName) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in name.to_type_path().segments() {
            path.push(segment);
        }
        path.set_extension(&self.extension);
        path
    }
}

impl Resolver for DirResolver {
    fn resolve(&self, name: &UnitName) -> Result<Vec<u8>, ResolverError> {
        for root in &self.roots {
            let path = self.candidate(root, name);
            match fs::read(&path) {
                Ok(bytes) => {
                    log!(
                        Topic::Resolver,
                        Debug,
                        "📄 resolver.hit: {name} ({})",
                        path.display(),
                    );
                    return Ok(bytes);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(ResolverError::Io {
                        name: name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Err(ResolverError::NotFound(name.clone()))
    }
}

///
/// TESTS
///

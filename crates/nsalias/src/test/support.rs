//! Fixtures shared by unit and seam tests.

use crate::{
    ids::UnitName,
    resolver::{EmbeddedResolver, Resolver, ResolverError},
};
use nsalias_container::{Attribute, Member, TypePath, Unit};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

///
/// UnitBuilder
/// Assembles container bytes for test fixtures.
///

pub struct UnitBuilder {
    unit: Unit,
}

impl UnitBuilder {
    pub fn new(self_type: &str) -> Self {
        Self {
            unit: Unit::new(TypePath::new(self_type)),
        }
    }

    pub fn super_type(mut self, path: &str) -> Self {
        self.unit.super_type = Some(TypePath::new(path));
        self
    }

    pub fn interface(mut self, path: &str) -> Self {
        self.unit.interfaces.push(TypePath::new(path));
        self
    }

    pub fn field(mut self, name: &str, descriptor: &str) -> Self {
        self.unit
            .fields
            .push(Member::new(name, descriptor).expect("field descriptor"));
        self
    }

    pub fn method(mut self, name: &str, descriptor: &str) -> Self {
        self.unit
            .methods
            .push(Member::new(name, descriptor).expect("method descriptor"));
        self
    }

    pub fn attribute(mut self, name: &str, data: &[u8]) -> Self {
        self.unit.attributes.push(Attribute {
            name: name.to_string(),
            data: data.to_vec(),
        });
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.unit.to_bytes().expect("serialize test unit")
    }
}

/// The standard target-namespace fixture: a `javax.ws` Application whose
/// internals still reference `jakarta.ws` types (the mixed-unit case the
/// rewriter exists for).
pub fn application_unit() -> Vec<u8> {
    UnitBuilder::new("javax/ws/rs/core/Application")
        .super_type("java/lang/Object")
        .interface("jakarta/ws/rs/core/Feature")
        .field("helper", "Ljakarta/ws/rs/core/Helper;")
        .method("register", "(Ljakarta/ws/rs/core/Helper;)Ljava/lang/Object;")
        .attribute("SourceFile", b"Application.unit")
        .to_bytes()
}

///
/// ScratchDir
/// Unique on-disk fixture directory, removed on drop.
///

pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub fn scratch_dir(tag: &str) -> ScratchDir {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = env::temp_dir().join(format!("nsalias-test-{}-{tag}-{n}", std::process::id()));
    fs::create_dir_all(&path).expect("create scratch dir");

    ScratchDir { path }
}

/// Write `bytes` where a DirResolver with extension `unit` would find
/// `name` under `root`.
pub fn write_unit_file(root: &Path, name: &str, bytes: &[u8]) {
    let unit_name = UnitName::new(name);
    let mut path = root.to_path_buf();
    for segment in unit_name.to_type_path().segments() {
        path.push(segment);
    }
    path.set_extension("unit");

    fs::create_dir_all(path.parent().expect("unit file parent")).expect("create unit dirs");
    fs::write(path, bytes).expect("write unit file");
}

///
/// CountingResolver
/// Wraps an EmbeddedResolver and counts resolve calls, for asserting that
/// racing loads do the fetch work only once.
///

pub struct CountingResolver {
    inner: EmbeddedResolver,
    hits: AtomicUsize,
}

impl CountingResolver {
    pub fn new(inner: EmbeddedResolver) -> Self {
        Self {
            inner,
            hits: AtomicUsize::new(0),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Resolver for CountingResolver {
    fn resolve(&self, name: &UnitName) -> Result<Vec<u8>, ResolverError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(name)
    }
}

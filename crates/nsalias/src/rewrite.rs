use crate::{NamespaceMapping, TypePath, log, log::Topic};
use nsalias_container::{ContainerError, Unit};

///
/// SymbolRewriter
///
/// Drives the container library over a fetched unit: parse, apply the
/// namespace mapping to every embedded type reference (slash form), and
/// re-serialize. References outside the source namespace come through with
/// their meaning untouched; the container writer recomputes all pool and
/// length bookkeeping.
///

pub struct SymbolRewriter;

impl SymbolRewriter {
    pub fn rewrite(bytes: &[u8], mapping: &NamespaceMapping) -> Result<Vec<u8>, ContainerError> {
        let mut unit = Unit::parse(bytes)?;
        let mut renamed = 0_usize;

        unit.for_each_type_path(|path| {
            if let Some(mapped) = mapping.map(path.as_str(), '/') {
                *path = TypePath::new(mapped);
                renamed += 1;
            }
        });

        log!(
            Topic::Rewrite,
            Debug,
            "✏️ rewrite: {} ({renamed} references renamed)",
            unit.self_type,
        );

        unit.to_bytes()
    }
}

///
/// TESTS
///

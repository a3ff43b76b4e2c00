//! Namespace-aliasing loader for binary unit containers.
//!
//! When a caller requests a unit whose name falls inside a configured
//! *source* namespace, the [`AliasingLoader`] locates the equivalent unit
//! published under the *target* namespace, rewrites every internal symbolic
//! reference that still points into the source namespace, and registers the
//! result under the **target** identity. Legacy consumers keep requesting the
//! old names; everything they observe lives under the new ones.
//!
//! ## Layering
//!
//! - `ids/` owns identifier types and their two serializations.
//! - `mapping` is the pure rename function threaded through everything.
//! - `rewrite` drives the container library over a fetched unit.
//! - `resolver/` fetches raw unit bytes (search path or embedded).
//! - `registry` owns the shared identity → handle map.
//! - `loader` orchestrates classify → delegate | map → fetch → rewrite →
//!   register.
//!
//! The wire format itself lives in the `nsalias-container` crate.

pub mod config;
pub mod error;
pub mod ids;
pub mod loader;
pub mod log;
pub mod mapping;
pub mod registry;
pub mod resolver;
pub mod rewrite;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use error::{Error, ErrorCode};
pub use ids::UnitName;
pub use loader::AliasingLoader;
pub use mapping::NamespaceMapping;
pub use registry::{LoadedUnit, UnitRegistry};
pub use resolver::{DirResolver, EmbeddedResolver, Resolver};
pub use rewrite::SymbolRewriter;

pub use nsalias_container as container;
pub use nsalias_container::TypePath;

pub(crate) use thiserror::Error as ThisError;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//!
//! Byte resolution for unit containers.
//!
//! A [`Resolver`] turns a unit identity into raw container bytes, or reports
//! that no such unit exists. The aliasing loader composes two of them: one
//! for fetching target-namespace bytes and one as the delegation parent for
//! out-of-scope requests.
//!

mod dir;
mod embedded;

pub use dir::*;
pub use embedded::*;

use crate::{ThisError, ids::UnitName};

///
/// ResolverError
///

#[derive(Debug, ThisError)]
pub enum ResolverError {
    #[error("unit '{0}' not found")]
    NotFound(UnitName),

    #[error("io error reading '{name}': {reason}")]
    Io { name: UnitName, reason: String },
}

///
/// Resolver
///
/// `resolve(identifier) -> bytes | NotFound`. Implementations may block on
/// I/O; they must be shareable across loader threads.
///

pub trait Resolver: Send + Sync {
    fn resolve(&self, name: &UnitName) -> Result<Vec<u8>, ResolverError>;
}

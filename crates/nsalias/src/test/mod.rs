//! Cross-module test support and seam tests.

pub mod support;

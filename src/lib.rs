#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Normalization passes for JVM classes that went through a remapping or
//! deobfuscation tool.
//!
//! The host parses class files into the structures of [`jvm`], hands each
//! [`Class`](jvm::class::Class) to a [`transform::Pipeline`], and writes the
//! mutated class back. Diagnostics go through the [`log`] facade when the
//! pipeline is configured to be verbose.
//! ## Features
#![doc = document_features::document_features!()]

pub mod jvm;
pub(crate) mod macros;
pub mod transform;
pub mod types;

/// Test utilities
#[cfg(test)]
pub mod tests;

//! # Vize
//!
//! Prop documentation for Vue components, written in Rust.
//!
//! This crate re-exports the Vize sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared containers (insertion-ordered maps, compact strings)
//! - [`folio`] - Prop resolution and documentation merging

/// Shared containers.
pub use vize_carton as carton;

/// Prop resolution and documentation merging.
pub use vize_folio as folio;

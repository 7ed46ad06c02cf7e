//! Carton - The artist's toolbox for Vize.
//!
//! This crate provides the foundational utilities and data structures shared by
//! the Vize crates, much like a carton (artist's portfolio case) holds all the
//! essential tools and materials an artist needs for their work.
//!
//! # Modules
//!
//! - **Ordered map**: [`OrderedMap`], a first-insertion-ordered map used
//!   wherever declaration order is significant (component props, for example)
//! - **Re-exports**: fast hash maps and compact strings used across crates
//!
//! # Example
//!
//! ```
//! use vize_carton::{CompactString, OrderedMap};
//!
//! let mut props: OrderedMap<CompactString, u32> = OrderedMap::new();
//! props.insert("label".into(), 1);
//! props.insert("disabled".into(), 2);
//! props.insert("label".into(), 3);
//!
//! let keys: Vec<&str> = props.keys().map(|k| k.as_str()).collect();
//! assert_eq!(keys, ["label", "disabled"]);
//! assert_eq!(props.get("label"), Some(&3));
//! ```

pub mod ordered;

pub use ordered::OrderedMap;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

//! # vize_folio
//!
//! Folio - Prop documentation records for Vue components.
//!
//! ## Name Origin
//!
//! A **folio** is a leaf of a bound book, one sheet per subject. `vize_folio`
//! produces one such sheet per component: its props, their types, defaults
//! and notes, plus any hand-written introduction and description, resolved
//! into a single record ready to be laid out as a props table.
//!
//! ## Pipeline
//!
//! 1. **Mixins** ([`mixin`]): props contributed by mixins are flattened into a
//!    base layer.
//! 2. **Normalization** ([`normalize`], [`resolve`]): own props are layered
//!    over that base and every declaration becomes a [`NormalizedProp`].
//! 3. **Overlay** ([`merge`]): a [`DocumentationOverlay`] is merged on top.
//! 4. **Description**: the merged description goes through an injected
//!    [`MarkdownRenderer`].
//!
//! Every stage is a pure function of its inputs.
//!
//! ## Usage
//!
//! ```rust
//! use vize_folio::{
//!     build_document, ComponentDefinition, DocumentationOverlay, PropDefault, PropList,
//!     PropSpec, PropType,
//! };
//! use vize_folio::markdown::CommonMark;
//!
//! let component = ComponentDefinition::new("x-button").with_props(PropList::specs([
//!     ("label", PropSpec::typed(PropType::String).required()),
//!     ("size", PropSpec::typed(vec![PropType::String, PropType::Number])
//!         .with_default(PropDefault::literal("md"))),
//! ]));
//! let overlay = DocumentationOverlay::new().with_introduction("A clickable button.");
//!
//! let doc = build_document(&component, Some(&overlay), false, &CommonMark::default()).unwrap();
//!
//! assert_eq!(doc.prop("size").unwrap().ty, "string|number");
//! assert_eq!(doc.prop("size").unwrap().default, "\"md\"");
//! assert_eq!(doc.introduction.as_deref(), Some("A clickable button."));
//! ```

pub mod error;
pub mod load;
pub mod markdown;
pub mod merge;
pub mod mixin;
pub mod normalize;
pub mod resolve;
pub mod types;

// Re-exports for convenience
pub use error::{FolioError, FolioResult};
pub use load::{load_component, load_overlay, overlay_path_for};
pub use markdown::{CommonMark, MarkdownOptions, MarkdownRenderer, PlainText};
pub use merge::{build_document, Folio, FolioOptions};
pub use mixin::{flatten_mixin_props, has_mixins};
pub use normalize::{normalize_prop, normalize_props};
pub use resolve::{resolve_default, resolve_type};
pub use types::{
    CanonicalDocument, ComponentDefinition, DefaultFactory, DocumentationOverlay,
    NormalizedProp, NormalizedPropMap, PropDefault, PropList, PropName, PropSpec, PropSpecMap,
    PropType, TypeDescriptor,
};

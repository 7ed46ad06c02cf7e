//! Prop normalization.
//!
//! Turns declarations into [`NormalizedProp`] records with every field filled
//! in. Own props are layered over the mixin base with the same ordering rule
//! as object spreading: base keys first in base order, then new own keys in
//! declaration order; an own key that redeclares a base key stays where the
//! base put it.

use crate::resolve::{resolve_default, resolve_type};
use crate::types::{NormalizedProp, NormalizedPropMap, PropList, PropSpec, PropSpecMap};

/// Normalize a single declaration.
pub fn normalize_prop(spec: &PropSpec) -> NormalizedProp {
    NormalizedProp {
        ty: resolve_type(spec.ty.as_ref()),
        required: spec.is_required(),
        default: resolve_default(spec.default.as_ref()),
        note: spec.note.clone().unwrap_or_default(),
    }
}

/// Layer own declarations over the mixin base without normalizing.
///
/// Own declarations replace base declarations of the same name.
pub fn resolve_prop_specs(raw: Option<&PropList>, base: &PropSpecMap) -> PropSpecMap {
    let mut specs = base.clone();
    if let Some(raw) = raw {
        specs.extend(raw.to_spec_map());
    }
    specs
}

/// Normalize every declaration in order.
pub fn normalize_spec_map(specs: &PropSpecMap) -> NormalizedPropMap {
    specs
        .iter()
        .map(|(name, spec)| {
            let prop = normalize_prop(spec);
            tracing::trace!(prop = %name, ty = %prop.ty, default = %prop.default, "normalized prop");
            (name.clone(), prop)
        })
        .collect()
}

/// Normalize own props layered over the mixin base.
#[inline]
pub fn normalize_props(raw: Option<&PropList>, base: &PropSpecMap) -> NormalizedPropMap {
    normalize_spec_map(&resolve_prop_specs(raw, base))
}

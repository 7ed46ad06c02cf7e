//! Type name resolution.

use crate::types::TypeDescriptor;

/// Resolve a declared type to its documentation name.
///
/// Absent types are `"any"`. Unions keep declaration order and duplicates.
pub fn resolve_type(ty: Option<&TypeDescriptor>) -> String {
    match ty {
        None => "any".to_string(),
        Some(TypeDescriptor::Single(tag)) => tag.canonical_name().into_owned(),
        Some(TypeDescriptor::Union(tags)) if tags.is_empty() => "any".to_string(),
        Some(TypeDescriptor::Union(tags)) => {
            let mut out = String::with_capacity(tags.len() * 8);
            for (i, tag) in tags.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                out.push_str(&tag.canonical_name());
            }
            out
        }
    }
}

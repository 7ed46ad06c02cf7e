//! Mixin prop flattening.
//!
//! Props contributed by mixins form the base layer beneath a component's own
//! props. Mixins apply in declaration order, so a later mixin's prop replaces
//! an earlier one of the same name (the whole declaration, not field by
//! field). A replaced prop keeps the position where it was first declared.

use crate::types::{ComponentDefinition, PropSpecMap};

/// Whether the definition includes at least one mixin.
#[inline]
pub fn has_mixins(definition: &ComponentDefinition) -> bool {
    !definition.mixins.is_empty()
}

/// Merge the props of `mixins` into a single mapping.
///
/// A mixin that includes mixins of its own contributes those first and then
/// its own props on top.
pub fn flatten_mixin_props(mixins: &[ComponentDefinition]) -> PropSpecMap {
    let mut flattened = PropSpecMap::new();

    for mixin in mixins {
        if has_mixins(mixin) {
            flattened.extend(flatten_mixin_props(&mixin.mixins));
        }
        if let Some(props) = &mixin.props {
            flattened.extend(props.to_spec_map());
        }
    }

    tracing::debug!(
        mixins = mixins.len(),
        props = flattened.len(),
        "flattened mixin props"
    );

    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PropList, PropSpec, PropType};

    fn checkbox_mixin() -> ComponentDefinition {
        ComponentDefinition::mixin(PropList::specs([
            ("checked", PropSpec::typed(PropType::Boolean)),
            ("value", PropSpec::typed(vec![PropType::String, PropType::Number]).required()),
        ]))
    }

    #[test]
    fn test_has_mixins() {
        let solo = ComponentDefinition::new("checkbox-solo");
        let mixed = ComponentDefinition::new("checkbox-mixin").with_mixin(checkbox_mixin());

        assert!(!has_mixins(&solo));
        assert!(has_mixins(&mixed));
    }

    #[test]
    fn test_single_mixin_props_pass_through() {
        let mixin = checkbox_mixin();
        let flattened = flatten_mixin_props(std::slice::from_ref(&mixin));

        assert_eq!(Some(PropList::Specs(flattened)), mixin.props);
    }

    #[test]
    fn test_later_mixin_wins() {
        let first = ComponentDefinition::mixin(PropList::specs([
            ("size", PropSpec::typed(PropType::String).with_note("first")),
            ("color", PropSpec::typed(PropType::String)),
        ]));
        let second = ComponentDefinition::mixin(PropList::specs([
            ("size", PropSpec::typed(PropType::Number)),
        ]));

        let flattened = flatten_mixin_props(&[first, second]);
        let keys: Vec<_> = flattened.keys().map(|k| k.as_str()).collect();

        assert_eq!(keys, ["size", "color"]);
        // Whole replacement: the first mixin's note does not survive.
        assert_eq!(flattened.get("size"), Some(&PropSpec::typed(PropType::Number)));
    }

    #[test]
    fn test_name_list_mixin() {
        let mixin = ComponentDefinition::mixin(PropList::names(["a", "b"]));
        let flattened = flatten_mixin_props(&[mixin]);

        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened.get("a"), Some(&PropSpec::default()));
    }

    #[test]
    fn test_nested_mixins() {
        let inner = ComponentDefinition::mixin(PropList::specs([
            ("id", PropSpec::typed(PropType::String)),
            ("label", PropSpec::typed(PropType::String)),
        ]));
        let outer = ComponentDefinition::mixin(PropList::specs([(
            "label",
            PropSpec::typed(PropType::String).required(),
        )]))
        .with_mixin(inner);

        let flattened = flatten_mixin_props(&[outer]);
        let keys: Vec<_> = flattened.keys().map(|k| k.as_str()).collect();

        assert_eq!(keys, ["id", "label"]);
        assert!(flattened.get("label").unwrap().is_required());
    }

    #[test]
    fn test_mixin_without_props() {
        let flattened = flatten_mixin_props(&[ComponentDefinition::default()]);
        assert!(flattened.is_empty());
    }
}

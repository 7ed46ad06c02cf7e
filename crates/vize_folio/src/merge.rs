//! Document building: mixins, normalization, overlay merge, description
//! rendering.

use serde::{Deserialize, Serialize};
use vize_carton::OrderedMap;

use crate::markdown::{CommonMark, MarkdownRenderer};
use crate::mixin::{flatten_mixin_props, has_mixins};
use crate::normalize::{normalize_spec_map, resolve_prop_specs};
use crate::types::{CanonicalDocument, ComponentDefinition, DocumentationOverlay, PropSpecMap};

/// Options for document building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolioOptions {
    /// Leave mixin-contributed props out of the document.
    #[serde(default)]
    pub ignore_mixins: bool,
}

/// Build the canonical document for `component`.
///
/// Returns `None` when the component has no name; there is nothing to render.
///
/// Overlay fields replace component fields when present. Overlay props are
/// merged per prop and per field: a field the overlay does not declare keeps
/// the component's value, and props only the overlay declares are appended.
/// The merged `description` goes through `renderer` exactly once.
pub fn build_document<R>(
    component: &ComponentDefinition,
    overlay: Option<&DocumentationOverlay>,
    ignore_mixins: bool,
    renderer: &R,
) -> Option<CanonicalDocument>
where
    R: MarkdownRenderer + ?Sized,
{
    let Some(name) = component.valid_name() else {
        tracing::debug!("skipping component without a name");
        return None;
    };

    let base = mixin_base(component, ignore_mixins);
    let mut specs = resolve_prop_specs(component.props.as_ref(), &base);

    let mut name = name.to_string();
    let mut introduction = component.introduction.clone();
    let mut description = component.description.clone();
    let mut token = component.token.clone();

    if let Some(overlay) = overlay {
        override_with(&mut name, &overlay.name);
        override_option(&mut introduction, &overlay.introduction);
        override_option(&mut description, &overlay.description);
        override_option(&mut token, &overlay.token);

        if let Some(props) = &overlay.props {
            merge_overlay_props(&mut specs, props.to_spec_map());
        }
    }

    let description = description.map(|raw| renderer.render(&raw));

    Some(CanonicalDocument {
        name,
        props: normalize_spec_map(&specs),
        introduction,
        description,
        token,
    })
}

fn mixin_base(component: &ComponentDefinition, ignore_mixins: bool) -> PropSpecMap {
    if ignore_mixins {
        if has_mixins(component) {
            tracing::debug!(
                mixins = component.mixins.len(),
                "ignoring mixin props"
            );
        }
        return OrderedMap::new();
    }

    if has_mixins(component) {
        flatten_mixin_props(&component.mixins)
    } else {
        OrderedMap::new()
    }
}

fn merge_overlay_props(specs: &mut PropSpecMap, overlay: PropSpecMap) {
    for (name, spec) in overlay {
        let merged = match specs.get(&name) {
            Some(existing) => spec.layered_on(existing),
            None => spec,
        };
        specs.insert(name, merged);
    }
}

#[inline]
fn override_with(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

#[inline]
fn override_option(target: &mut Option<String>, value: &Option<String>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

/// Document builder holding a markdown renderer and options.
///
/// ```rust
/// use vize_folio::{ComponentDefinition, Folio, PropList};
///
/// let component = ComponentDefinition::new("x-tag")
///     .with_props(PropList::names(["label"]))
///     .with_description("A *small* tag");
///
/// let folio: Folio = Folio::default();
/// let doc = folio.build(&component, None).unwrap();
/// assert_eq!(doc.prop("label").unwrap().ty, "any");
/// assert_eq!(doc.description.as_deref(), Some("<p>A <em>small</em> tag</p>\n"));
/// ```
pub struct Folio<R = CommonMark> {
    renderer: R,
    options: FolioOptions,
}

impl Default for Folio<CommonMark> {
    #[inline]
    fn default() -> Self {
        Self::new(CommonMark::default())
    }
}

impl<R: MarkdownRenderer> Folio<R> {
    /// Builder using `renderer` for descriptions.
    #[inline]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            options: FolioOptions::default(),
        }
    }

    /// Replace the options.
    #[inline]
    pub fn with_options(mut self, options: FolioOptions) -> Self {
        self.options = options;
        self
    }

    /// Set whether mixin props are left out.
    #[inline]
    pub fn ignore_mixins(mut self, ignore: bool) -> Self {
        self.options.ignore_mixins = ignore;
        self
    }

    #[inline]
    pub fn options(&self) -> FolioOptions {
        self.options
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Build the document for `component`, see [`build_document`].
    #[inline]
    pub fn build(
        &self,
        component: &ComponentDefinition,
        overlay: Option<&DocumentationOverlay>,
    ) -> Option<CanonicalDocument> {
        build_document(
            component,
            overlay,
            self.options.ignore_mixins,
            &self.renderer,
        )
    }
}

impl<R> std::fmt::Debug for Folio<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Folio")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::types::{NormalizedProp, PropDefault, PropList, PropSpec, PropType};

    fn identity(source: &str) -> String {
        source.to_string()
    }

    fn complex() -> ComponentDefinition {
        ComponentDefinition::new("bar").with_props(PropList::specs([
            (
                "first",
                PropSpec::typed(PropType::Array)
                    .required()
                    .with_note("this is a required array"),
            ),
            (
                "third",
                PropSpec::typed(PropType::Number)
                    .with_default(PropDefault::literal(100))
                    .with_note("this is a number that defaults to 100"),
            ),
        ]))
    }

    #[test]
    fn test_nameless_component() {
        assert_eq!(
            build_document(&ComponentDefinition::default(), None, false, &identity),
            None
        );
        assert_eq!(
            build_document(&ComponentDefinition::new(""), None, false, &identity),
            None
        );
    }

    #[test]
    fn test_nameless_component_with_overlay_name() {
        let overlay = DocumentationOverlay::new().with_name("named-by-overlay");
        assert_eq!(
            build_document(&ComponentDefinition::default(), Some(&overlay), false, &identity),
            None
        );
    }

    #[test]
    fn test_overlay_precedence() {
        let overlay = DocumentationOverlay::new()
            .with_name("baz-overlay")
            .with_introduction("a brief intro to the component")
            .with_description("desc")
            .with_token("<my-component foo=\"bar\"></my-component>");

        let plain = build_document(&complex(), None, false, &identity).unwrap();
        let doc = build_document(&complex(), Some(&overlay), false, &identity).unwrap();

        assert_eq!(doc.name, "baz-overlay");
        assert_eq!(doc.props, plain.props);
        assert_eq!(doc.introduction.as_deref(), Some("a brief intro to the component"));
        assert_eq!(doc.description.as_deref(), Some("desc"));
        assert_eq!(
            doc.token.as_deref(),
            Some("<my-component foo=\"bar\"></my-component>")
        );
    }

    #[test]
    fn test_one_sided_fields_are_kept() {
        let component = complex()
            .with_introduction("component intro")
            .with_token("<bar />");
        let overlay = DocumentationOverlay::new().with_description("overlay description");

        let doc = build_document(&component, Some(&overlay), false, &identity).unwrap();

        assert_eq!(doc.name, "bar");
        assert_eq!(doc.introduction.as_deref(), Some("component intro"));
        assert_eq!(doc.description.as_deref(), Some("overlay description"));
        assert_eq!(doc.token.as_deref(), Some("<bar />"));
    }

    #[test]
    fn test_overlay_props_merge_per_field() {
        let overlay = DocumentationOverlay::new().with_props(PropList::specs([
            ("third", PropSpec::default().with_note("overridden note")),
            ("extra", PropSpec::typed(PropType::String)),
        ]));

        let doc = build_document(&complex(), Some(&overlay), false, &identity).unwrap();
        let keys: Vec<_> = doc.props.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["first", "third", "extra"]);

        let third = doc.prop("third").unwrap();
        assert_eq!(third.ty, "number");
        assert_eq!(third.default, "100");
        assert_eq!(third.note, "overridden note");

        assert_eq!(doc.prop("extra").unwrap().ty, "string");
    }

    #[test]
    fn test_overlay_bare_names_do_not_override() {
        let overlay = DocumentationOverlay::new().with_props(PropList::names(["first", "added"]));

        let plain = build_document(&complex(), None, false, &identity).unwrap();
        let doc = build_document(&complex(), Some(&overlay), false, &identity).unwrap();

        assert_eq!(doc.prop("first"), plain.prop("first"));
        assert_eq!(doc.prop("added"), Some(&NormalizedProp::bare()));
    }

    #[test]
    fn test_description_rendered_once() {
        let calls = Cell::new(0);
        let renderer = |source: &str| {
            calls.set(calls.get() + 1);
            format!("<p>{}</p>", source.trim())
        };

        let component = complex().with_description("component text");
        let overlay = DocumentationOverlay::new().with_description("overlay text");
        let doc = build_document(&component, Some(&overlay), false, &renderer).unwrap();

        assert_eq!(doc.description.as_deref(), Some("<p>overlay text</p>"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_absent_description_skips_renderer() {
        let calls = Cell::new(0);
        let renderer = |source: &str| {
            calls.set(calls.get() + 1);
            source.to_string()
        };

        let doc = build_document(&complex(), None, false, &renderer).unwrap();
        assert_eq!(doc.description, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_ignore_mixins() {
        let component = ComponentDefinition::new("checkbox")
            .with_mixin(ComponentDefinition::mixin(PropList::names(["checked"])))
            .with_props(PropList::names(["label"]));

        let with_mixins = build_document(&component, None, false, &identity).unwrap();
        let without = build_document(&component, None, true, &identity).unwrap();

        assert!(with_mixins.prop("checked").is_some());
        assert!(without.prop("checked").is_none());
        assert!(without.prop("label").is_some());
    }

    #[test]
    fn test_folio_builder() {
        let folio = Folio::new(identity as fn(&str) -> String).ignore_mixins(true);
        assert!(folio.options().ignore_mixins);

        let doc = folio.build(&complex(), None).unwrap();
        assert_eq!(doc.required_props().collect::<Vec<_>>(), ["first"]);
    }
}

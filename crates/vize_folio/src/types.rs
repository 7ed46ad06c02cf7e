//! Type definitions for vize_folio.
//!
//! Input side: [`ComponentDefinition`], [`DocumentationOverlay`] and the prop
//! declarations they carry ([`PropList`], [`PropSpec`]).
//!
//! Output side: [`NormalizedProp`] and [`CanonicalDocument`], the records a
//! renderer consumes.
//!
//! All input types deserialize from the JSON shape of Vue component options,
//! e.g. `{"name": "x-button", "props": {"size": {"type": "String"}}}`.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use vize_carton::{CompactString, OrderedMap};

/// Prop name key.
pub type PropName = CompactString;

/// Ordered prop declarations, keyed by prop name.
pub type PropSpecMap = OrderedMap<PropName, PropSpec>;

/// Ordered normalized props, keyed by prop name.
pub type NormalizedPropMap = OrderedMap<PropName, NormalizedProp>;

// =============================================================================
// Type tags
// =============================================================================

/// Declared type tag of a prop.
///
/// Vue declares prop types with constructors (`String`, `Number`, ...).
/// Those become a closed set of tags here; anything else is kept verbatim
/// in [`PropType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropType {
    String,
    Number,
    Boolean,
    Function,
    Object,
    Array,
    Symbol,
    /// Unconstrained (`null` in a type list).
    Any,
    /// Unrecognized constructor name, e.g. `Date` or a user class.
    Custom(CompactString),
}

impl PropType {
    /// Parse a constructor name. Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "function" => Self::Function,
            "object" => Self::Object,
            "array" => Self::Array,
            "symbol" => Self::Symbol,
            "any" | "null" => Self::Any,
            _ => Self::Custom(tag.into()),
        }
    }

    /// Constructor name as declared in component source.
    pub fn tag(&self) -> &str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Function => "Function",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Symbol => "Symbol",
            Self::Any => "null",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Canonical lowercase name used in documentation.
    pub fn canonical_name(&self) -> Cow<'static, str> {
        match self {
            Self::String => Cow::Borrowed("string"),
            Self::Number => Cow::Borrowed("number"),
            Self::Boolean => Cow::Borrowed("boolean"),
            Self::Function => Cow::Borrowed("function"),
            Self::Object => Cow::Borrowed("object"),
            Self::Array => Cow::Borrowed("array"),
            Self::Symbol => Cow::Borrowed("symbol"),
            Self::Any => Cow::Borrowed("any"),
            Self::Custom(name) => Cow::Owned(name.as_str().to_lowercase()),
        }
    }
}

impl Serialize for PropType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_none(),
            other => serializer.serialize_str(other.tag()),
        }
    }
}

struct PropTypeVisitor;

impl<'de> Visitor<'de> for PropTypeVisitor {
    type Value = PropType;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a type name such as \"String\" or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<PropType, E> {
        Ok(PropType::from_tag(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<PropType, E> {
        Ok(PropType::Any)
    }

    fn visit_none<E: de::Error>(self) -> Result<PropType, E> {
        Ok(PropType::Any)
    }
}

impl<'de> Deserialize<'de> for PropType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropTypeVisitor)
    }
}

/// A prop's declared type: one tag or an ordered list of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDescriptor {
    Single(PropType),
    Union(Vec<PropType>),
}

impl From<PropType> for TypeDescriptor {
    #[inline]
    fn from(ty: PropType) -> Self {
        Self::Single(ty)
    }
}

impl From<Vec<PropType>> for TypeDescriptor {
    #[inline]
    fn from(types: Vec<PropType>) -> Self {
        Self::Union(types)
    }
}

// =============================================================================
// Defaults
// =============================================================================

/// Zero-argument default factory, as Vue requires for object and array props.
#[derive(Clone)]
pub struct DefaultFactory(Arc<dyn Fn() -> serde_json::Value + Send + Sync>);

impl DefaultFactory {
    /// Wrap a closure.
    pub fn new(factory: impl Fn() -> serde_json::Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(factory))
    }

    /// Produce a fresh default value.
    #[inline]
    pub fn call(&self) -> serde_json::Value {
        (self.0)()
    }
}

impl fmt::Debug for DefaultFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultFactory(..)")
    }
}

/// Factories compare by identity.
impl PartialEq for DefaultFactory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A prop's declared default.
#[derive(Debug, Clone, PartialEq)]
pub enum PropDefault {
    /// Plain value, including `null`.
    Literal(serde_json::Value),
    /// Factory invoked to produce the value.
    Factory(DefaultFactory),
}

impl PropDefault {
    /// Literal default.
    #[inline]
    pub fn literal(value: impl Into<serde_json::Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Factory default.
    #[inline]
    pub fn factory(factory: impl Fn() -> serde_json::Value + Send + Sync + 'static) -> Self {
        Self::Factory(DefaultFactory::new(factory))
    }

    /// The concrete default value, invoking the factory if there is one.
    pub fn value(&self) -> Cow<'_, serde_json::Value> {
        match self {
            Self::Literal(value) => Cow::Borrowed(value),
            Self::Factory(factory) => Cow::Owned(factory.call()),
        }
    }
}

impl Serialize for PropDefault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

// =============================================================================
// Prop declarations
// =============================================================================

/// One declared prop.
///
/// Every field is optional so that an overlay can redeclare a prop partially;
/// an absent field means "not declared here".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropSpec {
    /// Declared type(s).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,

    /// Whether the prop must be passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Declared default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<PropDefault>,

    /// Free-text documentation note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PropSpec {
    /// Spec with only a type.
    #[inline]
    pub fn typed(ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Set the type.
    #[inline]
    pub fn with_type(mut self, ty: impl Into<TypeDescriptor>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Mark as required.
    #[inline]
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Set the default.
    #[inline]
    pub fn with_default(mut self, default: PropDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the note.
    #[inline]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether the prop is required; undeclared means not required.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Layer this spec over `base`: fields declared here win, the rest come
    /// from `base`.
    pub fn layered_on(&self, base: &PropSpec) -> PropSpec {
        PropSpec {
            ty: self.ty.clone().or_else(|| base.ty.clone()),
            required: self.required.or(base.required),
            default: self.default.clone().or_else(|| base.default.clone()),
            note: self.note.clone().or_else(|| base.note.clone()),
        }
    }
}

impl PropSpec {
    /// Read a declaration from any JSON shape Vue accepts.
    ///
    /// - `"String"` or `["String", "Number"]`: type only.
    /// - `{ "type": ..., "required": ..., "default": ..., "note": ... }`:
    ///   each field is read on its own; a field with the wrong JSON type is
    ///   treated as undeclared, other fields are kept.
    /// - `null` or anything else: an empty declaration.
    ///
    /// `"default": null` is a declared `null` default, not a missing one.
    pub fn from_json_value(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(_) | Value::Array(_) => match lenient_type(value) {
                Some(ty) => PropSpec::typed(ty),
                None => PropSpec::default(),
            },
            Value::Object(mut fields) => PropSpec {
                ty: fields.remove("type").and_then(lenient_type),
                required: fields.get("required").and_then(Value::as_bool),
                default: fields.remove("default").map(PropDefault::Literal),
                note: fields.get("note").and_then(Value::as_str).map(str::to_string),
            },
            _ => PropSpec::default(),
        }
    }
}

fn lenient_type(value: serde_json::Value) -> Option<TypeDescriptor> {
    TypeDescriptor::deserialize(value).ok()
}

impl<'de> Deserialize<'de> for PropSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(PropSpec::from_json_value)
    }
}

/// Props as declared on a component: bare names or a name-to-spec mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropList {
    /// `props: ['label', 'disabled']`
    Names(Vec<PropName>),
    /// `props: { label: {...}, disabled: {...} }`
    Specs(PropSpecMap),
}

impl PropList {
    /// Bare-name declaration.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PropName>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    /// Mapping declaration.
    pub fn specs<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = (S, PropSpec)>,
        S: Into<PropName>,
    {
        Self::Specs(specs.into_iter().map(|(name, spec)| (name.into(), spec)).collect())
    }

    /// Number of declared props.
    pub fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::Specs(specs) => specs.len(),
        }
    }

    /// Whether no props are declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both shapes as one mapping. Bare names get an empty spec.
    pub fn to_spec_map(&self) -> PropSpecMap {
        match self {
            Self::Names(names) => names
                .iter()
                .map(|name| (name.clone(), PropSpec::default()))
                .collect(),
            Self::Specs(specs) => specs.clone(),
        }
    }
}

impl Default for PropList {
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

// =============================================================================
// Component and overlay
// =============================================================================

/// A component's options, as far as documentation is concerned.
///
/// Mixins use the same shape; only their `props` and nested `mixins` matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Component name. A component without one is not documented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Declared props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropList>,

    /// Included mixins, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<ComponentDefinition>,

    /// Short introduction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,

    /// Markdown description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Usage snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ComponentDefinition {
    /// Named component with no props.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Nameless definition carrying props, i.e. a mixin.
    #[inline]
    pub fn mixin(props: PropList) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    /// Set props.
    #[inline]
    pub fn with_props(mut self, props: PropList) -> Self {
        self.props = Some(props);
        self
    }

    /// Append a mixin.
    #[inline]
    pub fn with_mixin(mut self, mixin: ComponentDefinition) -> Self {
        self.mixins.push(mixin);
        self
    }

    /// Set introduction.
    #[inline]
    pub fn with_introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    /// Set description.
    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set token.
    #[inline]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The name, if it is present and non-empty.
    #[inline]
    pub fn valid_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Hand-written documentation layered over a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropList>,
}

impl DocumentationOverlay {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn with_introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[inline]
    pub fn with_props(mut self, props: PropList) -> Self {
        self.props = Some(props);
        self
    }
}

// =============================================================================
// Output
// =============================================================================

/// Normalized prop record. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProp {
    /// Canonical type name, `|`-joined for unions, `"any"` when undeclared.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the prop is required.
    pub required: bool,
    /// JSON text of the default, or `"undefined"`.
    pub default: String,
    /// Documentation note, possibly empty.
    pub note: String,
}

impl NormalizedProp {
    /// Record for a prop declared by name only.
    pub fn bare() -> Self {
        Self {
            ty: "any".to_string(),
            required: false,
            default: "undefined".to_string(),
            note: String::new(),
        }
    }
}

/// The fully resolved documentation record for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDocument {
    /// Component name.
    pub name: String,

    /// Props in resolution order.
    pub props: NormalizedPropMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,

    /// Rendered description markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CanonicalDocument {
    /// Look up a prop by name.
    #[inline]
    pub fn prop(&self, name: &str) -> Option<&NormalizedProp> {
        self.props.get(name)
    }

    /// Names of required props, in order.
    pub fn required_props(&self) -> impl Iterator<Item = &str> {
        self.props
            .iter()
            .filter(|(_, prop)| prop.required)
            .map(|(name, _)| name.as_str())
    }

    /// Compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

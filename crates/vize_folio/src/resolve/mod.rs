//! Resolution of declared prop metadata into documentation text.
//!
//! - [`resolve_type`]: declared type tag(s) to a canonical name such as
//!   `"string"` or `"string|number"`
//! - [`resolve_default`]: declared default to its JSON text, or `"undefined"`

mod default_value;
mod type_name;

pub use default_value::resolve_default;
pub use type_name::resolve_type;

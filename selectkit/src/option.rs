//! ComboOption trait for values that can be offered by the select widgets.

use serde_json::Value;

/// Trait for values that can be listed as options.
///
/// Options are either primitives (their text is the value itself) or keyed
/// records whose fields are looked up by name.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, PartialEq)]
/// struct User {
///     id: String,
///     name: String,
/// }
///
/// impl ComboOption for User {
///     fn text(&self) -> String {
///         self.name.clone()
///     }
///
///     fn field(&self, name: &str) -> Option<String> {
///         match name {
///             "id" => Some(self.id.clone()),
///             "name" => Some(self.name.clone()),
///             _ => None,
///         }
///     }
///
///     fn id_field(&self) -> Option<String> {
///         Some(self.id.clone())
///     }
/// }
/// ```
pub trait ComboOption: Clone + PartialEq {
    /// Raw string representation of the option.
    fn text(&self) -> String;

    /// Value of a named field. Primitives have no fields.
    fn field(&self, _name: &str) -> Option<String> {
        None
    }

    /// The option's own `id`, if it carries one.
    fn id_field(&self) -> Option<String> {
        self.field("id")
    }
}

/// Display text of an option.
///
/// Looks up `search_field` when configured, falling back to the raw text for
/// options without that field.
pub fn display_text<T: ComboOption>(option: &T, search_field: Option<&str>) -> String {
    search_field
        .and_then(|name| option.field(name))
        .unwrap_or_else(|| option.text())
}

/// Payload of a commit request.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    /// An option row was activated (click or Enter).
    Option(T),
    /// Typed text passed validation and is committed as-is.
    Typed(String),
}

impl<T: ComboOption> Selection<T> {
    /// Display text of the committed value.
    pub fn display_text(&self, search_field: Option<&str>) -> String {
        match self {
            Selection::Option(option) => display_text(option, search_field),
            Selection::Typed(text) => text.clone(),
        }
    }
}

impl ComboOption for String {
    fn text(&self) -> String {
        self.clone()
    }
}

impl ComboOption for &str {
    fn text(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_primitive_option {
    ($($ty:ty),*) => {
        $(
            impl ComboOption for $ty {
                fn text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_primitive_option!(i32, i64, u32, u64, usize, f32, f64);

/// Render a JSON scalar as plain text, anything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl ComboOption for Value {
    fn text(&self) -> String {
        value_text(self)
    }

    fn field(&self, name: &str) -> Option<String> {
        self.as_object()?.get(name).map(value_text)
    }
}

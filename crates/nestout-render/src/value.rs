//! The renderer's input model.
//!
//! A [`RenderValue`] is either a block of [`Text`](RenderValue::Text) or a
//! map of named child values ([`Fields`](RenderValue::Fields)). Everything
//! else a caller might hand over (numbers, booleans, nulls, lists) is kept
//! as [`Other`](RenderValue::Other) so the renderer can apply its
//! [`UnsupportedPolicy`](crate::UnsupportedPolicy) explicitly.
//!
//! # Building Values
//!
//! ```rust
//! use nestout_render::RenderValue;
//! use serde_json::json;
//!
//! let built = RenderValue::fields([
//!     ("minion1", RenderValue::fields([("reason", RenderValue::text("timeout"))])),
//! ]);
//!
//! let converted = RenderValue::from(json!({"minion1": {"reason": "timeout"}}));
//! assert_eq!(built, converted);
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::RenderError;

/// Deepest container nesting [`RenderValue::from_json_str`] and
/// [`RenderValue::from_yaml_str`] accept. Both parsers stop at this many
/// nested objects or lists.
pub const PARSE_NESTING_LIMIT: usize = 128;

/// A node of the tree handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderValue {
    /// A block of text, possibly spanning several lines.
    Text(String),
    /// Named child values. Input order carries no meaning.
    Fields(HashMap<String, RenderValue>),
    /// Any value outside the two supported shapes.
    ///
    /// Conversions in this module only ever store nulls, booleans, numbers
    /// and lists here.
    Other(Value),
}

impl RenderValue {
    /// Creates a text value.
    pub fn text(s: impl Into<String>) -> Self {
        RenderValue::Text(s.into())
    }

    /// Creates a field map from `(name, value)` pairs.
    ///
    /// Later pairs replace earlier ones with the same name.
    pub fn fields<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RenderValue)>,
    {
        RenderValue::Fields(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wraps an arbitrary value outside the supported shapes.
    pub fn other(value: Value) -> Self {
        RenderValue::Other(value)
    }

    /// Short name of this value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderValue::Text(_) => "text",
            RenderValue::Fields(_) => "fields",
            RenderValue::Other(value) => json_kind(value),
        }
    }

    /// Returns true for [`Text`](RenderValue::Text) and
    /// [`Fields`](RenderValue::Fields).
    pub fn is_supported(&self) -> bool {
        !matches!(self, RenderValue::Other(_))
    }

    /// Converts any serializable data.
    ///
    /// Map keys must serialize as strings; integer or other keys are
    /// rejected instead of being coerced. Enum variants carrying data
    /// become a single field named after the variant.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, RenderError> {
        from_yaml_value(serde_yaml::to_value(data)?, Tags::AsField)
    }

    /// Parses a JSON document.
    ///
    /// Fails on documents nested deeper than [`PARSE_NESTING_LIMIT`].
    pub fn from_json_str(input: &str) -> Result<Self, RenderError> {
        let value: Value = serde_json::from_str(input)?;
        Ok(value.into())
    }

    /// Parses a YAML document.
    ///
    /// Mapping keys must be strings; any other key is rejected instead of
    /// being coerced. Fails on documents nested deeper than
    /// [`PARSE_NESTING_LIMIT`].
    pub fn from_yaml_str(input: &str) -> Result<Self, RenderError> {
        let value: serde_yaml::Value = serde_yaml::from_str(input)?;
        from_yaml_value(value, Tags::Unwrap)
    }
}

impl From<Value> for RenderValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RenderValue::Text(s),
            Value::Object(map) => {
                RenderValue::Fields(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            other => RenderValue::Other(other),
        }
    }
}

impl From<String> for RenderValue {
    fn from(s: String) -> Self {
        RenderValue::Text(s)
    }
}

impl From<&str> for RenderValue {
    fn from(s: &str) -> Self {
        RenderValue::Text(s.to_string())
    }
}

impl From<HashMap<String, RenderValue>> for RenderValue {
    fn from(map: HashMap<String, RenderValue>) -> Self {
        RenderValue::Fields(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// How YAML tags are carried into the converted value.
#[derive(Clone, Copy)]
enum Tags {
    /// `!tag value` becomes `value`.
    Unwrap,
    /// `!Variant value` becomes `{Variant: value}`, the shape serde gives
    /// externally tagged enum variants.
    AsField,
}

fn field_name(key: serde_yaml::Value) -> Result<String, RenderError> {
    match key {
        serde_yaml::Value::String(name) => Ok(name),
        other => Err(RenderError::Serialization(format!(
            "field names must be strings, found {:?}",
            other
        ))),
    }
}

fn tag_name(tag: &serde_yaml::value::Tag) -> String {
    tag.to_string().trim_start_matches('!').to_string()
}

fn from_yaml_value(value: serde_yaml::Value, tags: Tags) -> Result<RenderValue, RenderError> {
    match value {
        serde_yaml::Value::String(s) => Ok(RenderValue::Text(s)),
        serde_yaml::Value::Mapping(mapping) => {
            let mut fields = HashMap::with_capacity(mapping.len());
            for (key, val) in mapping {
                fields.insert(field_name(key)?, from_yaml_value(val, tags)?);
            }
            Ok(RenderValue::Fields(fields))
        }
        serde_yaml::Value::Tagged(tagged) => match tags {
            Tags::Unwrap => from_yaml_value(tagged.value, tags),
            Tags::AsField => Ok(RenderValue::fields([(
                tag_name(&tagged.tag),
                from_yaml_value(tagged.value, tags)?,
            )])),
        },
        other => Ok(RenderValue::Other(yaml_to_json(other, tags)?)),
    }
}

/// Converts the payload of an unsupported value, applying the same key
/// rule as the supported shapes.
fn yaml_to_json(value: serde_yaml::Value, tags: Tags) -> Result<Value, RenderError> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => serde_json::to_value(n)?,
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(|item| yaml_to_json(item, tags))
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = serde_json::Map::with_capacity(mapping.len());
            for (key, val) in mapping {
                map.insert(field_name(key)?, yaml_to_json(val, tags)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => match tags {
            Tags::Unwrap => yaml_to_json(tagged.value, tags)?,
            Tags::AsField => {
                let mut map = serde_json::Map::with_capacity(1);
                map.insert(tag_name(&tagged.tag), yaml_to_json(tagged.value, tags)?);
                Value::Object(map)
            }
        },
    })
}

//! Reading values out of `FollowTheMoney` property lists.
//!
//! Every property is a list. Depending on the exporter an element is either a
//! bare string or an object holding the value under the property's own name,
//! e.g. `{"email": ["a@x.com"]}` or `{"email": [{"email": "a@x.com"}]}`.
//! Anything else is treated as missing data.

use serde_json::{Map, Value};

pub type Properties = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue<'a> {
    Plain(&'a str),
    Wrapped(&'a Map<String, Value>),
}

impl<'a> PropertyValue<'a> {
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Plain(s)),
            Value::Object(map) => Some(Self::Wrapped(map)),
            _ => None,
        }
    }

    /// The string carried by this element; wrapped objects must hold a string under `key`.
    pub fn resolve(self, key: &str) -> Option<&'a str> {
        match self {
            Self::Plain(s) => Some(s),
            Self::Wrapped(map) => map.get(key).and_then(Value::as_str),
        }
    }
}

fn elements<'a>(properties: &'a Properties, key: &str) -> &'a [Value] {
    match properties.get(key) {
        Some(Value::Array(list)) => list.as_slice(),
        _ => &[],
    }
}

fn resolve<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    PropertyValue::classify(value).and_then(|v| v.resolve(key))
}

/// First value of `key`, or `None` when the key is absent, the list is empty,
/// or the first element has an unrecognized shape.
pub fn extract_single<'a>(properties: &'a Properties, key: &str) -> Option<&'a str> {
    elements(properties, key).first().and_then(|v| resolve(v, key))
}

/// Like [`extract_single`] but an empty string also counts as absent.
pub fn extract_present<'a>(properties: &'a Properties, key: &str) -> Option<&'a str> {
    extract_single(properties, key).filter(|v| !v.is_empty())
}

/// All values of `key` in source order, skipping elements of unrecognized shape.
pub fn extract_multiple<'a>(properties: &'a Properties, key: &str) -> Vec<&'a str> {
    elements(properties, key)
        .iter()
        .filter_map(|v| resolve(v, key))
        .collect()
}

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Scalar value carried by a tools/call argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl From<&Value> for ArgValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => ArgValue::String(s.clone()),
            Value::Number(n) => n.as_f64().map_or(ArgValue::Null, ArgValue::Number),
            Value::Bool(b) => ArgValue::Bool(*b),
            // Arrays and objects have no scalar reading
            Value::Null | Value::Array(_) | Value::Object(_) => ArgValue::Null,
        }
    }
}

impl ArgValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Named arguments of a tool call.
///
/// Extraction is strict about types: a key holding a number is not readable
/// as a string, so `str_or` falls back to its default for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(BTreeMap<String, ArgValue>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(map: Option<&Map<String, Value>>) -> Self {
        map.map(|map| {
            map.iter()
                .map(|(key, value)| (key.clone(), ArgValue::from(value)))
                .collect::<Arguments>()
        })
        .unwrap_or_default()
    }

    pub fn with<K: Into<String>>(mut self, key: K, value: ArgValue) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ArgValue::as_str)
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ArgValue)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, ArgValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

//! The parameter bag: named option values for one CLI invocation.
//!
//! The CLI layer builds one bag per command from parsed arguments, hands it
//! to the [`ValidationEngine`](crate::application::ValidationEngine), and
//! reads the normalized values back out afterwards. Validators mutate the
//! bag in place, but only after every check for that parameter has passed —
//! a failing validator leaves the bag untouched for that parameter.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single parameter value.
///
/// `Bool(false)`, empty strings, and empty lists are all "unset" for the
/// purposes of presence checks — see [`ParamValue::is_truthy`]. This mirrors
/// how the CLI treats an omitted flag and an empty value identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    List(Vec<String>),
    Bool(bool),
    Map(BTreeMap<String, String>),
}

impl ParamValue {
    /// Whether this value counts as "set" for presence/conflict rules.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::List(l) => !l.is_empty(),
            Self::Bool(b) => *b,
            Self::Map(m) => !m.is_empty(),
        }
    }
}

/// Mutable mapping from parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParamBag {
    values: BTreeMap<String, ParamValue>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_str(&mut self, name: &str, value: impl Into<String>) {
        self.values
            .insert(name.to_string(), ParamValue::Str(value.into()));
    }

    pub fn insert_list(&mut self, name: &str, value: Vec<String>) {
        self.values.insert(name.to_string(), ParamValue::List(value));
    }

    pub fn insert_bool(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_string(), ParamValue::Bool(value));
    }

    pub fn insert_map(&mut self, name: &str, value: BTreeMap<String, String>) {
        self.values.insert(name.to_string(), ParamValue::Map(value));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// String value of a parameter, if present and a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// List value of a parameter, if present and a list.
    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(ParamValue::List(l)) => Some(l.as_slice()),
            _ => None,
        }
    }

    /// Boolean value; absent parameters read as `false`.
    pub fn get_bool(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ParamValue::Bool(true)))
    }

    /// Map value of a parameter, if present and a map.
    pub fn get_map(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match self.values.get(name) {
            Some(ParamValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    /// Whether a parameter is present at all (even if falsy).
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether a parameter is present with a truthy value.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(ParamValue::is_truthy)
    }

    /// Replace (or insert) a string value — used by normalizing validators.
    pub fn set_str(&mut self, name: &str, value: impl Into<String>) {
        self.insert_str(name, value);
    }

    /// Replace a parameter with a map value — used by the properties folder.
    pub fn set_map(&mut self, name: &str, value: BTreeMap<String, String>) {
        self.insert_map(name, value);
    }

    /// Iterate over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

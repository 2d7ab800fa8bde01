// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request parameters and their form encoding.
//!
//! The API takes `application/x-www-form-urlencoded` parameters on every
//! verb. [`Params`] keeps keys in insertion order so the body goes out the
//! way it was built; signing sorts a copy (see [`crate::signing`]).

use std::fmt;

use url::form_urlencoded;

/// A single parameter value: a scalar or a list of strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    /// Encoded as repeated `key[]=value` pairs.
    List(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(value) => f.write_str(value),
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Float(value) => write!(f, "{value}"),
            ParamValue::List(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        // Ids and tags beyond i64::MAX are not meaningful to the API; keep
        // them verbatim as text rather than wrapping.
        match i64::try_from(value) {
            Ok(value) => ParamValue::Int(value),
            Err(_) => ParamValue::Str(value.to_string()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Ordered parameter mapping. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Keep only the entries whose key satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|(k, _)| keep(k));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of these parameters ordered by key (stable).
    pub fn sorted(&self) -> Params {
        let mut entries = self.entries.clone();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Params { entries }
    }

    /// Flatten into `(key, value)` string pairs, expanding lists to `key[]`.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::List(items) => {
                    let list_key = format!("{key}[]");
                    pairs.extend(items.iter().map(|item| (list_key.clone(), item.clone())));
                }
                scalar => pairs.push((key.clone(), scalar.to_string())),
            }
        }
        pairs
    }

    /// `application/x-www-form-urlencoded` rendering, in current order.
    pub fn to_form_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place_and_keeps_order() {
        let mut params = Params::new().with("b", 1).with("a", "x");
        let previous = params.insert("b", 2);

        assert_eq!(previous, Some(ParamValue::Int(1)));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(params.get("b"), Some(&ParamValue::Int(2)));
    }

    #[test]
    fn sorted_orders_by_key_without_touching_original() {
        let params = Params::new()
            .with("recipient", "abc")
            .with("amount", 0.1)
            .with("payment_password", "pw");

        let sorted = params.sorted();
        assert_eq!(
            sorted.keys().collect::<Vec<_>>(),
            vec!["amount", "payment_password", "recipient"]
        );
        assert_eq!(params.keys().next(), Some("recipient"));
    }

    #[test]
    fn form_string_encodes_reserved_characters() {
        let params = Params::new()
            .with("label", "my wallet & co")
            .with("note", "a=b");
        assert_eq!(
            params.to_form_string(),
            "label=my+wallet+%26+co&note=a%3Db"
        );
    }

    #[test]
    fn lists_expand_to_repeated_bracket_keys() {
        let params = Params::new()
            .with("user_id", 7)
            .with("permissions", vec!["1", "3"]);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("user_id".to_string(), "7".to_string()),
                ("permissions[]".to_string(), "1".to_string()),
                ("permissions[]".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(
            params.to_form_string(),
            "user_id=7&permissions%5B%5D=1&permissions%5B%5D=3"
        );
    }

    #[test]
    fn floats_render_without_exponent() {
        assert_eq!(ParamValue::Float(0.1).to_string(), "0.1");
        assert_eq!(ParamValue::Float(2.0).to_string(), "2");
        assert_eq!(ParamValue::Float(0.00000001).to_string(), "0.00000001");
    }

    #[test]
    fn huge_u64_falls_back_to_text() {
        assert_eq!(ParamValue::from(5u64), ParamValue::Int(5));
        assert_eq!(
            ParamValue::from(u64::MAX),
            ParamValue::Str(u64::MAX.to_string())
        );
    }

    #[test]
    fn remove_and_retain() {
        let mut params: Params = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(params.remove("b"), Some(ParamValue::from("2")));
        assert_eq!(params.remove("b"), None);

        params.retain(|key| key != "c");
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("a"));
    }
}

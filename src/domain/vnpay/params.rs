//! Parameter sets and their canonical string form.
//!
//! The gateway signs a deterministic rendering of the request fields:
//!
//! 1. fields with empty values and the signature fields are dropped
//! 2. keys and values are percent-encoded (`%20` in values becomes `+`)
//! 3. pairs are sorted by encoded key, byte-wise ascending
//! 4. pairs are joined as `k1=v1&k2=v2` with no further encoding
//!
//! Two sets holding the same pairs always produce byte-identical output,
//! whatever order the fields were inserted in.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::fields;

/// Characters escaped in keys and values: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the URI component unreserved marks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An unordered mapping from field name to scalar value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    fields: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a field. Integers and strings are both accepted.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.fields.insert(key.into(), value.to_string());
    }

    /// Chaining variant of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts the field only when the value is non-empty.
    pub fn with_optional(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(key, value);
        }
        self
    }

    /// Returns the raw field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the field value, treating an empty string as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    /// True when the field is present, even with an empty value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields, empty ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes `vnp_SecureHash` and `vnp_SecureHashType`, returning the hash.
    pub fn take_signature(&mut self) -> Option<String> {
        self.fields.remove(fields::SECURE_HASH_TYPE);
        self.fields.remove(fields::SECURE_HASH)
    }

    /// Renders the canonical string used as HMAC input.
    pub fn canonicalize(&self) -> CanonicalString {
        canonicalize(self)
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for ParameterSet {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Deterministic, percent-encoded rendering of a [`ParameterSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalString(String);

impl CanonicalString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalizes a parameter set.
///
/// Signature fields are never part of the output, so the same function
/// serves both the signing and the verifying side.
pub fn canonicalize(params: &ParameterSet) -> CanonicalString {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(key, value)| !value.is_empty() && !fields::SIGNATURE_FIELDS.contains(key))
        .map(|(key, value)| (encode_component(key), encode_value(value)))
        .collect();

    // Encoded keys are unique, so an unstable sort is still deterministic.
    pairs.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    CanonicalString(joined)
}

/// Percent-encodes a key or value component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Percent-encodes a value using the gateway's space-as-plus convention.
pub fn encode_value(raw: &str) -> String {
    encode_component(raw).replace("%20", "+")
}

//! Accepted header collection shapes.

use axum::http::HeaderMap;
use serde_json::Value;

use crate::error::MicroversionError;

/// Prefix CGI/WSGI-style environments put in front of HTTP header keys.
pub const ENVIRON_HTTP_PREFIX: &str = "HTTP_";

/// A header collection, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSource {
    /// A single-valued mapping. Keys are lower-cased on fold, values kept as-is.
    Mapping(Vec<(String, String)>),
    /// Ordered `(name, value)` pairs; names may repeat.
    Pairs(Vec<(String, String)>),
    /// Environment-style entries such as `HTTP_OPENSTACK_API_VERSION`.
    Environ(Vec<(String, String)>),
}

impl HeaderSource {
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Mapping(collect_entries(entries))
    }

    pub fn pairs<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Pairs(collect_entries(entries))
    }

    /// Build an `Environ` source, keeping only the `HTTP_*` entries.
    pub fn environ<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Environ(headers_from_environ(entries))
    }

    /// Resolve an untyped JSON document into a header source.
    ///
    /// An object is a mapping, an array of `[name, value]` string pairs is a
    /// pair list. Anything else is rejected.
    pub fn from_json(value: &Value) -> Result<Self, MicroversionError> {
        match value {
            Value::Object(map) => {
                let entries = map
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), json_string(name, value)?)))
                    .collect::<Result<Vec<_>, MicroversionError>>()?;
                Ok(Self::Mapping(entries))
            }
            Value::Array(items) => {
                let entries = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| json_pair(index, item))
                    .collect::<Result<Vec<_>, MicroversionError>>()?;
                Ok(Self::Pairs(entries))
            }
            other => Err(invalid(format!(
                "expected an object or an array of pairs, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Resolve a JSON object holding a CGI-style environment.
    ///
    /// Non-`HTTP_*` keys are dropped whatever their type; `HTTP_*` values must
    /// be strings.
    pub fn environ_from_json(value: &Value) -> Result<Self, MicroversionError> {
        let Value::Object(map) = value else {
            return Err(invalid(format!(
                "expected an environ object, got {}",
                json_kind(value)
            )));
        };
        let entries = map
            .iter()
            .filter(|(name, _)| name.starts_with(ENVIRON_HTTP_PREFIX))
            .map(|(name, value)| Ok((name.clone(), json_string(name, value)?)))
            .collect::<Result<Vec<_>, MicroversionError>>()?;
        Ok(Self::Environ(entries))
    }
}

impl From<&HeaderMap> for HeaderSource {
    /// `HeaderMap` is multi-valued, so it folds like a pair list.
    fn from(headers: &HeaderMap) -> Self {
        let entries = headers
            .iter()
            .map(|(name, value)| {
                let value = match value.to_str() {
                    Ok(text) => text.to_string(),
                    Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
                };
                (name.as_str().to_string(), value)
            })
            .collect();
        Self::Pairs(entries)
    }
}

/// Keep only the `HTTP_*` entries of an environment, preserving key case.
pub fn headers_from_environ<I, K, V>(environ: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    environ
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .filter(|(name, _)| name.starts_with(ENVIRON_HTTP_PREFIX))
        .collect()
}

fn collect_entries<I, K, V>(entries: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

fn json_string(name: &str, value: &Value) -> Result<String, MicroversionError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(format!("header {name:?} has a {} value", json_kind(value))))
}

fn json_pair(index: usize, item: &Value) -> Result<(String, String), MicroversionError> {
    match item.as_array().map(Vec::as_slice) {
        Some([Value::String(name), Value::String(value)]) => Ok((name.clone(), value.clone())),
        _ => Err(invalid(format!(
            "entry {index} is not a [name, value] string pair"
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid(reason: String) -> MicroversionError {
    MicroversionError::InvalidHeaderSource { reason }
}

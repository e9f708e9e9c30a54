//! Folding a header source into one canonical mapping, and looking names up in it.

use std::collections::HashMap;

use crate::headers::HeaderSource;

/// Prefix environ-style keys carry once lower-cased by folding.
const ENVIRON_FALLBACK_PREFIX: &str = "http_";

/// Lower-case header name → single string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedHeaders {
    inner: HashMap<String, String>,
}

impl FoldedHeaders {
    /// Look up a lower-case header name.
    ///
    /// Tries the exact name first, then the environ spelling
    /// (`content-type` → `http_content_type`).
    pub fn get(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.inner.get(name) {
            return Some(value.as_str());
        }
        let environ_key = format!("{ENVIRON_FALLBACK_PREFIX}{}", name.replace('-', "_"));
        self.inner.get(&environ_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Normalize any [`HeaderSource`] into [`FoldedHeaders`].
pub fn fold_headers(source: &HeaderSource) -> FoldedHeaders {
    let inner = match source {
        HeaderSource::Mapping(entries) | HeaderSource::Environ(entries) => entries
            .iter()
            .map(|(name, value)| (name.to_lowercase(), value.clone()))
            .collect(),
        HeaderSource::Pairs(entries) => fold_pairs(entries),
    };
    FoldedHeaders { inner }
}

fn fold_pairs(entries: &[(String, String)]) -> HashMap<String, String> {
    let mut grouped: HashMap<String, Vec<&str>> = HashMap::new();
    for (name, value) in entries {
        grouped
            .entry(name.to_lowercase())
            .or_default()
            .push(value.trim());
    }
    grouped
        .into_iter()
        .map(|(name, values)| (name, values.join(",")))
        .collect()
}

//! Placeholder substitution for destination templates and progress messages.
//!
//! # Design
//!
//! An [`Interpolator`] is a cheap value: a marker pair plus a key→value map.
//! Call sites build (or clone) their own instance instead of sharing one
//! mutable global, so no keys leak between unrelated contexts. The default
//! markers are `[` / `]` (`[web-root]`); alternate marker pairs such as
//! `__` / `__` are supported for templating contexts where brackets are
//! already taken.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Token substitution engine.
///
/// Replaces every `prefix + key + suffix` occurrence in a template with
/// the value registered for `key`. In strict mode a token whose key is
/// unknown is an error; in tolerant mode it passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolator {
    prefix: String,
    suffix: String,
    data: BTreeMap<String, String>,
}

impl Interpolator {
    /// Create an interpolator with the default `[` / `]` markers.
    pub fn new() -> Self {
        Self::with_markers("[", "]")
    }

    /// Create an interpolator with custom marker strings.
    pub fn with_markers(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            data: BTreeMap::new(),
        }
    }

    /// Merge additional key/value pairs; later calls win for the same key.
    pub fn add_data<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in data {
            self.data.insert(k.into(), v.into());
        }
        self
    }

    /// Replace all accumulated data.
    pub fn set_data<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.data.clear();
        self.add_data(data)
    }

    /// Look up a registered value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Strictly interpolate `template`: every token must resolve.
    pub fn interpolate(&self, template: &str) -> Result<String, DomainError> {
        self.interpolate_with(template, &[], true)
    }

    /// Tolerantly interpolate `template`: unknown tokens pass through.
    pub fn interpolate_or_keep(&self, template: &str) -> String {
        self.interpolate_with(template, &[], false)
            .unwrap_or_else(|_| template.to_string())
    }

    /// Interpolate with a per-call data overlay.
    ///
    /// Overlay entries shadow the accumulated data for this call only.
    /// With `strict` set, a token whose key is in neither map fails with
    /// [`DomainError::MissingPlaceholder`]; otherwise the token text is
    /// kept verbatim. Text after an unterminated opening marker is also
    /// kept verbatim.
    pub fn interpolate_with(
        &self,
        template: &str,
        overlay: &[(&str, &str)],
        strict: bool,
    ) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(&self.prefix) {
            let after_prefix = start + self.prefix.len();
            let Some(key_len) = rest[after_prefix..].find(&self.suffix) else {
                // No closing marker; nothing past here can be a token.
                break;
            };
            let key = &rest[after_prefix..after_prefix + key_len];
            let token_end = after_prefix + key_len + self.suffix.len();

            out.push_str(&rest[..start]);

            let value = overlay
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .or_else(|| self.get(key));

            match value {
                Some(value) => out.push_str(value),
                None if strict => {
                    return Err(DomainError::MissingPlaceholder {
                        key: key.to_string(),
                        template: template.to_string(),
                    });
                }
                // Tolerant: keep the token text, including markers.
                None => out.push_str(&rest[start..token_end]),
            }

            rest = &rest[token_end..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

use crate::constants::defaults;
use crate::resolved_options::ResolvedOptions;
use serde::{Deserialize, Serialize};

/// Partially specified CORS configuration supplied by the host application.
///
/// Every field may be left unset. [`CorsOptions::resolve`] replaces unset fields with the
/// values in [`constants::defaults`](crate::constants::defaults). An empty list counts as
/// unset. `allow_credentials` is tri-state so an explicit `false` is never overwritten.
///
/// The struct deserializes from any serde format; missing keys and `null` both mean unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = Some(collect_list(values));
        self
    }

    pub fn allowed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(collect_list(values));
        self
    }

    pub fn allowed_methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = Some(collect_list(values));
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(enabled);
        self
    }

    /// Merge the built-in defaults into every unset field.
    ///
    /// Supplied values are taken as-is: nothing is trimmed, deduplicated or validated.
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            allowed_origins: resolve_list(self.allowed_origins, defaults::ALLOWED_ORIGINS),
            allowed_headers: resolve_list(self.allowed_headers, defaults::ALLOWED_HEADERS),
            allowed_methods: resolve_list(self.allowed_methods, defaults::ALLOWED_METHODS),
            allow_credentials: self
                .allow_credentials
                .unwrap_or(defaults::ALLOW_CREDENTIALS),
        }
    }
}

impl From<ResolvedOptions> for CorsOptions {
    fn from(resolved: ResolvedOptions) -> Self {
        Self {
            allowed_origins: Some(resolved.allowed_origins),
            allowed_headers: Some(resolved.allowed_headers),
            allowed_methods: Some(resolved.allowed_methods),
            allow_credentials: Some(resolved.allow_credentials),
        }
    }
}

fn collect_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

fn resolve_list(values: Option<Vec<String>>, fallback: &[&str]) -> Vec<String> {
    match values {
        Some(values) if !values.is_empty() => values,
        _ => fallback.iter().map(|value| (*value).to_string()).collect(),
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

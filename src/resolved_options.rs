use crate::options::CorsOptions;

/// Fully populated CORS policy produced by [`CorsOptions::resolve`].
///
/// Every list is non-empty. The value is never mutated once built; a [`Cors`](crate::Cors)
/// keeps one for its whole lifetime and shares it across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) allowed_headers: Vec<String>,
    pub(crate) allowed_methods: Vec<String>,
    pub(crate) allow_credentials: bool,
}

impl ResolvedOptions {
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn allowed_headers(&self) -> &[String] {
        &self.allowed_headers
    }

    pub fn allowed_methods(&self) -> &[String] {
        &self.allowed_methods
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        CorsOptions::default().resolve()
    }
}

#[cfg(test)]
#[path = "resolved_options_test.rs"]
mod resolved_options_test;

use indexmap::IndexMap;
use std::collections::HashMap;
use std::convert::Infallible;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    /// Set `name` to `value`, replacing any earlier value while keeping its position.
    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.headers.insert(name.to_string(), value);
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.headers.insert(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Destination for the headers a [`Cors`](crate::Cors) emits.
///
/// `set_header` has overwrite semantics: a later call for the same name replaces the
/// value. Sinks that can reject a name or value report it through `Error`.
pub trait HeaderSink {
    type Error;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
}

impl HeaderSink for Headers {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl HeaderSink for HashMap<String, String> {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

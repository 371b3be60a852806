use crate::headers::Headers;
use thiserror::Error;

/// Signal returned to the host pipeline after the headers have been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Hand the request to the next stage.
    Continue,
    /// Finish the exchange now with the given status and no body.
    Halt(u16),
}

impl Flow {
    pub fn is_halt(&self) -> bool {
        matches!(self, Flow::Halt(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Flow::Continue => None,
            Flow::Halt(status) => Some(*status),
        }
    }
}

/// Headers and pipeline decision produced for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    pub flow: Flow,
}

/// Errors raised while writing the policy into a host's header representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    #[error("header name {name:?} is not a valid HTTP header name")]
    InvalidHeaderName { name: String },
    #[error("value {value:?} for header {name} is not a valid HTTP header value")]
    InvalidHeaderValue { name: String, value: String },
}

//! Integration with the [`http`] crate types used by hyper, axum and tower stacks.

use crate::constants::method;
use crate::cors::Cors;
use crate::headers::HeaderSink;
use crate::result::{CorsError, Flow};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Response, StatusCode};

impl HeaderSink for HeaderMap {
    type Error = CorsError;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| CorsError::InvalidHeaderName {
                name: name.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| CorsError::InvalidHeaderValue {
                name: name.to_string(),
                value: value.to_string(),
            })?;
        self.insert(header_name, header_value);
        Ok(())
    }
}

impl<B> HeaderSink for Response<B> {
    type Error = CorsError;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.headers_mut().set_header(name, value)
    }
}

impl Flow {
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status()
            .and_then(|status| StatusCode::from_u16(status).ok())
    }
}

impl Cors {
    /// Evaluate an [`http::Method`] and write the headers into `headers`.
    pub fn apply_http(
        &self,
        method: &http::Method,
        headers: &mut HeaderMap,
    ) -> Result<Flow, CorsError> {
        self.apply(method.as_str(), headers)
    }

    /// Build the empty `204 No Content` response that finishes a preflight exchange.
    pub fn preflight_response<B: Default>(&self) -> Result<Response<B>, CorsError> {
        let mut response = Response::new(B::default());
        *response.status_mut() = StatusCode::NO_CONTENT;
        self.apply(method::OPTIONS, response.headers_mut())?;
        Ok(response)
    }
}

#[cfg(test)]
#[path = "http_sink_test.rs"]
mod http_sink_test;

use crate::constants::{defaults, method};
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderSink, Headers};
use crate::options::CorsOptions;
use crate::resolved_options::ResolvedOptions;
use crate::result::{CorsResult, Flow};
use tracing::{debug, trace};

/// CORS middleware that broadcasts a static policy on every request.
///
/// The options are resolved and the header values joined once, in [`Cors::new`]. After
/// that the value is read-only and can be shared between threads behind an `Arc`.
///
/// Every request receives the same headers. `OPTIONS` requests are then halted with
/// `204 No Content`; every other method continues down the pipeline.
///
/// Configured origins are joined with a single space into one `Access-Control-Allow-Origin`
/// value. Browsers only accept `*` or a single origin there, so more than one literal
/// origin will not be honoured by them.
#[derive(Debug, Clone)]
pub struct Cors {
    options: ResolvedOptions,
    headers: Headers,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self::from_resolved(options.resolve())
    }

    pub fn from_resolved(options: ResolvedOptions) -> Self {
        let headers = HeaderBuilder::new(&options).build().into_headers();
        debug!(
            origins = ?options.allowed_origins(),
            methods = ?options.allowed_methods(),
            credentials = options.allow_credentials(),
            "resolved CORS policy"
        );
        Self { options, headers }
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Headers written on every request, in emission order.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Evaluate a request by method, returning an owned copy of the headers to write.
    pub fn check(&self, request_method: &str) -> CorsResult {
        let flow = Self::flow_for(request_method);
        trace!(method = request_method, ?flow, "evaluated CORS request");
        CorsResult {
            headers: self.headers.clone(),
            flow,
        }
    }

    /// Write the policy headers into `sink`, then report whether the pipeline continues.
    ///
    /// Headers are written before the flow is decided, so a halted preflight carries the
    /// same headers as any other response.
    pub fn apply<S>(&self, request_method: &str, sink: &mut S) -> Result<Flow, S::Error>
    where
        S: HeaderSink + ?Sized,
    {
        for (name, value) in &self.headers {
            sink.set_header(name, value)?;
        }

        let flow = Self::flow_for(request_method);
        trace!(method = request_method, ?flow, "applied CORS headers");
        Ok(flow)
    }

    pub fn is_preflight(request_method: &str) -> bool {
        request_method == method::OPTIONS
    }

    fn flow_for(request_method: &str) -> Flow {
        if Self::is_preflight(request_method) {
            Flow::Halt(defaults::PREFLIGHT_STATUS)
        } else {
            Flow::Continue
        }
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

impl From<CorsOptions> for Cors {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;

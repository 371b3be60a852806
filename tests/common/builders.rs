#![allow(dead_code)]

use broadcast_cors_rs::constants::method;
use broadcast_cors_rs::{Cors, CorsOptions, CorsResult, Flow, Headers};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allowed_origins(origins);
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allowed_headers(headers);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allowed_methods(methods);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.allow_credentials(enabled);
        self
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

pub struct RequestBuilder {
    method: String,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    pub fn check(self, cors: &Cors) -> CorsResult {
        cors.check(&self.method)
    }

    pub fn apply(self, cors: &Cors) -> (Headers, Flow) {
        let mut headers = Headers::new();
        let flow = match cors.apply(&self.method, &mut headers) {
            Ok(flow) => flow,
            Err(never) => match never {},
        };
        (headers, flow)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

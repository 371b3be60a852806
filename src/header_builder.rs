use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::resolved_options::ResolvedOptions;

const ORIGIN_SEPARATOR: &str = " ";
const LIST_SEPARATOR: &str = ",";

pub(crate) struct HeaderBuilder<'a> {
    options: &'a ResolvedOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a ResolvedOptions) -> Self {
        Self { options }
    }

    /// All headers for the policy in emission order: origin, headers, methods, credentials.
    pub(crate) fn build(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(4);
        headers.extend(self.build_origin_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_credentials_header());
        headers
    }

    /// Origins are broadcast as one space-joined value; the request origin is not consulted.
    pub(crate) fn build_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.options.allowed_origins.join(ORIGIN_SEPARATOR),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.allowed_headers.join(LIST_SEPARATOR),
        );
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.allowed_methods.join(LIST_SEPARATOR),
        );
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                self.options.allow_credentials.to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;

pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";

    pub const ACCEPT: &str = "Accept";
    pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const X_CSRF_TOKEN: &str = "X-CSRF-Token";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Built-in values used when a [`CorsOptions`](crate::CorsOptions) field is left unset.
pub mod defaults {
    use super::{header, method};

    pub const WILDCARD: &str = "*";

    pub const ALLOWED_ORIGINS: &[&str] = &[WILDCARD];

    pub const ALLOWED_HEADERS: &[&str] = &[
        header::CONTENT_TYPE,
        header::CONTENT_LENGTH,
        header::ACCEPT_ENCODING,
        header::X_CSRF_TOKEN,
        header::AUTHORIZATION,
        header::ACCEPT,
        header::ORIGIN,
        header::CACHE_CONTROL,
        header::X_REQUESTED_WITH,
    ];

    /// `OPTIONS` is absent on purpose: preflight handling does not consult this list.
    pub const ALLOWED_METHODS: &[&str] = &[
        method::GET,
        method::POST,
        method::PUT,
        method::DELETE,
        method::PATCH,
        method::HEAD,
    ];

    pub const ALLOW_CREDENTIALS: bool = true;

    /// Status written for a halted preflight request (204 No Content).
    pub const PREFLIGHT_STATUS: u16 = 204;
}

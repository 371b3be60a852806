pub mod constants;
mod cors;
mod header_builder;
mod headers;
#[cfg(feature = "http")]
mod http_sink;
mod options;
mod resolved_options;
mod result;

pub use cors::Cors;
pub use headers::{HeaderSink, Headers};
pub use options::CorsOptions;
pub use resolved_options::ResolvedOptions;
pub use result::{CorsError, CorsResult, Flow};

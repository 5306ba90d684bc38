mod error;
mod request;
mod security_headers;

pub use self::error::ErrorMiddleware;
pub use self::request::RequestMiddleware;
pub use self::security_headers::SecurityHeadersMiddleware;

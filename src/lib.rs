//! A minimal HTTP/1.1 client: one GET, one read, body to stdout or a file.
//!
//! See the `client` module for the request/response exchange.
//! See the `url` module for how a URL is split into host, port and path.
//! See the `output` module for where the body goes.

pub mod buffer;
pub mod client;
pub mod error;
pub mod options;
pub mod output;
pub mod protocol;
pub mod url;

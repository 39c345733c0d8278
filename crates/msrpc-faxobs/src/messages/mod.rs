//! Typed request and response records, one pair per operation.
//!
//! Requests hold the `[in]` arguments of an operation, responses the `[out]`
//! arguments. `[in, out]` arguments appear in both. The status of a call is
//! not part of the response; it travels next to it in the reply.

mod config;
mod jobs;
mod ports;
mod routing;
mod security;
mod service;

pub use config::*;
pub use jobs::*;
pub use ports::*;
pub use routing::*;
pub use security::*;
pub use service::*;

//! # Dispatch Prelude
//!
//! Convenient re-exports for interface crates and server implementations.
//!
//! ```rust
//! use msrpc_dispatch::prelude::*;
//! ```

pub use crate::codec::{CodecError, Reply, StubCodec};
pub use crate::context::{CallContext, CancellationHandle};
pub use crate::error::{DispatchError, RegistryError};
pub use crate::operation::{Dispatched, Envelope, Operation, OperationKind};
pub use crate::server::{CallOutcome, Registry, ServerHandle};
pub use crate::status::Status;
pub use crate::syntax::{ContextHandle, SyntaxId, SyntaxVersion};

//! # MSRPC Operation Dispatch
//!
//! Transport-agnostic seam between an opnum-addressed RPC wire protocol and
//! strongly typed server implementations.
//!
//! ## Features
//! - Fixed decode → invoke → encode pipeline shared by every operation
//! - Per-call envelopes owned by the call, never shared
//! - Status vocabulary carried in replies instead of engine faults
//! - Registry binding interface identity and version to a dispatcher
//! - Cooperative cancellation through the call context

pub mod codec;
pub mod context;
pub mod error;
pub mod operation;
pub mod prelude;
pub mod server;
pub mod status;
pub mod syntax;

// Re-export main types
pub use codec::{CodecError, DEFAULT_MAX_STUB_SIZE, Reply, StubCodec};
pub use context::{CallContext, CancellationHandle};
pub use error::{DispatchError, RegistryError};
pub use operation::{DISPATCH_TARGET, Dispatched, Envelope, Operation, OperationKind, serve};
pub use server::{CallOutcome, Registry, ServerHandle};
pub use status::Status;
pub use syntax::{ContextHandle, SyntaxId, SyntaxVersion};

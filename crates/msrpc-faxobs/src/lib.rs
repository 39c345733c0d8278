//! # Faxobs Interface
//!
//! Typed server stubs for the legacy fax server interface
//! (`ea0a3165-4834-11d2-a6f8-00c04fa346cc`, version 4.0).
//!
//! Applications implement [`FaxobsServer`], overriding only the operations
//! they support, and bind it to a transport registry with
//! [`register_faxobs_server`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use msrpc_dispatch::{CallContext, Registry, Status};
//! use msrpc_faxobs::{FaxobsServer, GetVersionRequest, GetVersionResponse, FaxVersion};
//!
//! struct VersionOnly;
//!
//! #[async_trait]
//! impl FaxobsServer for VersionOnly {
//!     async fn get_version(
//!         &self,
//!         _ctx: &CallContext,
//!         _req: GetVersionRequest,
//!     ) -> Result<GetVersionResponse, Status> {
//!         Ok(GetVersionResponse { version: FaxVersion::new(4, 0) })
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! msrpc_faxobs::register_faxobs_server(&mut registry, Arc::new(VersionOnly)).unwrap();
//! assert!(registry.is_registered(&msrpc_faxobs::FAXOBS_SYNTAX_V4_0));
//! ```

pub mod dispatch;
pub mod messages;
pub mod ops;
pub mod server;
pub mod types;

use msrpc_dispatch::SyntaxId;
use uuid::Uuid;

pub use dispatch::{FaxobsDispatcher, register_faxobs_server, register_faxobs_server_with_codec};
pub use messages::*;
pub use ops::{MAX_OPNUM, OPERATIONS, RESERVED_OPNUM, is_reserved_opnum, is_routable_opnum, operation_name};
pub use server::{FaxobsServer, UnimplementedFaxobsServer};
pub use types::*;

/// Interface identity of faxobs.
pub const FAXOBS_UUID: Uuid = Uuid::from_u128(0xea0a3165_4834_11d2_a6f8_00c04fa346cc);

/// Abstract syntax of faxobs version 4.0.
pub const FAXOBS_SYNTAX_V4_0: SyntaxId = SyntaxId::new(FAXOBS_UUID, 4, 0);

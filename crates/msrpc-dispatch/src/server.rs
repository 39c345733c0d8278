use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, info};

use crate::codec::StubCodec;
use crate::context::CallContext;
use crate::error::{DispatchError, RegistryError};
use crate::operation::{DISPATCH_TARGET, Dispatched};
use crate::status::Status;
use crate::syntax::SyntaxId;

/// Interface-specific routing function the transport calls into.
#[async_trait]
pub trait ServerHandle: Send + Sync {
    /// Codec the reply of a dispatched call must be encoded with.
    fn codec(&self) -> &StubCodec;

    /// Route one call.
    ///
    /// Returns `Ok(None)` for opnums outside the interface's defined set,
    /// reserved ones included, without touching the stub.
    async fn handle(
        &self,
        ctx: &CallContext,
        opnum: u16,
        stub: &[u8],
    ) -> Result<Option<Dispatched>, DispatchError>;
}

/// What the transport sends back for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Encoded reply stub plus the status for the protocol-level return value.
    Reply { status: Status, stub: Bytes },
    /// The opnum is not routable; this layer produces no reply content.
    NoReply,
}

/// Registration sink of the transport: interface identity and version to
/// routing function.
///
/// Populated once at startup and then shared read-only.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<SyntaxId, Arc<dyn ServerHandle>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a routing function to an interface identity and version.
    pub fn register(
        &mut self,
        syntax: SyntaxId,
        handler: Arc<dyn ServerHandle>,
    ) -> Result<(), RegistryError> {
        if self.handlers.contains_key(&syntax) {
            return Err(RegistryError::AlreadyRegistered(syntax));
        }
        info!(target: DISPATCH_TARGET, %syntax, "registered server");
        self.handlers.insert(syntax, handler);
        Ok(())
    }

    pub fn lookup(&self, syntax: &SyntaxId) -> Option<Arc<dyn ServerHandle>> {
        self.handlers.get(syntax).cloned()
    }

    pub fn is_registered(&self, syntax: &SyntaxId) -> bool {
        self.handlers.contains_key(syntax)
    }

    pub fn registered_syntaxes(&self) -> Vec<SyntaxId> {
        self.handlers.keys().copied().collect()
    }

    /// Resolve the interface, dispatch the call and encode its reply.
    pub async fn call(
        &self,
        ctx: &CallContext,
        syntax: &SyntaxId,
        opnum: u16,
        stub: &[u8],
    ) -> Result<CallOutcome, DispatchError> {
        let handler = self
            .lookup(syntax)
            .ok_or(DispatchError::UnknownInterface(*syntax))?;

        let Some(dispatched) = handler.handle(ctx, opnum, stub).await? else {
            debug!(
                target: DISPATCH_TARGET,
                call_id = ctx.call_id,
                %syntax,
                opnum,
                "opnum not routable, no reply"
            );
            return Ok(CallOutcome::NoReply);
        };

        let operation = &dispatched.operation;
        let stub = operation
            .encode_response(handler.codec())
            .map_err(|source| DispatchError::Encode {
                opnum: operation.opnum(),
                operation: operation.name(),
                source,
            })?;

        Ok(CallOutcome::Reply {
            status: dispatched.status,
            stub,
        })
    }
}

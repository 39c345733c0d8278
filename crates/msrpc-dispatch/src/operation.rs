//! Operation envelopes and the fixed decode → invoke → encode pipeline.

use std::any::Any;
use std::fmt;
use std::future::Future;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::codec::{CodecError, StubCodec};
use crate::context::CallContext;
use crate::error::DispatchError;
use crate::status::Status;

/// Tracing target for dispatch operations.
pub const DISPATCH_TARGET: &str = "msrpc_dispatch::dispatch";

/// Static description of one operation of an interface.
///
/// Implemented by zero-sized marker types, one per opnum.
pub trait OperationKind: Send + Sync + 'static {
    const OPNUM: u16;
    /// Wire name of the operation, used in logs and errors.
    const NAME: &'static str;

    type Request: DeserializeOwned + Serialize + fmt::Debug + Send + Sync + 'static;
    type Response: DeserializeOwned
        + Serialize
        + Default
        + Clone
        + fmt::Debug
        + Send
        + Sync
        + 'static;
}

/// A completed operation exchange, ready for the transport to encode.
pub trait Operation: fmt::Debug + Send + Sync {
    fn opnum(&self) -> u16;

    fn name(&self) -> &'static str;

    /// Status stored in the reply.
    fn status(&self) -> Status;

    /// Encode the reply stub.
    fn encode_response(&self, codec: &StubCodec) -> Result<Bytes, CodecError>;

    fn as_any(&self) -> &dyn Any;
}

/// Per-call container for the output and status of one operation.
///
/// Created fresh for every call by decoding the request stub, completed at
/// most once with the handler outcome, and never reused. The decoded request
/// is moved to the handler and not kept here.
pub struct Envelope<K: OperationKind> {
    response: K::Response,
    status: Status,
}

impl<K: OperationKind> Envelope<K> {
    /// Decode the request stub and allocate an empty envelope for its reply.
    pub fn decode(codec: &StubCodec, stub: &[u8]) -> Result<(K::Request, Self), CodecError> {
        let request = codec.decode_request(stub)?;
        Ok((
            request,
            Self {
                response: K::Response::default(),
                status: Status::SUCCESS,
            },
        ))
    }

    /// Store the handler outcome. On error the output stays zero-valued so a
    /// well-formed, error-flagged reply can still be encoded.
    pub fn complete(mut self, outcome: Result<K::Response, Status>) -> Self {
        self.status = Status::from_result(&outcome);
        self.response = outcome.unwrap_or_default();
        self
    }

    pub fn response(&self) -> &K::Response {
        &self.response
    }
}

impl<K: OperationKind> fmt::Debug for Envelope<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("opnum", &K::OPNUM)
            .field("name", &K::NAME)
            .field("response", &self.response)
            .field("status", &self.status)
            .finish()
    }
}

impl<K: OperationKind> Operation for Envelope<K> {
    fn opnum(&self) -> u16 {
        K::OPNUM
    }

    fn name(&self) -> &'static str {
        K::NAME
    }

    fn status(&self) -> Status {
        self.status
    }

    fn encode_response(&self, codec: &StubCodec) -> Result<Bytes, CodecError> {
        codec.encode_reply(&self.response, self.status)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Result of dispatching a routable opnum.
#[derive(Debug)]
pub struct Dispatched {
    pub operation: Box<dyn Operation>,
    /// Handler outcome; [`Status::SUCCESS`] when the handler returned `Ok`.
    pub status: Status,
}

impl Dispatched {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Typed view of the completed envelope.
    pub fn envelope<K: OperationKind>(&self) -> Option<&Envelope<K>> {
        self.operation.as_any().downcast_ref::<Envelope<K>>()
    }
}

/// Run one call of operation `K` through the pipeline.
///
/// Decoding happens before `invoke` is called; if it fails the handler never
/// runs and the decode error is returned as is.
pub async fn serve<K, F, Fut>(
    codec: &StubCodec,
    ctx: &CallContext,
    stub: &[u8],
    invoke: F,
) -> Result<Dispatched, DispatchError>
where
    K: OperationKind,
    F: FnOnce(K::Request) -> Fut,
    Fut: Future<Output = Result<K::Response, Status>>,
{
    let (request, envelope) = match Envelope::<K>::decode(codec, stub) {
        Ok(decoded) => decoded,
        Err(source) => {
            warn!(
                target: DISPATCH_TARGET,
                call_id = ctx.call_id,
                syntax = ctx.syntax.map(tracing::field::display),
                opnum = K::OPNUM,
                operation = K::NAME,
                error = %source,
                "failed to decode request stub"
            );
            return Err(DispatchError::Decode {
                opnum: K::OPNUM,
                operation: K::NAME,
                source,
            });
        }
    };

    let outcome = invoke(request).await;
    let envelope = envelope.complete(outcome);
    let status = envelope.status;

    debug!(
        target: DISPATCH_TARGET,
        call_id = ctx.call_id,
        syntax = ctx.syntax.map(tracing::field::display),
        opnum = K::OPNUM,
        operation = K::NAME,
        %status,
        "operation completed"
    );

    Ok(Dispatched {
        operation: Box::new(envelope),
        status,
    })
}

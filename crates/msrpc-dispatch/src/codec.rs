//! Stub codec: turns call payloads into typed values and back.
//!
//! Stubs are encoded with [`postcard`]. A stub must be consumed completely;
//! leftover bytes after a request mean the caller and server disagree on the
//! request shape, which is treated as malformed input.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::Status;

/// Default upper bound for a single request or reply stub.
pub const DEFAULT_MAX_STUB_SIZE: usize = 1_048_576;

/// Errors raised while decoding or encoding a stub.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("stub of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("malformed stub: {0}")]
    Malformed(#[source] postcard::Error),

    #[error("{remaining} unexpected trailing bytes after stub")]
    TrailingBytes { remaining: usize },

    #[error("failed to serialize stub: {0}")]
    Serialize(#[source] postcard::Error),
}

/// Return values of one call as they travel back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply<R> {
    pub response: R,
    pub status: Status,
}

#[derive(Serialize)]
struct ReplyRef<'a, R> {
    response: &'a R,
    status: Status,
}

/// Stub codec with a size limit applied in both directions.
#[derive(Debug, Clone, Copy)]
pub struct StubCodec {
    max_stub_size: usize,
}

impl StubCodec {
    pub fn new() -> Self {
        Self::with_max_stub_size(DEFAULT_MAX_STUB_SIZE)
    }

    pub fn with_max_stub_size(max_stub_size: usize) -> Self {
        Self { max_stub_size }
    }

    pub fn max_stub_size(&self) -> usize {
        self.max_stub_size
    }

    /// Server side: decode the input arguments of a call.
    pub fn decode_request<T: DeserializeOwned>(&self, stub: &[u8]) -> Result<T, CodecError> {
        self.decode(stub)
    }

    /// Server side: encode the output arguments and status of a call.
    pub fn encode_reply<R: Serialize>(&self, response: &R, status: Status) -> Result<Bytes, CodecError> {
        self.encode(&ReplyRef { response, status })
    }

    /// Client side: encode the input arguments of a call.
    pub fn encode_request<T: Serialize>(&self, request: &T) -> Result<Bytes, CodecError> {
        self.encode(request)
    }

    /// Client side: decode a reply produced by [`StubCodec::encode_reply`].
    pub fn decode_reply<R: DeserializeOwned>(&self, stub: &[u8]) -> Result<Reply<R>, CodecError> {
        self.decode(stub)
    }

    fn decode<T: DeserializeOwned>(&self, stub: &[u8]) -> Result<T, CodecError> {
        self.check_size(stub.len())?;
        let (value, rest) = postcard::take_from_bytes(stub).map_err(CodecError::Malformed)?;
        if !rest.is_empty() {
            return Err(CodecError::TrailingBytes {
                remaining: rest.len(),
            });
        }
        Ok(value)
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes, CodecError> {
        let buf = postcard::to_allocvec(value).map_err(CodecError::Serialize)?;
        self.check_size(buf.len())?;
        Ok(Bytes::from(buf))
    }

    fn check_size(&self, size: usize) -> Result<(), CodecError> {
        if size > self.max_stub_size {
            return Err(CodecError::TooLarge {
                size,
                limit: self.max_stub_size,
            });
        }
        Ok(())
    }
}

impl Default for StubCodec {
    fn default() -> Self {
        Self::new()
    }
}

use thiserror::Error;

use crate::codec::CodecError;
use crate::syntax::SyntaxId;

/// Engine-level failures of a call.
///
/// Application outcomes never show up here: they travel as a
/// [`Status`](crate::Status) inside the reply.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Request stub could not be decoded; the handler was not invoked.
    #[error("failed to decode {operation} (opnum {opnum}): {source}")]
    Decode {
        opnum: u16,
        operation: &'static str,
        #[source]
        source: CodecError,
    },

    /// Reply stub could not be encoded. The transport decides whether to
    /// answer with a protocol-level fault instead.
    #[error("failed to encode reply of {operation} (opnum {opnum}): {source}")]
    Encode {
        opnum: u16,
        operation: &'static str,
        #[source]
        source: CodecError,
    },

    /// No dispatcher is registered for the addressed interface.
    #[error("no server registered for interface {0}")]
    UnknownInterface(SyntaxId),
}

impl DispatchError {
    /// Opnum of the failed call, when the failure belongs to one.
    pub fn opnum(&self) -> Option<u16> {
        match self {
            Self::Decode { opnum, .. } | Self::Encode { opnum, .. } => Some(*opnum),
            Self::UnknownInterface(_) => None,
        }
    }
}

/// Registration failures reported by the transport registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a server is already registered for interface {0}")]
    AlreadyRegistered(SyntaxId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_messages() {
        let syntax = SyntaxId::new(Uuid::nil(), 1, 0);
        let err = DispatchError::UnknownInterface(syntax);
        assert!(err.to_string().contains("v1.0"));
        assert_eq!(err.opnum(), None);

        let err = DispatchError::Decode {
            opnum: 9,
            operation: "FaxObs_SetJob",
            source: CodecError::TrailingBytes { remaining: 3 },
        };
        assert_eq!(err.opnum(), Some(9));
        assert!(err.to_string().contains("FaxObs_SetJob (opnum 9)"));
    }
}

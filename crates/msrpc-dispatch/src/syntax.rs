use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Interface version as `major.minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SyntaxVersion {
    pub major: u16,
    pub minor: u16,
}

impl SyntaxVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for SyntaxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Abstract syntax: interface identity plus syntax version.
///
/// A transport routes a call to a dispatcher by this pair; one pair maps to at
/// most one registered dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntaxId {
    pub if_uuid: Uuid,
    pub if_version: SyntaxVersion,
}

impl SyntaxId {
    pub const fn new(if_uuid: Uuid, major: u16, minor: u16) -> Self {
        Self {
            if_uuid,
            if_version: SyntaxVersion::new(major, minor),
        }
    }
}

impl fmt::Display for SyntaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.if_uuid, self.if_version)
    }
}

/// Server-issued context handle.
///
/// Opaque to the client; a nil UUID with zero attributes denotes the null
/// handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContextHandle {
    pub attributes: u32,
    pub uuid: Uuid,
}

impl ContextHandle {
    /// Mints a fresh, non-null handle.
    pub fn new() -> Self {
        Self {
            attributes: 0,
            uuid: Uuid::new_v4(),
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.attributes == 0 && self.uuid.is_nil()
    }
}

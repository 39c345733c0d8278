use serde::{Deserialize, Serialize};
use std::fmt;

/// Status code carried in the return value of every operation.
///
/// Zero is success. Every other value names a failure from the Win32 and fax
/// status vocabulary shared by the whole protocol family. Values outside the
/// named set are still representable so that a status produced by a newer
/// server revision survives a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(pub u32);

impl Status {
    pub const SUCCESS: Status = Status(0);
    pub const INVALID_FUNCTION: Status = Status(1);
    pub const FILE_NOT_FOUND: Status = Status(2);
    pub const ACCESS_DENIED: Status = Status(5);
    pub const INVALID_HANDLE: Status = Status(6);
    pub const NOT_ENOUGH_MEMORY: Status = Status(8);
    pub const INVALID_DATA: Status = Status(13);
    pub const BAD_UNIT: Status = Status(20);
    pub const NOT_SUPPORTED: Status = Status(50);
    pub const INVALID_PARAMETER: Status = Status(87);
    pub const CALL_NOT_IMPLEMENTED: Status = Status(120);
    pub const INSUFFICIENT_BUFFER: Status = Status(122);
    pub const CANCELLED: Status = Status(1223);
    pub const DEVICE_IN_USE: Status = Status(2404);

    // Fax-specific range.
    pub const FAX_SRV_OUTOFMEMORY: Status = Status(7001);
    pub const FAX_GROUP_NOT_FOUND: Status = Status(7002);
    pub const FAX_BAD_GROUP_CONFIGURATION: Status = Status(7003);
    pub const FAX_GROUP_IN_USE: Status = Status(7004);
    pub const FAX_RULE_NOT_FOUND: Status = Status(7005);
    pub const FAX_NOT_NTFS: Status = Status(7006);
    pub const FAX_DIRECTORY_IN_USE: Status = Status(7007);
    pub const FAX_FILE_ACCESS_DENIED: Status = Status(7008);
    pub const FAX_MESSAGE_NOT_FOUND: Status = Status(7009);
    pub const FAX_DEVICE_NUM_LIMIT_EXCEEDED: Status = Status(7010);
    pub const FAX_NOT_SUPPORTED_ON_THIS_SKU: Status = Status(7011);
    pub const FAX_VERSION_MISMATCH: Status = Status(7012);
    pub const FAX_RECIPIENTS_LIMIT: Status = Status(7013);

    /// Raw numeric value as it travels on the wire.
    pub fn code(&self) -> u32 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Symbolic name, if this is a member of the named vocabulary.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Status::SUCCESS => "ERROR_SUCCESS",
            Status::INVALID_FUNCTION => "ERROR_INVALID_FUNCTION",
            Status::FILE_NOT_FOUND => "ERROR_FILE_NOT_FOUND",
            Status::ACCESS_DENIED => "ERROR_ACCESS_DENIED",
            Status::INVALID_HANDLE => "ERROR_INVALID_HANDLE",
            Status::NOT_ENOUGH_MEMORY => "ERROR_NOT_ENOUGH_MEMORY",
            Status::INVALID_DATA => "ERROR_INVALID_DATA",
            Status::BAD_UNIT => "ERROR_BAD_UNIT",
            Status::NOT_SUPPORTED => "ERROR_NOT_SUPPORTED",
            Status::INVALID_PARAMETER => "ERROR_INVALID_PARAMETER",
            Status::CALL_NOT_IMPLEMENTED => "ERROR_CALL_NOT_IMPLEMENTED",
            Status::INSUFFICIENT_BUFFER => "ERROR_INSUFFICIENT_BUFFER",
            Status::CANCELLED => "ERROR_CANCELLED",
            Status::DEVICE_IN_USE => "ERROR_DEVICE_IN_USE",
            Status::FAX_SRV_OUTOFMEMORY => "FAX_ERR_SRV_OUTOFMEMORY",
            Status::FAX_GROUP_NOT_FOUND => "FAX_ERR_GROUP_NOT_FOUND",
            Status::FAX_BAD_GROUP_CONFIGURATION => "FAX_ERR_BAD_GROUP_CONFIGURATION",
            Status::FAX_GROUP_IN_USE => "FAX_ERR_GROUP_IN_USE",
            Status::FAX_RULE_NOT_FOUND => "FAX_ERR_RULE_NOT_FOUND",
            Status::FAX_NOT_NTFS => "FAX_ERR_NOT_NTFS",
            Status::FAX_DIRECTORY_IN_USE => "FAX_ERR_DIRECTORY_IN_USE",
            Status::FAX_FILE_ACCESS_DENIED => "FAX_ERR_FILE_ACCESS_DENIED",
            Status::FAX_MESSAGE_NOT_FOUND => "FAX_ERR_MESSAGE_NOT_FOUND",
            Status::FAX_DEVICE_NUM_LIMIT_EXCEEDED => "FAX_ERR_DEVICE_NUM_LIMIT_EXCEEDED",
            Status::FAX_NOT_SUPPORTED_ON_THIS_SKU => "FAX_ERR_NOT_SUPPORTED_ON_THIS_SKU",
            Status::FAX_VERSION_MISMATCH => "FAX_ERR_VERSION_MISMATCH",
            Status::FAX_RECIPIENTS_LIMIT => "FAX_ERR_RECIPIENTS_LIMIT",
            _ => return None,
        };
        Some(name)
    }

    /// Converts a handler outcome into the status stored in a reply.
    pub fn from_result<T>(result: &Result<T, Status>) -> Status {
        match result {
            Ok(_) => Status::SUCCESS,
            Err(status) => *status,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:08x})", name, self.0),
            None => write!(f, "status 0x{:08x}", self.0),
        }
    }
}

impl std::error::Error for Status {}

impl From<u32> for Status {
    fn from(code: u32) -> Self {
        Status(code)
    }
}

impl From<Status> for u32 {
    fn from(status: Status) -> Self {
        status.0
    }
}

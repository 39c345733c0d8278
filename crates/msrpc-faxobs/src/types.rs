//! Value types shared by several faxobs operations.

use msrpc_dispatch::ContextHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest buffer the server hands out in a single reply.
pub const MAX_RPC_BUFFER: usize = 1_048_576;
/// Upper bound for a queue file name, terminating null included.
pub const MAX_QUEUE_FILE_NAME: u32 = 255;
pub const MAX_DEVICES_IN_GROUP: u32 = 1000;
pub const MAX_RECIPIENTS: u32 = 10_000;

/// Job types reported in [`FaxJobEntry::job_type`].
pub mod job_type {
    pub const UNKNOWN: u32 = 0x0000_0000;
    pub const SEND: u32 = 0x0000_0001;
    pub const RECEIVE: u32 = 0x0000_0002;
    pub const ROUTING: u32 = 0x0000_0003;
    pub const FAIL_RECEIVE: u32 = 0x0000_0004;
}

/// Queue status flags reported in [`FaxJobEntry::queue_status`].
pub mod queue_status {
    pub const PENDING: u32 = 0x0000_0000;
    pub const IN_PROGRESS: u32 = 0x0000_0001;
    pub const DELETING: u32 = 0x0000_0002;
    pub const FAILED: u32 = 0x0000_0004;
    pub const PAUSED: u32 = 0x0000_0008;
    pub const NO_LINE: u32 = 0x0000_0010;
}

/// Flags accepted by `FaxObs_OpenPort`.
pub mod port_open {
    pub const QUERY: u32 = 0x0000_0001;
    pub const MODIFY: u32 = 0x0000_0002;
}

/// Access rights checked by `FaxObs_AccessCheck`.
pub mod access {
    pub const JOB_SUBMIT: u32 = 0x0000_0001;
    pub const JOB_QUERY: u32 = 0x0000_0002;
    pub const CONFIG_QUERY: u32 = 0x0000_0004;
    pub const CONFIG_SET: u32 = 0x0000_0008;
    pub const PORT_QUERY: u32 = 0x0000_0010;
    pub const PORT_SET: u32 = 0x0000_0020;
    pub const JOB_MANAGE: u32 = 0x0000_0040;
}

/// Installation descriptors returned by `FaxObs_GetInstallType`.
pub mod install {
    pub const NETWORK_CLIENT: u32 = 0x0000_0001;
    pub const SERVER: u32 = 0x0000_0002;
    pub const WORKSTATION: u32 = 0x0000_0004;

    pub const PLATFORM_X86: u32 = 0x0000_0001;
    pub const PLATFORM_MIPS: u32 = 0x0000_0002;
    pub const PLATFORM_ALPHA: u32 = 0x0000_0004;
    pub const PLATFORM_PPC: u32 = 0x0000_0008;

    pub const PRODUCT_WINNT: u32 = 0x0000_0001;
    pub const PRODUCT_SERVER: u32 = 0x0000_0002;
}

/// Connection handle issued by `FaxObs_ConnectionRefCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FaxHandle(pub ContextHandle);

/// Port handle issued by `FaxObs_OpenPort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PortHandle(pub ContextHandle);

impl PortHandle {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl FaxHandle {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

/// Fax server version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FaxVersion {
    pub major: u16,
    pub minor: u16,
}

impl FaxVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Packed DWORD form: major version in the high word.
    pub fn as_dword(&self) -> u32 {
        (u32::from(self.major) << 16) | u32::from(self.minor)
    }

    pub fn from_dword(value: u32) -> Self {
        Self {
            major: (value >> 16) as u16,
            minor: (value & 0xffff) as u16,
        }
    }
}

impl fmt::Display for FaxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for FaxVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("version '{}' is not in major.minor form", s))?;
        let major = major
            .parse()
            .map_err(|_| format!("invalid major version in '{}'", s))?;
        let minor = minor
            .parse()
            .map_err(|_| format!("invalid minor version in '{}'", s))?;
        Ok(Self { major, minor })
    }
}

/// Wall-clock time of day, used for the discount rate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaxTime {
    pub hour: u16,
    pub minute: u16,
}

/// Calendar timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemTime {
    pub year: u16,
    pub month: u16,
    pub day_of_week: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub milliseconds: u16,
}

/// Command applied to a queued job by `FaxObs_SetJob`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobCommand {
    #[default]
    Unspecified,
    Delete,
    Pause,
    Resume,
    Restart,
}

/// Queued fax job as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxJobEntry {
    pub job_id: u32,
    pub user_name: String,
    pub job_type: u32,
    pub queue_status: u32,
    pub status: u32,
    pub size: u32,
    pub page_count: u32,
    pub recipient_number: String,
    pub recipient_name: String,
    pub tsid: String,
    pub sender_name: String,
    pub sender_company: String,
    pub sender_dept: String,
    pub billing_code: String,
    pub schedule_action: u32,
    pub schedule_time: SystemTime,
    pub delivery_report_type: u32,
    pub delivery_report_address: String,
    pub document_name: String,
}

/// Submission parameters of an outgoing fax.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxJobParam {
    pub recipient_number: Option<String>,
    pub recipient_name: String,
    pub tsid: String,
    pub sender_name: String,
    pub sender_company: String,
    pub sender_dept: String,
    pub billing_code: String,
    pub schedule_action: u32,
    pub schedule_time: SystemTime,
    pub delivery_report_type: u32,
    pub delivery_report_address: String,
    pub document_name: String,
    pub call_handle: u32,
    pub reserved: [u64; 3],
}

/// Configuration of one fax port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxPortInfo {
    pub device_id: u32,
    pub state: u32,
    pub flags: u32,
    pub rings: u32,
    pub priority: u32,
    pub device_name: String,
    pub tsid: String,
    pub csid: String,
}

/// Live status of a fax device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxDeviceStatus {
    pub device_id: u32,
    pub device_name: String,
    pub caller_id: String,
    pub csid: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub document_name: String,
    pub job_type: u32,
    pub phone_number: String,
    pub routing_string: String,
    pub sender_name: String,
    pub recipient_name: String,
    pub size: u32,
    pub start_time: SystemTime,
    pub status: u32,
    pub status_string: String,
    pub submitted_time: SystemTime,
    pub tsid: String,
    pub user_name: String,
}

/// Routing method available on a port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxRoutingMethod {
    pub device_id: u32,
    pub enabled: bool,
    pub device_name: String,
    pub guid: String,
    pub friendly_name: String,
    pub function_name: String,
    pub extension_image_name: String,
    pub extension_friendly_name: String,
}

/// Server-wide routing method priority entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxGlobalRoutingInfo {
    pub priority: u32,
    pub guid: String,
    pub friendly_name: String,
    pub function_name: String,
    pub extension_image_name: String,
    pub extension_friendly_name: String,
}

/// Server-wide fax configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaxConfiguration {
    pub retries: u32,
    pub retry_delay: u32,
    pub dirty_days: u32,
    pub branding: bool,
    pub use_device_tsid: bool,
    pub server_cp: bool,
    pub pause_server_queue: bool,
    pub start_cheap_time: FaxTime,
    pub stop_cheap_time: FaxTime,
    pub archive_outgoing_faxes: bool,
    pub archive_directory: String,
    pub inbound_profile: String,
}

/// Event logging level of one category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaxLogCategory {
    pub name: String,
    pub category: u32,
    pub level: u32,
}

/// Telephony dialing location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxTapiLocation {
    pub permanent_location_id: u32,
    pub location_name: String,
    pub country_code: u32,
    pub area_code: u32,
    pub num_tolls: u32,
    pub tolls: String,
}

/// All dialing locations plus the one currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaxTapiLocationInfo {
    pub current_location_id: u32,
    pub locations: Vec<FaxTapiLocation>,
}

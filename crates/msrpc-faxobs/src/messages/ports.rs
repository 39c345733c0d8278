use serde::{Deserialize, Serialize};

use crate::types::{FaxDeviceStatus, FaxPortInfo, PortHandle};

/// Opnum 3: open a fax port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpenPortRequest {
    pub device_id: u32,
    /// Combination of [`port_open`](crate::types::port_open) flags.
    pub flags: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpenPortResponse {
    pub port: PortHandle,
}

/// Opnum 4: close a port handle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClosePortRequest {
    pub port: PortHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClosePortResponse {
    /// Null once the handle has been released.
    pub port: PortHandle,
}

/// Opnum 11: query the live status of the device behind a port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetDeviceStatusRequest {
    pub port: PortHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetDeviceStatusResponse {
    pub status: FaxDeviceStatus,
}

/// Opnum 13: enumerate ports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumPortsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumPortsResponse {
    pub ports: Vec<FaxPortInfo>,
}

/// Opnum 14: fetch port configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPortRequest {
    pub port: PortHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPortResponse {
    pub port_info: FaxPortInfo,
}

/// Opnum 15: update port configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetPortRequest {
    pub port: PortHandle,
    pub port_info: FaxPortInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetPortResponse {}

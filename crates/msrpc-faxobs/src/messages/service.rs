use serde::{Deserialize, Serialize};

use crate::types::{FaxHandle, FaxVersion};

/// `connect` value releasing a connection handle.
pub const DISCONNECT: u32 = 0;
/// `connect` value acquiring a connection handle.
pub const CONNECT: u32 = 1;

/// Opnum 0: connect to or disconnect from the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionReferenceCountRequest {
    pub handle: FaxHandle,
    pub connect: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionReferenceCountResponse {
    pub handle: FaxHandle,
    /// Non-zero when the server allows the fax printer to be shared.
    pub can_share: u32,
}

/// Opnum 1: query the server version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetVersionRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetVersionResponse {
    pub version: FaxVersion,
}

/// Opnum 2: query installation details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetInstallTypeRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetInstallTypeResponse {
    pub install_type: u32,
    pub installed_platforms: u32,
    pub product_type: u32,
}

/// Opnum 29: ask the server to call back into a client-side notification
/// server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartClientServerRequest {
    pub machine_name: String,
    pub client_name: String,
    pub context: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartClientServerResponse {}

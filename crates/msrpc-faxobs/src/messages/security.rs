use serde::{Deserialize, Serialize};

/// Opnum 31: fetch a self-relative security descriptor by index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSecurityDescriptorRequest {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSecurityDescriptorResponse {
    pub security_descriptor: Vec<u8>,
}

/// Opnum 32: replace a security descriptor by index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetSecurityDescriptorRequest {
    pub id: u32,
    pub security_descriptor: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetSecurityDescriptorResponse {}

/// Opnum 33: number of security descriptors the server maintains.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSecurityDescriptorCountRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSecurityDescriptorCountResponse {
    pub count: u32,
}

/// Opnum 34: check whether the caller holds the requested access rights.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessCheckRequest {
    /// Combination of [`access`](crate::types::access) rights.
    pub access_mask: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessCheckResponse {
    pub has_access: bool,
}

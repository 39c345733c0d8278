use serde::{Deserialize, Serialize};

use crate::types::{FaxGlobalRoutingInfo, FaxRoutingMethod, PortHandle};

/// Opnum 16: enumerate the routing methods of a port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumRoutingMethodsRequest {
    pub port: PortHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumRoutingMethodsResponse {
    pub methods: Vec<FaxRoutingMethod>,
}

/// Opnum 17: enable or disable a routing method on a port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnableRoutingMethodRequest {
    pub port: PortHandle,
    pub routing_guid: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnableRoutingMethodResponse {}

/// Opnum 18: fetch method-specific routing data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetRoutingInfoRequest {
    pub port: PortHandle,
    pub routing_guid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetRoutingInfoResponse {
    pub routing_info: Vec<u8>,
}

/// Opnum 19: store method-specific routing data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetRoutingInfoRequest {
    pub port: PortHandle,
    pub routing_guid: String,
    pub routing_info: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetRoutingInfoResponse {}

/// Opnum 20: enumerate server-wide routing priorities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumGlobalRoutingInfoRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumGlobalRoutingInfoResponse {
    pub routing_info: Vec<FaxGlobalRoutingInfo>,
}

/// Opnum 21: update one server-wide routing priority.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetGlobalRoutingInfoRequest {
    pub routing_info: FaxGlobalRoutingInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetGlobalRoutingInfoResponse {}

use serde::{Deserialize, Serialize};

use crate::types::{FaxConfiguration, FaxLogCategory, FaxTapiLocationInfo};

/// Opnum 22: fetch the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetConfigurationRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetConfigurationResponse {
    pub configuration: FaxConfiguration,
}

/// Opnum 23: replace the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetConfigurationRequest {
    pub configuration: FaxConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetConfigurationResponse {}

/// Opnum 24: fetch event logging categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetLoggingCategoriesRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetLoggingCategoriesResponse {
    pub categories: Vec<FaxLogCategory>,
}

/// Opnum 25: replace event logging categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetLoggingCategoriesRequest {
    pub categories: Vec<FaxLogCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetLoggingCategoriesResponse {}

/// Opnum 26: fetch telephony dialing locations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetTapiLocationsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetTapiLocationsResponse {
    pub locations: FaxTapiLocationInfo,
}

/// Opnum 27: replace telephony dialing locations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetTapiLocationsRequest {
    pub locations: FaxTapiLocationInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetTapiLocationsResponse {}

/// Opnum 28: list messaging profiles available for inbound routing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMapiProfilesRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMapiProfilesResponse {
    pub profiles: Vec<String>,
}

//! Operation kinds of the faxobs interface, one marker type per opnum.

use msrpc_dispatch::OperationKind;

use crate::messages::*;

/// Opnum that is defined by the interface but never sent on the wire.
pub const RESERVED_OPNUM: u16 = 30;

/// Highest opnum defined by interface version 4.0.
pub const MAX_OPNUM: u16 = 34;

macro_rules! operations {
    ($($(#[$meta:meta])* $opnum:literal => $kind:ident($name:literal, $request:ty, $response:ty);)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $kind;

            impl OperationKind for $kind {
                const OPNUM: u16 = $opnum;
                const NAME: &'static str = $name;
                type Request = $request;
                type Response = $response;
            }
        )*

        /// Wire names of every routable opnum, in opnum order.
        pub const OPERATIONS: &[(u16, &str)] = &[$(($opnum, $name)),*];
    };
}

operations! {
    0 => ConnectionReferenceCount("FaxObs_ConnectionRefCount", ConnectionReferenceCountRequest, ConnectionReferenceCountResponse);
    1 => GetVersion("FaxObs_GetVersion", GetVersionRequest, GetVersionResponse);
    2 => GetInstallType("FaxObs_GetInstallType", GetInstallTypeRequest, GetInstallTypeResponse);
    3 => OpenPort("FaxObs_OpenPort", OpenPortRequest, OpenPortResponse);
    4 => ClosePort("FaxObs_ClosePort", ClosePortRequest, ClosePortResponse);
    5 => SendDocument("FaxObs_SendDocument", SendDocumentRequest, SendDocumentResponse);
    6 => GetQueueFileName("FaxObs_GetQueueFileName", GetQueueFileNameRequest, GetQueueFileNameResponse);
    7 => EnumJobs("FaxObs_EnumJobs", EnumJobsRequest, EnumJobsResponse);
    8 => GetJob("FaxObs_GetJob", GetJobRequest, GetJobResponse);
    9 => SetJob("FaxObs_SetJob", SetJobRequest, SetJobResponse);
    10 => GetPageData("FaxObs_GetPageData", GetPageDataRequest, GetPageDataResponse);
    11 => GetDeviceStatus("FaxObs_GetDeviceStatus", GetDeviceStatusRequest, GetDeviceStatusResponse);
    12 => Abort("FaxObs_Abort", AbortRequest, AbortResponse);
    13 => EnumPorts("FaxObs_EnumPorts", EnumPortsRequest, EnumPortsResponse);
    14 => GetPort("FaxObs_GetPort", GetPortRequest, GetPortResponse);
    15 => SetPort("FaxObs_SetPort", SetPortRequest, SetPortResponse);
    16 => EnumRoutingMethods("FaxObs_EnumRoutingMethods", EnumRoutingMethodsRequest, EnumRoutingMethodsResponse);
    17 => EnableRoutingMethod("FaxObs_EnableRoutingMethod", EnableRoutingMethodRequest, EnableRoutingMethodResponse);
    18 => GetRoutingInfo("FaxObs_GetRoutingInfo", GetRoutingInfoRequest, GetRoutingInfoResponse);
    19 => SetRoutingInfo("FaxObs_SetRoutingInfo", SetRoutingInfoRequest, SetRoutingInfoResponse);
    20 => EnumGlobalRoutingInfo("FaxObs_EnumGlobalRoutingInfo", EnumGlobalRoutingInfoRequest, EnumGlobalRoutingInfoResponse);
    21 => SetGlobalRoutingInfo("FaxObs_SetGlobalRoutingInfo", SetGlobalRoutingInfoRequest, SetGlobalRoutingInfoResponse);
    22 => GetConfiguration("FaxObs_GetConfiguration", GetConfigurationRequest, GetConfigurationResponse);
    23 => SetConfiguration("FaxObs_SetConfiguration", SetConfigurationRequest, SetConfigurationResponse);
    24 => GetLoggingCategories("FaxObs_GetLoggingCategories", GetLoggingCategoriesRequest, GetLoggingCategoriesResponse);
    25 => SetLoggingCategories("FaxObs_SetLoggingCategories", SetLoggingCategoriesRequest, SetLoggingCategoriesResponse);
    26 => GetTapiLocations("FaxObs_GetTapiLocations", GetTapiLocationsRequest, GetTapiLocationsResponse);
    27 => SetTapiLocations("FaxObs_SetTapiLocations", SetTapiLocationsRequest, SetTapiLocationsResponse);
    28 => GetMapiProfiles("FaxObs_GetMapiProfiles", GetMapiProfilesRequest, GetMapiProfilesResponse);
    29 => StartClientServer("FaxObs_StartClientServer", StartClientServerRequest, StartClientServerResponse);
    31 => GetSecurityDescriptor("FaxObs_GetSecurityDescriptor", GetSecurityDescriptorRequest, GetSecurityDescriptorResponse);
    32 => SetSecurityDescriptor("FaxObs_SetSecurityDescriptor", SetSecurityDescriptorRequest, SetSecurityDescriptorResponse);
    33 => GetSecurityDescriptorCount("FaxObs_GetSecurityDescriptorCount", GetSecurityDescriptorCountRequest, GetSecurityDescriptorCountResponse);
    34 => AccessCheck("FaxObs_AccessCheck", AccessCheckRequest, AccessCheckResponse);
}

/// True for the opnum the interface reserves and never routes.
pub fn is_reserved_opnum(opnum: u16) -> bool {
    opnum == RESERVED_OPNUM
}

/// True when `opnum` reaches a handler method.
pub fn is_routable_opnum(opnum: u16) -> bool {
    opnum <= MAX_OPNUM && !is_reserved_opnum(opnum)
}

/// Wire name of a routable opnum.
pub fn operation_name(opnum: u16) -> Option<&'static str> {
    OPERATIONS
        .iter()
        .find(|(candidate, _)| *candidate == opnum)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_table_covers_defined_range() {
        assert_eq!(OPERATIONS.len(), 34);
        for opnum in 0..=MAX_OPNUM {
            assert_eq!(operation_name(opnum).is_some(), opnum != RESERVED_OPNUM);
            assert_eq!(is_routable_opnum(opnum), opnum != RESERVED_OPNUM);
        }
        assert!(!is_routable_opnum(35));
        assert_eq!(operation_name(u16::MAX), None);
    }

    #[test]
    fn test_marker_constants() {
        assert_eq!(GetVersion::OPNUM, 1);
        assert_eq!(SetJob::NAME, "FaxObs_SetJob");
        assert_eq!(AccessCheck::OPNUM, MAX_OPNUM);
    }
}

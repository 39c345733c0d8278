#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use msrpc_dispatch::{CallContext, ContextHandle, OperationKind, Status};
use msrpc_faxobs::ops;
use msrpc_faxobs::*;
use uuid::Uuid;

/// Invokes `$callback!` with every routable operation as
/// `opnum Kind method;` triples.
macro_rules! for_each_operation {
    ($callback:ident) => {
        $callback! {
            0 ConnectionReferenceCount connection_reference_count;
            1 GetVersion get_version;
            2 GetInstallType get_install_type;
            3 OpenPort open_port;
            4 ClosePort close_port;
            5 SendDocument send_document;
            6 GetQueueFileName get_queue_file_name;
            7 EnumJobs enum_jobs;
            8 GetJob get_job;
            9 SetJob set_job;
            10 GetPageData get_page_data;
            11 GetDeviceStatus get_device_status;
            12 Abort abort;
            13 EnumPorts enum_ports;
            14 GetPort get_port;
            15 SetPort set_port;
            16 EnumRoutingMethods enum_routing_methods;
            17 EnableRoutingMethod enable_routing_method;
            18 GetRoutingInfo get_routing_info;
            19 SetRoutingInfo set_routing_info;
            20 EnumGlobalRoutingInfo enum_global_routing_info;
            21 SetGlobalRoutingInfo set_global_routing_info;
            22 GetConfiguration get_configuration;
            23 SetConfiguration set_configuration;
            24 GetLoggingCategories get_logging_categories;
            25 SetLoggingCategories set_logging_categories;
            26 GetTapiLocations get_tapi_locations;
            27 SetTapiLocations set_tapi_locations;
            28 GetMapiProfiles get_mapi_profiles;
            29 StartClientServer start_client_server;
            31 GetSecurityDescriptor get_security_descriptor;
            32 SetSecurityDescriptor set_security_descriptor;
            33 GetSecurityDescriptorCount get_security_descriptor_count;
            34 AccessCheck access_check;
        }
    };
}

/// Sample response for an operation, distinct from the zero value wherever
/// the response has fields.
pub trait Fixture: Sized {
    fn fixture() -> Self;
}

/// Test double recording every invoked method by opnum.
#[derive(Default)]
pub struct RecordingServer {
    calls: Mutex<Vec<u16>>,
    fail_with: Option<Status>,
}

impl RecordingServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every method records its call and then fails with `status`.
    pub fn failing(status: Status) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(status),
        }
    }

    pub fn calls(&self) -> Vec<u16> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, opnum: u16) -> Result<(), Status> {
        self.calls.lock().unwrap().push(opnum);
        match self.fail_with {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

macro_rules! recording_server {
    ($($opnum:literal $kind:ident $method:ident;)*) => {
        #[async_trait]
        impl FaxobsServer for RecordingServer {
            $(
                async fn $method(
                    &self,
                    _ctx: &CallContext,
                    _req: <ops::$kind as OperationKind>::Request,
                ) -> Result<<ops::$kind as OperationKind>::Response, Status> {
                    self.record($opnum)?;
                    Ok(Fixture::fixture())
                }
            )*
        }
    };
}

for_each_operation!(recording_server);

fn handle(seed: u128) -> ContextHandle {
    ContextHandle {
        attributes: 0,
        uuid: Uuid::from_u128(seed),
    }
}

fn job_entry() -> FaxJobEntry {
    FaxJobEntry {
        job_id: 42,
        user_name: "alice".to_string(),
        job_type: job_type::SEND,
        queue_status: queue_status::PAUSED,
        page_count: 3,
        recipient_number: "+61 2 5550 1234".to_string(),
        document_name: "invoice.tif".to_string(),
        ..Default::default()
    }
}

fn port_info() -> FaxPortInfo {
    FaxPortInfo {
        device_id: 7,
        rings: 2,
        priority: 1,
        device_name: "Modem 7".to_string(),
        tsid: "FAX-7".to_string(),
        csid: "FAX-7".to_string(),
        ..Default::default()
    }
}

macro_rules! empty_fixtures {
    ($($response:ty),* $(,)?) => {
        $(impl Fixture for $response {
            fn fixture() -> Self {
                Self::default()
            }
        })*
    };
}

empty_fixtures!(
    SetJobResponse,
    AbortResponse,
    SetPortResponse,
    EnableRoutingMethodResponse,
    SetRoutingInfoResponse,
    SetGlobalRoutingInfoResponse,
    SetConfigurationResponse,
    SetLoggingCategoriesResponse,
    SetTapiLocationsResponse,
    StartClientServerResponse,
    SetSecurityDescriptorResponse,
);

impl Fixture for ConnectionReferenceCountResponse {
    fn fixture() -> Self {
        Self {
            handle: FaxHandle(handle(1)),
            can_share: 1,
        }
    }
}

impl Fixture for GetVersionResponse {
    fn fixture() -> Self {
        Self {
            version: FaxVersion::new(4, 0),
        }
    }
}

impl Fixture for GetInstallTypeResponse {
    fn fixture() -> Self {
        Self {
            install_type: install::SERVER,
            installed_platforms: install::PLATFORM_X86,
            product_type: install::PRODUCT_SERVER,
        }
    }
}

impl Fixture for OpenPortResponse {
    fn fixture() -> Self {
        Self {
            port: PortHandle(handle(2)),
        }
    }
}

impl Fixture for ClosePortResponse {
    fn fixture() -> Self {
        Self {
            port: PortHandle(handle(3)),
        }
    }
}

impl Fixture for SendDocumentResponse {
    fn fixture() -> Self {
        Self { fax_job_id: 42 }
    }
}

impl Fixture for GetQueueFileNameResponse {
    fn fixture() -> Self {
        Self {
            file_name: "C:\\FaxQueue\\00000042.tif".to_string(),
        }
    }
}

impl Fixture for EnumJobsResponse {
    fn fixture() -> Self {
        Self {
            jobs: vec![job_entry(), FaxJobEntry { job_id: 43, ..job_entry() }],
        }
    }
}

impl Fixture for GetJobResponse {
    fn fixture() -> Self {
        Self { job: job_entry() }
    }
}

impl Fixture for GetPageDataResponse {
    fn fixture() -> Self {
        Self {
            buffer: vec![0x49, 0x49, 0x2a, 0x00],
            image_width: 1728,
            image_height: 2200,
        }
    }
}

impl Fixture for GetDeviceStatusResponse {
    fn fixture() -> Self {
        Self {
            status: FaxDeviceStatus {
                device_id: 7,
                device_name: "Modem 7".to_string(),
                current_page: 2,
                total_pages: 3,
                status_string: "Sending".to_string(),
                ..Default::default()
            },
        }
    }
}

impl Fixture for EnumPortsResponse {
    fn fixture() -> Self {
        Self {
            ports: vec![port_info()],
        }
    }
}

impl Fixture for GetPortResponse {
    fn fixture() -> Self {
        Self {
            port_info: port_info(),
        }
    }
}

impl Fixture for EnumRoutingMethodsResponse {
    fn fixture() -> Self {
        Self {
            methods: vec![FaxRoutingMethod {
                device_id: 7,
                enabled: true,
                guid: "{6bbf7bfe-9af2-11d0-abf7-00c04fd91a4e}".to_string(),
                friendly_name: "Print".to_string(),
                ..Default::default()
            }],
        }
    }
}

impl Fixture for GetRoutingInfoResponse {
    fn fixture() -> Self {
        Self {
            routing_info: b"\\\\printserver\\fax".to_vec(),
        }
    }
}

impl Fixture for EnumGlobalRoutingInfoResponse {
    fn fixture() -> Self {
        Self {
            routing_info: vec![FaxGlobalRoutingInfo {
                priority: 1,
                guid: "{6bbf7bfe-9af2-11d0-abf7-00c04fd91a4e}".to_string(),
                friendly_name: "Print".to_string(),
                ..Default::default()
            }],
        }
    }
}

impl Fixture for GetConfigurationResponse {
    fn fixture() -> Self {
        Self {
            configuration: FaxConfiguration {
                retries: 3,
                retry_delay: 10,
                dirty_days: 30,
                branding: true,
                start_cheap_time: FaxTime { hour: 20, minute: 0 },
                stop_cheap_time: FaxTime { hour: 7, minute: 0 },
                archive_directory: "C:\\FaxArchive".to_string(),
                ..Default::default()
            },
        }
    }
}

impl Fixture for GetLoggingCategoriesResponse {
    fn fixture() -> Self {
        Self {
            categories: vec![FaxLogCategory {
                name: "Outbound".to_string(),
                category: 2,
                level: 1,
            }],
        }
    }
}

impl Fixture for GetTapiLocationsResponse {
    fn fixture() -> Self {
        Self {
            locations: FaxTapiLocationInfo {
                current_location_id: 1,
                locations: vec![FaxTapiLocation {
                    permanent_location_id: 1,
                    location_name: "Office".to_string(),
                    country_code: 61,
                    area_code: 2,
                    ..Default::default()
                }],
            },
        }
    }
}

impl Fixture for GetMapiProfilesResponse {
    fn fixture() -> Self {
        Self {
            profiles: vec!["Outlook".to_string(), "Fax Inbox".to_string()],
        }
    }
}

impl Fixture for GetSecurityDescriptorResponse {
    fn fixture() -> Self {
        Self {
            security_descriptor: vec![1, 0, 4, 0x80],
        }
    }
}

impl Fixture for GetSecurityDescriptorCountResponse {
    fn fixture() -> Self {
        Self { count: 1 }
    }
}

impl Fixture for AccessCheckResponse {
    fn fixture() -> Self {
        Self { has_access: true }
    }
}

//! Application-facing contract of the faxobs interface.

use async_trait::async_trait;
use msrpc_dispatch::{CallContext, Status};

use crate::messages::*;

/// Server side of the faxobs interface.
///
/// One method per operation. Each returns either the typed response or a
/// [`Status`] from the protocol vocabulary; the dispatcher turns an error into
/// a zero-valued, error-flagged reply.
///
/// Every method defaults to [`Status::CALL_NOT_IMPLEMENTED`], so an
/// implementation overrides only the operations it supports. Methods may run
/// concurrently for different calls; implementations guard their own state.
#[async_trait]
pub trait FaxobsServer: Send + Sync {
    /// Opnum 0. Acquire (`connect == 1`) or release (`connect == 0`) a
    /// connection handle.
    async fn connection_reference_count(
        &self,
        _ctx: &CallContext,
        _req: ConnectionReferenceCountRequest,
    ) -> Result<ConnectionReferenceCountResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 1. Report the server version.
    ///
    /// Fails with [`Status::INVALID_PARAMETER`] when the server cannot return
    /// a version.
    async fn get_version(
        &self,
        _ctx: &CallContext,
        _req: GetVersionRequest,
    ) -> Result<GetVersionResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 2. Report installation type, platforms and product type.
    ///
    /// Fails with [`Status::INVALID_FUNCTION`] when the installation details
    /// cannot be retrieved.
    async fn get_install_type(
        &self,
        _ctx: &CallContext,
        _req: GetInstallTypeRequest,
    ) -> Result<GetInstallTypeResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 3. Open a port and hand out a port handle.
    ///
    /// Typical failures:
    /// - [`Status::ACCESS_DENIED`]: caller lacks port query rights.
    /// - [`Status::INVALID_HANDLE`]: the port is already opened for modify.
    /// - [`Status::BAD_UNIT`]: no port matches the device id.
    async fn open_port(
        &self,
        _ctx: &CallContext,
        _req: OpenPortRequest,
    ) -> Result<OpenPortResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 4. Close a port handle.
    async fn close_port(
        &self,
        _ctx: &CallContext,
        _req: ClosePortRequest,
    ) -> Result<ClosePortResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 5. Queue a document for transmission and return its job id.
    async fn send_document(
        &self,
        _ctx: &CallContext,
        _req: SendDocumentRequest,
    ) -> Result<SendDocumentResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 6. Allocate a file name in the queue directory.
    async fn get_queue_file_name(
        &self,
        _ctx: &CallContext,
        _req: GetQueueFileNameRequest,
    ) -> Result<GetQueueFileNameResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 7.
    async fn enum_jobs(
        &self,
        _ctx: &CallContext,
        _req: EnumJobsRequest,
    ) -> Result<EnumJobsResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 8.
    async fn get_job(
        &self,
        _ctx: &CallContext,
        _req: GetJobRequest,
    ) -> Result<GetJobResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 9. Apply a [`JobCommand`](crate::types::JobCommand) to a job.
    ///
    /// Fails with [`Status::ACCESS_DENIED`] when the caller may not manage
    /// the job and [`Status::INVALID_PARAMETER`] for an unknown job id.
    async fn set_job(
        &self,
        _ctx: &CallContext,
        _req: SetJobRequest,
    ) -> Result<SetJobResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 10.
    async fn get_page_data(
        &self,
        _ctx: &CallContext,
        _req: GetPageDataRequest,
    ) -> Result<GetPageDataResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 11.
    async fn get_device_status(
        &self,
        _ctx: &CallContext,
        _req: GetDeviceStatusRequest,
    ) -> Result<GetDeviceStatusResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 12.
    async fn abort(&self, _ctx: &CallContext, _req: AbortRequest) -> Result<AbortResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 13.
    async fn enum_ports(
        &self,
        _ctx: &CallContext,
        _req: EnumPortsRequest,
    ) -> Result<EnumPortsResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 14.
    async fn get_port(
        &self,
        _ctx: &CallContext,
        _req: GetPortRequest,
    ) -> Result<GetPortResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 15. Update port configuration.
    ///
    /// Fails with [`Status::DEVICE_IN_USE`] while the device is busy.
    async fn set_port(
        &self,
        _ctx: &CallContext,
        _req: SetPortRequest,
    ) -> Result<SetPortResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 16.
    async fn enum_routing_methods(
        &self,
        _ctx: &CallContext,
        _req: EnumRoutingMethodsRequest,
    ) -> Result<EnumRoutingMethodsResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 17.
    async fn enable_routing_method(
        &self,
        _ctx: &CallContext,
        _req: EnableRoutingMethodRequest,
    ) -> Result<EnableRoutingMethodResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 18.
    async fn get_routing_info(
        &self,
        _ctx: &CallContext,
        _req: GetRoutingInfoRequest,
    ) -> Result<GetRoutingInfoResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 19.
    async fn set_routing_info(
        &self,
        _ctx: &CallContext,
        _req: SetRoutingInfoRequest,
    ) -> Result<SetRoutingInfoResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 20.
    async fn enum_global_routing_info(
        &self,
        _ctx: &CallContext,
        _req: EnumGlobalRoutingInfoRequest,
    ) -> Result<EnumGlobalRoutingInfoResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 21.
    async fn set_global_routing_info(
        &self,
        _ctx: &CallContext,
        _req: SetGlobalRoutingInfoRequest,
    ) -> Result<SetGlobalRoutingInfoResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 22. Read the server-wide configuration.
    async fn get_configuration(
        &self,
        _ctx: &CallContext,
        _req: GetConfigurationRequest,
    ) -> Result<GetConfigurationResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 23. Replace the server-wide configuration.
    ///
    /// Fails with [`Status::ACCESS_DENIED`] without config set rights and
    /// [`Status::INVALID_PARAMETER`] for an unusable configuration.
    async fn set_configuration(
        &self,
        _ctx: &CallContext,
        _req: SetConfigurationRequest,
    ) -> Result<SetConfigurationResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 24.
    async fn get_logging_categories(
        &self,
        _ctx: &CallContext,
        _req: GetLoggingCategoriesRequest,
    ) -> Result<GetLoggingCategoriesResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 25.
    async fn set_logging_categories(
        &self,
        _ctx: &CallContext,
        _req: SetLoggingCategoriesRequest,
    ) -> Result<SetLoggingCategoriesResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 26.
    async fn get_tapi_locations(
        &self,
        _ctx: &CallContext,
        _req: GetTapiLocationsRequest,
    ) -> Result<GetTapiLocationsResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 27.
    async fn set_tapi_locations(
        &self,
        _ctx: &CallContext,
        _req: SetTapiLocationsRequest,
    ) -> Result<SetTapiLocationsResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 28.
    async fn get_mapi_profiles(
        &self,
        _ctx: &CallContext,
        _req: GetMapiProfilesRequest,
    ) -> Result<GetMapiProfilesResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 29.
    async fn start_client_server(
        &self,
        _ctx: &CallContext,
        _req: StartClientServerRequest,
    ) -> Result<StartClientServerResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    // Opnum 30 is reserved and has no method.

    /// Opnum 31.
    async fn get_security_descriptor(
        &self,
        _ctx: &CallContext,
        _req: GetSecurityDescriptorRequest,
    ) -> Result<GetSecurityDescriptorResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 32.
    async fn set_security_descriptor(
        &self,
        _ctx: &CallContext,
        _req: SetSecurityDescriptorRequest,
    ) -> Result<SetSecurityDescriptorResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 33.
    async fn get_security_descriptor_count(
        &self,
        _ctx: &CallContext,
        _req: GetSecurityDescriptorCountRequest,
    ) -> Result<GetSecurityDescriptorCountResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }

    /// Opnum 34. Check the caller's rights against an access mask.
    async fn access_check(
        &self,
        _ctx: &CallContext,
        _req: AccessCheckRequest,
    ) -> Result<AccessCheckResponse, Status> {
        Err(Status::CALL_NOT_IMPLEMENTED)
    }
}

/// Server that implements no operation.
///
/// Every routable opnum answers [`Status::CALL_NOT_IMPLEMENTED`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedFaxobsServer;

impl FaxobsServer for UnimplementedFaxobsServer {}

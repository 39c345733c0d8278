use std::sync::Arc;

use async_trait::async_trait;
use msrpc_dispatch::{
    CallContext, DISPATCH_TARGET, DispatchError, Dispatched, Registry, RegistryError,
    ServerHandle, StubCodec, serve,
};
use tracing::debug;

use crate::FAXOBS_SYNTAX_V4_0;
use crate::ops;
use crate::server::FaxobsServer;

/// Dispatch table of the faxobs interface.
///
/// Holds the application server and the stub codec; no per-call state, so a
/// single instance serves any number of concurrent calls.
pub struct FaxobsDispatcher<S: ?Sized> {
    server: Arc<S>,
    codec: StubCodec,
}

impl<S: FaxobsServer + ?Sized> FaxobsDispatcher<S> {
    pub fn new(server: Arc<S>) -> Self {
        Self::with_codec(server, StubCodec::new())
    }

    pub fn with_codec(server: Arc<S>, codec: StubCodec) -> Self {
        Self { server, codec }
    }

    pub fn server(&self) -> &Arc<S> {
        &self.server
    }

    /// Route one call by opnum.
    ///
    /// The reserved opnum and opnums past the end of the interface yield
    /// `Ok(None)` without decoding the stub or calling the server.
    pub async fn dispatch(
        &self,
        ctx: &CallContext,
        opnum: u16,
        stub: &[u8],
    ) -> Result<Option<Dispatched>, DispatchError> {
        let s = self.server.as_ref();
        let c = &self.codec;

        #[rustfmt::skip]
        let dispatched = match opnum {
            0 => serve::<ops::ConnectionReferenceCount, _, _>(c, ctx, stub, |req| s.connection_reference_count(ctx, req)).await,
            1 => serve::<ops::GetVersion, _, _>(c, ctx, stub, |req| s.get_version(ctx, req)).await,
            2 => serve::<ops::GetInstallType, _, _>(c, ctx, stub, |req| s.get_install_type(ctx, req)).await,
            3 => serve::<ops::OpenPort, _, _>(c, ctx, stub, |req| s.open_port(ctx, req)).await,
            4 => serve::<ops::ClosePort, _, _>(c, ctx, stub, |req| s.close_port(ctx, req)).await,
            5 => serve::<ops::SendDocument, _, _>(c, ctx, stub, |req| s.send_document(ctx, req)).await,
            6 => serve::<ops::GetQueueFileName, _, _>(c, ctx, stub, |req| s.get_queue_file_name(ctx, req)).await,
            7 => serve::<ops::EnumJobs, _, _>(c, ctx, stub, |req| s.enum_jobs(ctx, req)).await,
            8 => serve::<ops::GetJob, _, _>(c, ctx, stub, |req| s.get_job(ctx, req)).await,
            9 => serve::<ops::SetJob, _, _>(c, ctx, stub, |req| s.set_job(ctx, req)).await,
            10 => serve::<ops::GetPageData, _, _>(c, ctx, stub, |req| s.get_page_data(ctx, req)).await,
            11 => serve::<ops::GetDeviceStatus, _, _>(c, ctx, stub, |req| s.get_device_status(ctx, req)).await,
            12 => serve::<ops::Abort, _, _>(c, ctx, stub, |req| s.abort(ctx, req)).await,
            13 => serve::<ops::EnumPorts, _, _>(c, ctx, stub, |req| s.enum_ports(ctx, req)).await,
            14 => serve::<ops::GetPort, _, _>(c, ctx, stub, |req| s.get_port(ctx, req)).await,
            15 => serve::<ops::SetPort, _, _>(c, ctx, stub, |req| s.set_port(ctx, req)).await,
            16 => serve::<ops::EnumRoutingMethods, _, _>(c, ctx, stub, |req| s.enum_routing_methods(ctx, req)).await,
            17 => serve::<ops::EnableRoutingMethod, _, _>(c, ctx, stub, |req| s.enable_routing_method(ctx, req)).await,
            18 => serve::<ops::GetRoutingInfo, _, _>(c, ctx, stub, |req| s.get_routing_info(ctx, req)).await,
            19 => serve::<ops::SetRoutingInfo, _, _>(c, ctx, stub, |req| s.set_routing_info(ctx, req)).await,
            20 => serve::<ops::EnumGlobalRoutingInfo, _, _>(c, ctx, stub, |req| s.enum_global_routing_info(ctx, req)).await,
            21 => serve::<ops::SetGlobalRoutingInfo, _, _>(c, ctx, stub, |req| s.set_global_routing_info(ctx, req)).await,
            22 => serve::<ops::GetConfiguration, _, _>(c, ctx, stub, |req| s.get_configuration(ctx, req)).await,
            23 => serve::<ops::SetConfiguration, _, _>(c, ctx, stub, |req| s.set_configuration(ctx, req)).await,
            24 => serve::<ops::GetLoggingCategories, _, _>(c, ctx, stub, |req| s.get_logging_categories(ctx, req)).await,
            25 => serve::<ops::SetLoggingCategories, _, _>(c, ctx, stub, |req| s.set_logging_categories(ctx, req)).await,
            26 => serve::<ops::GetTapiLocations, _, _>(c, ctx, stub, |req| s.get_tapi_locations(ctx, req)).await,
            27 => serve::<ops::SetTapiLocations, _, _>(c, ctx, stub, |req| s.set_tapi_locations(ctx, req)).await,
            28 => serve::<ops::GetMapiProfiles, _, _>(c, ctx, stub, |req| s.get_mapi_profiles(ctx, req)).await,
            29 => serve::<ops::StartClientServer, _, _>(c, ctx, stub, |req| s.start_client_server(ctx, req)).await,
            ops::RESERVED_OPNUM => {
                debug!(target: DISPATCH_TARGET, call_id = ctx.call_id, opnum, "reserved opnum, not used on wire");
                return Ok(None);
            }
            31 => serve::<ops::GetSecurityDescriptor, _, _>(c, ctx, stub, |req| s.get_security_descriptor(ctx, req)).await,
            32 => serve::<ops::SetSecurityDescriptor, _, _>(c, ctx, stub, |req| s.set_security_descriptor(ctx, req)).await,
            33 => serve::<ops::GetSecurityDescriptorCount, _, _>(c, ctx, stub, |req| s.get_security_descriptor_count(ctx, req)).await,
            34 => serve::<ops::AccessCheck, _, _>(c, ctx, stub, |req| s.access_check(ctx, req)).await,
            _ => {
                debug!(target: DISPATCH_TARGET, call_id = ctx.call_id, opnum, "opnum outside interface range");
                return Ok(None);
            }
        };

        dispatched.map(Some)
    }
}

#[async_trait]
impl<S: FaxobsServer + ?Sized + 'static> ServerHandle for FaxobsDispatcher<S> {
    fn codec(&self) -> &StubCodec {
        &self.codec
    }

    async fn handle(
        &self,
        ctx: &CallContext,
        opnum: u16,
        stub: &[u8],
    ) -> Result<Option<Dispatched>, DispatchError> {
        self.dispatch(ctx, opnum, stub).await
    }
}

/// Register `server` as the faxobs v4.0 implementation.
pub fn register_faxobs_server<S>(registry: &mut Registry, server: Arc<S>) -> Result<(), RegistryError>
where
    S: FaxobsServer + ?Sized + 'static,
{
    register_faxobs_server_with_codec(registry, server, StubCodec::new())
}

/// Register `server` as the faxobs v4.0 implementation using `codec` for
/// request and reply stubs.
pub fn register_faxobs_server_with_codec<S>(
    registry: &mut Registry,
    server: Arc<S>,
    codec: StubCodec,
) -> Result<(), RegistryError>
where
    S: FaxobsServer + ?Sized + 'static,
{
    registry.register(
        FAXOBS_SYNTAX_V4_0,
        Arc::new(FaxobsDispatcher::with_codec(server, codec)),
    )
}

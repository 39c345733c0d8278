//! Fallback server and registry binding.

use std::sync::Arc;

use async_trait::async_trait;
use msrpc_dispatch::{
    CallContext, CallOutcome, DispatchError, Registry, RegistryError, Status, StubCodec, SyntaxId,
};
use msrpc_faxobs::*;
use tracing_test::traced_test;

#[tokio::test]
async fn test_fallback_rejects_every_routable_opnum() {
    let dispatcher = FaxobsDispatcher::new(Arc::new(UnimplementedFaxobsServer));
    let codec = StubCodec::new();

    for &(opnum, name) in OPERATIONS {
        let stub = zeroed_stub_for(opnum);
        let dispatched = dispatcher
            .dispatch(&CallContext::new(), opnum, &stub)
            .await
            .unwrap_or_else(|err| panic!("{} failed to dispatch: {}", name, err))
            .unwrap();

        assert_eq!(dispatched.status, Status::CALL_NOT_IMPLEMENTED, "{}", name);
        let reply = dispatched.operation.encode_response(&codec).unwrap();
        assert!(!reply.is_empty());
    }
}

#[tokio::test]
async fn test_fallback_ignores_unroutable_opnums() {
    let dispatcher = FaxobsDispatcher::new(Arc::new(UnimplementedFaxobsServer));

    for opnum in [RESERVED_OPNUM, MAX_OPNUM + 1, 1000] {
        let result = dispatcher.dispatch(&CallContext::new(), opnum, &[]).await.unwrap();
        assert!(result.is_none(), "opnum {}", opnum);
    }
}

#[tokio::test]
async fn test_partial_server_keeps_fallback_for_the_rest() {
    struct VersionOnly;

    #[async_trait]
    impl FaxobsServer for VersionOnly {
        async fn get_version(
            &self,
            _ctx: &CallContext,
            _req: GetVersionRequest,
        ) -> Result<GetVersionResponse, Status> {
            Ok(GetVersionResponse {
                version: FaxVersion::new(4, 0),
            })
        }
    }

    let dispatcher = FaxobsDispatcher::new(Arc::new(VersionOnly));

    let version = dispatcher.dispatch(&CallContext::new(), 1, &[]).await.unwrap().unwrap();
    assert!(version.is_success());

    let jobs = dispatcher.dispatch(&CallContext::new(), 7, &[]).await.unwrap().unwrap();
    assert_eq!(jobs.status, Status::CALL_NOT_IMPLEMENTED);
}

#[tokio::test]
#[traced_test]
async fn test_registry_routes_to_faxobs() {
    let mut registry = Registry::new();
    register_faxobs_server(&mut registry, Arc::new(UnimplementedFaxobsServer)).unwrap();

    assert!(registry.is_registered(&FAXOBS_SYNTAX_V4_0));
    assert!(logs_contain("registered server"));

    let outcome = registry
        .call(&CallContext::new(), &FAXOBS_SYNTAX_V4_0, 2, &[])
        .await
        .unwrap();
    match outcome {
        CallOutcome::Reply { status, stub } => {
            assert_eq!(status, Status::CALL_NOT_IMPLEMENTED);
            let reply = StubCodec::new()
                .decode_reply::<GetInstallTypeResponse>(&stub)
                .unwrap();
            assert_eq!(reply.response, GetInstallTypeResponse::default());
            assert_eq!(reply.status, Status::CALL_NOT_IMPLEMENTED);
        }
        CallOutcome::NoReply => panic!("expected a reply"),
    }

    let outcome = registry
        .call(&CallContext::new(), &FAXOBS_SYNTAX_V4_0, RESERVED_OPNUM, &[1, 2, 3])
        .await
        .unwrap();
    assert_eq!(outcome, CallOutcome::NoReply);
}

#[test]
fn test_second_registration_rejected() {
    let mut registry = Registry::new();
    register_faxobs_server(&mut registry, Arc::new(UnimplementedFaxobsServer)).unwrap();

    let err = register_faxobs_server(&mut registry, Arc::new(UnimplementedFaxobsServer)).unwrap_err();
    assert_eq!(err, RegistryError::AlreadyRegistered(FAXOBS_SYNTAX_V4_0));
    assert_eq!(registry.registered_syntaxes(), vec![FAXOBS_SYNTAX_V4_0]);
}

#[tokio::test]
async fn test_other_versions_are_not_bound() {
    let mut registry = Registry::new();
    register_faxobs_server(&mut registry, Arc::new(UnimplementedFaxobsServer)).unwrap();

    let v4_1 = SyntaxId::new(FAXOBS_UUID, 4, 1);
    let err = registry
        .call(&CallContext::new(), &v4_1, 1, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnknownInterface(syntax) if syntax == v4_1));
}

#[test]
fn test_interface_identity() {
    assert_eq!(
        FAXOBS_UUID.to_string(),
        "ea0a3165-4834-11d2-a6f8-00c04fa346cc"
    );
    assert_eq!(FAXOBS_SYNTAX_V4_0.if_version.major, 4);
    assert_eq!(FAXOBS_SYNTAX_V4_0.if_version.minor, 0);
}

#[tokio::test]
async fn test_cancellation_is_visible_to_handlers() {
    struct Cancellable;

    #[async_trait]
    impl FaxobsServer for Cancellable {
        async fn enum_ports(
            &self,
            ctx: &CallContext,
            _req: EnumPortsRequest,
        ) -> Result<EnumPortsResponse, Status> {
            if ctx.is_cancelled() {
                return Err(Status::CANCELLED);
            }
            Ok(EnumPortsResponse::default())
        }
    }

    let dispatcher = FaxobsDispatcher::new(Arc::new(Cancellable));
    let ctx = CallContext::new();
    ctx.cancellation().cancel();

    let dispatched = dispatcher.dispatch(&ctx, 13, &[]).await.unwrap().unwrap();
    assert_eq!(dispatched.status, Status::CANCELLED);
}

/// Default request of `opnum`, encoded.
fn zeroed_stub_for(opnum: u16) -> Vec<u8> {
    let codec = StubCodec::new();
    let encoded = match opnum {
        0 => codec.encode_request(&ConnectionReferenceCountRequest::default()),
        3 => codec.encode_request(&OpenPortRequest::default()),
        4 => codec.encode_request(&ClosePortRequest::default()),
        5 => codec.encode_request(&SendDocumentRequest::default()),
        6 => codec.encode_request(&GetQueueFileNameRequest::default()),
        8 => codec.encode_request(&GetJobRequest::default()),
        9 => codec.encode_request(&SetJobRequest::default()),
        10 => codec.encode_request(&GetPageDataRequest::default()),
        11 => codec.encode_request(&GetDeviceStatusRequest::default()),
        12 => codec.encode_request(&AbortRequest::default()),
        14 => codec.encode_request(&GetPortRequest::default()),
        15 => codec.encode_request(&SetPortRequest::default()),
        16 => codec.encode_request(&EnumRoutingMethodsRequest::default()),
        17 => codec.encode_request(&EnableRoutingMethodRequest::default()),
        18 => codec.encode_request(&GetRoutingInfoRequest::default()),
        19 => codec.encode_request(&SetRoutingInfoRequest::default()),
        21 => codec.encode_request(&SetGlobalRoutingInfoRequest::default()),
        23 => codec.encode_request(&SetConfigurationRequest::default()),
        25 => codec.encode_request(&SetLoggingCategoriesRequest::default()),
        27 => codec.encode_request(&SetTapiLocationsRequest::default()),
        29 => codec.encode_request(&StartClientServerRequest::default()),
        31 => codec.encode_request(&GetSecurityDescriptorRequest::default()),
        32 => codec.encode_request(&SetSecurityDescriptorRequest::default()),
        34 => codec.encode_request(&AccessCheckRequest::default()),
        // Remaining operations take no arguments.
        _ => return Vec::new(),
    };
    encoded.unwrap().to_vec()
}

//! Routing behavior of the faxobs dispatch table.

#[macro_use]
mod common;

use std::sync::Arc;

use common::{Fixture, RecordingServer};
use msrpc_dispatch::{CallContext, DispatchError, OperationKind, Status, StubCodec};
use msrpc_faxobs::ops;
use msrpc_faxobs::*;

fn dispatcher(server: RecordingServer) -> (Arc<RecordingServer>, FaxobsDispatcher<RecordingServer>) {
    let server = Arc::new(server);
    (server.clone(), FaxobsDispatcher::new(server))
}

/// Encoded default request for operation `K`.
fn default_stub<K: OperationKind>() -> Vec<u8>
where
    K::Request: Default,
{
    StubCodec::new()
        .encode_request(&K::Request::default())
        .unwrap()
        .to_vec()
}

macro_rules! routing_table {
    ($($opnum:literal $kind:ident $method:ident;)*) => {
        /// Every routable opnum with a well-formed default request stub.
        fn routable_calls() -> Vec<(u16, &'static str, Vec<u8>)> {
            vec![$(($opnum, <ops::$kind as OperationKind>::NAME, default_stub::<ops::$kind>())),*]
        }

        /// Dispatch each operation and compare the reply with its fixture.
        async fn assert_fixture_replies(dispatcher: &FaxobsDispatcher<RecordingServer>) {
            $(assert_fixture_reply::<ops::$kind>(dispatcher).await;)*
        }
    };
}

for_each_operation!(routing_table);

async fn assert_fixture_reply<K>(dispatcher: &FaxobsDispatcher<RecordingServer>)
where
    K: OperationKind,
    K::Request: Default,
    K::Response: Fixture + PartialEq,
{
    let codec = StubCodec::new();
    let dispatched = dispatcher
        .dispatch(&CallContext::new(), K::OPNUM, &default_stub::<K>())
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("{} produced no reply", K::NAME));

    assert!(dispatched.is_success(), "{} failed", K::NAME);
    assert_eq!(dispatched.operation.opnum(), K::OPNUM);
    assert_eq!(dispatched.envelope::<K>().unwrap().response(), &K::Response::fixture());

    let stub = dispatched.operation.encode_response(&codec).unwrap();
    let reply = codec.decode_reply::<K::Response>(&stub).unwrap();
    assert_eq!(reply.status, Status::SUCCESS);
    assert_eq!(reply.response, K::Response::fixture(), "{} reply mismatch", K::NAME);
}

#[tokio::test]
async fn test_each_routable_opnum_invokes_exactly_its_method() {
    for (opnum, name, stub) in routable_calls() {
        let (server, dispatcher) = dispatcher(RecordingServer::new());

        let dispatched = dispatcher
            .dispatch(&CallContext::new(), opnum, &stub)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(server.calls(), vec![opnum], "opnum {}", opnum);
        assert_eq!(dispatched.operation.opnum(), opnum);
        assert_eq!(dispatched.operation.name(), name);
        assert_eq!(operation_name(opnum), Some(name));
    }
}

#[tokio::test]
async fn test_routable_opnums_cover_interface() {
    let opnums: Vec<u16> = routable_calls().iter().map(|(opnum, _, _)| *opnum).collect();
    let expected: Vec<u16> = (0..=MAX_OPNUM).filter(|opnum| *opnum != RESERVED_OPNUM).collect();
    assert_eq!(opnums, expected);
}

#[tokio::test]
async fn test_replies_carry_handler_output() {
    let (server, dispatcher) = dispatcher(RecordingServer::new());
    assert_fixture_replies(&dispatcher).await;
    assert_eq!(server.call_count(), 34);
}

#[tokio::test]
async fn test_reserved_opnum_yields_nothing() {
    let (server, dispatcher) = dispatcher(RecordingServer::new());

    let result = dispatcher
        .dispatch(&CallContext::new(), RESERVED_OPNUM, &[0xff, 0xfe, 0xfd])
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(server.call_count(), 0);
}

#[tokio::test]
async fn test_opnums_past_interface_yield_nothing() {
    let (server, dispatcher) = dispatcher(RecordingServer::new());

    for opnum in [MAX_OPNUM + 1, 100, u16::MAX] {
        let result = dispatcher
            .dispatch(&CallContext::new(), opnum, b"not a stub")
            .await
            .unwrap();
        assert!(result.is_none(), "opnum {}", opnum);
    }
    assert_eq!(server.call_count(), 0);
}

#[tokio::test]
async fn test_decode_failure_skips_handler() {
    let (server, dispatcher) = dispatcher(RecordingServer::new());

    let err = dispatcher
        .dispatch(&CallContext::new(), ops::SetJob::OPNUM, &[])
        .await
        .unwrap_err();

    match err {
        DispatchError::Decode { opnum, operation, .. } => {
            assert_eq!(opnum, 9);
            assert_eq!(operation, "FaxObs_SetJob");
        }
        other => panic!("expected decode error, got {:?}", other),
    }
    assert_eq!(server.call_count(), 0);
}

#[tokio::test]
async fn test_empty_request_decodes_for_argumentless_operation() {
    let (server, dispatcher) = dispatcher(RecordingServer::new());

    let dispatched = dispatcher
        .dispatch(&CallContext::new(), ops::GetVersion::OPNUM, &[])
        .await
        .unwrap()
        .unwrap();

    let codec = StubCodec::new();
    let reply = codec
        .decode_reply::<GetVersionResponse>(&dispatched.operation.encode_response(&codec).unwrap())
        .unwrap();
    assert_eq!(reply.status, Status::SUCCESS);
    assert_eq!(reply.response.version, FaxVersion::new(4, 0));
    assert_eq!(server.calls(), vec![1]);
}

#[tokio::test]
async fn test_handler_error_yields_zero_response_with_status() {
    let (server, dispatcher) = dispatcher(RecordingServer::failing(Status::ACCESS_DENIED));
    let request = SetJobRequest {
        job_id: 42,
        command: JobCommand::Pause,
        job_entry: FaxJobEntry {
            job_id: 42,
            ..Default::default()
        },
    };
    let codec = StubCodec::new();
    let stub = codec.encode_request(&request).unwrap();

    let dispatched = dispatcher
        .dispatch(&CallContext::new(), ops::SetJob::OPNUM, &stub)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(dispatched.status, Status(5));
    let reply = codec
        .decode_reply::<SetJobResponse>(&dispatched.operation.encode_response(&codec).unwrap())
        .unwrap();
    assert_eq!(reply.status, Status::ACCESS_DENIED);
    assert_eq!(reply.response, SetJobResponse::default());
    assert_eq!(server.calls(), vec![9]);
}

#[tokio::test]
async fn test_handler_error_discards_partial_output() {
    let (_, dispatcher) = dispatcher(RecordingServer::failing(Status::FAX_MESSAGE_NOT_FOUND));

    let dispatched = dispatcher
        .dispatch(&CallContext::new(), ops::EnumJobs::OPNUM, &[])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(dispatched.status, Status::FAX_MESSAGE_NOT_FOUND);
    let envelope = dispatched.envelope::<ops::EnumJobs>().unwrap();
    assert!(envelope.response().jobs.is_empty());
}

#[tokio::test]
async fn test_request_reaches_handler_intact() {
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture {
        seen: Mutex<Option<SendDocumentRequest>>,
    }

    #[async_trait]
    impl FaxobsServer for Capture {
        async fn send_document(
            &self,
            _ctx: &CallContext,
            req: SendDocumentRequest,
        ) -> Result<SendDocumentResponse, Status> {
            *self.seen.lock().unwrap() = Some(req);
            Ok(SendDocumentResponse { fax_job_id: 7 })
        }
    }

    let server = Arc::new(Capture::default());
    let dispatcher = FaxobsDispatcher::new(server.clone());
    let request = SendDocumentRequest {
        file_name: "00000007.tif".to_string(),
        job_params: FaxJobParam {
            recipient_number: Some("5550100".to_string()),
            recipient_name: "Bob".to_string(),
            ..Default::default()
        },
    };
    let stub = StubCodec::new().encode_request(&request).unwrap();

    let dispatched = dispatcher
        .dispatch(&CallContext::new(), ops::SendDocument::OPNUM, &stub)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(server.seen.lock().unwrap().as_ref(), Some(&request));
    let envelope = dispatched.envelope::<ops::SendDocument>().unwrap();
    assert_eq!(envelope.response().fax_job_id, 7);
}

#[tokio::test]
async fn test_oversized_stub_is_rejected_before_handler() {
    let server = Arc::new(RecordingServer::new());
    let dispatcher = FaxobsDispatcher::with_codec(server.clone(), StubCodec::with_max_stub_size(8));
    let request = GetJobRequest { job_id: u32::MAX };
    let mut stub = StubCodec::new().encode_request(&request).unwrap().to_vec();
    stub.resize(16, 0);

    let err = dispatcher
        .dispatch(&CallContext::new(), ops::GetJob::OPNUM, &stub)
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::Decode { opnum: 8, .. }));
    assert_eq!(server.call_count(), 0);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let (server, dispatcher) = dispatcher(RecordingServer::new());
    let dispatcher = Arc::new(dispatcher);

    let mut tasks = Vec::new();
    for (opnum, _, stub) in routable_calls() {
        let dispatcher = dispatcher.clone();
        tasks.push(tokio::spawn(async move {
            dispatcher
                .dispatch(&CallContext::new(), opnum, &stub)
                .await
                .unwrap()
                .map(|dispatched| dispatched.operation.opnum())
        }));
    }

    let mut answered = Vec::new();
    for task in tasks {
        answered.push(task.await.unwrap().unwrap());
    }
    answered.sort_unstable();

    let mut calls = server.calls();
    calls.sort_unstable();
    assert_eq!(answered, calls);
    assert_eq!(calls.len(), 34);
}

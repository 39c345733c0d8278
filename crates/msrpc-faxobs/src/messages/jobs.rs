use serde::{Deserialize, Serialize};

use crate::types::{FaxJobEntry, FaxJobParam, JobCommand};

/// Opnum 5: queue a document for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendDocumentRequest {
    /// Name of a file previously obtained from `FaxObs_GetQueueFileName`.
    pub file_name: String,
    pub job_params: FaxJobParam,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendDocumentResponse {
    pub fax_job_id: u32,
}

/// Opnum 6: allocate a file name in the server queue directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetQueueFileNameRequest {
    /// Capacity of the client buffer in characters.
    pub file_name_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetQueueFileNameResponse {
    pub file_name: String,
}

/// Opnum 7: enumerate queued jobs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumJobsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumJobsResponse {
    pub jobs: Vec<FaxJobEntry>,
}

/// Opnum 8: fetch one queued job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetJobRequest {
    pub job_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetJobResponse {
    pub job: FaxJobEntry,
}

/// Opnum 9: pause, resume, restart or delete a queued job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetJobRequest {
    pub job_id: u32,
    pub command: JobCommand,
    pub job_entry: FaxJobEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetJobResponse {}

/// Opnum 10: fetch the first page of a job as a TIFF image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPageDataRequest {
    pub job_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPageDataResponse {
    pub buffer: Vec<u8>,
    pub image_width: u32,
    pub image_height: u32,
}

/// Opnum 12: abort a job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbortRequest {
    pub job_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbortResponse {}

//! In-memory faxobs server.
//!
//! Implements connection bookkeeping, the server identity queries, queue file
//! naming, configuration and logging categories, MAPI profiles and access
//! checks. Everything touching jobs, ports and routing falls back to
//! [`Status::CALL_NOT_IMPLEMENTED`].

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use msrpc_dispatch::prelude::*;
use msrpc_faxobs::*;
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ServerConfig;

/// Security descriptors the server exposes; the interface fixes this at one.
const SECURITY_DESCRIPTOR_COUNT: u32 = 1;

#[derive(Debug, Default)]
struct State {
    /// Reference count per live connection handle.
    connections: HashMap<Uuid, u32>,
    configuration: FaxConfiguration,
    logging_categories: Vec<FaxLogCategory>,
}

/// Faxobs server keeping all state in process memory.
#[derive(Debug)]
pub struct MemoryFaxServer {
    version: FaxVersion,
    install_type: u32,
    installed_platforms: u32,
    product_type: u32,
    queue_directory: PathBuf,
    mapi_profiles: Vec<String>,
    granted_access: u32,
    state: RwLock<State>,
}

impl MemoryFaxServer {
    pub fn new(config: &ServerConfig) -> Self {
        let settings = &config.server;
        Self {
            version: settings.version,
            install_type: settings.install_type,
            installed_platforms: settings.installed_platforms,
            product_type: settings.product_type,
            queue_directory: settings.queue_directory.clone(),
            mapi_profiles: settings.mapi_profiles.clone(),
            granted_access: settings.granted_access,
            state: RwLock::new(State {
                connections: HashMap::new(),
                configuration: config.configuration.clone(),
                logging_categories: config.logging_categories.clone(),
            }),
        }
    }

    /// Number of connection handles currently held by clients.
    pub fn connection_count(&self) -> usize {
        self.state.read().connections.len()
    }

    fn require(&self, ctx: &CallContext, rights: u32) -> Result<(), Status> {
        if ctx.is_cancelled() {
            return Err(Status::CANCELLED);
        }
        if self.granted_access & rights != rights {
            debug!(call_id = ctx.call_id, rights, "access denied");
            return Err(Status::ACCESS_DENIED);
        }
        Ok(())
    }

    fn connect(&self, handle: FaxHandle) -> Result<FaxHandle, Status> {
        let mut state = self.state.write();
        if handle.is_null() {
            let handle = ContextHandle::new();
            state.connections.insert(handle.uuid, 1);
            debug!(handle = %handle.uuid, "connection opened");
            return Ok(FaxHandle(handle));
        }
        let count = state
            .connections
            .get_mut(&handle.0.uuid)
            .ok_or(Status::INVALID_HANDLE)?;
        *count += 1;
        debug!(handle = %handle.0.uuid, count = *count, "connection shared");
        Ok(handle)
    }

    fn disconnect(&self, handle: FaxHandle) -> Result<FaxHandle, Status> {
        let mut state = self.state.write();
        let count = state
            .connections
            .get_mut(&handle.0.uuid)
            .ok_or(Status::INVALID_HANDLE)?;
        *count -= 1;
        if *count > 0 {
            debug!(handle = %handle.0.uuid, count = *count, "connection released");
            return Ok(handle);
        }
        state.connections.remove(&handle.0.uuid);
        debug!(handle = %handle.0.uuid, "connection closed");
        Ok(FaxHandle(ContextHandle::null()))
    }
}

impl Default for MemoryFaxServer {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}

#[async_trait]
impl FaxobsServer for MemoryFaxServer {
    async fn connection_reference_count(
        &self,
        ctx: &CallContext,
        req: ConnectionReferenceCountRequest,
    ) -> Result<ConnectionReferenceCountResponse, Status> {
        self.require(ctx, 0)?;
        let handle = match req.connect {
            CONNECT => self.connect(req.handle)?,
            DISCONNECT => self.disconnect(req.handle)?,
            _ => return Err(Status::INVALID_PARAMETER),
        };
        Ok(ConnectionReferenceCountResponse {
            handle,
            can_share: 1,
        })
    }

    async fn get_version(
        &self,
        ctx: &CallContext,
        _req: GetVersionRequest,
    ) -> Result<GetVersionResponse, Status> {
        self.require(ctx, 0)?;
        Ok(GetVersionResponse {
            version: self.version,
        })
    }

    async fn get_install_type(
        &self,
        ctx: &CallContext,
        _req: GetInstallTypeRequest,
    ) -> Result<GetInstallTypeResponse, Status> {
        self.require(ctx, 0)?;
        Ok(GetInstallTypeResponse {
            install_type: self.install_type,
            installed_platforms: self.installed_platforms,
            product_type: self.product_type,
        })
    }

    async fn get_queue_file_name(
        &self,
        ctx: &CallContext,
        req: GetQueueFileNameRequest,
    ) -> Result<GetQueueFileNameResponse, Status> {
        self.require(ctx, access::JOB_SUBMIT)?;
        if req.file_name_size == 0 {
            return Err(Status::INVALID_PARAMETER);
        }
        let file_name = self
            .queue_directory
            .join(format!("{}.tif", Uuid::new_v4().simple()))
            .to_string_lossy()
            .into_owned();

        // Room for the terminating null, capped at the interface maximum.
        let capacity = req.file_name_size.min(MAX_QUEUE_FILE_NAME) as usize;
        if file_name.chars().count() + 1 > capacity {
            return Err(Status::INSUFFICIENT_BUFFER);
        }
        Ok(GetQueueFileNameResponse { file_name })
    }

    async fn get_configuration(
        &self,
        ctx: &CallContext,
        _req: GetConfigurationRequest,
    ) -> Result<GetConfigurationResponse, Status> {
        self.require(ctx, access::CONFIG_QUERY)?;
        Ok(GetConfigurationResponse {
            configuration: self.state.read().configuration.clone(),
        })
    }

    async fn set_configuration(
        &self,
        ctx: &CallContext,
        req: SetConfigurationRequest,
    ) -> Result<SetConfigurationResponse, Status> {
        self.require(ctx, access::CONFIG_SET)?;
        let configuration = req.configuration;
        if configuration.archive_outgoing_faxes && configuration.archive_directory.is_empty() {
            return Err(Status::INVALID_PARAMETER);
        }
        info!(
            call_id = ctx.call_id,
            retries = configuration.retries,
            pause_server_queue = configuration.pause_server_queue,
            "fax configuration updated"
        );
        self.state.write().configuration = configuration;
        Ok(SetConfigurationResponse::default())
    }

    async fn get_logging_categories(
        &self,
        ctx: &CallContext,
        _req: GetLoggingCategoriesRequest,
    ) -> Result<GetLoggingCategoriesResponse, Status> {
        self.require(ctx, access::CONFIG_QUERY)?;
        Ok(GetLoggingCategoriesResponse {
            categories: self.state.read().logging_categories.clone(),
        })
    }

    async fn set_logging_categories(
        &self,
        ctx: &CallContext,
        req: SetLoggingCategoriesRequest,
    ) -> Result<SetLoggingCategoriesResponse, Status> {
        self.require(ctx, access::CONFIG_SET)?;
        if req.categories.is_empty() {
            return Err(Status::INVALID_PARAMETER);
        }
        info!(
            call_id = ctx.call_id,
            categories = req.categories.len(),
            "logging categories updated"
        );
        self.state.write().logging_categories = req.categories;
        Ok(SetLoggingCategoriesResponse::default())
    }

    async fn get_mapi_profiles(
        &self,
        ctx: &CallContext,
        _req: GetMapiProfilesRequest,
    ) -> Result<GetMapiProfilesResponse, Status> {
        self.require(ctx, access::CONFIG_QUERY)?;
        Ok(GetMapiProfilesResponse {
            profiles: self.mapi_profiles.clone(),
        })
    }

    async fn get_security_descriptor_count(
        &self,
        ctx: &CallContext,
        _req: GetSecurityDescriptorCountRequest,
    ) -> Result<GetSecurityDescriptorCountResponse, Status> {
        self.require(ctx, 0)?;
        Ok(GetSecurityDescriptorCountResponse {
            count: SECURITY_DESCRIPTOR_COUNT,
        })
    }

    async fn access_check(
        &self,
        ctx: &CallContext,
        req: AccessCheckRequest,
    ) -> Result<AccessCheckResponse, Status> {
        self.require(ctx, 0)?;
        Ok(AccessCheckResponse {
            has_access: self.granted_access & req.access_mask == req.access_mask,
        })
    }
}

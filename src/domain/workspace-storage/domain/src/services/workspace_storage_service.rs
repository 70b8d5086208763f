// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{TenantId, Workspace, WorkspaceId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Storage size reporting at workspace and tenant granularity.
///
/// Directory failures never surface through this trait: calculators degrade
/// to fixed placeholder data, so callers only ever observe a byte count or a
/// missing-identifier error.
#[async_trait::async_trait]
pub trait WorkspaceStorageService: Send + Sync {
    /// Workspaces visible to the current identity, or the placeholder list
    /// when the directory is absent or failing
    async fn list_workspaces(&self) -> Vec<Workspace>;

    /// Total size in bytes of all items in a workspace. Falls back to the
    /// configured default workspace when `workspace_id` is `None`.
    async fn workspace_total_size(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<u64, GetWorkspaceSizeError>;

    /// Total size in bytes across all workspaces of a tenant. Falls back to
    /// the configured default tenant when `tenant_id` is `None`.
    async fn tenant_total_size(
        &self,
        tenant_id: Option<&TenantId>,
    ) -> Result<u64, GetTenantSizeError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GetWorkspaceSizeError {
    #[error(transparent)]
    WorkspaceNotSpecified(#[from] WorkspaceNotSpecifiedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GetTenantSizeError {
    #[error(transparent)]
    TenantNotSpecified(#[from] TenantNotSpecifiedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Workspace id was not provided and no default is configured")]
pub struct WorkspaceNotSpecifiedError {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Tenant id was not provided and no default is configured")]
pub struct TenantNotSpecifiedError {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

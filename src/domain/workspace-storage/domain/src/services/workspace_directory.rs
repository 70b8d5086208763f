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

use crate::{Workspace, WorkspaceId, WorkspaceItem};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read-only view of the platform directory: workspaces visible to the
/// current identity and the items they contain.
///
/// Implementations talk to the real platform API and may fail for network or
/// auth reasons. Consumers must treat any error as "directory unavailable"
/// and degrade to placeholder data rather than propagate it.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait WorkspaceDirectory: Send + Sync {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, WorkspaceDirectoryError>;

    async fn list_items(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<WorkspaceItem>, WorkspaceDirectoryError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum WorkspaceDirectoryError {
    #[error(transparent)]
    Unavailable(#[from] DirectoryUnavailableError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Workspace directory is not reachable: {reason}")]
pub struct DirectoryUnavailableError {
    pub reason: String,
}

impl DirectoryUnavailableError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

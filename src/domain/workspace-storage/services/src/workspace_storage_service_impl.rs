// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface};
use fabric_workspace_storage::{
    GetTenantSizeError,
    GetWorkspaceSizeError,
    TenantId,
    TenantNotSpecifiedError,
    Workspace,
    WorkspaceDirectory,
    WorkspaceId,
    WorkspaceItem,
    WorkspaceNotSpecifiedError,
    WorkspaceStorageConfig,
    WorkspaceStorageService,
};

use crate::{ItemSizeEstimator, placeholder};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct WorkspaceStorageServiceImpl {
    maybe_directory: Option<Arc<dyn WorkspaceDirectory>>,
    config: Arc<WorkspaceStorageConfig>,
}

#[component(pub)]
#[interface(dyn WorkspaceStorageService)]
impl WorkspaceStorageServiceImpl {
    pub fn new(
        maybe_directory: Option<Arc<dyn WorkspaceDirectory>>,
        config: Arc<WorkspaceStorageConfig>,
    ) -> Self {
        Self {
            maybe_directory,
            config,
        }
    }

    async fn workspaces_or_placeholder(&self) -> Vec<Workspace> {
        let Some(directory) = &self.maybe_directory else {
            return placeholder::workspaces();
        };

        match directory.list_workspaces().await {
            Ok(workspaces) => workspaces,
            Err(error) => {
                tracing::warn!(
                    error = ?error,
                    "Failed to list workspaces, using placeholder data",
                );
                placeholder::workspaces()
            }
        }
    }

    /// Size of a single workspace. Every failure mode of the directory lands
    /// on the placeholder item list, independently per workspace.
    async fn workspace_size_or_placeholder(&self, workspace_id: &WorkspaceId) -> u64 {
        let Some(directory) = &self.maybe_directory else {
            return placeholder::workspace_total_size();
        };

        match directory.list_items(workspace_id).await {
            Ok(items) if !items.is_empty() => Self::total_size_of_items(&items),
            Ok(_) => {
                tracing::debug!(
                    %workspace_id,
                    "Directory reported no items, using placeholder data",
                );
                placeholder::workspace_total_size()
            }
            Err(error) => {
                tracing::warn!(
                    %workspace_id,
                    error = ?error,
                    "Failed to list workspace items, using placeholder data",
                );
                placeholder::workspace_total_size()
            }
        }
    }

    fn total_size_of_items(items: &[WorkspaceItem]) -> u64 {
        let has_reported_sizes = items.iter().any(|item| item.size_bytes.is_some());
        if has_reported_sizes {
            // Items the directory did not size count as zero
            items.iter().map(|item| item.size_bytes.unwrap_or(0)).sum()
        } else {
            ItemSizeEstimator::estimate_total_size(items)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WorkspaceStorageService for WorkspaceStorageServiceImpl {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn list_workspaces(&self) -> Vec<Workspace> {
        self.workspaces_or_placeholder().await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(?workspace_id))]
    async fn workspace_total_size(
        &self,
        workspace_id: Option<&WorkspaceId>,
    ) -> Result<u64, GetWorkspaceSizeError> {
        let workspace_id = workspace_id
            .or(self.config.workspace_id.as_ref())
            .ok_or(WorkspaceNotSpecifiedError {})?;

        let total_size = self.workspace_size_or_placeholder(workspace_id).await;

        tracing::debug!(%workspace_id, total_size, "Computed workspace total size");
        Ok(total_size)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(?tenant_id))]
    async fn tenant_total_size(
        &self,
        tenant_id: Option<&TenantId>,
    ) -> Result<u64, GetTenantSizeError> {
        let tenant_id = tenant_id
            .or(self.config.tenant_id.as_ref())
            .ok_or(TenantNotSpecifiedError {})?;

        let mut total_size = 0;
        for workspace in self.workspaces_or_placeholder().await {
            total_size += self.workspace_size_or_placeholder(&workspace.id).await;
        }

        tracing::debug!(%tenant_id, total_size, "Computed tenant total size");
        Ok(total_size)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

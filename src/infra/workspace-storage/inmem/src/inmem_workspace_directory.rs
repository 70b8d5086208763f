// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dill::*;
use fabric_workspace_storage::{
    Workspace,
    WorkspaceDirectory,
    WorkspaceDirectoryError,
    WorkspaceId,
    WorkspaceItem,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    workspaces: Vec<Workspace>,
    items_by_workspace: HashMap<WorkspaceId, Vec<WorkspaceItem>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryWorkspaceDirectory {
    state: Arc<Mutex<State>>,
}

#[component(pub)]
#[interface(dyn WorkspaceDirectory)]
#[scope(Singleton)]
impl InMemoryWorkspaceDirectory {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn add_workspace(&self, workspace: Workspace, items: Vec<WorkspaceItem>) {
        let mut guard = self.state.lock().unwrap();
        guard
            .items_by_workspace
            .insert(workspace.id.clone(), items);
        guard.workspaces.push(workspace);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WorkspaceDirectory for InMemoryWorkspaceDirectory {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, WorkspaceDirectoryError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.workspaces.clone())
    }

    async fn list_items(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<WorkspaceItem>, WorkspaceDirectoryError> {
        let guard = self.state.lock().unwrap();
        Ok(guard
            .items_by_workspace
            .get(workspace_id)
            .cloned()
            .unwrap_or_default())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

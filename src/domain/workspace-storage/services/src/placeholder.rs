// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Fixed substitute data used whenever the platform directory is absent or
//! failing. Static and infallible, so the fallback path can never error.

use fabric_workspace_storage::{ItemType, Workspace, WorkspaceId, WorkspaceItem};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn workspaces() -> Vec<Workspace> {
    vec![
        Workspace::new(
            WorkspaceId::try_new("workspace-1").unwrap(),
            "Default Workspace",
            Some("Default workspace for the tenant".to_string()),
            true,
            Some("capacity-1".to_string()),
        ),
        Workspace::new(
            WorkspaceId::try_new("workspace-2").unwrap(),
            "Development Workspace",
            Some("Development environment workspace".to_string()),
            false,
            None,
        ),
    ]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn workspace_items() -> Vec<WorkspaceItem> {
    vec![
        WorkspaceItem::new("dataset1.pbix", Some(ItemType::Dataset), Some(50 * MIB)),
        WorkspaceItem::new("report1.pbix", Some(ItemType::Report), Some(25 * MIB)),
        WorkspaceItem::new("dashboard1.json", Some(ItemType::Dashboard), Some(100 * KIB)),
        WorkspaceItem::new("model1.bim", Some(ItemType::SemanticModel), Some(10 * MIB)),
    ]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn workspace_total_size() -> u64 {
    workspace_items()
        .iter()
        .map(|item| item.size_bytes.unwrap_or(0))
        .sum()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

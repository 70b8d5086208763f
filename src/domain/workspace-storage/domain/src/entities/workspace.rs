// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::WorkspaceId;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A named container of items within a tenant. Immutable once returned by a
/// directory lookup or the placeholder generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub description: Option<String>,
    pub is_capacity_assigned: bool,
    pub capacity_id: Option<String>,
}

impl Workspace {
    pub fn new(
        id: WorkspaceId,
        name: impl Into<String>,
        description: Option<String>,
        is_capacity_assigned: bool,
        capacity_id: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            is_capacity_assigned,
            capacity_id,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use nutype::nutype;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identifier of a workspace, unique within a tenant
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug, Clone, PartialEq, Eq, Hash, AsRef, Display, Serialize, Deserialize
    )
)]
pub struct WorkspaceId(String);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identifier of the top-level organizational boundary containing workspaces
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug, Clone, PartialEq, Eq, Hash, AsRef, Display, Serialize, Deserialize
    )
)]
pub struct TenantId(String);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

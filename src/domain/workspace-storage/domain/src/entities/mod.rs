// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod ids;
mod workspace;
mod workspace_item;
mod workspace_storage_config;

pub use ids::*;
pub use workspace::*;
pub use workspace_item::*;
pub use workspace_storage_config::*;

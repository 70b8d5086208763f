// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use fabric_workspace_storage::{ItemType, WorkspaceItem};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Applied per item when the item carries a tag outside the known set, or no
/// tag while other items in the list are tagged
pub const ASSUMED_UNKNOWN_TYPE_SIZE: u64 = 10 * MIB;

/// Applied per item when no item in the list carries any type information
pub const ASSUMED_AVERAGE_ITEM_SIZE: u64 = 20 * MIB;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Approximates item sizes from a static per-type table when the directory
/// does not report exact byte counts. Deterministic: the same item list
/// always produces the same estimate.
pub struct ItemSizeEstimator;

impl ItemSizeEstimator {
    pub fn estimate_total_size(items: &[WorkspaceItem]) -> u64 {
        let no_type_information = items.iter().all(|item| item.item_type.is_none());
        if no_type_information {
            return items.len() as u64 * ASSUMED_AVERAGE_ITEM_SIZE;
        }

        items
            .iter()
            .map(|item| match &item.item_type {
                Some(item_type) => Self::assumed_item_size(item_type),
                None => ASSUMED_UNKNOWN_TYPE_SIZE,
            })
            .sum()
    }

    pub fn assumed_item_size(item_type: &ItemType) -> u64 {
        match item_type {
            ItemType::Dataset => 50 * MIB,
            ItemType::Report => 25 * MIB,
            ItemType::Dashboard => 100 * KIB,
            ItemType::Dataflow => 5 * MIB,
            ItemType::Lakehouse => 100 * MIB,
            ItemType::Notebook => 512 * KIB,
            ItemType::SemanticModel => 10 * MIB,
            ItemType::Datamart => 50 * MIB,
            ItemType::Unknown(_) => ASSUMED_UNKNOWN_TYPE_SIZE,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

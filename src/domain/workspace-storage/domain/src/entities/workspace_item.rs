// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A stored artifact within a workspace. `size_bytes` is absent when the
/// directory does not report exact sizes, `item_type` when no type
/// information is available at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceItem {
    pub name: String,
    pub item_type: Option<ItemType>,
    pub size_bytes: Option<u64>,
}

impl WorkspaceItem {
    pub fn new(
        name: impl Into<String>,
        item_type: Option<ItemType>,
        size_bytes: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            item_type,
            size_bytes,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Item type tag as reported by the platform directory. The set is open:
/// tags outside the known list are preserved in [`ItemType::Unknown`] rather
/// than rejected.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Dataset,
    Report,
    Dashboard,
    Dataflow,
    Lakehouse,
    Notebook,
    SemanticModel,
    Datamart,
    #[strum(default)]
    Unknown(String),
}

impl From<String> for ItemType {
    fn from(value: String) -> Self {
        // Infallible: unmatched tags land on the default variant
        value.as_str().parse().unwrap_or(Self::Unknown(value))
    }
}

impl From<ItemType> for String {
    fn from(value: ItemType) -> Self {
        value.to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

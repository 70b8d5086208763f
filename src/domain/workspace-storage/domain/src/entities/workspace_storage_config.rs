// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;

use crate::{TenantId, WorkspaceId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reporting scope and access settings held by the storage service.
///
/// The connection string is opaque to this crate and is kept behind
/// [`SecretString`] so it never appears in logs or debug output.
#[derive(Debug, Default)]
pub struct WorkspaceStorageConfig {
    /// Default workspace to report on when a call does not name one
    pub workspace_id: Option<WorkspaceId>,
    /// Default tenant to report on when a call does not name one
    pub tenant_id: Option<TenantId>,
    pub connection_string: Option<SecretString>,
    pub authentication_method: AuthenticationMethod,
}

impl WorkspaceStorageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample() -> Self {
        Self {
            workspace_id: Some(WorkspaceId::try_new("sample-workspace").unwrap()),
            tenant_id: Some(TenantId::try_new("sample-tenant").unwrap()),
            connection_string: Some(SecretString::from(
                "DefaultEndpointsProtocol=https;AccountName=sample;AccountKey=sample",
            )),
            authentication_method: AuthenticationMethod::ServicePrincipal,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// How the directory adapter should authenticate. The value is passed
/// through as-is: tags outside the known set are preserved in
/// [`AuthenticationMethod::Custom`], not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AuthenticationMethod {
    #[default]
    Default,
    ServicePrincipal,
    Interactive,
    DeviceCode,
    #[strum(default)]
    Custom(String),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the `quota.openshift.io/v1` API group

use crate::config::RestConfig;
use crate::constants::{GROUP_NAME, VERSION};
use crate::error::{ClientsetError, Result};
use crate::types::quota::{AppliedClusterResourceQuota, ClusterResourceQuota};
use kube::{Api, Client};

/// Handle for the resources of `quota.openshift.io/v1`
#[derive(Clone)]
pub struct QuotaV1Client {
    client: Client,
}

impl QuotaV1Client {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn for_config(config: &RestConfig) -> Result<Self> {
        let client = config.build_client().map_err(|e| {
            ClientsetError::ConfigurationError(format!("Failed to create client: {}", e))
        })?;
        Ok(Self::new(client))
    }

    /// Like [`QuotaV1Client::for_config`], panicking on an invalid config
    pub fn for_config_or_die(config: &RestConfig) -> Self {
        Self::for_config(config).unwrap_or_else(|e| panic!("failed to create the QuotaV1Client: {}", e))
    }

    pub fn rest_client(&self) -> &Client {
        &self.client
    }

    pub fn api_version(&self) -> String {
        format!("{}/{}", GROUP_NAME, VERSION)
    }

    pub fn cluster_resource_quotas(&self) -> Api<ClusterResourceQuota> {
        Api::all(self.client.clone())
    }

    pub fn applied_cluster_resource_quotas(&self, namespace: &str) -> Api<AppliedClusterResourceQuota> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

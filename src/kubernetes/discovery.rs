// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server API group, version and resource discovery

use crate::config::RestConfig;
use crate::error::{ClientsetError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIGroupList, APIResourceList};
use k8s_openapi::apimachinery::pkg::version::Info;
use kube::{discovery::Discovery, Client};
use tracing::{debug, instrument};

/// Handle for querying which API groups, versions and resources a server offers
#[derive(Clone)]
pub struct DiscoveryClient {
    client: Client,
}

impl DiscoveryClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn for_config(config: &RestConfig) -> Result<Self> {
        let client = config.build_client().map_err(|e| {
            ClientsetError::DiscoveryUnavailable(format!("Failed to create client: {}", e))
        })?;
        Ok(Self::new(client))
    }

    /// Like [`DiscoveryClient::for_config`], panicking on an invalid config
    pub fn for_config_or_die(config: &RestConfig) -> Self {
        Self::for_config(config)
            .unwrap_or_else(|e| panic!("failed to create the DiscoveryClient: {}", e))
    }

    pub fn rest_client(&self) -> &Client {
        &self.client
    }

    pub async fn server_version(&self) -> Result<Info> {
        Ok(self.client.apiserver_version().await?)
    }

    /// Named API groups served under `/apis`
    pub async fn server_groups(&self) -> Result<APIGroupList> {
        Ok(self.client.list_api_groups().await?)
    }

    /// Resources of one group version. A bare version such as `v1` refers to
    /// the core group.
    pub async fn server_resources_for_group_version(&self, group_version: &str) -> Result<APIResourceList> {
        let resources = if group_version.contains('/') {
            self.client.list_api_group_resources(group_version).await?
        } else {
            self.client.list_core_api_resources(group_version).await?
        };
        Ok(resources)
    }

    /// Check whether the server serves `kind` in `group/version`
    #[instrument(skip(self))]
    pub async fn is_resource_served(&self, group: &str, version: &str, kind: &str) -> Result<bool> {
        let discovery = Discovery::new(self.client.clone())
            .filter(&[group])
            .run()
            .await?;

        for api_group in discovery.groups() {
            if api_group.name() == group {
                for (ar, _) in api_group.versioned_resources(version) {
                    if ar.kind == kind {
                        return Ok(true);
                    }
                }
            }
        }

        debug!("{} not found in {}/{}", kind, group, version);
        Ok(false)
    }
}

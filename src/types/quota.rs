// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::{ResourceQuotaSpec, ResourceQuotaStatus};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Quota enforced across every namespace matched by `selector`
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "quota.openshift.io", version = "v1", kind = "ClusterResourceQuota")]
#[kube(status = "ClusterResourceQuotaStatus")]
#[serde(rename_all = "camelCase")]
pub struct ClusterResourceQuotaSpec {
    pub quota: ResourceQuotaSpec,
    pub selector: ClusterResourceQuotaSelector,
}

/// Namespaced, read-only projection of a ClusterResourceQuota that applies to a namespace
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "quota.openshift.io",
    version = "v1",
    kind = "AppliedClusterResourceQuota"
)]
#[kube(namespaced)]
#[kube(status = "ClusterResourceQuotaStatus")]
#[serde(rename_all = "camelCase")]
pub struct AppliedClusterResourceQuotaSpec {
    pub quota: ResourceQuotaSpec,
    pub selector: ClusterResourceQuotaSelector,
}

/// Namespaces are selected when they match both the label and the annotation selector
#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResourceQuotaSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResourceQuotaStatus {
    #[serde(default)]
    pub total: ResourceQuotaStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<ResourceQuotaStatusByNamespace>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuotaStatusByNamespace {
    pub namespace: String,
    #[serde(default)]
    pub status: ResourceQuotaStatus,
}

impl ClusterResourceQuotaStatus {
    /// Usage of `resource` summed over all selected namespaces
    pub fn total_used(&self, resource: &str) -> Option<&Quantity> {
        self.total.used.as_ref().and_then(|used| used.get(resource))
    }

    /// Usage recorded for a single namespace
    pub fn namespace(&self, namespace: &str) -> Option<&ResourceQuotaStatus> {
        self.namespaces
            .iter()
            .find(|n| n.namespace == namespace)
            .map(|n| &n.status)
    }
}

impl ClusterResourceQuota {
    /// Hard limit configured for `resource`
    pub fn hard_limit(&self, resource: &str) -> Option<&Quantity> {
        self.spec.quota.hard.as_ref().and_then(|hard| hard.get(resource))
    }

    pub fn total_used(&self, resource: &str) -> Option<&Quantity> {
        self.status.as_ref().and_then(|s| s.total_used(resource))
    }
}

impl AppliedClusterResourceQuota {
    pub fn hard_limit(&self, resource: &str) -> Option<&Quantity> {
        self.spec.quota.hard.as_ref().and_then(|hard| hard.get(resource))
    }

    pub fn total_used(&self, resource: &str) -> Option<&Quantity> {
        self.status.as_ref().and_then(|s| s.total_used(resource))
    }
}

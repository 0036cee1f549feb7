// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource types served by `quota.openshift.io/v1`.

pub mod quota;

pub use quota::{
    AppliedClusterResourceQuota, ClusterResourceQuota, ClusterResourceQuotaSelector,
    ClusterResourceQuotaSpec, ClusterResourceQuotaStatus, ResourceQuotaStatusByNamespace,
};

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group served by the typed client
pub const GROUP_NAME: &str = "quota.openshift.io";

/// The single version of [`GROUP_NAME`] included in the clientset
pub const VERSION: &str = "v1";

/// Environment variables read when inferring a client configuration
pub mod env {
    /// Queries-per-second ceiling for the default rate limiter
    pub const QPS: &str = "KUBE_CLIENT_QPS";
    /// Burst size for the default rate limiter
    pub const BURST: &str = "KUBE_CLIENT_BURST";
}

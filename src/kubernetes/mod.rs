// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sub-clients aggregated by the clientset: API discovery and the typed quota group.

pub mod discovery;
pub mod quota_v1;

pub use discovery::DiscoveryClient;
pub use quota_v1::QuotaV1Client;

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Aggregated access to the discovery client and the `quota.openshift.io/v1` client.
//!
//! ```no_run
//! # async fn run() -> quota_clientset::error::Result<()> {
//! use quota_clientset::{Clientset, RestConfig};
//!
//! let config = RestConfig::infer().await?.with_rate_limit(10.0, 20);
//! let clientset = Clientset::for_config(&config)?;
//! let quotas = clientset.quota_v1().cluster_resource_quotas();
//! # Ok(())
//! # }
//! ```

use crate::config::RestConfig;
use crate::error::Result;
use crate::kubernetes::{DiscoveryClient, QuotaV1Client};
use kube::Client;
use tracing::error;

/// Accessors shared by a [`Clientset`] and an absent one (`Option<Clientset>`).
/// An absent clientset yields `None` from every accessor.
pub trait Interface {
    fn discovery(&self) -> Option<&DiscoveryClient>;

    fn quota_v1(&self) -> Option<&QuotaV1Client>;

    /// Alias of [`Interface::quota_v1`]
    #[deprecated(note = "please explicitly pick a version")]
    fn quota(&self) -> Option<&QuotaV1Client> {
        self.quota_v1()
    }
}

/// Holds the clients for each group. Each group has exactly one version
/// included in a Clientset.
#[derive(Clone)]
pub struct Clientset {
    discovery: DiscoveryClient,
    quota_v1: QuotaV1Client,
}

impl Clientset {
    /// Create a clientset for the given config.
    ///
    /// A token bucket limiter built from `qps` and `burst` is installed on a
    /// copy of the config when it has no limiter and `qps` is positive, so both
    /// sub-clients share one request budget.
    pub fn for_config(config: &RestConfig) -> Result<Self> {
        Self::assemble(config, QuotaV1Client::for_config, DiscoveryClient::for_config)
    }

    /// Create a clientset for the given config, panicking if it is invalid
    pub fn for_config_or_die(config: &RestConfig) -> Self {
        Self::for_config(config).unwrap_or_else(|e| panic!("failed to create the Clientset: {}", e))
    }

    /// Create a clientset around an already configured client
    pub fn new(client: Client) -> Self {
        Self {
            quota_v1: QuotaV1Client::new(client.clone()),
            discovery: DiscoveryClient::new(client),
        }
    }

    fn assemble<Q, D>(config: &RestConfig, new_quota_v1: Q, new_discovery: D) -> Result<Self>
    where
        Q: FnOnce(&RestConfig) -> Result<QuotaV1Client>,
        D: FnOnce(&RestConfig) -> Result<DiscoveryClient>,
    {
        let config = config.with_default_rate_limiter();

        let quota_v1 = new_quota_v1(&config)?;

        let discovery = new_discovery(&config).inspect_err(|e| {
            error!("failed to create the DiscoveryClient: {}", e);
        })?;

        Ok(Self { discovery, quota_v1 })
    }

    pub fn discovery(&self) -> &DiscoveryClient {
        &self.discovery
    }

    pub fn quota_v1(&self) -> &QuotaV1Client {
        &self.quota_v1
    }

    /// Default version of the quota client
    #[deprecated(note = "please explicitly pick a version")]
    pub fn quota(&self) -> &QuotaV1Client {
        &self.quota_v1
    }
}

impl Interface for Clientset {
    fn discovery(&self) -> Option<&DiscoveryClient> {
        Some(&self.discovery)
    }

    fn quota_v1(&self) -> Option<&QuotaV1Client> {
        Some(&self.quota_v1)
    }
}

impl<T: Interface> Interface for Option<T> {
    fn discovery(&self) -> Option<&DiscoveryClient> {
        self.as_ref().and_then(Interface::discovery)
    }

    fn quota_v1(&self) -> Option<&QuotaV1Client> {
        self.as_ref().and_then(Interface::quota_v1)
    }
}

impl<T: Interface + ?Sized> Interface for &T {
    fn discovery(&self) -> Option<&DiscoveryClient> {
        (**self).discovery()
    }

    fn quota_v1(&self) -> Option<&QuotaV1Client> {
        (**self).quota_v1()
    }
}

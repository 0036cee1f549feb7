// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Connection configuration shared by every sub-client of a clientset.

use crate::constants::env as env_vars;
use crate::error::{ClientsetError, Result};
use crate::flowcontrol::{RateLimitLayer, RateLimiter, TokenBucketRateLimiter};
use kube::client::ClientBuilder;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Connection configuration: where the cluster is, how to authenticate, and
/// how fast clients built from it may talk to the API server.
#[derive(Clone)]
pub struct RestConfig {
    pub kube: kube::Config,
    /// Queries per second for the default rate limiter; `0` disables it
    pub qps: f32,
    pub burst: u32,
    /// Explicit limiter, shared by every client built from this config
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl RestConfig {
    pub fn new(kube: kube::Config) -> Self {
        Self {
            kube,
            qps: 0.0,
            burst: 0,
            rate_limiter: None,
        }
    }

    pub fn with_rate_limit(mut self, qps: f32, burst: u32) -> Self {
        self.qps = qps;
        self.burst = burst;
        self
    }

    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Infer the cluster connection (kubeconfig or in-cluster) and read the
    /// throttling settings from the environment
    pub async fn infer() -> Result<Self> {
        let kube = kube::Config::infer()
            .await
            .map_err(|e| ClientsetError::ConfigurationError(format!("Failed to infer config: {}", e)))?;

        let qps = env_or_default(env_vars::QPS, 0.0)?;
        let burst = env_or_default(env_vars::BURST, 0)?;

        Ok(Self::new(kube).with_rate_limit(qps, burst))
    }

    /// Build a configuration from the current context of a kubeconfig document
    pub async fn from_kubeconfig_yaml(kubeconfig: &str) -> Result<Self> {
        let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
            ClientsetError::ConfigurationError(format!("Failed to parse kubeconfig: {}", e))
        })?;

        let kube = kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| ClientsetError::ConfigurationError(format!("Failed to create config: {}", e)))?;

        Ok(Self::new(kube))
    }

    /// Copy of this config with a token-bucket limiter installed when none is
    /// set and a positive QPS is configured. An existing limiter is kept.
    pub fn with_default_rate_limiter(&self) -> Self {
        let mut config = self.clone();
        if config.rate_limiter.is_none() && config.qps > 0.0 {
            debug!(
                "Installing token bucket rate limiter: qps={}, burst={}",
                config.qps, config.burst
            );
            config.rate_limiter = Some(Arc::new(TokenBucketRateLimiter::new(config.qps, config.burst)));
        }
        config
    }

    /// Build a `kube::Client` for this config. Requests go through the rate
    /// limiter when one is set. Must be called within a Tokio runtime.
    pub fn build_client(&self) -> std::result::Result<Client, kube::Error> {
        let builder = ClientBuilder::try_from(self.kube.clone())?;

        Ok(match &self.rate_limiter {
            Some(limiter) => builder.with_layer(&RateLimitLayer::new(limiter.clone())).build(),
            None => builder.build(),
        })
    }
}

impl From<kube::Config> for RestConfig {
    fn from(kube: kube::Config) -> Self {
        Self::new(kube)
    }
}

impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("cluster_url", &self.kube.cluster_url)
            .field("qps", &self.qps)
            .field("burst", &self.burst)
            .field("rate_limiter", &self.rate_limiter)
            .finish()
    }
}

fn env_or_default<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|e| {
            ClientsetError::ConfigurationError(format!("Invalid value '{}' for {}: {}", value, name, e))
        }),
        Err(_) => Ok(default),
    }
}

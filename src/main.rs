// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::{api::ListParams, ResourceExt};
use tracing::{info, warn};

use quota_clientset::constants::{GROUP_NAME, VERSION};
use quota_clientset::{Clientset, RestConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = RestConfig::infer().await?;
    info!(
        "Configuration loaded: cluster_url={}, qps={}, burst={}",
        config.kube.cluster_url, config.qps, config.burst
    );

    let clientset = Clientset::for_config(&config)?;

    let version = clientset.discovery().server_version().await?;
    info!("Connected to Kubernetes cluster {}", version.git_version);

    if !clientset
        .discovery()
        .is_resource_served(GROUP_NAME, VERSION, "ClusterResourceQuota")
        .await?
    {
        warn!(
            "ClusterResourceQuota ({}/{}) is not served by this cluster",
            GROUP_NAME, VERSION
        );
        return Ok(());
    }

    let quotas = clientset
        .quota_v1()
        .cluster_resource_quotas()
        .list(&ListParams::default())
        .await?;
    info!("Found {} cluster resource quotas", quotas.items.len());

    for quota in &quotas.items {
        let hard = quota
            .spec
            .quota
            .hard
            .as_ref()
            .map(|hard| {
                hard.iter()
                    .map(|(resource, limit)| format!("{}={}", resource, limit.0))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        info!("{}: {}", quota.name_any(), hard);
    }

    println!("{}", serde_json::to_string_pretty(&quotas.items)?);
    Ok(())
}

pub mod check_outcomes;
pub mod distribute;

use crate::config::AirdropConfig;
use crate::error::CliResult;
use airdrop_client::RpcNetwork;

/// Connect to the configured cluster and refuse to go on if it is the wrong one
pub async fn connect(config: &AirdropConfig) -> CliResult<RpcNetwork> {
    let rpc_url = config.rpc_url()?;
    println!("🌐 Connecting to {} at {}...", config.cluster, rpc_url);

    let network =
        RpcNetwork::new(rpc_url, config.cluster).with_poll_interval(config.poll_interval());
    network.verify_cluster().await?;
    println!("✅ Connected to {}", config.cluster);

    Ok(network)
}

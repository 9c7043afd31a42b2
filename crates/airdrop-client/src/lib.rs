/*!
# Airdrop Client

Everything the airdrop pipeline needs from the chain, behind one crate:

- **Transaction builders**: the token program's `transfer(recipient, amount)` call,
  wrapped with compute budget instructions and signed locally
- **Network seam**: the [`DistributionNetwork`] trait, so the pipeline can run against
  a real cluster or a stub
- **RPC client**: [`RpcNetwork`], a nonblocking Solana JSON-RPC implementation
- **Cluster identity**: [`Cluster`] names, default endpoints and genesis checks

## Usage

```rust,no_run
use airdrop_client::{
    build_transfer_tx, transaction_id, Cluster, ClientResult, DistributionNetwork, PaymentFee,
    RpcNetwork,
};
use airdrop_csvs::TokenAmount;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

async fn example() -> ClientResult<()> {
    let cluster = Cluster::Devnet;
    let network = RpcNetwork::new(cluster.resolve_rpc_url(None)?, cluster);
    network.verify_cluster().await?;

    let signer = Keypair::new();
    let contract_id = Pubkey::new_unique();
    let amount: TokenAmount = "9999999999999999999".parse().unwrap();

    let tx = build_transfer_tx(
        &signer,
        &contract_id,
        "11111111111111111111111111111112",
        &amount,
        &PaymentFee::default(),
        network.latest_blockhash().await?,
    )?;

    let local_id = transaction_id(&tx);
    let network_id = network.submit(&tx).await?;
    assert_eq!(local_id, Some(network_id));

    Ok(())
}
```
*/

pub mod client;
pub mod cluster;
pub mod errors;
pub mod instruction_builders;
pub mod network;
pub mod transaction_builders;
pub mod types;

pub use client::{execution_results_from, submit_error, RpcNetwork, DEFAULT_POLL_INTERVAL};
pub use cluster::Cluster;
pub use errors::{ClientError, ClientResult};
pub use instruction_builders::{
    build_compute_budget_ixs, build_transfer_ix, parse_recipient, transfer_discriminator,
    AMOUNT_ENCODED_LEN, TRANSFER_DATA_LEN, TRANSFER_ENTRY_POINT,
};
pub use network::DistributionNetwork;
pub use transaction_builders::{build_transfer_tx, transaction_id};
pub use types::{ExecutionResult, PaymentFee};

/*!
# Airdrop Batch Transfers

Sequential batch distribution of tokens with post-hoc confirmation.

1. Every line of the input file becomes a [`TransferRequest`](airdrop_csvs::TransferRequest)
2. Requests are submitted strictly one after another, each awaited before the next
3. Each outcome is appended to the output file immediately, with an empty id on failure
4. Once all are submitted, every recorded id is queried (with a timeout) and counted
   as confirmed if its first execution record shows a non-zero cost

Failures of a single transfer or a single confirmation query never stop the batch.
Nothing is retried; rerunning appends a second set of outcomes and sends every
transfer again.

## Quick Start

```rust,no_run
use airdrop_batch_tx::{BatchDistributor, DistributionConfig};
use airdrop_client::{Cluster, RpcNetwork};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let cluster = Cluster::Devnet;
let network = RpcNetwork::new(cluster.resolve_rpc_url(None)?, cluster);
let config = DistributionConfig::new(Pubkey::new_unique());

let distributor = BatchDistributor::new(network, Keypair::new(), config)?;
let report = distributor.distribute("recipients.csv", "outcomes.csv").await?;

println!(
    "{} submitted, {} confirmed",
    report.submitted(),
    report.confirmation.confirmed
);
# Ok(())
# }
```
*/

mod config;
mod confirmation;
mod distributor;
mod error;
mod submitter;

pub use config::DistributionConfig;
pub use confirmation::{is_confirmed, ConfirmationChecker, ConfirmationReport};
pub use distributor::{BatchDistributor, DistributionReport};
pub use error::{TxBatchError, TxBatchResult};
pub use submitter::{SubmitFailure, TransferOutcome, TransferSubmitter};

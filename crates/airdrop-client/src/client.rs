/*!
# RPC Network Client

[`DistributionNetwork`] over a Solana JSON-RPC node.
*/

use crate::{
    cluster::Cluster,
    errors::{ClientError, ClientResult},
    network::DistributionNetwork,
    types::ExecutionResult,
};
use async_trait::async_trait;
use solana_client::{
    client_error::{ClientError as RpcClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcSendTransactionConfig, RpcTransactionConfig},
    rpc_request::RpcError,
};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, signature::Signature,
    transaction::Transaction,
};
use solana_transaction_status_client_types::EncodedConfirmedTransactionWithStatusMeta;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Prefix of the error `RpcClient` raises when the node answers with another signature
const MISMATCHED_SIGNATURE_PREFIX: &str = "RPC node returned mismatched signature";

/// Delay between signature status polls while waiting for a transaction to land
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

pub struct RpcNetwork {
    rpc_client: Arc<RpcClient>,
    cluster: Cluster,
    poll_interval: Duration,
}

impl RpcNetwork {
    /// Create a client with default commitment (confirmed)
    pub fn new(rpc_url: String, cluster: Cluster) -> Self {
        Self::new_with_commitment(rpc_url, cluster, CommitmentConfig::confirmed())
    }

    pub fn new_with_commitment(
        rpc_url: String,
        cluster: Cluster,
        commitment: CommitmentConfig,
    ) -> Self {
        Self {
            rpc_client: Arc::new(RpcClient::new_with_commitment(rpc_url, commitment)),
            cluster,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Check that the node really serves the configured cluster
    pub async fn verify_cluster(&self) -> ClientResult<()> {
        let Some(expected) = self.cluster.expected_genesis_hash() else {
            debug!("Skipping genesis check for {}", self.cluster);
            return Ok(());
        };

        let found = self.rpc_client.get_genesis_hash().await?.to_string();
        if found != expected {
            return Err(ClientError::ClusterMismatch {
                expected: self.cluster.to_string(),
                expected_genesis: expected.to_string(),
                found,
            });
        }

        info!("Connected to {} ({})", self.cluster, self.rpc_client.url());
        Ok(())
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    /// Get the RPC client (for advanced operations)
    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }

    async fn wait_until_landed(&self, signature: &Signature) -> ClientResult<()> {
        let commitment = self.rpc_client.commitment();
        loop {
            let statuses = self
                .rpc_client
                .get_signature_statuses(&[*signature])
                .await?
                .value;

            if let Some(Some(status)) = statuses.first() {
                if status.satisfies_commitment(commitment) {
                    return Ok(());
                }
            }

            debug!("Transaction {} not landed yet", signature);
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl DistributionNetwork for RpcNetwork {
    async fn latest_blockhash(&self) -> ClientResult<Hash> {
        Ok(self.rpc_client.get_latest_blockhash().await?)
    }

    async fn submit(&self, transaction: &Transaction) -> ClientResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.rpc_client.commitment().commitment),
            ..Default::default()
        };

        let signature = self
            .rpc_client
            .send_transaction_with_config(transaction, config)
            .await
            .map_err(|err| submit_error(transaction.signatures.first(), err))?;
        debug!("Submitted transaction {}", signature);

        Ok(signature)
    }

    async fn execution_results(&self, signature: &Signature) -> ClientResult<Vec<ExecutionResult>> {
        self.wait_until_landed(signature).await?;

        let config = RpcTransactionConfig {
            encoding: None,
            commitment: Some(self.rpc_client.commitment()),
            max_supported_transaction_version: Some(0),
        };
        let confirmed = self
            .rpc_client
            .get_transaction_with_config(signature, config)
            .await?;

        Ok(execution_results_from(confirmed))
    }
}

/// `RpcClient` compares the node's answer with the local signature itself; surface a
/// disagreement as its own error instead of an ordinary RPC failure.
pub fn submit_error(local: Option<&Signature>, err: RpcClientError) -> ClientError {
    let mismatch = match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcRequestError(detail))
            if detail.starts_with(MISMATCHED_SIGNATURE_PREFIX) =>
        {
            Some(detail.clone())
        }
        _ => None,
    };

    match (local, mismatch) {
        (Some(local), Some(detail)) => ClientError::SignatureMismatch {
            local: *local,
            detail,
        },
        _ => ClientError::Rpc(err),
    }
}

/// One record per transaction with status meta; its fee is the execution cost
pub fn execution_results_from(
    confirmed: EncodedConfirmedTransactionWithStatusMeta,
) -> Vec<ExecutionResult> {
    let slot = confirmed.slot;
    confirmed
        .transaction
        .meta
        .map(|meta| ExecutionResult {
            slot,
            cost: meta.fee,
            error: meta.err.map(|err| err.to_string()),
        })
        .into_iter()
        .collect()
}

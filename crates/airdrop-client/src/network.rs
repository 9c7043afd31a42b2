use crate::{errors::ClientResult, types::ExecutionResult};
use async_trait::async_trait;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};
use std::sync::Arc;

/// The network operations a distribution needs.
///
/// Implemented by [`crate::RpcNetwork`] for real clusters and by stubs in tests.
#[async_trait]
pub trait DistributionNetwork: Send + Sync {
    /// Recent blockhash used to bind a new transaction to the cluster
    async fn latest_blockhash(&self) -> ClientResult<Hash>;

    /// Submit a signed transaction, returning the id the network assigned to it
    async fn submit(&self, transaction: &Transaction) -> ClientResult<Signature>;

    /// Execution records for a submitted transaction.
    ///
    /// May wait for the transaction to land; callers bound the wait themselves.
    async fn execution_results(&self, signature: &Signature) -> ClientResult<Vec<ExecutionResult>>;
}

#[async_trait]
impl<T: DistributionNetwork + ?Sized> DistributionNetwork for Arc<T> {
    async fn latest_blockhash(&self) -> ClientResult<Hash> {
        (**self).latest_blockhash().await
    }

    async fn submit(&self, transaction: &Transaction) -> ClientResult<Signature> {
        (**self).submit(transaction).await
    }

    async fn execution_results(&self, signature: &Signature) -> ClientResult<Vec<ExecutionResult>> {
        (**self).execution_results(signature).await
    }
}

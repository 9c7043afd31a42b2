use crate::{DistributionConfig, TxBatchError, TxBatchResult};
use airdrop_client::{build_transfer_tx, transaction_id, ClientError, DistributionNetwork};
use airdrop_csvs::{TokenAmount, TransferRequest};
use solana_sdk::signature::{Keypair, Signature};
use tracing::{debug, error, warn};

/// Why a transfer ended without a transaction id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The node rejected the call or the RPC exchange failed
    Rpc,
    /// The transaction could not be built or signed
    Build,
    /// The network reported a different id than the one signed locally
    SignatureMismatch,
}

impl SubmitFailure {
    fn classify(err: &TxBatchError) -> Self {
        match err {
            TxBatchError::Client(ClientError::Rpc(_)) => SubmitFailure::Rpc,
            TxBatchError::SignatureMismatch { .. }
            | TxBatchError::Client(ClientError::SignatureMismatch { .. }) => {
                SubmitFailure::SignatureMismatch
            }
            _ => SubmitFailure::Build,
        }
    }
}

/// Result of attempting one transfer request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub transaction_id: Option<Signature>,
    pub request: TransferRequest,
    pub failure: Option<SubmitFailure>,
}

impl TransferOutcome {
    pub fn is_submitted(&self) -> bool {
        self.transaction_id.is_some()
    }
}

/// Builds, signs and submits one transfer at a time.
///
/// Submission is not idempotent: calling [`TransferSubmitter::submit`] again for a
/// request whose first transaction is merely slow to land sends a second transfer.
pub struct TransferSubmitter<'a, N: ?Sized> {
    network: &'a N,
    signer: &'a Keypair,
    config: &'a DistributionConfig,
}

impl<'a, N: DistributionNetwork + ?Sized> TransferSubmitter<'a, N> {
    pub fn new(network: &'a N, signer: &'a Keypair, config: &'a DistributionConfig) -> Self {
        Self {
            network,
            signer,
            config,
        }
    }

    /// Send one transfer and return its id once the network has accepted it
    pub async fn send(&self, recipient: &str, amount: &TokenAmount) -> TxBatchResult<Signature> {
        let recent_blockhash = self.network.latest_blockhash().await?;

        let transaction = build_transfer_tx(
            self.signer,
            &self.config.contract_id,
            recipient,
            amount,
            &self.config.payment_fee,
            recent_blockhash,
        )?;
        let local = transaction_id(&transaction).ok_or(TxBatchError::Unsigned)?;
        debug!("Signed transfer of {} to {} as {}", amount, recipient, local);

        let network = self.network.submit(&transaction).await?;
        if network != local {
            return Err(TxBatchError::SignatureMismatch { local, network });
        }

        Ok(local)
    }

    /// Submit a request, turning every failure into an outcome without an id
    pub async fn submit(&self, request: TransferRequest) -> TransferOutcome {
        match self.send(&request.recipient, &request.amount).await {
            Ok(signature) => TransferOutcome {
                transaction_id: Some(signature),
                request,
                failure: None,
            },
            Err(err) => {
                let failure = SubmitFailure::classify(&err);
                match failure {
                    SubmitFailure::SignatureMismatch => error!(
                        "Line {} ({}): {}. Transfer state unknown, verify manually",
                        request.line, request.raw_line, err
                    ),
                    SubmitFailure::Rpc => warn!(
                        "Line {} ({}): remote call failed: {}",
                        request.line, request.raw_line, err
                    ),
                    SubmitFailure::Build => warn!(
                        "Line {} ({}): could not build transfer: {}",
                        request.line, request.raw_line, err
                    ),
                }
                TransferOutcome {
                    transaction_id: None,
                    request,
                    failure: Some(failure),
                }
            }
        }
    }
}

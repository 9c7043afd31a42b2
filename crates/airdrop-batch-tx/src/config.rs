use crate::{TxBatchError, TxBatchResult};
use airdrop_client::PaymentFee;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;

/// Configuration for a distribution run
#[derive(Debug, Clone)]
pub struct DistributionConfig {
    /// Token program whose `transfer` entry point is called
    pub contract_id: Pubkey,

    /// Fee ceiling authorised for each transfer
    pub payment_fee: PaymentFee,

    /// Upper bound on waiting for one transaction's execution results
    pub confirmation_timeout: Duration,

    /// Log progress every this many submitted transfers
    pub submit_progress_interval: usize,

    /// Log progress every this many checked transaction ids
    pub confirm_progress_interval: usize,
}

impl DistributionConfig {
    pub fn new(contract_id: Pubkey) -> Self {
        Self {
            contract_id,
            payment_fee: PaymentFee::default(),
            confirmation_timeout: Duration::from_secs(120),
            submit_progress_interval: 100,
            confirm_progress_interval: 10,
        }
    }

    pub fn validate(&self) -> TxBatchResult<()> {
        if self.submit_progress_interval == 0 || self.confirm_progress_interval == 0 {
            return Err(TxBatchError::Config(
                "progress intervals must be at least 1".to_string(),
            ));
        }
        if self.confirmation_timeout.is_zero() {
            return Err(TxBatchError::Config(
                "confirmation timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

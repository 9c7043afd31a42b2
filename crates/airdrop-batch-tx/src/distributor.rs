use crate::{
    confirmation::{ConfirmationChecker, ConfirmationReport},
    submitter::{TransferOutcome, TransferSubmitter},
    DistributionConfig, TxBatchResult,
};
use airdrop_client::DistributionNetwork;
use airdrop_csvs::{format_outcome_line, read_transfer_requests, OutcomeWriter, TransferRequest};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use std::path::Path;
use tracing::info;

/// Everything one distribution run produced
#[derive(Debug, Clone)]
pub struct DistributionReport {
    /// One outcome per input line, in input order
    pub outcomes: Vec<TransferOutcome>,
    pub confirmation: ConfirmationReport,
}

impl DistributionReport {
    pub fn submitted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_submitted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.submitted()
    }

    pub fn transaction_ids(&self) -> Vec<Option<Signature>> {
        self.outcomes.iter().map(|o| o.transaction_id).collect()
    }
}

/// Drives a whole distribution: read, submit sequentially, record, then confirm
pub struct BatchDistributor<N> {
    network: N,
    signer: Keypair,
    config: DistributionConfig,
}

impl<N: DistributionNetwork> BatchDistributor<N> {
    pub fn new(network: N, signer: Keypair, config: DistributionConfig) -> TxBatchResult<Self> {
        config.validate()?;
        Ok(Self {
            network,
            signer,
            config,
        })
    }

    pub fn signer_pubkey(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Run the full pipeline.
    ///
    /// The input is parsed completely before `output` is opened, so a malformed input
    /// file leaves the output untouched. Outcome lines are appended, never overwritten.
    pub async fn distribute(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> TxBatchResult<DistributionReport> {
        let requests = read_transfer_requests(input)?;
        info!(
            "Distributing {} transfers from {} to program {}",
            requests.len(),
            self.signer.pubkey(),
            self.config.contract_id
        );

        let outcomes = {
            let mut writer = OutcomeWriter::open_append(output)?;
            self.submit_all(requests, &mut writer).await?
        };

        let ids: Vec<Option<Signature>> = outcomes.iter().map(|o| o.transaction_id).collect();
        let confirmation = self.confirm(&ids).await;

        Ok(DistributionReport {
            outcomes,
            confirmation,
        })
    }

    /// Submit every request in order, one at a time, recording each outcome as it lands
    pub async fn submit_all(
        &self,
        requests: Vec<TransferRequest>,
        writer: &mut OutcomeWriter,
    ) -> TxBatchResult<Vec<TransferOutcome>> {
        let submitter = TransferSubmitter::new(&self.network, &self.signer, &self.config);
        let total = requests.len();
        let mut outcomes = Vec::with_capacity(total);

        for request in requests {
            let outcome = submitter.submit(request).await;

            let id = outcome.transaction_id.map(|s| s.to_string());
            writer.append(id.as_deref(), &outcome.request.raw_line)?;
            info!("{}", format_outcome_line(id.as_deref(), &outcome.request.raw_line));

            outcomes.push(outcome);
            if outcomes.len() % self.config.submit_progress_interval == 0 {
                info!("Progress: {}/{}", outcomes.len(), total);
            }
        }

        Ok(outcomes)
    }

    /// Check previously recorded ids; never re-submits anything
    pub async fn confirm(&self, ids: &[Option<Signature>]) -> ConfirmationReport {
        ConfirmationChecker::new(
            &self.network,
            self.config.confirmation_timeout,
            self.config.confirm_progress_interval,
        )
        .check(ids)
        .await
    }
}

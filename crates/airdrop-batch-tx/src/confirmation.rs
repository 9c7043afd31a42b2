use crate::{TxBatchError, TxBatchResult};
use airdrop_client::{DistributionNetwork, ExecutionResult};
use solana_sdk::signature::Signature;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tally of one confirmation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationReport {
    /// Ids that were queried
    pub checked: usize,
    /// Queried ids whose first execution record has a non-zero cost
    pub confirmed: usize,
    /// Queried ids that errored, timed out, or showed no cost
    pub not_confirmed: usize,
    /// Outcomes without an id, never queried
    pub skipped: usize,
}

/// A zero-cost (or missing) record means the transaction was never processed
pub fn is_confirmed(results: &[ExecutionResult]) -> bool {
    results.first().is_some_and(|result| result.cost > 0)
}

/// Read-only verification of submitted transfers, one query at a time
pub struct ConfirmationChecker<'a, N: ?Sized> {
    network: &'a N,
    timeout: Duration,
    progress_interval: usize,
}

impl<'a, N: DistributionNetwork + ?Sized> ConfirmationChecker<'a, N> {
    pub fn new(network: &'a N, timeout: Duration, progress_interval: usize) -> Self {
        Self {
            network,
            timeout,
            progress_interval: progress_interval.max(1),
        }
    }

    /// Query one id, giving up (and cancelling the query) after the timeout
    pub async fn check_one(&self, signature: &Signature) -> TxBatchResult<bool> {
        let results = tokio::time::timeout(self.timeout, self.network.execution_results(signature))
            .await
            .map_err(|_| TxBatchError::Timeout(self.timeout))??;

        if let Some(error) = results.first().and_then(|result| result.error.as_ref()) {
            debug!("Transaction {} executed with error: {}", signature, error);
        }

        Ok(is_confirmed(&results))
    }

    pub async fn check(&self, ids: &[Option<Signature>]) -> ConfirmationReport {
        let mut report = ConfirmationReport::default();

        for id in ids {
            let Some(signature) = id else {
                report.skipped += 1;
                continue;
            };

            report.checked += 1;
            match self.check_one(signature).await {
                Ok(true) => report.confirmed += 1,
                Ok(false) => {
                    report.not_confirmed += 1;
                    info!("Transaction {} shows no execution cost", signature);
                }
                Err(err) => {
                    report.not_confirmed += 1;
                    warn!("Transaction {}: {}", signature, err);
                }
            }

            if report.checked % self.progress_interval == 0 {
                info!("Checked {}: {} confirmed", report.checked, report.confirmed);
            }
        }

        info!(
            "Confirmed {} of {} submitted transfers ({} without id)",
            report.confirmed, report.checked, report.skipped
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(cost: u64) -> ExecutionResult {
        ExecutionResult {
            slot: 1,
            cost,
            error: None,
        }
    }

    #[test]
    fn test_is_confirmed_requires_positive_cost() {
        assert!(!is_confirmed(&[]));
        assert!(!is_confirmed(&[result(0)]));
        assert!(is_confirmed(&[result(5)]));
    }

    #[test]
    fn test_only_first_record_counts() {
        assert!(!is_confirmed(&[result(0), result(5)]));
        assert!(is_confirmed(&[result(5), result(0)]));
    }
}

use super::connect;
use crate::config::AirdropConfig;
use crate::error::CliResult;
use airdrop_batch_tx::ConfirmationChecker;
use airdrop_csvs::read_recorded_outcomes;
use solana_sdk::signature::Signature;
use std::path::Path;

/// Re-run the confirmation pass over an existing outcome file without sending anything
pub async fn execute(config: &AirdropConfig, output: &Path) -> CliResult<()> {
    println!("🔍 Checking recorded transfers...");
    println!("Outcomes: {}", output.display());

    let outcomes = read_recorded_outcomes(output)?;
    let ids: Vec<Option<Signature>> = outcomes.iter().map(|o| o.transaction_id).collect();
    println!("📋 {} recorded outcomes", ids.len());

    let network = connect(config).await?;
    let report = ConfirmationChecker::new(
        &network,
        config.confirmation_timeout(),
        config.confirm_progress_interval,
    )
    .check(&ids)
    .await;

    println!("\n📊 Summary:");
    println!("  - Checked: {}", report.checked);
    println!("  - Confirmed: {}", report.confirmed);
    println!("  - Not confirmed: {}", report.not_confirmed);
    println!("  - Without id: {}", report.skipped);

    Ok(())
}

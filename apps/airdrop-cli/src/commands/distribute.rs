use super::connect;
use crate::config::AirdropConfig;
use crate::error::{CliError, CliResult};
use airdrop_batch_tx::BatchDistributor;
use solana_sdk::signature::read_keypair_file;
use std::path::Path;

pub async fn execute(config: &AirdropConfig, input: &Path, output: &Path) -> CliResult<()> {
    println!("🚀 Distributing tokens...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Program: {}", config.contract_id);

    println!("\n🔑 Reading sender keypair...");
    let signer = read_keypair_file(&config.keypair_path).map_err(|e| {
        CliError::InvalidConfig(format!(
            "Failed to read keypair {}: {}",
            config.keypair_path.display(),
            e
        ))
    })?;

    let network = connect(config).await?;
    let distributor = BatchDistributor::new(network, signer, config.distribution_config())?;
    println!("✅ Sender: {}", distributor.signer_pubkey());

    println!("\n📤 Submitting transfers...");
    let report = distributor.distribute(input, output).await?;

    println!("\n🎉 Distribution finished");
    println!("📊 Summary:");
    println!("  - Transfers: {}", report.outcomes.len());
    println!("  - Submitted: {}", report.submitted());
    println!("  - Failed to submit: {}", report.failed());
    println!("  - Confirmed: {}", report.confirmation.confirmed);
    println!("  - Not confirmed: {}", report.confirmation.not_confirmed);
    println!("Outcomes appended to {}", output.display());

    Ok(())
}

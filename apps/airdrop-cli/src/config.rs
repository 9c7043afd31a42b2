use crate::error::{CliError, CliResult};
use airdrop_batch_tx::DistributionConfig;
use airdrop_client::{Cluster, PaymentFee};
use serde::{Deserialize, Deserializer};
use solana_sdk::pubkey::Pubkey;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Distribution configuration file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirdropConfig {
    /// Path to the sender's keypair file
    pub keypair_path: PathBuf,

    /// Token program whose `transfer` entry point is invoked
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub contract_id: Pubkey,

    /// Cluster name (mainnet-beta, testnet, devnet, localnet)
    #[serde(deserialize_with = "deserialize_cluster")]
    pub cluster: Cluster,

    /// Optional RPC endpoint overriding the cluster default
    #[serde(default)]
    pub rpc_url: Option<String>,

    #[serde(default)]
    pub payment: PaymentConfig,

    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_submit_progress_interval")]
    pub submit_progress_interval: usize,

    #[serde(default = "default_confirm_progress_interval")]
    pub confirm_progress_interval: usize,
}

/// Fee ceiling for each transfer
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    #[serde(default = "default_compute_unit_limit")]
    pub compute_unit_limit: u32,

    #[serde(default)]
    pub compute_unit_price_micro_lamports: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            compute_unit_limit: default_compute_unit_limit(),
            compute_unit_price_micro_lamports: 0,
        }
    }
}

impl AirdropConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate; both commands rely on a config that passed here
    pub fn from_yaml(content: &str) -> CliResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.distribution_config().validate()?;
        Ok(config)
    }

    pub fn rpc_url(&self) -> CliResult<String> {
        Ok(self.cluster.resolve_rpc_url(self.rpc_url.as_deref())?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }

    pub fn distribution_config(&self) -> DistributionConfig {
        DistributionConfig {
            contract_id: self.contract_id,
            payment_fee: PaymentFee {
                compute_unit_limit: self.payment.compute_unit_limit,
                compute_unit_price_micro_lamports: self.payment.compute_unit_price_micro_lamports,
            },
            confirmation_timeout: self.confirmation_timeout(),
            submit_progress_interval: self.submit_progress_interval,
            confirm_progress_interval: self.confirm_progress_interval,
        }
    }
}

fn deserialize_pubkey<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Pubkey::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_cluster<'de, D>(deserializer: D) -> Result<Cluster, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Cluster::from_str(&s).map_err(serde::de::Error::custom)
}

fn default_confirmation_timeout_secs() -> u64 {
    120
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_submit_progress_interval() -> usize {
    100
}

fn default_confirm_progress_interval() -> usize {
    10
}

fn default_compute_unit_limit() -> u32 {
    200_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdrop_batch_tx::TxBatchError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONTRACT: &str = "11111111111111111111111111111112";

    #[test]
    fn test_minimal_config_uses_defaults() {
        let yaml = format!(
            "keypair_path: sender.json\ncontract_id: {CONTRACT}\ncluster: devnet\n"
        );
        let config = AirdropConfig::from_yaml(&yaml).unwrap();

        assert_eq!(config.keypair_path, PathBuf::from("sender.json"));
        assert_eq!(config.contract_id.to_string(), CONTRACT);
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.rpc_url().unwrap(), "https://api.devnet.solana.com");

        let distribution = config.distribution_config();
        assert_eq!(distribution.confirmation_timeout, Duration::from_secs(120));
        assert_eq!(distribution.submit_progress_interval, 100);
        assert_eq!(distribution.confirm_progress_interval, 10);
        assert_eq!(distribution.payment_fee, PaymentFee::default());
    }

    #[test]
    fn test_full_config() {
        let yaml = format!(
            r#"
keypair_path: /keys/sender.json
contract_id: {CONTRACT}
cluster: localnet
rpc_url: http://validator:8899
payment:
  compute_unit_limit: 50000
  compute_unit_price_micro_lamports: 10
confirmation_timeout_secs: 30
poll_interval_ms: 500
submit_progress_interval: 10
confirm_progress_interval: 5
"#
        );
        let config = AirdropConfig::from_yaml(&yaml).unwrap();

        assert_eq!(config.rpc_url().unwrap(), "http://validator:8899");
        assert_eq!(config.poll_interval(), Duration::from_millis(500));

        let distribution = config.distribution_config();
        assert_eq!(distribution.payment_fee.compute_unit_limit, 50_000);
        assert_eq!(distribution.payment_fee.compute_unit_price_micro_lamports, 10);
        assert_eq!(distribution.confirmation_timeout, Duration::from_secs(30));
        assert_eq!(distribution.submit_progress_interval, 10);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_cluster =
            format!("keypair_path: k.json\ncontract_id: {CONTRACT}\ncluster: mainnet-alpha\n");
        assert!(matches!(
            AirdropConfig::from_yaml(&bad_cluster),
            Err(CliError::Yaml(_))
        ));

        let bad_contract = "keypair_path: k.json\ncontract_id: not-a-key\ncluster: devnet\n";
        assert!(AirdropConfig::from_yaml(bad_contract).is_err());

        let unknown_field =
            format!("keypair_path: k.json\ncontract_id: {CONTRACT}\ncluster: devnet\nfee: 1\n");
        assert!(AirdropConfig::from_yaml(&unknown_field).is_err());
    }

    #[test]
    fn test_unusable_limits_are_rejected() {
        for field in [
            "confirmation_timeout_secs: 0",
            "submit_progress_interval: 0",
            "confirm_progress_interval: 0",
        ] {
            let yaml = format!(
                "keypair_path: k.json\ncontract_id: {CONTRACT}\ncluster: devnet\n{field}\n"
            );
            assert!(
                matches!(
                    AirdropConfig::from_yaml(&yaml),
                    Err(CliError::Batch(TxBatchError::Config(_)))
                ),
                "accepted {field}"
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "keypair_path: k.json\ncontract_id: {CONTRACT}\ncluster: testnet\n"
        )
        .unwrap();

        let config = AirdropConfig::load(file.path()).unwrap();
        assert_eq!(config.cluster, Cluster::Testnet);

        let missing = AirdropConfig::load(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(missing, Err(CliError::InvalidConfig(_))));
    }
}

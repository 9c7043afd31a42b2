use crate::errors::{ClientError, ClientResult};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Network a distribution runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
    Localnet,
}

impl Cluster {
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
            Cluster::Localnet => "localnet",
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Genesis hash of public clusters; local validators have none fixed
    pub fn expected_genesis_hash(&self) -> Option<&'static str> {
        match self {
            Cluster::MainnetBeta => Some("5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d"),
            Cluster::Testnet => Some("4uhcVJyU9pJkvQyS88uRDiswHXSCkY3zQawwpjk2NsNY"),
            Cluster::Devnet => Some("EtWTRABZaYq6iMfeYKouRu166VU2xqa1wcaWoxPkrZBG"),
            Cluster::Localnet => None,
        }
    }

    /// RPC endpoint to use, preferring an explicit override
    pub fn resolve_rpc_url(&self, rpc_url: Option<&str>) -> ClientResult<String> {
        let url = rpc_url.unwrap_or(self.default_rpc_url());
        Url::parse(url).map_err(|e| ClientError::InvalidRpcUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(url.to_string())
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cluster {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            _ => Err(ClientError::UnknownCluster(s.to_string())),
        }
    }
}

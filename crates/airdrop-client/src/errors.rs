use solana_sdk::signature::Signature;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Invalid recipient '{recipient}': {reason}")]
    InvalidRecipient { recipient: String, reason: String },

    #[error("Amount {0} does not fit the on-chain amount encoding")]
    AmountOutOfRange(String),

    #[error("Node reported a different id for transaction {local}: {detail}")]
    SignatureMismatch { local: Signature, detail: String },

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Unknown cluster: {0}")]
    UnknownCluster(String),

    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Connected to the wrong cluster: expected {expected} genesis {expected_genesis}, node reports {found}")]
    ClusterMismatch {
        expected: String,
        expected_genesis: String,
        found: String,
    },
}

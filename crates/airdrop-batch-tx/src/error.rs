use solana_sdk::signature::Signature;
use thiserror::Error;

pub type TxBatchResult<T> = Result<T, TxBatchError>;

/// Errors that can occur during a distribution
#[derive(Error, Debug)]
pub enum TxBatchError {
    #[error("File error: {0}")]
    Csv(#[from] airdrop_csvs::CsvError),

    #[error("Client error: {0}")]
    Client(#[from] airdrop_client::ClientError),

    #[error("Network reported transaction id {network}, expected locally computed {local}")]
    SignatureMismatch { local: Signature, network: Signature },

    #[error("Signed transaction has no signature")]
    Unsigned,

    #[error("Confirmation query timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Configuration error: {0}")]
    Config(String),
}

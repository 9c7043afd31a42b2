use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Csv(#[from] airdrop_csvs::CsvError),

    #[error(transparent)]
    Client(#[from] airdrop_client::ClientError),

    #[error(transparent)]
    Batch(#[from] airdrop_batch_tx::TxBatchError),
}

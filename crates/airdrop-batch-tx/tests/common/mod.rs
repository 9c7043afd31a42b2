#![allow(dead_code)]

use airdrop_batch_tx::DistributionConfig;
use airdrop_client::{
    submit_error, ClientError, ClientResult, DistributionNetwork, ExecutionResult,
};
use async_trait::async_trait;
use solana_client::{
    client_error::{ClientError as RpcClientError, ClientErrorKind},
    rpc_request::RpcError,
};
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// How the stub answers a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBehavior {
    Accept,
    Reject,
    WrongId,
    /// The RPC client itself refuses the node's differing answer
    ClientDetectedMismatch,
}

/// How the stub answers an execution query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionBehavior {
    Cost(u64),
    NoRecords,
    Error,
    Hang,
}

/// In-memory network recording everything the pipeline asks of it
pub struct StubNetwork {
    pub default_submit: SubmitBehavior,
    pub submit_by_recipient: HashMap<Pubkey, SubmitBehavior>,
    pub default_execution: ExecutionBehavior,
    pub execution_by_recipient: HashMap<Pubkey, ExecutionBehavior>,
    pub submitted: Mutex<Vec<(Pubkey, Signature)>>,
    pub queried: Mutex<Vec<Signature>>,
}

impl StubNetwork {
    pub fn new() -> Self {
        Self {
            default_submit: SubmitBehavior::Accept,
            submit_by_recipient: HashMap::new(),
            default_execution: ExecutionBehavior::Cost(5_000),
            execution_by_recipient: HashMap::new(),
            submitted: Mutex::new(Vec::new()),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            default_submit: SubmitBehavior::Reject,
            ..Self::new()
        }
    }

    pub fn submitted_recipients(&self) -> Vec<Pubkey> {
        self.submitted
            .lock()
            .unwrap()
            .iter()
            .map(|(recipient, _)| *recipient)
            .collect()
    }

    pub fn queried(&self) -> Vec<Signature> {
        self.queried.lock().unwrap().clone()
    }

    fn recipient_of(transaction: &Transaction) -> Pubkey {
        let transfer = transaction.message.instructions.last().unwrap();
        Pubkey::try_from(&transfer.data[8..40]).unwrap()
    }

    fn recipient_for(&self, signature: &Signature) -> Option<Pubkey> {
        self.submitted
            .lock()
            .unwrap()
            .iter()
            .find(|(_, s)| s == signature)
            .map(|(recipient, _)| *recipient)
    }
}

fn rpc_error(message: &str) -> ClientError {
    ClientError::Rpc(RpcClientError::from(ClientErrorKind::Custom(
        message.to_string(),
    )))
}

#[async_trait]
impl DistributionNetwork for StubNetwork {
    async fn latest_blockhash(&self) -> ClientResult<Hash> {
        Ok(Hash::new_unique())
    }

    async fn submit(&self, transaction: &Transaction) -> ClientResult<Signature> {
        let recipient = Self::recipient_of(transaction);
        let behavior = self
            .submit_by_recipient
            .get(&recipient)
            .unwrap_or(&self.default_submit);

        match behavior {
            SubmitBehavior::Accept => {
                let signature = transaction.signatures[0];
                self.submitted.lock().unwrap().push((recipient, signature));
                Ok(signature)
            }
            SubmitBehavior::Reject => Err(rpc_error("node rejected transaction")),
            SubmitBehavior::WrongId => Ok(Signature::from([7u8; 64])),
            SubmitBehavior::ClientDetectedMismatch => {
                let local = transaction.signatures.first();
                let err = RpcClientError::from(RpcError::RpcRequestError(format!(
                    "RPC node returned mismatched signature {:?}, expected {:?}",
                    Signature::from([7u8; 64]),
                    local
                )));
                Err(submit_error(local, err))
            }
        }
    }

    async fn execution_results(&self, signature: &Signature) -> ClientResult<Vec<ExecutionResult>> {
        self.queried.lock().unwrap().push(*signature);

        let behavior = self
            .recipient_for(signature)
            .and_then(|recipient| self.execution_by_recipient.get(&recipient))
            .unwrap_or(&self.default_execution)
            .clone();

        match behavior {
            ExecutionBehavior::Cost(cost) => Ok(vec![ExecutionResult {
                slot: 42,
                cost,
                error: None,
            }]),
            ExecutionBehavior::NoRecords => Ok(vec![]),
            ExecutionBehavior::Error => Err(rpc_error("transaction not found")),
            ExecutionBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(vec![])
            }
        }
    }
}

pub fn test_config() -> DistributionConfig {
    DistributionConfig {
        confirmation_timeout: Duration::from_millis(100),
        ..DistributionConfig::new(Pubkey::new_unique())
    }
}

/// Temp directory holding an input file and a (not yet created) output path
pub struct Workspace {
    _dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn with_input(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("recipients.csv");
        let output = dir.path().join("outcomes.csv");
        std::fs::write(&input, contents).unwrap();
        Self {
            _dir: dir,
            input,
            output,
        }
    }

    pub fn output_lines(&self) -> Vec<String> {
        read_lines(&self.output)
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

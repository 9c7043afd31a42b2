/*!
# Client Data Types
*/

/// Fee ceiling the sender authorises for a single transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentFee {
    /// Maximum compute units the transaction may consume
    pub compute_unit_limit: u32,
    /// Optional priority fee; 0 omits the price instruction
    pub compute_unit_price_micro_lamports: u64,
}

impl Default for PaymentFee {
    fn default() -> Self {
        Self {
            compute_unit_limit: 200_000,
            compute_unit_price_micro_lamports: 0,
        }
    }
}

/// One execution record the network holds for a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Slot the transaction landed in
    pub slot: u64,
    /// Fee charged for execution, in lamports
    pub cost: u64,
    /// On-chain error, if execution failed
    pub error: Option<String>,
}

use crate::{
    errors::{ClientError, ClientResult},
    types::PaymentFee,
};
use airdrop_csvs::TokenAmount;
use sha2::{Digest, Sha256};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use std::str::FromStr;

/// Entry point invoked on the token program
pub const TRANSFER_ENTRY_POINT: &str = "transfer";

/// Width of the encoded amount argument (U256, little-endian)
pub const AMOUNT_ENCODED_LEN: usize = 32;

/// Total length of the transfer instruction data
pub const TRANSFER_DATA_LEN: usize = 8 + 32 + AMOUNT_ENCODED_LEN;

/// Anchor-style discriminator: first 8 bytes of `sha256("global:<name>")`
pub fn transfer_discriminator() -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{TRANSFER_ENTRY_POINT}").as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

/// Parse a recipient identifier from the input file into an account address
pub fn parse_recipient(recipient: &str) -> ClientResult<Pubkey> {
    Pubkey::from_str(recipient).map_err(|e| ClientError::InvalidRecipient {
        recipient: recipient.to_string(),
        reason: e.to_string(),
    })
}

/// Build the `transfer(recipient, amount)` call on `contract_id`.
///
/// Data layout: `discriminator(8) | recipient(32) | amount(32, LE)`.
pub fn build_transfer_ix(
    contract_id: &Pubkey,
    sender: &Pubkey,
    recipient: &Pubkey,
    amount: &TokenAmount,
) -> ClientResult<Instruction> {
    let amount_bytes = amount
        .to_le_bytes_fixed::<AMOUNT_ENCODED_LEN>()
        .ok_or_else(|| ClientError::AmountOutOfRange(amount.to_string()))?;

    let mut data = Vec::with_capacity(TRANSFER_DATA_LEN);
    data.extend_from_slice(&transfer_discriminator());
    data.extend_from_slice(recipient.as_ref());
    data.extend_from_slice(&amount_bytes);

    Ok(Instruction {
        program_id: *contract_id,
        accounts: vec![
            AccountMeta::new(*sender, true),
            AccountMeta::new(*recipient, false),
        ],
        data,
    })
}

/// Compute budget instructions expressing the payment fee ceiling
pub fn build_compute_budget_ixs(payment_fee: &PaymentFee) -> Vec<Instruction> {
    let mut ixs = vec![ComputeBudgetInstruction::set_compute_unit_limit(
        payment_fee.compute_unit_limit,
    )];
    if payment_fee.compute_unit_price_micro_lamports > 0 {
        ixs.push(ComputeBudgetInstruction::set_compute_unit_price(
            payment_fee.compute_unit_price_micro_lamports,
        ));
    }
    ixs
}

/*!
# Transaction Builders

Builds signed transfer transactions. No RPC calls are made here: the caller supplies
a recent blockhash of the target cluster, which binds the transaction to that network.

The transaction id (its first signature) is known as soon as the transaction is
signed, before it is ever submitted.
*/

use crate::{
    errors::{ClientError, ClientResult},
    instruction_builders::{build_compute_budget_ixs, build_transfer_ix, parse_recipient},
    types::PaymentFee,
};
use airdrop_csvs::TokenAmount;
use solana_sdk::{
    hash::Hash,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

/// Build and sign a transfer of `amount` tokens to `recipient`
pub fn build_transfer_tx(
    signer: &Keypair,
    contract_id: &Pubkey,
    recipient: &str,
    amount: &TokenAmount,
    payment_fee: &PaymentFee,
    recent_blockhash: Hash,
) -> ClientResult<Transaction> {
    let recipient = parse_recipient(recipient)?;
    let sender = signer.pubkey();

    let mut instructions = build_compute_budget_ixs(payment_fee);
    instructions.push(build_transfer_ix(contract_id, &sender, &recipient, amount)?);

    let message = Message::new(&instructions, Some(&sender));
    let mut transaction = Transaction::new_unsigned(message);
    transaction
        .try_sign(&[signer], recent_blockhash)
        .map_err(|e| ClientError::Signing(e.to_string()))?;

    Ok(transaction)
}

/// Id under which a signed transaction is known to the network
pub fn transaction_id(transaction: &Transaction) -> Option<Signature> {
    transaction
        .signatures
        .first()
        .copied()
        .filter(|signature| *signature != Signature::default())
}

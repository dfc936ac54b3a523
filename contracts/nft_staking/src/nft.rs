//! Custody gateway for the external non-fungible ledger.
//!
//! Exactly two movements exist: pull a token into vault custody and push it
//! back out to its owner. Both are synchronous; a rejected transfer fails the
//! whole invocation before any registry state survives, so no partial-custody
//! state is representable.

use soroban_sdk::{contractclient, Address, Env};

use crate::ContractError;

/// The subset of the non-fungible ledger this contract consumes.
///
/// Approval handling stays on the NFT ledger's side: `transfer_from` is
/// expected to reject a spender that is neither the owner nor approved.
#[contractclient(name = "NftClient")]
pub trait NonFungibleToken {
    fn owner_of(env: Env, token_id: u32) -> Address;
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Move `token_id` from `owner` into vault custody.
///
/// Verifies current ownership first so a stale or hostile caller cannot
/// stake a token they no longer hold.
pub fn pull_in(
    env: &Env,
    collection: &Address,
    owner: &Address,
    token_id: u32,
) -> Result<(), ContractError> {
    let client = NftClient::new(env, collection);

    match client.try_owner_of(&token_id) {
        Ok(Ok(holder)) if holder == *owner => {}
        _ => return Err(ContractError::CustodyTransferFailed),
    }

    let vault = env.current_contract_address();
    if client
        .try_transfer_from(&vault, owner, &vault, &token_id)
        .is_err()
    {
        return Err(ContractError::CustodyTransferFailed);
    }

    Ok(())
}

/// Return `token_id` from vault custody to `recipient`.
pub fn push_out(
    env: &Env,
    collection: &Address,
    recipient: &Address,
    token_id: u32,
) -> Result<(), ContractError> {
    let vault = env.current_contract_address();
    if NftClient::new(env, collection)
        .try_transfer_from(&vault, &vault, recipient, &token_id)
        .is_err()
    {
        return Err(ContractError::CustodyTransferFailed);
    }

    Ok(())
}

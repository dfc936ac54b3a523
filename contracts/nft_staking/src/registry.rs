//! Persistent storage for stake records and per-user reward balances.
//!
//! Records are keyed by token id, so there is exactly one live record per
//! token and no positional indexing to go stale when a record is removed.
//! The per-user listing order is kept separately as an insertion-ordered
//! vector of token ids.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

// ── Storage key constants ───────────────────────────────────────────────────

const STAKE_RECORD: Symbol = symbol_short!("STK_REC");
const USER_TOKENS: Symbol = symbol_short!("USR_TOKS");
const USER_PENDING: Symbol = symbol_short!("USR_PEND");

// ── Types ───────────────────────────────────────────────────────────────────

/// Lifecycle of a custodied token.
///
/// `Staked → Unbonding` on an unstake request; a withdrawn record is removed
/// from storage rather than kept in a terminal state.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StakeState {
    Staked,
    Unbonding,
}

/// One staked token currently in vault custody.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// The address that staked the token and may reclaim it.
    pub owner: Address,
    /// Identifier of the token on the external non-fungible ledger.
    pub token_id: u32,
    /// Ledger timestamp at stake time.
    pub staked_at: u64,
    /// Ledger timestamp of the unstake request; meaningful only while
    /// `state == Unbonding`, zero otherwise.
    pub unstake_requested_at: u64,
    /// Accrual is measured from here; advanced to `now` on every claim and
    /// final settlement on unstake.
    pub accrued_baseline: u64,
    pub state: StakeState,
}

// ── Record storage ──────────────────────────────────────────────────────────

fn record_key(token_id: u32) -> (Symbol, u32) {
    (STAKE_RECORD, token_id)
}

/// Retrieve the live record for a token, if any.
pub fn get_record(env: &Env, token_id: u32) -> Option<StakeRecord> {
    env.storage().persistent().get(&record_key(token_id))
}

pub fn store_record(env: &Env, record: &StakeRecord) {
    env.storage()
        .persistent()
        .set(&record_key(record.token_id), record);
}

/// Delete a record after withdrawal.
pub fn remove_record(env: &Env, token_id: u32) {
    env.storage().persistent().remove(&record_key(token_id));
}

// ── Per-user listing order ──────────────────────────────────────────────────

fn user_tokens_key(owner: &Address) -> (Symbol, Address) {
    (USER_TOKENS, owner.clone())
}

/// Token ids staked by `owner`, oldest first.
pub fn user_tokens(env: &Env, owner: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&user_tokens_key(owner))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_user_token(env: &Env, owner: &Address, token_id: u32) {
    let mut tokens = user_tokens(env, owner);
    tokens.push_back(token_id);
    env.storage()
        .persistent()
        .set(&user_tokens_key(owner), &tokens);
}

pub fn remove_user_token(env: &Env, owner: &Address, token_id: u32) {
    let mut tokens = user_tokens(env, owner);
    if let Some(index) = tokens.first_index_of(token_id) {
        tokens.remove(index);
        env.storage()
            .persistent()
            .set(&user_tokens_key(owner), &tokens);
    }
}

// ── Pending rewards ─────────────────────────────────────────────────────────

fn pending_key(owner: &Address) -> (Symbol, Address) {
    (USER_PENDING, owner.clone())
}

/// Settled-but-unclaimed reward balance for `owner`.
pub fn pending_rewards(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&pending_key(owner))
        .unwrap_or(0i128)
}

pub fn set_pending_rewards(env: &Env, owner: &Address, amount: i128) {
    env.storage().persistent().set(&pending_key(owner), &amount);
}

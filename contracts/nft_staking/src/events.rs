#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub nft_collection: Address,
    pub reward_token: Address,
    pub reward_rate: i128,
    pub unbonding_period: u64,
    pub timestamp: u64,
}

/// Fired when a token enters vault custody.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub owner: Address,
    pub token_id: u32,
    pub timestamp: u64,
}

/// Fired when an owner requests to unstake a token.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequestedEvent {
    pub owner: Address,
    pub token_id: u32,
    pub settled_reward: i128,
    pub timestamp: u64,
}

/// Fired when a token leaves custody after the unbonding period.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub token_id: u32,
    pub timestamp: u64,
}

/// Fired when a user claims accumulated rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub new_rate: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the unbonding period.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnbondingPeriodSetEvent {
    pub new_period: u64,
    pub timestamp: u64,
}

/// Fired when the admin changes the reward-activation delay.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardDelaySetEvent {
    pub new_delay: u64,
    pub timestamp: u64,
}

/// Fired when the pause flag flips.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseSetEvent {
    pub paused: bool,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    nft_collection: Address,
    reward_token: Address,
    reward_rate: i128,
    unbonding_period: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            nft_collection,
            reward_token,
            reward_rate,
            unbonding_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, owner: Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("STAKED"), owner.clone()),
        StakedEvent {
            owner,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstake_requested(env: &Env, owner: Address, token_id: u32, settled_reward: i128) {
    env.events().publish(
        (symbol_short!("UNSTK_REQ"), owner.clone()),
        UnstakeRequestedEvent {
            owner,
            token_id,
            settled_reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, owner: Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), owner.clone()),
        WithdrawnEvent {
            owner,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), owner.clone()),
        RewardClaimedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unbonding_period_set(env: &Env, new_period: u64) {
    env.events().publish(
        (symbol_short!("UNBND_SET"),),
        UnbondingPeriodSetEvent {
            new_period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_delay_set(env: &Env, new_delay: u64) {
    env.events().publish(
        (symbol_short!("DELAY_SET"),),
        RewardDelaySetEvent {
            new_delay,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pause_set(env: &Env, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSE"),),
        PauseSetEvent {
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}

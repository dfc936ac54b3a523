#![no_std]

pub mod events;
pub mod nft;
pub mod registry;
pub mod rewards;

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol, Vec};

use registry::{StakeRecord, StakeState};

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const NFT_COLLECTION: Symbol = symbol_short!("NFT_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");
const UNBONDING_PERIOD: Symbol = symbol_short!("UNBND_PER");
const REWARD_DELAY: Symbol = symbol_short!("RWD_DELAY");
const PAUSED: Symbol = symbol_short!("PAUSED");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    Paused = 5,
    AlreadyStaked = 6,
    NotStakedOrUnbonding = 7,
    RecordNotFound = 8,
    UnbondingNotElapsed = 9,
    CustodyTransferFailed = 10,
    RewardTransferFailed = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct NftStakingContract;

#[contractimpl]
impl NftStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the vault.
    ///
    /// * `nft_collection`   – address of the non-fungible ledger whose tokens
    ///                        this vault custodies.
    /// * `reward_token`     – SAC address of the token distributed as rewards.
    /// * `reward_rate`      – reward units emitted **per staked token per
    ///                        second**.
    /// * `unbonding_period` – seconds a withdrawal must wait after `unstake`.
    ///
    /// The reward-activation delay starts at zero; see [`set_reward_delay`].
    pub fn initialize(
        env: Env,
        admin: Address,
        nft_collection: Address,
        reward_token: Address,
        reward_rate: i128,
        unbonding_period: u64,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&NFT_COLLECTION, &nft_collection);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&REWARD_RATE, &reward_rate);
        env.storage()
            .instance()
            .set(&UNBONDING_PERIOD, &unbonding_period);
        // REWARD_DELAY and PAUSED start unset; unwrap_or defaults cover them.

        events::publish_initialized(
            &env,
            admin,
            nft_collection,
            reward_token,
            reward_rate,
            unbonding_period,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Place `token_id` into vault custody and start reward accrual.
    ///
    /// The caller must hold the token on the NFT ledger and have approved the
    /// vault to transfer it. A token already `Staked` or `Unbonding` cannot
    /// be staked again until it has been fully withdrawn.
    pub fn stake(env: Env, owner: Address, token_id: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_not_paused(&env)?;

        if registry::get_record(&env, token_id).is_some() {
            return Err(ContractError::AlreadyStaked);
        }

        // Pull the token into custody; a rejected transfer fails the whole
        // invocation before any record exists.
        let collection: Address = env
            .storage()
            .instance()
            .get(&NFT_COLLECTION)
            .ok_or(ContractError::NotInitialized)?;
        nft::pull_in(&env, &collection, &owner, token_id)?;

        let now = env.ledger().timestamp();
        let record = StakeRecord {
            owner: owner.clone(),
            token_id,
            staked_at: now,
            unstake_requested_at: 0,
            accrued_baseline: now,
            state: StakeState::Staked,
        };
        registry::store_record(&env, &record);
        registry::push_user_token(&env, &owner, token_id);

        events::publish_staked(&env, owner, token_id);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Request to unstake `token_id`, starting the unbonding clock.
    ///
    /// Accrual earned so far is settled into the owner's pending balance and
    /// frozen; the token stays in custody until `withdraw`. Not gated by
    /// pause: exits must always remain available.
    pub fn unstake(env: Env, owner: Address, token_id: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();

        let mut record = registry::get_record(&env, token_id)
            .ok_or(ContractError::NotStakedOrUnbonding)?;
        if record.owner != owner {
            return Err(ContractError::Unauthorized);
        }
        if record.state != StakeState::Staked {
            return Err(ContractError::NotStakedOrUnbonding);
        }

        let now = env.ledger().timestamp();

        // Settle accrual up to now, then freeze the record.
        let settled = Self::accrued_for(&env, &record, now);
        if settled > 0 {
            let pending = registry::pending_rewards(&env, &owner);
            registry::set_pending_rewards(&env, &owner, pending.saturating_add(settled));
        }

        record.accrued_baseline = now;
        record.unstake_requested_at = now;
        record.state = StakeState::Unbonding;
        registry::store_record(&env, &record);

        events::publish_unstake_requested(&env, owner, token_id, settled);

        Ok(())
    }

    /// Return `token_id` to its owner once the unbonding period has elapsed.
    ///
    /// Fails with `UnbondingNotElapsed` if called early. Not gated by pause.
    pub fn withdraw(env: Env, owner: Address, token_id: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();

        let record =
            registry::get_record(&env, token_id).ok_or(ContractError::RecordNotFound)?;
        if record.owner != owner {
            return Err(ContractError::Unauthorized);
        }
        if record.state != StakeState::Unbonding {
            return Err(ContractError::RecordNotFound);
        }

        let now = env.ledger().timestamp();
        let unbonding_period: u64 = env
            .storage()
            .instance()
            .get(&UNBONDING_PERIOD)
            .unwrap_or(0);
        if now.saturating_sub(record.unstake_requested_at) < unbonding_period {
            return Err(ContractError::UnbondingNotElapsed);
        }

        // Remove the record before the external transfer
        // (checks-effects-interactions); an Err return rolls everything back.
        registry::remove_record(&env, token_id);
        registry::remove_user_token(&env, &owner, token_id);

        let collection: Address = env
            .storage()
            .instance()
            .get(&NFT_COLLECTION)
            .ok_or(ContractError::NotInitialized)?;
        nft::push_out(&env, &collection, &owner, token_id)?;

        events::publish_withdrawn(&env, owner, token_id);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim all rewards owed to `owner`: the settled pending balance plus
    /// live accrual on every `Staked` record.
    ///
    /// All-or-nothing: baselines are reset and the pending balance zeroed in
    /// the same invocation as the token transfer, and a failed transfer
    /// reverts both.
    pub fn claim_rewards(env: Env, owner: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_not_paused(&env)?;

        let now = env.ledger().timestamp();
        let total = Self::total_owed(&env, &owner, now);

        if total <= 0 {
            // Nothing to claim — return without reverting.
            return Ok(0);
        }

        // Reset accrual baselines and the pending balance before the
        // transfer; a transfer failure rolls the whole invocation back.
        for token_id in registry::user_tokens(&env, &owner).iter() {
            if let Some(mut record) = registry::get_record(&env, token_id) {
                if record.state == StakeState::Staked {
                    record.accrued_baseline = now;
                    registry::store_record(&env, &record);
                }
            }
        }
        registry::set_pending_rewards(&env, &owner, 0);

        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        if token::Client::new(&env, &reward_token)
            .try_transfer(&env.current_contract_address(), &owner, &total)
            .is_err()
        {
            return Err(ContractError::RewardTransferFailed);
        }

        events::publish_reward_claimed(&env, owner, total);

        Ok(total)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Total rewards `owner` could claim right now: settled pending balance
    /// plus live accrual. Never mutates state.
    pub fn calculate_rewards(env: Env, owner: Address) -> i128 {
        Self::total_owed(&env, &owner, env.ledger().timestamp())
    }

    /// Settled-but-unclaimed reward balance only (excludes live accrual).
    pub fn get_pending_rewards(env: Env, owner: Address) -> i128 {
        registry::pending_rewards(&env, &owner)
    }

    /// All of `owner`'s records currently in custody, oldest first.
    pub fn get_stakes(env: Env, owner: Address) -> Vec<StakeRecord> {
        let mut records = Vec::new(&env);
        for token_id in registry::user_tokens(&env, &owner).iter() {
            if let Some(record) = registry::get_record(&env, token_id) {
                records.push_back(record);
            }
        }
        records
    }

    /// The record tracking `token_id`, if it is in custody.
    pub fn get_stake(env: Env, token_id: u32) -> Result<StakeRecord, ContractError> {
        registry::get_record(&env, token_id).ok_or(ContractError::RecordNotFound)
    }

    pub fn get_reward_rate(env: Env) -> i128 {
        env.storage().instance().get(&REWARD_RATE).unwrap_or(0)
    }

    pub fn get_unbonding_period(env: Env) -> u64 {
        env.storage().instance().get(&UNBONDING_PERIOD).unwrap_or(0)
    }

    pub fn get_reward_delay(env: Env) -> u64 {
        env.storage().instance().get(&REWARD_DELAY).unwrap_or(0)
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the per-token reward rate.
    ///
    /// The registry stores accrual baselines, not rate history, so the new
    /// rate applies to any not-yet-settled accrual window.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&REWARD_RATE, &new_rate);

        events::publish_reward_rate_set(&env, new_rate);

        Ok(())
    }

    /// Update the unbonding period (applies to all future withdrawals,
    /// including records already unbonding).
    pub fn set_unbonding_period(
        env: Env,
        caller: Address,
        new_period: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&UNBONDING_PERIOD, &new_period);

        events::publish_unbonding_period_set(&env, new_period);

        Ok(())
    }

    /// Update the reward-activation delay measured from each record's
    /// `staked_at`.
    pub fn set_reward_delay(env: Env, caller: Address, new_delay: u64) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&REWARD_DELAY, &new_delay);

        events::publish_reward_delay_set(&env, new_delay);

        Ok(())
    }

    /// Halt `stake` and `claim_rewards`. `unstake` and `withdraw` stay open
    /// so assets already committed to exit are never trapped.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&PAUSED, &true);

        events::publish_pause_set(&env, true);

        Ok(())
    }

    /// Resume `stake` and `claim_rewards`.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&PAUSED, &false);

        events::publish_pause_set(&env, false);

        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can
    /// call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;

        env.storage().instance().set(&ADMIN, &new_admin);
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidInput)?;

        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    /// Get the pending admin address, if any.
    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Guard: revert if the pause flag is set.
    fn require_not_paused(env: &Env) -> Result<(), ContractError> {
        if env.storage().instance().get(&PAUSED).unwrap_or(false) {
            return Err(ContractError::Paused);
        }
        Ok(())
    }

    /// Live accrual for one record at `now`. Zero unless `Staked`.
    fn accrued_for(env: &Env, record: &StakeRecord, now: u64) -> i128 {
        if record.state != StakeState::Staked {
            return 0;
        }
        let rate: i128 = env.storage().instance().get(&REWARD_RATE).unwrap_or(0);
        let delay: u64 = env.storage().instance().get(&REWARD_DELAY).unwrap_or(0);
        rewards::accrued(now, record.staked_at, delay, record.accrued_baseline, rate)
    }

    /// Pending balance plus live accrual across all of `owner`'s records.
    fn total_owed(env: &Env, owner: &Address, now: u64) -> i128 {
        let mut total = registry::pending_rewards(env, owner);
        for token_id in registry::user_tokens(env, owner).iter() {
            if let Some(record) = registry::get_record(env, token_id) {
                total = total.saturating_add(Self::accrued_for(env, &record, now));
            }
        }
        total
    }
}

// ── Test support ──────────────────────────────────────────────────────────────

#[cfg(any(test, feature = "testutils"))]
pub mod test_nft;

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;

#[cfg(test)]
mod test_pause;

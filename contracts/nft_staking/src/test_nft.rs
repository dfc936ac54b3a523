//! Minimal non-fungible ledger used by unit tests and fuzz targets.
//!
//! Implements just the surface the vault consumes: `owner_of` and an
//! approval-checked `transfer_from`, plus `mint`/`approve` for test setup.
//! Failures are raised with `panic_with_error!` so callers using `try_`
//! clients observe them as errors rather than traps.

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, Address, Env, Symbol,
};

const OWNER: Symbol = symbol_short!("OWNER");
const APPROVED: Symbol = symbol_short!("APPROVED");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum NftError {
    NotMinted = 1,
    AlreadyMinted = 2,
    NotAuthorized = 3,
}

#[contract]
pub struct TestNft;

#[contractimpl]
impl TestNft {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        let key = (OWNER, token_id);
        if env.storage().persistent().has(&key) {
            panic_with_error!(&env, NftError::AlreadyMinted);
        }
        env.storage().persistent().set(&key, &to);
    }

    pub fn owner_of(env: Env, token_id: u32) -> Address {
        match env.storage().persistent().get(&(OWNER, token_id)) {
            Some(owner) => owner,
            None => panic_with_error!(&env, NftError::NotMinted),
        }
    }

    pub fn approve(env: Env, owner: Address, spender: Address, token_id: u32) {
        owner.require_auth();
        let holder: Address = match env.storage().persistent().get(&(OWNER, token_id)) {
            Some(holder) => holder,
            None => panic_with_error!(&env, NftError::NotMinted),
        };
        if holder != owner {
            panic_with_error!(&env, NftError::NotAuthorized);
        }
        env.storage()
            .persistent()
            .set(&(APPROVED, token_id), &spender);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();

        let holder: Address = match env.storage().persistent().get(&(OWNER, token_id)) {
            Some(holder) => holder,
            None => panic_with_error!(&env, NftError::NotMinted),
        };
        if holder != from {
            panic_with_error!(&env, NftError::NotAuthorized);
        }

        let approved: Option<Address> = env.storage().persistent().get(&(APPROVED, token_id));
        if spender != holder && approved != Some(spender) {
            panic_with_error!(&env, NftError::NotAuthorized);
        }

        env.storage().persistent().set(&(OWNER, token_id), &to);
        env.storage().persistent().remove(&(APPROVED, token_id));
    }
}

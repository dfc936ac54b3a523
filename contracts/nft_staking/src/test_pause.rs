extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

use crate::test_nft::{TestNft, TestNftClient};
use crate::{ContractError, NftStakingContract, NftStakingContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (
    Env,
    NftStakingContractClient<'static>,
    TestNftClient<'static>,
    Address, // admin
    Address, // staker
) {
    let env = Env::default();
    env.mock_all_auths();

    let nft_id = env.register(TestNft, ());
    let nft = TestNftClient::new(&env, &nft_id);
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &nft_id, &reward_token.address(), &10, &100);

    StellarAssetClient::new(&env, &reward_token.address())
        .mock_all_auths()
        .mint(&contract_id, &1_000_000_000i128);

    let staker = Address::generate(&env);
    nft.mint(&staker, &1);
    nft.mint(&staker, &2);

    (env, client, nft, admin, staker)
}

// ── Pause gating ──────────────────────────────────────────────────────────────

#[test]
fn test_stake_while_paused_fails() {
    let (_env, client, nft, admin, staker) = setup();

    client.pause(&admin);
    assert!(client.is_paused());

    nft.approve(&staker, &client.address, &1);
    let result = client.try_stake(&staker, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }
}

#[test]
fn test_claim_while_paused_fails() {
    let (env, client, nft, admin, staker) = setup();

    env.ledger().set_timestamp(0);
    nft.approve(&staker, &client.address, &1);
    client.stake(&staker, &1);

    env.ledger().set_timestamp(100);
    client.pause(&admin);

    let result = client.try_claim_rewards(&staker);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }
}

// Exit paths stay open under pause so committed assets cannot be trapped.

#[test]
fn test_unstake_while_paused_succeeds() {
    let (env, client, nft, admin, staker) = setup();

    env.ledger().set_timestamp(0);
    nft.approve(&staker, &client.address, &1);
    client.stake(&staker, &1);

    client.pause(&admin);
    client.unstake(&staker, &1);

    assert_eq!(client.get_stakes(&staker).len(), 1);
}

#[test]
fn test_withdraw_while_paused_succeeds() {
    let (env, client, nft, admin, staker) = setup();

    env.ledger().set_timestamp(0);
    nft.approve(&staker, &client.address, &1);
    client.stake(&staker, &1);
    client.unstake(&staker, &1);

    client.pause(&admin);

    env.ledger().set_timestamp(100);
    client.withdraw(&staker, &1);

    assert_eq!(nft.owner_of(&1), staker);
}

#[test]
fn test_unpause_restores_staking() {
    let (_env, client, nft, admin, staker) = setup();

    client.pause(&admin);
    client.unpause(&admin);
    assert!(!client.is_paused());

    nft.approve(&staker, &client.address, &1);
    client.stake(&staker, &1);
    assert_eq!(client.get_stakes(&staker).len(), 1);
}

#[test]
fn test_pause_by_non_admin_fails() {
    let (env, client, _nft, _admin, _staker) = setup();

    let intruder = Address::generate(&env);
    let result = client.try_pause(&intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_unpause_by_non_admin_fails() {
    let (env, client, _nft, admin, _staker) = setup();

    client.pause(&admin);

    let intruder = Address::generate(&env);
    let result = client.try_unpause(&intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

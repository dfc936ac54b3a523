extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::test_nft::TestNft;
use crate::{ContractError, NftStakingContract, NftStakingContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, NftStakingContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let nft_id = env.register(TestNft, ());
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &nft_id, &reward_token.address(), &10, &100);

    (env, client, admin)
}

// ── Parameter setters ─────────────────────────────────────────────────────────

#[test]
fn test_set_reward_rate_by_admin() {
    let (_env, client, admin) = setup();

    client.set_reward_rate(&admin, &20);
    assert_eq!(client.get_reward_rate(), 20);
}

#[test]
fn test_set_reward_rate_by_non_admin_fails() {
    let (env, client, _admin) = setup();

    let intruder = Address::generate(&env);
    let result = client.try_set_reward_rate(&intruder, &999);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_set_negative_reward_rate_fails() {
    let (_env, client, admin) = setup();

    let result = client.try_set_reward_rate(&admin, &-5);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_set_unbonding_period_by_admin() {
    let (_env, client, admin) = setup();

    client.set_unbonding_period(&admin, &200);
    assert_eq!(client.get_unbonding_period(), 200);
}

#[test]
fn test_set_unbonding_period_by_non_admin_fails() {
    let (env, client, _admin) = setup();

    let intruder = Address::generate(&env);
    let result = client.try_set_unbonding_period(&intruder, &0);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_set_reward_delay_by_admin() {
    let (_env, client, admin) = setup();

    client.set_reward_delay(&admin, &3_600);
    assert_eq!(client.get_reward_delay(), 3_600);
}

#[test]
fn test_set_reward_delay_by_non_admin_fails() {
    let (env, client, _admin) = setup();

    let intruder = Address::generate(&env);
    let result = client.try_set_reward_delay(&intruder, &3_600);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

// ── Admin transfer ────────────────────────────────────────────────────────────

#[test]
fn test_admin_transfer_two_step() {
    let (env, client, admin) = setup();

    let successor = Address::generate(&env);
    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));

    client.accept_admin(&successor);
    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);

    // Authority moved: the new admin can mutate, the old one cannot.
    client.set_reward_rate(&successor, &42);
    let result = client.try_set_reward_rate(&admin, &7);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_accept_admin_by_wrong_address_fails() {
    let (env, client, admin) = setup();

    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);
    client.propose_admin(&admin, &successor);

    let result = client.try_accept_admin(&intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_accept_admin_without_proposal_fails() {
    let (env, client, _admin) = setup();

    let hopeful = Address::generate(&env);
    let result = client.try_accept_admin(&hopeful);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin) = setup();

    let successor = Address::generate(&env);
    client.propose_admin(&admin, &successor);
    client.cancel_admin_transfer(&admin);

    assert_eq!(client.get_pending_admin(), None);

    let result = client.try_accept_admin(&successor);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_propose_admin_by_non_admin_fails() {
    let (env, client, _admin) = setup();

    let intruder = Address::generate(&env);
    let result = client.try_propose_admin(&intruder, &intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

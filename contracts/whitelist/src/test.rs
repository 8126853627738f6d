#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env,
};

use shared::errors::ContractError;

use crate::{WhitelistRegistry, WhitelistRegistryClient};

// ── Test Helpers ─────────────────────────────────────────────────────────────

fn setup_env() -> (Env, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(WhitelistRegistry, ());
    let owner = Address::generate(&env);

    (env, contract_id, owner)
}

fn get_client<'a>(env: &'a Env, contract_id: &'a Address) -> WhitelistRegistryClient<'a> {
    WhitelistRegistryClient::new(env, contract_id)
}

// ── Initialization Tests ─────────────────────────────────────────────────────

#[test]
fn test_initialize_sets_owner() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);

    client.initialize(&owner);
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_initialize_twice_fails() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);

    client.initialize(&owner);
    assert_eq!(
        client.try_initialize(&owner),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn test_add_voter_before_initialize_fails() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let voter = Address::generate(&env);

    assert_eq!(
        client.try_add_voter(&owner, &voter),
        Err(Ok(ContractError::NotInitialized))
    );
}

// ── Admission Tests ──────────────────────────────────────────────────────────

#[test]
fn test_add_voter_and_query() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let voter = Address::generate(&env);
    let stranger = Address::generate(&env);

    client.initialize(&owner);
    client.add_voter(&owner, &voter);

    assert!(client.is_voter(&voter));
    assert!(!client.is_voter(&stranger));
}

#[test]
fn test_add_voter_requires_owner() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let stranger = Address::generate(&env);
    let voter = Address::generate(&env);

    client.initialize(&owner);
    assert_eq!(
        client.try_add_voter(&stranger, &voter),
        Err(Ok(ContractError::Unauthorized))
    );
    assert!(!client.is_voter(&voter));
    assert_eq!(client.get_voters(), vec![&env]);
}

#[test]
fn test_add_voter_is_idempotent() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let voter = Address::generate(&env);

    client.initialize(&owner);
    client.add_voter(&owner, &voter);
    client.add_voter(&owner, &voter);

    assert!(client.is_voter(&voter));
    assert_eq!(client.get_voters(), vec![&env, voter]);
}

#[test]
fn test_roster_preserves_admission_order() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let v1 = Address::generate(&env);
    let v2 = Address::generate(&env);
    let v3 = Address::generate(&env);

    client.initialize(&owner);
    client.add_voter(&owner, &v1);
    client.add_voter(&owner, &v2);
    client.add_voter(&owner, &v3);

    assert_eq!(client.get_voters(), vec![&env, v1, v2, v3]);
}

#[test]
fn test_owner_may_admit_itself() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);

    client.initialize(&owner);
    client.add_voter(&owner, &owner);
    assert!(client.is_voter(&owner));
}

// ── Event Tests ──────────────────────────────────────────────────────────────

#[test]
fn test_admission_emits_event() {
    let (env, contract_id, owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let voter = Address::generate(&env);

    client.initialize(&owner);
    client.add_voter(&owner, &voter);

    let events = env.events().all();
    let last_event = events.events().last().cloned();
    assert_eq!(
        last_event,
        events.filter_by_contract(&contract_id).events().last().cloned()
    );
}

// ── Query Tests ──────────────────────────────────────────────────────────────

#[test]
fn test_is_voter_never_fails_uninitialized() {
    let (env, contract_id, _owner) = setup_env();
    let client = get_client(&env, &contract_id);
    let voter = Address::generate(&env);

    assert!(!client.is_voter(&voter));
    assert_eq!(client.get_voters(), vec![&env]);
}

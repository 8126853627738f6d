use soroban_sdk::{contracttype, Address, Env, Vec};

use shared::constants::PERSISTENT_TTL_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Admitted(Address),
    Roster,
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

// ── Admitted Set ─────────────────────────────────────────────────────────────

pub fn is_admitted(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Admitted(voter.clone()))
        .unwrap_or(false)
}

/// Record an admission: set the flag and append to the roster.
pub fn admit(env: &Env, voter: &Address) {
    let key = DataKey::Admitted(voter.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_LEDGERS);

    let mut roster = get_roster(env);
    roster.push_back(voter.clone());
    env.storage().persistent().set(&DataKey::Roster, &roster);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Roster, PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_LEDGERS);
}

pub fn get_roster(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Roster)
        .unwrap_or(Vec::new(env))
}

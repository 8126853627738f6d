use soroban_sdk::{contracttype, Address, Env, Vec};

use shared::constants::PERSISTENT_TTL_LEDGERS;
use shared::types::{Proposal, Voter, WorkflowStatus};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Whitelist,
    Status,
    ProposalCount,
    Proposal(u32),
    Voter(Address),
    VoterRoster,
    WinningProposal,
}

// ── Admin / Registry Address ─────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_whitelist(env: &Env, whitelist: &Address) {
    env.storage().instance().set(&DataKey::Whitelist, whitelist);
}

pub fn get_whitelist(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Whitelist)
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn save_proposal(env: &Env, id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_LEDGERS);
}

pub fn get_proposal(env: &Env, id: u32) -> Option<Proposal> {
    env.storage().persistent().get(&DataKey::Proposal(id))
}

pub fn clear_proposals(env: &Env) {
    let count = get_proposal_count(env);
    for id in 0..count {
        env.storage().persistent().remove(&DataKey::Proposal(id));
    }
    set_proposal_count(env, 0);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

/// Save a voter record, tracking the address in the roster on first write so
/// a reset can find every record to delete.
pub fn save_voter(env: &Env, voter: &Address, record: &Voter) {
    let key = DataKey::Voter(voter.clone());
    if !env.storage().persistent().has(&key) {
        let mut roster = get_voter_roster(env);
        roster.push_back(voter.clone());
        env.storage().persistent().set(&DataKey::VoterRoster, &roster);
        env.storage().persistent().extend_ttl(
            &DataKey::VoterRoster,
            PERSISTENT_TTL_LEDGERS,
            PERSISTENT_TTL_LEDGERS,
        );
    }
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_LEDGERS);
}

pub fn get_voter_roster(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::VoterRoster)
        .unwrap_or(Vec::new(env))
}

pub fn clear_voters(env: &Env) {
    for voter in get_voter_roster(env).iter() {
        env.storage().persistent().remove(&DataKey::Voter(voter));
    }
    env.storage().persistent().remove(&DataKey::VoterRoster);
}

// ── Winning Proposal ─────────────────────────────────────────────────────────

pub fn set_winning_proposal(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::WinningProposal, &id);
}

pub fn get_winning_proposal(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::WinningProposal)
}

pub fn clear_winning_proposal(env: &Env) {
    env.storage().instance().remove(&DataKey::WinningProposal);
}

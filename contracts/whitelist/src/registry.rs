use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

use shared::errors::ContractError;

use crate::storage;

#[contract]
pub struct WhitelistRegistry;

#[contractimpl]
impl WhitelistRegistry {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the registry with its owner.
    /// Can only be called once; the owner is immutable thereafter.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        if storage::has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_owner(&env, &owner);

        env.events()
            .publish((symbol_short!("init"),), (owner,));

        Ok(())
    }

    // ── Admission ────────────────────────────────────────────────────────────

    /// Admit a voter to the whitelist. Owner only.
    ///
    /// Re-admitting an already-admitted address is a no-op: the roster keeps
    /// a single entry per address and no event is emitted.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let owner = storage::get_owner(&env).ok_or(ContractError::NotInitialized)?;
        if caller != owner {
            return Err(ContractError::Unauthorized);
        }

        if storage::is_admitted(&env, &voter) {
            return Ok(());
        }

        storage::admit(&env, &voter);

        // One admission event per new address, for external indexers
        // reconstructing the admitted set without scanning storage.
        env.events()
            .publish((symbol_short!("admitted"),), (voter,));

        Ok(())
    }

    // ── Read-only Queries ────────────────────────────────────────────────────

    /// Whether an address has been admitted. Never fails.
    pub fn is_voter(env: Env, voter: Address) -> bool {
        storage::is_admitted(&env, &voter)
    }

    /// The admitted roster, in admission order.
    pub fn get_voters(env: Env) -> Vec<Address> {
        storage::get_roster(&env)
    }

    /// The registry owner, fixed at initialization.
    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        storage::get_owner(&env).ok_or(ContractError::NotInitialized)
    }
}

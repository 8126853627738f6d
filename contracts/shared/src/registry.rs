//! Client interface for the whitelist registry contract.
//!
//! The workflow contract consults the registry by address before accepting a
//! proposal or a vote. Only the read surface is declared here; admission
//! stays owner-gated behind the registry's own entry points.

use soroban_sdk::{contractclient, Address, Env, Vec};

/// Read interface of the whitelist registry, as seen by other contracts.
#[contractclient(name = "WhitelistClient")]
pub trait WhitelistInterface {
    /// Whether `voter` has been admitted. Never fails; unknown addresses
    /// are simply not admitted.
    fn is_voter(env: Env, voter: Address) -> bool;

    /// The admitted roster, in admission order.
    fn get_voters(env: Env) -> Vec<Address>;
}

//! Common error type for the ballot contracts
//!
//! Both contracts report failures through a single error enum so that the
//! calling collaborator sees one taxonomy regardless of which contract
//! rejected the call. Error codes are organized by category:
//! - 1-19: General/Authorization errors
//! - 20-39: Workflow errors
//! - 40-59: Voting errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller lacks the required role (owner or whitelisted voter)
    Unauthorized = 1,

    /// Contract not initialized
    NotInitialized = 2,

    /// Contract already initialized
    AlreadyInitialized = 3,

    /// Invalid input (empty or oversized proposal description)
    ValidationError = 4,

    // ===== Workflow Errors (20-39) =====
    /// Operation attempted outside its required workflow status
    InvalidPhase = 20,

    // ===== Voting Errors (40-59) =====
    /// Caller has already cast a vote in this cycle
    AlreadyVoted = 40,

    /// Proposal id does not reference an existing proposal
    UnknownProposal = 41,
}

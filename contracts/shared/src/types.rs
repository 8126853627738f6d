//! Common types for the ballot contracts
//!
//! Shared enums and structs representing the ballot lifecycle and its
//! records, used by both contracts and by off-chain consumers decoding
//! contract state.

use soroban_sdk::{contracttype, String};

/// Stage of the ballot lifecycle.
///
/// Advances strictly forward, one step at a time, driven by the admin.
/// A reset returns the workflow to `RegisteringVoters`. Discriminants are
/// part of the external interface: clients decode the status as a plain
/// integer.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Per-voter ballot record kept by the workflow contract.
///
/// `has_voted` and `voted_proposal_id` are written exactly once per cycle,
/// on a successful vote. Records are deleted only by a full reset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: u32,
}

impl Voter {
    /// Record for an address the workflow has never seen.
    pub fn absent() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// A submitted proposal. Keyed by its index in the append-only sequence;
/// the index doubles as the proposal id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

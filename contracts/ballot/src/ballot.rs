use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

use shared::{
    errors::ContractError,
    registry::WhitelistClient,
    types::{Proposal, Voter, WorkflowStatus},
    validation::validate_description,
};

use crate::storage;

#[contract]
pub struct BallotContract;

#[contractimpl]
impl BallotContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the workflow with its administrator and the address of the
    /// whitelist registry consulted for participant gating.
    /// Can only be called once. The workflow starts in `RegisteringVoters`.
    pub fn initialize(env: Env, admin: Address, whitelist: Address) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_whitelist(&env, &whitelist);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        env.events()
            .publish((symbol_short!("init"),), (admin, whitelist));

        Ok(())
    }

    // ── Workflow Transitions (admin only) ────────────────────────────────────

    /// `RegisteringVoters → ProposalsRegistrationStarted`
    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::advance_status(
            &env,
            &caller,
            WorkflowStatus::RegisteringVoters,
            WorkflowStatus::ProposalsRegistrationStarted,
        )
    }

    /// `ProposalsRegistrationStarted → ProposalsRegistrationEnded`
    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::advance_status(
            &env,
            &caller,
            WorkflowStatus::ProposalsRegistrationStarted,
            WorkflowStatus::ProposalsRegistrationEnded,
        )
    }

    /// `ProposalsRegistrationEnded → VotingSessionStarted`
    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::advance_status(
            &env,
            &caller,
            WorkflowStatus::ProposalsRegistrationEnded,
            WorkflowStatus::VotingSessionStarted,
        )
    }

    /// `VotingSessionStarted → VotingSessionEnded`
    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::advance_status(
            &env,
            &caller,
            WorkflowStatus::VotingSessionStarted,
            WorkflowStatus::VotingSessionEnded,
        )
    }

    /// `VotingSessionEnded → VotesTallied`
    ///
    /// Computes the winning proposal as the index with the strictly greatest
    /// vote count. Ties break to the lowest index: the scan runs in index
    /// order and replaces the running winner only on a strictly greater
    /// count, so the first-submitted proposal among the tied maximum wins.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        let current = storage::get_status(&env);
        if current != WorkflowStatus::VotingSessionEnded {
            return Err(ContractError::InvalidPhase);
        }

        let count = storage::get_proposal_count(&env);
        let mut winning_id = 0u32;
        let mut winning_count = 0u32;
        for id in 0..count {
            if let Some(proposal) = storage::get_proposal(&env, id) {
                if proposal.vote_count > winning_count {
                    winning_id = id;
                    winning_count = proposal.vote_count;
                }
            }
        }

        storage::set_winning_proposal(&env, winning_id);
        storage::set_status(&env, WorkflowStatus::VotesTallied);

        env.events()
            .publish((symbol_short!("tallied"),), (winning_id, winning_count));
        env.events().publish(
            (symbol_short!("status"),),
            (current, WorkflowStatus::VotesTallied),
        );

        Ok(())
    }

    /// Return the workflow to `RegisteringVoters` from any status, clearing
    /// the proposal sequence, every voter record and the tally result.
    ///
    /// The whitelist registry is not touched: admitted voters stay admitted
    /// across cycles.
    pub fn reset_voting(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        let previous = storage::get_status(&env);

        storage::clear_proposals(&env);
        storage::clear_voters(&env);
        storage::clear_winning_proposal(&env);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        env.events().publish((symbol_short!("reset"),), (previous,));
        env.events().publish(
            (symbol_short!("status"),),
            (previous, WorkflowStatus::RegisteringVoters),
        );

        Ok(())
    }

    // ── Participant Operations (whitelisted only) ────────────────────────────

    /// Submit a proposal. Allowed only while proposal registration is open.
    /// Returns the assigned proposal id.
    pub fn register_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, ContractError> {
        Self::require_admitted(&env, &caller)?;
        if storage::get_status(&env) != WorkflowStatus::ProposalsRegistrationStarted {
            return Err(ContractError::InvalidPhase);
        }
        validate_description(&description)?;

        let id = storage::get_proposal_count(&env);
        storage::save_proposal(
            &env,
            id,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        storage::set_proposal_count(&env, id + 1);

        // First accepted operation materializes the voter's record.
        let mut voter = storage::get_voter(&env, &caller).unwrap_or_else(Voter::absent);
        if !voter.is_registered {
            voter.is_registered = true;
            storage::save_voter(&env, &caller, &voter);
        }

        env.events()
            .publish((symbol_short!("proposal"),), (caller, id));

        Ok(id)
    }

    /// Cast the caller's single vote for `proposal_id`. Allowed only while
    /// the voting session is open; irreversible within a cycle.
    ///
    /// Every precondition is checked before the first write: a failed vote
    /// leaves the proposal's count and the caller's record untouched.
    pub fn vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), ContractError> {
        Self::require_admitted(&env, &caller)?;
        if storage::get_status(&env) != WorkflowStatus::VotingSessionStarted {
            return Err(ContractError::InvalidPhase);
        }
        let mut voter = storage::get_voter(&env, &caller).unwrap_or_else(Voter::absent);
        if voter.has_voted {
            return Err(ContractError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(ContractError::UnknownProposal)?;

        proposal.vote_count += 1;
        storage::save_proposal(&env, proposal_id, &proposal);

        voter.is_registered = true;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        storage::save_voter(&env, &caller, &voter);

        env.events()
            .publish((symbol_short!("voted"),), (caller, proposal_id));

        Ok(())
    }

    // ── Read-only Queries ────────────────────────────────────────────────────

    /// Current workflow status. `RegisteringVoters` before initialization.
    pub fn get_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    /// The full proposal sequence, in submission order.
    pub fn get_all_proposals(env: Env) -> Vec<Proposal> {
        let mut proposals = Vec::new(&env);
        for id in 0..storage::get_proposal_count(&env) {
            if let Some(proposal) = storage::get_proposal(&env, id) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }

    /// Number of submitted proposals in the current cycle.
    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    /// A single voter's ballot record. All-false default for addresses the
    /// workflow has never seen.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter).unwrap_or_else(Voter::absent)
    }

    /// The winning proposal id. Zero before a tally; meaningful only once
    /// the status is `VotesTallied`.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal(&env).unwrap_or(0)
    }

    /// The full winning proposal record.
    pub fn get_winning_proposal(env: Env) -> Result<Proposal, ContractError> {
        if storage::get_status(&env) != WorkflowStatus::VotesTallied {
            return Err(ContractError::InvalidPhase);
        }
        let id = storage::get_winning_proposal(&env).unwrap_or(0);
        storage::get_proposal(&env, id).ok_or(ContractError::UnknownProposal)
    }

    /// The workflow administrator.
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    /// Address of the whitelist registry this workflow consults.
    pub fn get_whitelist(env: Env) -> Result<Address, ContractError> {
        storage::get_whitelist(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Private Helpers ──────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Participant gate: the registry is consulted at call time, before any
    /// phase check, so non-admitted callers fail `Unauthorized` regardless
    /// of phase.
    fn require_admitted(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        let registry = storage::get_whitelist(env).ok_or(ContractError::NotInitialized)?;
        if !WhitelistClient::new(env, &registry).is_voter(caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn advance_status(
        env: &Env,
        caller: &Address,
        from: WorkflowStatus,
        to: WorkflowStatus,
    ) -> Result<(), ContractError> {
        Self::require_admin(env, caller)?;
        let current = storage::get_status(env);
        if current != from {
            return Err(ContractError::InvalidPhase);
        }
        storage::set_status(env, to);

        env.events()
            .publish((symbol_short!("status"),), (from, to));

        Ok(())
    }
}

#![no_std]

mod election;
mod events;
mod registry;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use storage_types::{
    Candidate, CandidateIndex, ElectionPhase, VoterRecord, VotingError, VotingStatus,
    VotingWindow,
};
use storage_types::DataKey;

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Creates the election with `owner` as its fixed owner and first admin.
    pub fn __constructor(e: Env, owner: Address) {
        registry::set_owner(&e, &owner);
        registry::set_admin(&e, &owner);
        e.storage()
            .instance()
            .set(&DataKey::Phase, &ElectionPhase::NotStarted);
        e.storage().instance().set(&DataKey::CandidateCount, &0u32);
        e.storage().instance().set(&DataKey::TotalVotes, &0u32);

        registry::extend_instance(&e);
    }

    /// Grant admin rights. Owner only; granting twice is a no-op.
    pub fn add_admin(e: Env, owner: Address, admin: Address) -> Result<(), VotingError> {
        owner.require_auth();
        registry::require_owner(&e, &owner)?;

        registry::set_admin(&e, &admin);
        registry::extend_instance(&e);

        events::emit_admin_added(&e, events::AdminAddedEvent { owner, admin });
        Ok(())
    }

    /// Register a candidate and return its index.
    pub fn add_candidate(
        e: Env,
        admin: Address,
        account: Address,
        name: String,
    ) -> Result<CandidateIndex, VotingError> {
        admin.require_auth();
        registry::require_admin(&e, &admin)?;

        if name.is_empty() {
            return Err(VotingError::InvalidInput);
        }

        let candidate = Candidate {
            account: account.clone(),
            name: name.clone(),
            vote_count: 0,
        };
        let index = registry::push_candidate(&e, &candidate)?;
        registry::extend_instance(&e);

        events::emit_candidate_added(
            &e,
            events::CandidateAddedEvent {
                index,
                account,
                name,
                added_by: admin,
            },
        );

        Ok(index)
    }

    /// Register a voter. An existing record, voted or not, is left untouched
    /// apart from having its TTL refreshed.
    pub fn add_voter(e: Env, admin: Address, voter: Address) -> Result<(), VotingError> {
        admin.require_auth();
        registry::require_admin(&e, &admin)?;

        if registry::get_voter(&e, &voter).is_some() {
            registry::extend_voter(&e, &voter);
            registry::extend_instance(&e);
            return Ok(());
        }

        registry::set_voter(
            &e,
            &voter,
            &VoterRecord {
                is_registered: true,
                has_voted: false,
            },
        );
        registry::extend_instance(&e);

        events::emit_voter_registered(
            &e,
            events::VoterRegisteredEvent {
                voter,
                added_by: admin,
            },
        );

        Ok(())
    }

    /// Open the voting window for `duration` seconds starting now.
    pub fn start_voting(e: Env, owner: Address, duration: u64) -> Result<VotingWindow, VotingError> {
        owner.require_auth();
        registry::require_owner(&e, &owner)?;

        if election::get_phase(&e)? != ElectionPhase::NotStarted {
            return Err(VotingError::InvalidPhase);
        }
        let window = election::open_window(&e, duration)?;
        election::advance_phase(&e, ElectionPhase::NotStarted, ElectionPhase::Ongoing)?;
        registry::extend_instance(&e);

        log!(&e, "voting started", window.start_time, window.end_time);
        events::emit_voting_started(
            &e,
            events::VotingStartedEvent {
                start_time: window.start_time,
                end_time: window.end_time,
            },
        );

        Ok(window)
    }

    /// Cast `voter`'s single ballot for the candidate at `candidate_index`.
    pub fn vote(e: Env, voter: Address, candidate_index: CandidateIndex) -> Result<(), VotingError> {
        voter.require_auth();

        election::ensure_accepting_votes(&e)?;

        let mut record = registry::get_voter(&e, &voter)
            .filter(|r| r.is_registered)
            .ok_or(VotingError::NotAuthorizedVoter)?;
        if record.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut candidate = registry::get_candidate(&e, candidate_index)?;
        candidate.vote_count = candidate
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::InvalidInput)?;
        let total = registry::total_votes(&e)
            .checked_add(1)
            .ok_or(VotingError::InvalidInput)?;

        // A failed invocation is rolled back by the host, writes included.
        record.has_voted = true;
        registry::set_candidate(&e, candidate_index, &candidate);
        registry::set_voter(&e, &voter, &record);
        registry::set_total_votes(&e, total);
        registry::extend_instance(&e);

        events::emit_vote_cast(
            &e,
            events::VoteCastEvent {
                voter,
                candidate_index,
                candidate_votes: candidate.vote_count,
            },
        );

        Ok(())
    }

    /// Close the election. Allowed any time after `start_voting`, including
    /// after the window has already elapsed.
    pub fn end_voting(e: Env, owner: Address) -> Result<(), VotingError> {
        owner.require_auth();
        registry::require_owner(&e, &owner)?;

        election::advance_phase(&e, ElectionPhase::Ongoing, ElectionPhase::Ended)?;
        registry::extend_instance(&e);

        let total_votes = registry::total_votes(&e);
        log!(&e, "voting ended", total_votes);
        events::emit_voting_ended(
            &e,
            events::VotingEndedEvent {
                ended_at: e.ledger().timestamp(),
                total_votes,
            },
        );

        Ok(())
    }

    pub fn get_voting_status(e: Env) -> Result<String, VotingError> {
        let status = election::current_status(&e)?;
        Ok(String::from_str(&e, election::status_message(status)))
    }

    pub fn get_voting_state(e: Env) -> Result<VotingStatus, VotingError> {
        election::current_status(&e)
    }

    pub fn get_phase(e: Env) -> Result<ElectionPhase, VotingError> {
        election::get_phase(&e)
    }

    pub fn get_voting_window(e: Env) -> Option<VotingWindow> {
        election::get_window(&e)
    }

    /// Name and tally of the candidate at `index`.
    pub fn get_candidate_result(e: Env, index: CandidateIndex) -> Result<(String, u32), VotingError> {
        let candidate = registry::get_candidate(&e, index)?;
        Ok((candidate.name, candidate.vote_count))
    }

    pub fn get_candidate(e: Env, index: CandidateIndex) -> Result<Candidate, VotingError> {
        registry::get_candidate(&e, index)
    }

    /// Whether `voter` can still cast a ballot.
    pub fn get_voter_status(e: Env, voter: Address) -> bool {
        registry::get_voter(&e, &voter)
            .map(|r| r.is_registered && !r.has_voted)
            .unwrap_or(false)
    }

    pub fn get_voter(e: Env, voter: Address) -> Option<VoterRecord> {
        registry::get_voter(&e, &voter)
    }

    pub fn total_candidates(e: Env) -> u32 {
        registry::candidate_count(&e)
    }

    pub fn total_votes(e: Env) -> u32 {
        registry::total_votes(&e)
    }

    pub fn owner(e: Env) -> Result<Address, VotingError> {
        registry::get_owner(&e)
    }

    pub fn is_admin(e: Env, who: Address) -> bool {
        registry::is_admin(&e, &who)
    }
}

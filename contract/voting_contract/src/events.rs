use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct AdminAddedEvent {
    pub owner: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CandidateAddedEvent {
    pub index: u32,
    pub account: Address,
    pub name: String,
    pub added_by: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct VoterRegisteredEvent {
    pub voter: Address,
    pub added_by: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct VotingStartedEvent {
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub candidate_index: u32,
    pub candidate_votes: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct VotingEndedEvent {
    pub ended_at: u64,
    pub total_votes: u32,
}

pub fn emit_admin_added(env: &Env, event: AdminAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_added"),), event);
}

pub fn emit_candidate_added(env: &Env, event: CandidateAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "candidate_added"),), event);
}

pub fn emit_voter_registered(env: &Env, event: VoterRegisteredEvent) {
    env.events()
        .publish((Symbol::new(env, "voter_registered"),), event);
}

pub fn emit_voting_started(env: &Env, event: VotingStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "voting_started"),), event);
}

pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish((Symbol::new(env, "vote_cast"),), event);
}

pub fn emit_voting_ended(env: &Env, event: VotingEndedEvent) {
    env.events()
        .publish((Symbol::new(env, "voting_ended"),), event);
}

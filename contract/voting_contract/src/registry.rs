//! Storage accessors for the owner, the admin set, candidates and voters.
//!
//! Nothing in here ever removes an entry: the registries only grow.

use soroban_sdk::{Address, Env};

use crate::storage_types::{
    Candidate, CandidateIndex, DataKey, PersistentKey, VoterRecord, VotingError, TTL_INSTANCE,
    TTL_PERSISTENT, TTL_THRESHOLD,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn get_owner(e: &Env) -> Result<Address, VotingError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(VotingError::NotInitialized)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_owner(e: &Env, who: &Address) -> Result<bool, VotingError> {
    Ok(get_owner(e)? == *who)
}

pub fn require_owner(e: &Env, who: &Address) -> Result<(), VotingError> {
    if !is_owner(e, who)? {
        return Err(VotingError::Unauthorized);
    }
    // The owner's admin entry is never rewritten
    extend_persistent(e, &PersistentKey::Admin(who.clone()));
    Ok(())
}

pub fn is_admin(e: &Env, who: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&PersistentKey::Admin(who.clone()))
        .unwrap_or(false)
}

pub fn set_admin(e: &Env, who: &Address) {
    let key = PersistentKey::Admin(who.clone());
    e.storage().persistent().set(&key, &true);
    extend_persistent(e, &key);
}

/// Fails unless `who` is an admin. A successful check keeps the admin entry alive.
pub fn require_admin(e: &Env, who: &Address) -> Result<(), VotingError> {
    if !is_admin(e, who) {
        return Err(VotingError::Unauthorized);
    }
    extend_persistent(e, &PersistentKey::Admin(who.clone()));
    Ok(())
}

pub fn candidate_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::CandidateCount)
        .unwrap_or(0)
}

/// Appends `candidate` after the last registered one and returns its index.
pub fn push_candidate(e: &Env, candidate: &Candidate) -> Result<CandidateIndex, VotingError> {
    let index = candidate_count(e);
    let next = index.checked_add(1).ok_or(VotingError::InvalidInput)?;

    let key = PersistentKey::Candidate(index);
    e.storage().persistent().set(&key, candidate);
    e.storage().instance().set(&DataKey::CandidateCount, &next);
    extend_persistent(e, &key);

    Ok(index)
}

pub fn get_candidate(e: &Env, index: CandidateIndex) -> Result<Candidate, VotingError> {
    if index >= candidate_count(e) {
        return Err(VotingError::InvalidCandidate);
    }
    e.storage()
        .persistent()
        .get(&PersistentKey::Candidate(index))
        .ok_or(VotingError::InvalidCandidate)
}

pub fn set_candidate(e: &Env, index: CandidateIndex, candidate: &Candidate) {
    let key = PersistentKey::Candidate(index);
    e.storage().persistent().set(&key, candidate);
    extend_persistent(e, &key);
}

pub fn get_voter(e: &Env, who: &Address) -> Option<VoterRecord> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Voter(who.clone()))
}

pub fn extend_voter(e: &Env, who: &Address) {
    extend_persistent(e, &PersistentKey::Voter(who.clone()));
}

pub fn set_voter(e: &Env, who: &Address, record: &VoterRecord) {
    let key = PersistentKey::Voter(who.clone());
    e.storage().persistent().set(&key, record);
    extend_persistent(e, &key);
}

pub fn total_votes(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::TotalVotes).unwrap_or(0)
}

pub fn set_total_votes(e: &Env, total: u32) {
    e.storage().instance().set(&DataKey::TotalVotes, &total);
}

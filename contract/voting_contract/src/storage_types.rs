use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Phase,
    Window,
    CandidateCount,
    TotalVotes,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Admin(Address),
    Candidate(CandidateIndex),
    Voter(Address),
}

pub type CandidateIndex = u32;

/// Stored lifecycle of the election. Only ever moves forward.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracttype]
pub enum ElectionPhase {
    NotStarted,
    Ongoing,
    Ended,
}

/// Status as seen by callers: the stored phase combined with the clock.
///
/// `Elapsed` covers the gap between the end of the voting window and an
/// explicit `end_voting` call. No votes are accepted in it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VotingStatus {
    NotStarted,
    Ongoing,
    Elapsed,
    Ended,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VotingWindow {
    pub start_time: u64,
    pub end_time: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Candidate {
    pub account: Address,
    pub name: String,
    pub vote_count: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VoterRecord {
    pub is_registered: bool,
    pub has_voted: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    Unauthorized = 1,
    InvalidPhase = 2,
    InvalidInput = 3,
    VotingNotStarted = 4,
    VotingPeriodEnded = 5,
    AlreadyVoted = 6,
    NotAuthorizedVoter = 7,
    InvalidCandidate = 8,
    NotInitialized = 9,
}

impl VotingError {
    /// Human-readable text for an error code. Entry points only return the
    /// code; clients use this to show a rejection to the end user.
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Caller is not authorized",
            VotingError::InvalidPhase => "Operation not allowed in the current phase",
            VotingError::InvalidInput => "Invalid input",
            VotingError::VotingNotStarted => STATUS_NOT_STARTED,
            VotingError::VotingPeriodEnded => "Voting period has ended",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::NotAuthorizedVoter => "You are not an authorized voter",
            VotingError::InvalidCandidate => "Invalid candidate",
            VotingError::NotInitialized => "Election not initialized",
        }
    }
}

// Status strings returned by `get_voting_status`
pub const STATUS_NOT_STARTED: &str = "Voting has not started";
pub const STATUS_ONGOING: &str = "Voting is ongoing";
pub const STATUS_ELAPSED: &str = "Voting period has elapsed";
pub const STATUS_ENDED: &str = "Voting has ended";

// Constants
pub const DAY_IN_LEDGERS: u32 = 17280; // ~5s per ledger
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30;
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 120;
pub const TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7;

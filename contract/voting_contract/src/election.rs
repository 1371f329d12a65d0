use soroban_sdk::Env;

use crate::storage_types::{
    DataKey, ElectionPhase, VotingError, VotingStatus, VotingWindow, STATUS_ELAPSED,
    STATUS_ENDED, STATUS_NOT_STARTED, STATUS_ONGOING,
};

pub fn get_phase(e: &Env) -> Result<ElectionPhase, VotingError> {
    e.storage()
        .instance()
        .get(&DataKey::Phase)
        .ok_or(VotingError::NotInitialized)
}

/// Moves the election from `from` to the next phase. Any other current phase
/// is rejected, which keeps every transition one-shot.
pub fn advance_phase(e: &Env, from: ElectionPhase, to: ElectionPhase) -> Result<(), VotingError> {
    if get_phase(e)? != from || to <= from {
        return Err(VotingError::InvalidPhase);
    }
    e.storage().instance().set(&DataKey::Phase, &to);
    Ok(())
}

pub fn get_window(e: &Env) -> Option<VotingWindow> {
    e.storage().instance().get(&DataKey::Window)
}

/// Window opening now and closing `duration` seconds later.
pub fn open_window(e: &Env, duration: u64) -> Result<VotingWindow, VotingError> {
    if duration == 0 {
        return Err(VotingError::InvalidInput);
    }
    let start_time = e.ledger().timestamp();
    let end_time = start_time
        .checked_add(duration)
        .ok_or(VotingError::InvalidInput)?;

    let window = VotingWindow {
        start_time,
        end_time,
    };
    e.storage().instance().set(&DataKey::Window, &window);
    Ok(window)
}

/// Check if the end of the window is in the past
pub fn is_past(e: &Env, window: &VotingWindow) -> bool {
    e.ledger().timestamp() > window.end_time
}

pub fn current_status(e: &Env) -> Result<VotingStatus, VotingError> {
    let status = match get_phase(e)? {
        ElectionPhase::NotStarted => VotingStatus::NotStarted,
        ElectionPhase::Ended => VotingStatus::Ended,
        ElectionPhase::Ongoing => {
            let window = get_window(e).ok_or(VotingError::NotInitialized)?;
            if is_past(e, &window) {
                VotingStatus::Elapsed
            } else {
                VotingStatus::Ongoing
            }
        }
    };
    Ok(status)
}

/// Fails unless a ballot may be cast right now. Expiry is evaluated against
/// the clock on every call, whether or not `end_voting` has run.
pub fn ensure_accepting_votes(e: &Env) -> Result<(), VotingError> {
    match current_status(e)? {
        VotingStatus::Ongoing => Ok(()),
        VotingStatus::NotStarted => Err(VotingError::VotingNotStarted),
        VotingStatus::Elapsed | VotingStatus::Ended => Err(VotingError::VotingPeriodEnded),
    }
}

pub fn status_message(status: VotingStatus) -> &'static str {
    match status {
        VotingStatus::NotStarted => STATUS_NOT_STARTED,
        VotingStatus::Ongoing => STATUS_ONGOING,
        VotingStatus::Elapsed => STATUS_ELAPSED,
        VotingStatus::Ended => STATUS_ENDED,
    }
}

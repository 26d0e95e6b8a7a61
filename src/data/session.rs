use crate::data::draft_store::TripDraftStore;
use crate::data::history::TripHistory;

/// Everything one booking session works on. Passed explicitly to the wizard
/// and the UI; there is no global trip state.
#[derive(Debug, Default)]
pub struct TripSession {
    pub draft: TripDraftStore,
    pub history: TripHistory,
}

impl TripSession {
    /// A fresh draft over previously confirmed trips.
    pub fn with_history(history: TripHistory) -> Self {
        TripSession {
            draft: TripDraftStore::new(),
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::trip::TripDraft;

    #[test]
    fn test_with_history_starts_from_default_draft() {
        let mut history = TripHistory::default();
        history.commit(&TripDraft::default());
        let session = TripSession::with_history(history);
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.draft.draft(), &TripDraft::default());
    }
}

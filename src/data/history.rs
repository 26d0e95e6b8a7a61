use crate::data::persistence::Persistable;
use crate::data::trip::{Assistance, TripDraft};
use crate::dates;
use crate::error::TripError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Snapshot kept for a confirmed booking. Deliberately narrower than the
/// draft: the traveler name, origin and guest counts are not retained.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TripHistoryEntry {
    pub end_location: String,
    pub start_date: String,
    pub end_date: String,
    pub assistance: Assistance,
}

impl TripHistoryEntry {
    pub fn from_draft(draft: &TripDraft) -> Self {
        TripHistoryEntry {
            end_location: draft.end_location.clone(),
            start_date: draft.start_date.clone(),
            end_date: draft.end_date.clone(),
            assistance: draft.assistance,
        }
    }

    /// Inclusive length of the trip, if its dates still form a valid range.
    pub fn days(&self) -> Option<i64> {
        dates::trip_days(&self.start_date, &self.end_date)
    }
}

/// Confirmed trips in booking order. Entries are addressed by position only.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct TripHistory {
    trips: Vec<TripHistoryEntry>,
}

impl Persistable for TripHistory {
    fn filename() -> &'static str {
        "trips.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl TripHistory {
    /// Appends the retained subset of `draft`. The draft's own invariants
    /// are trusted; nothing is re-validated here.
    pub fn commit(&mut self, draft: &TripDraft) -> &TripHistoryEntry {
        let entry = TripHistoryEntry::from_draft(draft);
        info!(destination = %entry.end_location, start = %entry.start_date, end = %entry.end_date, "trip committed to history");
        self.trips.push(entry);
        &self.trips[self.trips.len() - 1]
    }

    /// Removes the entry at `index`, shifting later entries down by one.
    pub fn remove(&mut self, index: usize) -> Result<TripHistoryEntry, TripError> {
        if index >= self.trips.len() {
            return Err(TripError::Index {
                index,
                len: self.trips.len(),
            });
        }
        let removed = self.trips.remove(index);
        info!(index, destination = %removed.end_location, "trip removed from history");
        Ok(removed)
    }

    pub fn latest(&self) -> Option<&TripHistoryEntry> {
        self.trips.last()
    }

    pub fn entries(&self) -> &[TripHistoryEntry] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::trip::Guests;

    fn draft(dest: &str, start: &str, end: &str) -> TripDraft {
        TripDraft {
            name: "Alex".to_string(),
            start_location: "Porto".to_string(),
            end_location: dest.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            guests: Guests {
                adults: 2,
                children: 1,
                infants: 0,
            },
            assistance: Assistance::Train,
        }
    }

    #[test]
    fn test_commit_keeps_only_retained_fields() {
        let mut history = TripHistory::default();
        history.commit(&draft("Lisbon", "10/06/2024", "12/06/2024"));
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.latest(),
            Some(&TripHistoryEntry {
                end_location: "Lisbon".to_string(),
                start_date: "10/06/2024".to_string(),
                end_date: "12/06/2024".to_string(),
                assistance: Assistance::Train,
            })
        );
    }

    #[test]
    fn test_serialized_entry_has_no_name_or_guests() {
        let entry = TripHistoryEntry::from_draft(&draft("Lisbon", "10/06/2024", "12/06/2024"));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("Alex"));
        assert!(!json.contains("Porto"));
        assert!(!json.contains("guests"));
    }

    #[test]
    fn test_commit_preserves_insertion_order() {
        let mut history = TripHistory::default();
        history.commit(&draft("A", "01/01/2025", "02/01/2025"));
        history.commit(&draft("B", "01/02/2025", "02/02/2025"));
        let names: Vec<_> = history.entries().iter().map(|e| e.end_location.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(history.latest().unwrap().end_location, "B");
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut history = TripHistory::default();
        history.commit(&draft("A", "01/01/2025", "02/01/2025"));
        history.commit(&draft("B", "01/02/2025", "02/02/2025"));
        history.commit(&draft("C", "01/03/2025", "02/03/2025"));
        let removed = history.remove(1).unwrap();
        assert_eq!(removed.end_location, "B");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].end_location, "C");
    }

    #[test]
    fn test_remove_out_of_bounds_is_index_error() {
        let mut history = TripHistory::default();
        history.commit(&draft("A", "01/01/2025", "02/01/2025"));
        assert_eq!(history.remove(1), Err(TripError::Index { index: 1, len: 1 }));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_latest_empty_is_none() {
        let history = TripHistory::default();
        assert!(history.latest().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_entry_days() {
        let entry = TripHistoryEntry::from_draft(&draft("Lisbon", "10/06/2024", "12/06/2024"));
        assert_eq!(entry.days(), Some(3));
    }

    #[test]
    fn test_history_save_to_load_from() {
        use tempfile::TempDir;
        let tmp = TempDir::new().unwrap();
        let mut history = TripHistory::default();
        history.commit(&draft("Lisbon", "10/06/2024", "12/06/2024"));
        history.save_to(tmp.path()).unwrap();
        let loaded = TripHistory::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, history);
    }
}

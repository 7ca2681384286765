use thiserror::Error;

/// Failures from the browser note store. Logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteStoreError {
    #[error("localStorage is not available in this browser context")]
    Unavailable,
    #[error("localStorage rejected the operation: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("itinerary JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("itinerary has no days")]
    Empty,
    #[error("itinerary has {0} days, at most 255 are supported")]
    TooManyDays(usize),
    #[error("day {found} is out of order (expected day {expected})")]
    DayOutOfOrder { expected: u8, found: u8 },
    #[error("note id {0:?} is used by more than one timeline entry")]
    DuplicateNoteId(String),
}

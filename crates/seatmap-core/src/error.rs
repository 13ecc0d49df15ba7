//! Error type shared by every seatmap crate.
//!
//! Nothing here is fatal: every variant is reported to the operator (or the
//! caller) and the scene stays at its last committed state.

use crate::id::{ElementId, EntryTypeId};

pub type Result<T, E = SeatMapError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SeatMapError {
    #[error("at least one entry type must exist before seats can be added")]
    NoEntryTypes,
    #[error("the last entry type cannot be removed")]
    LastEntryType,
    #[error("no seat with id `{0}`")]
    UnknownSeat(ElementId),
    #[error("no decorative object with id `{0}`")]
    UnknownObject(ElementId),
    #[error("no entry type with id {0}")]
    UnknownEntryType(EntryTypeId),
    #[error("invalid layout parameters: {0}")]
    InvalidLayout(String),
    #[error("could not import seat map: {0}")]
    Import(#[source] serde_json::Error),
    #[error("could not export seat map: {0}")]
    Export(#[source] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
    #[error("save failed: {0}")]
    Save(String),
    #[error("seat `{0}` is not available")]
    SeatUnavailable(ElementId),
    #[error("already selected the required {required} seat(s)")]
    QuotaExceeded { required: usize },
    #[error("selected {selected} of {required} required seat(s)")]
    SelectionIncomplete { selected: usize, required: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_element() {
        let err = SeatMapError::UnknownSeat(ElementId::intern("seat-9"));
        assert_eq!(err.to_string(), "no seat with id `seat-9`");
        let err = SeatMapError::SelectionIncomplete {
            selected: 1,
            required: 3,
        };
        assert_eq!(err.to_string(), "selected 1 of 3 required seat(s)");
    }

    #[test]
    fn import_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SeatMapError::Import(source);
        assert!(std::error::Error::source(&err).is_some());
    }
}

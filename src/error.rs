use crate::domain::{NewsletterId, SectionId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Lookup errors
    #[error("Newsletter {0} not found")]
    NewsletterNotFound(NewsletterId),
    #[error("Section {0} not found")]
    SectionNotFound(SectionId),
    #[error("Unknown layout {0}")]
    UnknownLayout(String),
    // Scheduling errors
    #[error("Schedule time is out of range")]
    ScheduleOutOfRange,
    // Section ordering errors
    #[error("A newsletter must keep at least one section")]
    LastSection,
    #[error("Section position {position} is out of range for {len} sections")]
    PositionOutOfRange { position: usize, len: usize },
    // Storage errors
    #[error("Failed to serialize newsletters")]
    SerializationError(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by icon lookup, dataset parsing, and rendering.
pub enum IconError {
    /// More than one dataset record carries the requested name.
    #[error("icon dataset has {matches} records named `{name}`")]
    DuplicateName {
        /// Requested icon name.
        name: String,
        /// Number of records sharing the name.
        matches: usize,
    },
    /// The renderer was asked for a name the dataset does not contain.
    #[error("unknown icon `{name}`")]
    UnknownIcon {
        /// Requested icon name.
        name: String,
    },
    /// The dataset JSON could not be parsed into icon records.
    #[error("invalid icon dataset: {reason}")]
    InvalidDataset {
        /// Parser error message.
        reason: String,
    },
}

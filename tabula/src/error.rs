//! Errors raised by a draw.

/// Boxed error returned by caller code such as the active-content callback.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for table drawing.
///
/// Every variant aborts the draw that raised it. Cells already written to
/// the surface stay written; [`TableState`](crate::TableState) is left as it
/// was before the draw.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset is not a shape the table can index.
    #[error("Unsupported data source: {reason}")]
    UnsupportedSource { reason: String },

    /// A width policy has no entry for the requested column.
    #[error("Column {index} out of range for {policy} width policy ({len} entries)")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        policy: &'static str,
    },

    /// The active-content callback failed.
    #[error("Active content callback failed: {0}")]
    Callback(#[source] BoxError),
}

impl Error {
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedSource {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors raised by report generation.
///
/// Every failure is a caller-input problem: the remedial action is to change
/// the input (a different window, different criteria, a valid threshold),
/// never to retry the same call.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no data: {0}")]
    NoData(#[from] NoDataError),

    #[error("validation error: {0}")]
    Validation(String),
}

/// The empty-data family, raised in exactly three situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoDataError {
    /// The input record collection was empty before any filtering.
    #[error("no records were supplied for the report")]
    EmptyInput,

    /// All records were eliminated by the period window and criteria.
    #[error("no records matched the selected period and criteria")]
    EmptyResult,

    /// The assembler was handed zero tables.
    #[error("the assembled report contains no tables")]
    EmptyDocument,
}

impl From<validator::ValidationErrors> for ReportError {
    fn from(err: validator::ValidationErrors) -> Self {
        ReportError::Validation(err.to_string())
    }
}

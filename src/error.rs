use thiserror::Error;

/// Failures that abort an extraction call.
///
/// Only a payload without a usable header line is fatal. A column missing
/// from the header disables the affected field or entity type for the whole
/// payload, and a cell that fails numeric parsing contributes a neutral
/// value; neither ever surfaces as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("payload contains no header line")]
    EmptyPayload,
}

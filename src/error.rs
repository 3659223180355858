use thiserror::Error;

/// Precondition violations reported by the checked API layer.
///
/// The unchecked kernels never construct these; their preconditions are
/// documented contracts, validated only through [`crate::checked`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolymulError {
    #[error("operand `{operand}` is empty: a polynomial needs at least one coefficient")]
    EmptyOperand { operand: &'static str },

    #[error("output buffer too short: required {required}, got {got}")]
    OutputTooShort { required: usize, got: usize },

    #[error("summed operands differ in length: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, PolymulError>;

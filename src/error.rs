use thiserror::Error;

/// Errors returned when constructing, wrapping, downsizing or merging sketches.
///
/// Every check happens before a sketch is touched, so an `Err` always leaves the
/// receiver in the state it had before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A t-, d- or precision parameter lies outside its admissible range.
    #[error("invalid {name} parameter {value}, expected a value in [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Sketches with different t-parameters cannot be combined.
    #[error("t-parameter mismatch: expected {expected}, got {actual}")]
    IncompatibleT { expected: u32, actual: u32 },

    /// The added sketch has a smaller d-parameter than the receiver.
    #[error("other has smaller d-parameter ({other} < {this})")]
    SmallerD { this: u32, other: u32 },

    /// The added sketch has a smaller precision than the receiver.
    #[error("other has smaller precision ({other} < {this})")]
    SmallerPrecision { this: u32, other: u32 },

    /// A wrapped state buffer does not match any valid precision for the given t and d.
    #[error("unexpected state length {len}")]
    InvalidStateLength { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Errors from data type queries and narrowing writes.

use crate::kind::NumericKind;

/// A data type operation could not be carried out.
///
/// Every variant names the [`NumericKind`] whose descriptor rejected the
/// operation. When an operation fails, the destination value it was given
/// is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataTypeError {
    /// The kind has no lossless representation as `target`.
    ///
    /// Returned by `as_double` / `as_long` for every input when the kind
    /// reports `has_double_representation() == false` (resp. long).
    PrecisionLoss {
        /// Kind that was queried.
        kind: NumericKind,
        /// Requested representation (`"f64"` or `"i64"`).
        target: &'static str,
    },
    /// Bounds were requested from a kind with `is_bounded() == false`.
    Unbounded {
        /// Kind that was queried.
        kind: NumericKind,
    },
    /// The value lies outside the kind's representable range.
    Overflow {
        /// Kind that was written.
        kind: NumericKind,
    },
    /// NaN or infinity where only finite values are meaningful.
    NotFinite {
        /// Kind that was read or written.
        kind: NumericKind,
    },
    /// A sample of one kind was handed to the descriptor of another.
    KindMismatch {
        /// Kind of the descriptor.
        expected: NumericKind,
        /// Kind of the sample.
        actual: NumericKind,
    },
}

impl DataTypeError {
    /// The kind whose descriptor produced this error.
    pub fn kind(&self) -> NumericKind {
        match *self {
            Self::PrecisionLoss { kind, .. }
            | Self::Unbounded { kind }
            | Self::Overflow { kind }
            | Self::NotFinite { kind } => kind,
            Self::KindMismatch { expected, .. } => expected,
        }
    }
}

impl core::fmt::Display for DataTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PrecisionLoss { kind, target } => {
                write!(f, "{kind} cannot be represented as {target} without precision loss")
            }
            Self::Unbounded { kind } => write!(f, "{kind} has no bounds"),
            Self::Overflow { kind } => write!(f, "value out of range for {kind}"),
            Self::NotFinite { kind } => write!(f, "non-finite value for {kind}"),
            Self::KindMismatch { expected, actual } => {
                write!(f, "expected a {expected} sample, got {actual}")
            }
        }
    }
}

impl core::error::Error for DataTypeError {}

//! The per-kind descriptor contract.
//!
//! A [`DataType`] is a stateless bundle of operations for one
//! [`NumericKind`]. It never owns storage: callers pass their own
//! `Self::Value` cells by reference. Descriptors are zero-sized and may be
//! shared freely across threads.
//!
//! # Overflow policy
//!
//! Narrowing writes (`from_canonical`, `set_double`, `set_long`) are
//! checked: a value outside the kind's range fails with
//! [`DataTypeError::Overflow`] and the destination is left unchanged.
//! Fractions are truncated toward zero when writing integer kinds.
//! [`from_canonical_saturating`](DataType::from_canonical_saturating) is the
//! only clamping path and must be requested explicitly.

use alloc::string::String;

use crate::big_complex::BigComplex;
use crate::error::DataTypeError;
use crate::kind::NumericKind;

/// Range, precision, and conversion operations for one [`NumericKind`].
pub trait DataType: Send + Sync {
    /// Native storage cell for one value of this kind.
    type Value: Copy + Default + PartialEq + core::fmt::Debug + Send + Sync + 'static;

    /// The kind this descriptor describes.
    fn kind(&self) -> NumericKind;

    /// Short display name, e.g. `"64-bit int"`.
    fn short_name(&self) -> &'static str {
        self.kind().short_name()
    }

    /// Long display name, e.g. `"64-bit signed integer"`.
    fn long_name(&self) -> &'static str {
        self.kind().long_name()
    }

    /// One-sentence description.
    fn description(&self) -> String {
        self.kind().description()
    }

    /// Whether values have an imaginary part.
    fn is_complex(&self) -> bool {
        self.kind().is_complex()
    }

    /// Whether the kind is a floating point type.
    fn is_float(&self) -> bool {
        self.kind().is_float()
    }

    /// Whether negative values are representable.
    fn is_signed(&self) -> bool {
        self.kind().is_signed()
    }

    /// Whether `lower_bound` / `upper_bound` succeed.
    fn is_bounded(&self) -> bool {
        self.kind().is_bounded()
    }

    /// Storage width in bits; both parts for complex kinds.
    fn bit_count(&self) -> u32 {
        self.kind().bit_count()
    }

    /// Whether every value converts to `f64` without loss.
    fn has_double_representation(&self) -> bool {
        self.kind().has_double_representation()
    }

    /// Whether every value converts to `i64` without loss.
    fn has_long_representation(&self) -> bool {
        self.kind().has_long_representation()
    }

    /// Write the minimum representable value into `dest`.
    ///
    /// Fails with [`DataTypeError::Unbounded`] when `is_bounded()` is false.
    fn lower_bound(&self, dest: &mut Self::Value) -> Result<(), DataTypeError>;

    /// Write the maximum representable value into `dest`.
    ///
    /// Fails with [`DataTypeError::Unbounded`] when `is_bounded()` is false.
    fn upper_bound(&self, dest: &mut Self::Value) -> Result<(), DataTypeError>;

    /// A new zero-valued cell owned by the caller.
    fn create_variable(&self) -> Self::Value {
        Self::Value::default()
    }

    /// Exact conversion into canonical form.
    ///
    /// Real kinds always produce a zero imaginary part. Fails with
    /// [`DataTypeError::NotFinite`] for NaN or infinite float parts.
    fn to_canonical(&self, src: &Self::Value, dest: &mut BigComplex) -> Result<(), DataTypeError>;

    /// Checked conversion from canonical form.
    ///
    /// Integer kinds truncate the real part toward zero. Real kinds ignore
    /// the imaginary part. Out-of-range values fail with
    /// [`DataTypeError::Overflow`].
    fn from_canonical(&self, src: &BigComplex, dest: &mut Self::Value)
    -> Result<(), DataTypeError>;

    /// Conversion from canonical form that clamps into
    /// [`NumericKind::canonical_range`] instead of failing.
    fn from_canonical_saturating(
        &self,
        src: &BigComplex,
        dest: &mut Self::Value,
    ) -> Result<(), DataTypeError> {
        let (lo, hi) = self.kind().canonical_range();
        self.from_canonical(&src.clamp(&lo, &hi), dest)
    }

    /// The value as `f64`.
    ///
    /// Fails with [`DataTypeError::PrecisionLoss`] for every input when
    /// `has_double_representation()` is false.
    fn as_double(&self, val: &Self::Value) -> Result<f64, DataTypeError>;

    /// The value as `i64`.
    ///
    /// Fails with [`DataTypeError::PrecisionLoss`] for every input when
    /// `has_long_representation()` is false.
    fn as_long(&self, val: &Self::Value) -> Result<i64, DataTypeError>;

    /// Narrowing write of an `f64`.
    fn set_double(&self, val: &mut Self::Value, v: f64) -> Result<(), DataTypeError>;

    /// Narrowing write of an `i64`.
    fn set_long(&self, val: &mut Self::Value, v: i64) -> Result<(), DataTypeError>;
}

/// Convert one value between two kinds through [`BigComplex`].
///
/// Uses the checked overflow policy.
pub fn cast_value<S: DataType, D: DataType>(
    src_type: &S,
    src: &S::Value,
    dst_type: &D,
    dst: &mut D::Value,
) -> Result<(), DataTypeError> {
    let mut tmp = BigComplex::zero();
    src_type.to_canonical(src, &mut tmp)?;
    dst_type.from_canonical(&tmp, dst)
}

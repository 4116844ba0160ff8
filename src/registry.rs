//! Runtime lookup of descriptors by kind or name.
//!
//! [`DataType`] has an associated storage type, so it cannot be used as a
//! trait object. [`ErasedDataType`] is the object-safe view over
//! [`Sample`], implemented for every descriptor whose storage is a
//! [`SampleValue`].

use crate::big_complex::BigComplex;
use crate::convert::Narrowing;
use crate::data_type::DataType;
use crate::error::DataTypeError;
use crate::float::{ComplexFloat32Type, ComplexFloat64Type, Float32Type, Float64Type};
use crate::integer::{
    BitType, Int8Type, Int16Type, Int32Type, Int64Type, UInt8Type, UInt12Type, UInt16Type,
    UInt32Type, UInt64Type,
};
use crate::kind::NumericKind;
use crate::sample::{Sample, SampleValue};

/// Object-safe view of a [`DataType`] operating on [`Sample`]s.
///
/// Every method taking a sample fails with
/// [`DataTypeError::KindMismatch`] if the sample's kind differs from
/// [`numeric_kind()`](ErasedDataType::numeric_kind). Names and flags come
/// from the kind itself, so the method names never collide with
/// [`DataType`]'s when both traits are in scope.
pub trait ErasedDataType: Send + Sync {
    /// The kind this descriptor handles.
    fn numeric_kind(&self) -> NumericKind;

    /// Zero-valued sample of this kind.
    fn create_sample(&self) -> Sample;

    /// Smallest representable value, or `Unbounded` for floating kinds.
    fn lower_bound_sample(&self) -> Result<Sample, DataTypeError>;

    /// Largest representable value, or `Unbounded` for floating kinds.
    fn upper_bound_sample(&self) -> Result<Sample, DataTypeError>;

    /// Exact canonical value of `src`.
    fn sample_to_canonical(&self, src: &Sample) -> Result<BigComplex, DataTypeError>;

    /// Narrow `src` into a sample of this kind.
    fn sample_from_canonical(
        &self,
        src: &BigComplex,
        narrowing: Narrowing,
    ) -> Result<Sample, DataTypeError>;

    /// [`DataType::as_double`] on a sample.
    fn sample_as_double(&self, src: &Sample) -> Result<f64, DataTypeError>;

    /// [`DataType::as_long`] on a sample.
    fn sample_as_long(&self, src: &Sample) -> Result<i64, DataTypeError>;
}

impl<T> ErasedDataType for T
where
    T: DataType,
    T::Value: SampleValue,
{
    fn numeric_kind(&self) -> NumericKind {
        self.kind()
    }

    fn create_sample(&self) -> Sample {
        self.create_variable().into_sample()
    }

    fn lower_bound_sample(&self) -> Result<Sample, DataTypeError> {
        let mut v = self.create_variable();
        self.lower_bound(&mut v)?;
        Ok(v.into_sample())
    }

    fn upper_bound_sample(&self) -> Result<Sample, DataTypeError> {
        let mut v = self.create_variable();
        self.upper_bound(&mut v)?;
        Ok(v.into_sample())
    }

    fn sample_to_canonical(&self, src: &Sample) -> Result<BigComplex, DataTypeError> {
        let v = unwrap_sample::<T>(self, src)?;
        let mut out = BigComplex::zero();
        self.to_canonical(&v, &mut out)?;
        Ok(out)
    }

    fn sample_from_canonical(
        &self,
        src: &BigComplex,
        narrowing: Narrowing,
    ) -> Result<Sample, DataTypeError> {
        let mut v = self.create_variable();
        match narrowing {
            Narrowing::Checked => self.from_canonical(src, &mut v)?,
            Narrowing::Saturating => self.from_canonical_saturating(src, &mut v)?,
        }
        Ok(v.into_sample())
    }

    fn sample_as_double(&self, src: &Sample) -> Result<f64, DataTypeError> {
        self.as_double(&unwrap_sample::<T>(self, src)?)
    }

    fn sample_as_long(&self, src: &Sample) -> Result<i64, DataTypeError> {
        self.as_long(&unwrap_sample::<T>(self, src)?)
    }
}

fn unwrap_sample<T>(t: &T, src: &Sample) -> Result<T::Value, DataTypeError>
where
    T: DataType,
    T::Value: SampleValue,
{
    T::Value::from_sample(src).ok_or(DataTypeError::KindMismatch {
        expected: t.kind(),
        actual: src.kind(),
    })
}

/// The descriptor for `kind`.
pub fn descriptor(kind: NumericKind) -> &'static dyn ErasedDataType {
    match kind {
        NumericKind::Bit => &BitType,
        NumericKind::Int8 => &Int8Type,
        NumericKind::UInt8 => &UInt8Type,
        NumericKind::UInt12 => &UInt12Type,
        NumericKind::Int16 => &Int16Type,
        NumericKind::UInt16 => &UInt16Type,
        NumericKind::Int32 => &Int32Type,
        NumericKind::UInt32 => &UInt32Type,
        NumericKind::Int64 => &Int64Type,
        NumericKind::UInt64 => &UInt64Type,
        NumericKind::Float32 => &Float32Type,
        NumericKind::Float64 => &Float64Type,
        NumericKind::ComplexFloat32 => &ComplexFloat32Type,
        NumericKind::ComplexFloat64 => &ComplexFloat64Type,
    }
}

/// All descriptors, in [`NumericKind::ALL`] order.
pub fn descriptors() -> impl Iterator<Item = &'static dyn ErasedDataType> {
    NumericKind::ALL.into_iter().map(descriptor)
}

/// Find a descriptor by its short or long name.
pub fn lookup(name: &str) -> Option<&'static dyn ErasedDataType> {
    let found = NumericKind::from_name(name).map(descriptor);
    if found.is_none() {
        log::trace!("no data type named {name:?}");
    }
    found
}

/// Convert `src` to kind `to` through [`BigComplex`].
pub fn cast(src: &Sample, to: NumericKind, narrowing: Narrowing) -> Result<Sample, DataTypeError> {
    let canonical = descriptor(src.kind()).sample_to_canonical(src)?;
    descriptor(to).sample_from_canonical(&canonical, narrowing)
}

//! Kind-tagged storage for code that picks the kind at runtime.

use num_complex::{Complex32, Complex64};

use crate::integer::U12;
use crate::kind::NumericKind;

/// One storage value of any [`NumericKind`].
///
/// The variant determines the kind. Use [`Sample::zero`] for the value
/// `create_variable()` would return.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Sample {
    Bit(bool),
    Int8(i8),
    UInt8(u8),
    UInt12(U12),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    ComplexFloat32(Complex32),
    ComplexFloat64(Complex64),
}

impl Sample {
    /// Kind of the stored value.
    pub fn kind(&self) -> NumericKind {
        match self {
            Sample::Bit(_) => NumericKind::Bit,
            Sample::Int8(_) => NumericKind::Int8,
            Sample::UInt8(_) => NumericKind::UInt8,
            Sample::UInt12(_) => NumericKind::UInt12,
            Sample::Int16(_) => NumericKind::Int16,
            Sample::UInt16(_) => NumericKind::UInt16,
            Sample::Int32(_) => NumericKind::Int32,
            Sample::UInt32(_) => NumericKind::UInt32,
            Sample::Int64(_) => NumericKind::Int64,
            Sample::UInt64(_) => NumericKind::UInt64,
            Sample::Float32(_) => NumericKind::Float32,
            Sample::Float64(_) => NumericKind::Float64,
            Sample::ComplexFloat32(_) => NumericKind::ComplexFloat32,
            Sample::ComplexFloat64(_) => NumericKind::ComplexFloat64,
        }
    }

    /// Zero of the given kind.
    pub fn zero(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Bit => Sample::Bit(false),
            NumericKind::Int8 => Sample::Int8(0),
            NumericKind::UInt8 => Sample::UInt8(0),
            NumericKind::UInt12 => Sample::UInt12(U12::MIN),
            NumericKind::Int16 => Sample::Int16(0),
            NumericKind::UInt16 => Sample::UInt16(0),
            NumericKind::Int32 => Sample::Int32(0),
            NumericKind::UInt32 => Sample::UInt32(0),
            NumericKind::Int64 => Sample::Int64(0),
            NumericKind::UInt64 => Sample::UInt64(0),
            NumericKind::Float32 => Sample::Float32(0.0),
            NumericKind::Float64 => Sample::Float64(0.0),
            NumericKind::ComplexFloat32 => Sample::ComplexFloat32(Complex32::new(0.0, 0.0)),
            NumericKind::ComplexFloat64 => Sample::ComplexFloat64(Complex64::new(0.0, 0.0)),
        }
    }
}

/// A storage type that maps to exactly one [`Sample`] variant.
pub trait SampleValue: Copy {
    /// Kind whose storage this is.
    const KIND: NumericKind;

    /// Wrap in the matching variant.
    fn into_sample(self) -> Sample;

    /// Unwrap, `None` if the sample holds another kind.
    fn from_sample(sample: &Sample) -> Option<Self>;
}

macro_rules! sample_value {
    ($ty:ty, $variant:ident) => {
        impl SampleValue for $ty {
            const KIND: NumericKind = NumericKind::$variant;

            fn into_sample(self) -> Sample {
                Sample::$variant(self)
            }

            fn from_sample(sample: &Sample) -> Option<Self> {
                match sample {
                    Sample::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Sample {
            fn from(value: $ty) -> Self {
                Sample::$variant(value)
            }
        }
    };
}

sample_value!(bool, Bit);
sample_value!(i8, Int8);
sample_value!(u8, UInt8);
sample_value!(U12, UInt12);
sample_value!(i16, Int16);
sample_value!(u16, UInt16);
sample_value!(i32, Int32);
sample_value!(u32, UInt32);
sample_value!(i64, Int64);
sample_value!(u64, UInt64);
sample_value!(f32, Float32);
sample_value!(f64, Float64);
sample_value!(Complex32, ComplexFloat32);
sample_value!(Complex64, ComplexFloat64);

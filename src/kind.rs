//! The closed set of supported pixel numeric kinds.
//!
//! [`NumericKind`] carries all static metadata about a kind: names, bit
//! width, signedness, and which lossless primitive representations exist.
//! Per-kind descriptors ([`DataType`](crate::DataType) implementors) derive
//! their predicates from here.

use alloc::format;
use alloc::string::String;

use num_bigint::BigInt;
use num_rational::BigRational;

/// One member of the closed set of pixel numeric representations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum NumericKind {
    /// 1-bit unsigned integer (`bool` storage).
    Bit = 0,
    /// 8-bit signed integer.
    Int8 = 1,
    /// 8-bit unsigned integer.
    UInt8 = 2,
    /// 12-bit unsigned integer ([`U12`](crate::U12) storage).
    UInt12 = 3,
    /// 16-bit signed integer.
    Int16 = 4,
    /// 16-bit unsigned integer.
    UInt16 = 5,
    /// 32-bit signed integer.
    Int32 = 6,
    /// 32-bit unsigned integer.
    UInt32 = 7,
    /// 64-bit signed integer.
    Int64 = 8,
    /// 64-bit unsigned integer.
    UInt64 = 9,
    /// IEEE 754 binary32.
    Float32 = 10,
    /// IEEE 754 binary64.
    Float64 = 11,
    /// Complex number with binary32 parts (64 bits total).
    ComplexFloat32 = 12,
    /// Complex number with binary64 parts (128 bits total).
    ComplexFloat64 = 13,
}

impl NumericKind {
    /// Every kind, in declaration order.
    pub const ALL: [NumericKind; 14] = [
        Self::Bit,
        Self::Int8,
        Self::UInt8,
        Self::UInt12,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
        Self::ComplexFloat32,
        Self::ComplexFloat64,
    ];

    /// Short display name, e.g. `"64-bit int"`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Bit => "1-bit uint",
            Self::Int8 => "8-bit int",
            Self::UInt8 => "8-bit uint",
            Self::UInt12 => "12-bit uint",
            Self::Int16 => "16-bit int",
            Self::UInt16 => "16-bit uint",
            Self::Int32 => "32-bit int",
            Self::UInt32 => "32-bit uint",
            Self::Int64 => "64-bit int",
            Self::UInt64 => "64-bit uint",
            Self::Float32 => "32-bit float",
            Self::Float64 => "64-bit float",
            Self::ComplexFloat32 => "64-bit complex",
            Self::ComplexFloat64 => "128-bit complex",
        }
    }

    /// Long display name, e.g. `"64-bit signed integer"`.
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Bit => "1-bit unsigned integer",
            Self::Int8 => "8-bit signed integer",
            Self::UInt8 => "8-bit unsigned integer",
            Self::UInt12 => "12-bit unsigned integer",
            Self::Int16 => "16-bit signed integer",
            Self::UInt16 => "16-bit unsigned integer",
            Self::Int32 => "32-bit signed integer",
            Self::UInt32 => "32-bit unsigned integer",
            Self::Int64 => "64-bit signed integer",
            Self::UInt64 => "64-bit unsigned integer",
            Self::Float32 => "32-bit signed float",
            Self::Float64 => "64-bit signed float",
            Self::ComplexFloat32 => "64-bit complex float",
            Self::ComplexFloat64 => "128-bit complex float",
        }
    }

    /// One-sentence human-readable description.
    pub fn description(self) -> String {
        if let Some((lo, hi)) = self.integer_range() {
            return format!("An integer data type ranging between {lo} and {hi}");
        }
        match self {
            Self::Float32 => String::from("A floating data type in IEEE 754 binary32 format"),
            Self::Float64 => String::from("A floating data type in IEEE 754 binary64 format"),
            Self::ComplexFloat32 => String::from(
                "A complex floating data type with IEEE 754 binary32 real and imaginary parts",
            ),
            _ => String::from(
                "A complex floating data type with IEEE 754 binary64 real and imaginary parts",
            ),
        }
    }

    /// Native bit width of one value (both parts for complex kinds).
    pub const fn bit_count(self) -> u32 {
        match self {
            Self::Bit => 1,
            Self::Int8 | Self::UInt8 => 8,
            Self::UInt12 => 12,
            Self::Int16 | Self::UInt16 => 16,
            Self::Int32 | Self::UInt32 | Self::Float32 => 32,
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::ComplexFloat32 => 64,
            Self::ComplexFloat64 => 128,
        }
    }

    /// Whether the kind can hold negative values.
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::Bit | Self::UInt8 | Self::UInt12 | Self::UInt16 | Self::UInt32 | Self::UInt64
        )
    }

    /// Whether the kind is floating point (real or complex).
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::Float32 | Self::Float64 | Self::ComplexFloat32 | Self::ComplexFloat64
        )
    }

    /// Whether the kind has an imaginary part.
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::ComplexFloat32 | Self::ComplexFloat64)
    }

    /// Whether the kind reports lower/upper bounds. Only integer kinds do.
    pub const fn is_bounded(self) -> bool {
        !self.is_float()
    }

    /// Whether every value converts to `f64` without loss.
    pub const fn has_double_representation(self) -> bool {
        !matches!(
            self,
            Self::Int64 | Self::UInt64 | Self::ComplexFloat32 | Self::ComplexFloat64
        )
    }

    /// Whether every value converts to `i64` without loss.
    pub const fn has_long_representation(self) -> bool {
        self.is_bounded() && !matches!(self, Self::UInt64)
    }

    /// Inclusive integer range for bounded kinds, `None` otherwise.
    pub const fn integer_range(self) -> Option<(i128, i128)> {
        match self {
            Self::Bit => Some((0, 1)),
            Self::Int8 => Some((i8::MIN as i128, i8::MAX as i128)),
            Self::UInt8 => Some((0, u8::MAX as i128)),
            Self::UInt12 => Some((0, 4095)),
            Self::Int16 => Some((i16::MIN as i128, i16::MAX as i128)),
            Self::UInt16 => Some((0, u16::MAX as i128)),
            Self::Int32 => Some((i32::MIN as i128, i32::MAX as i128)),
            Self::UInt32 => Some((0, u32::MAX as i128)),
            Self::Int64 => Some((i64::MIN as i128, i64::MAX as i128)),
            Self::UInt64 => Some((0, u64::MAX as i128)),
            Self::Float32 | Self::Float64 | Self::ComplexFloat32 | Self::ComplexFloat64 => None,
        }
    }

    /// Inclusive range of finite values as exact rationals.
    ///
    /// For integer kinds this is [`integer_range`](Self::integer_range).
    /// For float and complex kinds it is `-MAX ..= MAX` of the component
    /// format; those kinds still report `is_bounded() == false`, the range
    /// only drives saturating conversion.
    pub fn canonical_range(self) -> (BigRational, BigRational) {
        if let Some((lo, hi)) = self.integer_range() {
            return (
                BigRational::from_integer(BigInt::from(lo)),
                BigRational::from_integer(BigInt::from(hi)),
            );
        }
        // MAX = (2^p - 1) * 2^(emax + 1 - p)
        let max = match self {
            Self::Float32 | Self::ComplexFloat32 => BigInt::from((1u64 << 24) - 1) << 104usize,
            _ => BigInt::from((1u64 << 53) - 1) << 971usize,
        };
        let max = BigRational::from_integer(max);
        (-max.clone(), max)
    }

    /// Resolve a kind from its short or long name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.short_name() == name || k.long_name() == name)
    }
}

impl core::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.long_name())
    }
}

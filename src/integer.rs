//! Descriptors for the bounded integer kinds.

use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::big_complex::BigComplex;
use crate::data_type::DataType;
use crate::error::DataTypeError;
use crate::kind::NumericKind;

/// 12-bit unsigned storage cell (`0 ..= 4095`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct U12(u16);

impl U12 {
    /// Smallest value.
    pub const MIN: U12 = U12(0);
    /// Largest value.
    pub const MAX: U12 = U12(4095);

    /// Returns `None` if `value` exceeds 4095.
    pub const fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i128> for U12 {
    type Error = DataTypeError;

    fn try_from(value: i128) -> Result<Self, DataTypeError> {
        u16::try_from(value)
            .ok()
            .and_then(U12::new)
            .ok_or(DataTypeError::Overflow {
                kind: NumericKind::UInt12,
            })
    }
}

/// Whole part of a canonical real, as `i128` if it fits.
fn canonical_whole(kind: NumericKind, src: &BigComplex) -> Result<i128, DataTypeError> {
    src.real_trunc()
        .to_i128()
        .ok_or(DataTypeError::Overflow { kind })
}

/// Finite `f64` truncated toward zero.
fn f64_whole(kind: NumericKind, v: f64) -> Result<i128, DataTypeError> {
    if !v.is_finite() {
        return Err(DataTypeError::NotFinite { kind });
    }
    BigRational::from_float(v)
        .and_then(|r| r.trunc().to_integer().to_i128())
        .ok_or(DataTypeError::Overflow { kind })
}

fn precision_loss(kind: NumericKind, target: &'static str) -> DataTypeError {
    DataTypeError::PrecisionLoss { kind, target }
}

macro_rules! primitive_integer {
    ($(#[$meta:meta])* $name:ident, $prim:ty, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            const KIND: NumericKind = $kind;

            fn narrow(v: i128) -> Result<$prim, DataTypeError> {
                <$prim>::try_from(v).map_err(|_| DataTypeError::Overflow { kind: Self::KIND })
            }
        }

        impl DataType for $name {
            type Value = $prim;

            fn kind(&self) -> NumericKind {
                Self::KIND
            }

            fn lower_bound(&self, dest: &mut $prim) -> Result<(), DataTypeError> {
                *dest = <$prim>::MIN;
                Ok(())
            }

            fn upper_bound(&self, dest: &mut $prim) -> Result<(), DataTypeError> {
                *dest = <$prim>::MAX;
                Ok(())
            }

            fn to_canonical(&self, src: &$prim, dest: &mut BigComplex) -> Result<(), DataTypeError> {
                *dest = BigComplex::from_integer(*src);
                Ok(())
            }

            fn from_canonical(&self, src: &BigComplex, dest: &mut $prim) -> Result<(), DataTypeError> {
                *dest = Self::narrow(canonical_whole(Self::KIND, src)?)?;
                Ok(())
            }

            fn as_double(&self, val: &$prim) -> Result<f64, DataTypeError> {
                if !Self::KIND.has_double_representation() {
                    return Err(precision_loss(Self::KIND, "f64"));
                }
                // Exact for every kind with a double representation.
                Ok(*val as f64)
            }

            fn as_long(&self, val: &$prim) -> Result<i64, DataTypeError> {
                if !Self::KIND.has_long_representation() {
                    return Err(precision_loss(Self::KIND, "i64"));
                }
                i64::try_from(*val).map_err(|_| precision_loss(Self::KIND, "i64"))
            }

            fn set_double(&self, val: &mut $prim, v: f64) -> Result<(), DataTypeError> {
                *val = Self::narrow(f64_whole(Self::KIND, v)?)?;
                Ok(())
            }

            fn set_long(&self, val: &mut $prim, v: i64) -> Result<(), DataTypeError> {
                *val = Self::narrow(i128::from(v))?;
                Ok(())
            }
        }
    };
}

primitive_integer!(
    /// Descriptor for [`NumericKind::Int8`].
    Int8Type, i8, NumericKind::Int8
);
primitive_integer!(
    /// Descriptor for [`NumericKind::UInt8`].
    UInt8Type, u8, NumericKind::UInt8
);
primitive_integer!(
    /// Descriptor for [`NumericKind::Int16`].
    Int16Type, i16, NumericKind::Int16
);
primitive_integer!(
    /// Descriptor for [`NumericKind::UInt16`].
    UInt16Type, u16, NumericKind::UInt16
);
primitive_integer!(
    /// Descriptor for [`NumericKind::Int32`].
    Int32Type, i32, NumericKind::Int32
);
primitive_integer!(
    /// Descriptor for [`NumericKind::UInt32`].
    UInt32Type, u32, NumericKind::UInt32
);
primitive_integer!(
    /// Descriptor for [`NumericKind::Int64`].
    ///
    /// Every `i64` is exactly representable as an `i64` but not as an
    /// `f64`, so `as_double` always fails.
    Int64Type, i64, NumericKind::Int64
);
primitive_integer!(
    /// Descriptor for [`NumericKind::UInt64`].
    ///
    /// Neither `as_double` nor `as_long` is available.
    UInt64Type, u64, NumericKind::UInt64
);

/// Descriptor for [`NumericKind::Bit`]. Storage is `bool`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitType;

impl BitType {
    fn narrow(v: i128) -> Result<bool, DataTypeError> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DataTypeError::Overflow {
                kind: NumericKind::Bit,
            }),
        }
    }
}

impl DataType for BitType {
    type Value = bool;

    fn kind(&self) -> NumericKind {
        NumericKind::Bit
    }

    fn lower_bound(&self, dest: &mut bool) -> Result<(), DataTypeError> {
        *dest = false;
        Ok(())
    }

    fn upper_bound(&self, dest: &mut bool) -> Result<(), DataTypeError> {
        *dest = true;
        Ok(())
    }

    fn to_canonical(&self, src: &bool, dest: &mut BigComplex) -> Result<(), DataTypeError> {
        *dest = BigComplex::from_integer(u8::from(*src));
        Ok(())
    }

    fn from_canonical(&self, src: &BigComplex, dest: &mut bool) -> Result<(), DataTypeError> {
        *dest = Self::narrow(canonical_whole(NumericKind::Bit, src)?)?;
        Ok(())
    }

    fn as_double(&self, val: &bool) -> Result<f64, DataTypeError> {
        Ok(f64::from(u8::from(*val)))
    }

    fn as_long(&self, val: &bool) -> Result<i64, DataTypeError> {
        Ok(i64::from(*val))
    }

    fn set_double(&self, val: &mut bool, v: f64) -> Result<(), DataTypeError> {
        *val = Self::narrow(f64_whole(NumericKind::Bit, v)?)?;
        Ok(())
    }

    fn set_long(&self, val: &mut bool, v: i64) -> Result<(), DataTypeError> {
        *val = Self::narrow(i128::from(v))?;
        Ok(())
    }
}

/// Descriptor for [`NumericKind::UInt12`]. Storage is [`U12`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt12Type;

impl DataType for UInt12Type {
    type Value = U12;

    fn kind(&self) -> NumericKind {
        NumericKind::UInt12
    }

    fn lower_bound(&self, dest: &mut U12) -> Result<(), DataTypeError> {
        *dest = U12::MIN;
        Ok(())
    }

    fn upper_bound(&self, dest: &mut U12) -> Result<(), DataTypeError> {
        *dest = U12::MAX;
        Ok(())
    }

    fn to_canonical(&self, src: &U12, dest: &mut BigComplex) -> Result<(), DataTypeError> {
        *dest = BigComplex::from_integer(src.get());
        Ok(())
    }

    fn from_canonical(&self, src: &BigComplex, dest: &mut U12) -> Result<(), DataTypeError> {
        *dest = U12::try_from(canonical_whole(NumericKind::UInt12, src)?)?;
        Ok(())
    }

    fn as_double(&self, val: &U12) -> Result<f64, DataTypeError> {
        Ok(f64::from(val.get()))
    }

    fn as_long(&self, val: &U12) -> Result<i64, DataTypeError> {
        Ok(i64::from(val.get()))
    }

    fn set_double(&self, val: &mut U12, v: f64) -> Result<(), DataTypeError> {
        *val = U12::try_from(f64_whole(NumericKind::UInt12, v)?)?;
        Ok(())
    }

    fn set_long(&self, val: &mut U12, v: i64) -> Result<(), DataTypeError> {
        *val = U12::try_from(i128::from(v))?;
        Ok(())
    }
}

//! Descriptors for real and complex floating kinds.
//!
//! Floating kinds are unbounded: `lower_bound` / `upper_bound` fail. NaN and
//! infinities can be stored but have no canonical form. A finite value that
//! rounds to infinity on the way in is an overflow.

use num_complex::{Complex32, Complex64};

use crate::big_complex::BigComplex;
use crate::data_type::DataType;
use crate::error::DataTypeError;
use crate::kind::NumericKind;

fn unbounded(kind: NumericKind) -> DataTypeError {
    DataTypeError::Unbounded { kind }
}

fn finite_f64(kind: NumericKind, v: f64) -> Result<BigComplex, DataTypeError> {
    BigComplex::from_f64(v).ok_or(DataTypeError::NotFinite { kind })
}

/// Narrow `f64` to `f32`; finite inputs that land on infinity overflow.
fn narrow_f32(kind: NumericKind, v: f64) -> Result<f32, DataTypeError> {
    let n = v as f32;
    if v.is_finite() && !n.is_finite() {
        return Err(DataTypeError::Overflow { kind });
    }
    Ok(n)
}

fn real_f32(kind: NumericKind, src: &BigComplex) -> Result<f32, DataTypeError> {
    src.real_to_f32().ok_or(DataTypeError::Overflow { kind })
}

fn imag_f32(kind: NumericKind, src: &BigComplex) -> Result<f32, DataTypeError> {
    src.imag_to_f32().ok_or(DataTypeError::Overflow { kind })
}

fn real_part(kind: NumericKind, src: &BigComplex) -> Result<f64, DataTypeError> {
    src.real_to_f64().ok_or(DataTypeError::Overflow { kind })
}

fn imag_part(kind: NumericKind, src: &BigComplex) -> Result<f64, DataTypeError> {
    src.imag_to_f64().ok_or(DataTypeError::Overflow { kind })
}

/// Descriptor for [`NumericKind::Float32`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Float32Type;

impl DataType for Float32Type {
    type Value = f32;

    fn kind(&self) -> NumericKind {
        NumericKind::Float32
    }

    fn lower_bound(&self, _dest: &mut f32) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::Float32))
    }

    fn upper_bound(&self, _dest: &mut f32) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::Float32))
    }

    fn to_canonical(&self, src: &f32, dest: &mut BigComplex) -> Result<(), DataTypeError> {
        *dest = finite_f64(NumericKind::Float32, f64::from(*src))?;
        Ok(())
    }

    fn from_canonical(&self, src: &BigComplex, dest: &mut f32) -> Result<(), DataTypeError> {
        *dest = real_f32(NumericKind::Float32, src)?;
        Ok(())
    }

    fn as_double(&self, val: &f32) -> Result<f64, DataTypeError> {
        Ok(f64::from(*val))
    }

    fn as_long(&self, _val: &f32) -> Result<i64, DataTypeError> {
        Err(DataTypeError::PrecisionLoss {
            kind: NumericKind::Float32,
            target: "i64",
        })
    }

    fn set_double(&self, val: &mut f32, v: f64) -> Result<(), DataTypeError> {
        *val = narrow_f32(NumericKind::Float32, v)?;
        Ok(())
    }

    fn set_long(&self, val: &mut f32, v: i64) -> Result<(), DataTypeError> {
        *val = v as f32;
        Ok(())
    }
}

/// Descriptor for [`NumericKind::Float64`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Float64Type;

impl DataType for Float64Type {
    type Value = f64;

    fn kind(&self) -> NumericKind {
        NumericKind::Float64
    }

    fn lower_bound(&self, _dest: &mut f64) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::Float64))
    }

    fn upper_bound(&self, _dest: &mut f64) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::Float64))
    }

    fn to_canonical(&self, src: &f64, dest: &mut BigComplex) -> Result<(), DataTypeError> {
        *dest = finite_f64(NumericKind::Float64, *src)?;
        Ok(())
    }

    fn from_canonical(&self, src: &BigComplex, dest: &mut f64) -> Result<(), DataTypeError> {
        *dest = real_part(NumericKind::Float64, src)?;
        Ok(())
    }

    fn as_double(&self, val: &f64) -> Result<f64, DataTypeError> {
        Ok(*val)
    }

    fn as_long(&self, _val: &f64) -> Result<i64, DataTypeError> {
        Err(DataTypeError::PrecisionLoss {
            kind: NumericKind::Float64,
            target: "i64",
        })
    }

    fn set_double(&self, val: &mut f64, v: f64) -> Result<(), DataTypeError> {
        *val = v;
        Ok(())
    }

    fn set_long(&self, val: &mut f64, v: i64) -> Result<(), DataTypeError> {
        *val = v as f64;
        Ok(())
    }
}

/// Descriptor for [`NumericKind::ComplexFloat32`].
///
/// `set_double` / `set_long` write the real part and zero the imaginary
/// part. There is no `f64` or `i64` view of a complex value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexFloat32Type;

impl DataType for ComplexFloat32Type {
    type Value = Complex32;

    fn kind(&self) -> NumericKind {
        NumericKind::ComplexFloat32
    }

    fn lower_bound(&self, _dest: &mut Complex32) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::ComplexFloat32))
    }

    fn upper_bound(&self, _dest: &mut Complex32) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::ComplexFloat32))
    }

    fn to_canonical(&self, src: &Complex32, dest: &mut BigComplex) -> Result<(), DataTypeError> {
        *dest = BigComplex::from_f64_parts(f64::from(src.re), f64::from(src.im)).ok_or(
            DataTypeError::NotFinite {
                kind: NumericKind::ComplexFloat32,
            },
        )?;
        Ok(())
    }

    fn from_canonical(&self, src: &BigComplex, dest: &mut Complex32) -> Result<(), DataTypeError> {
        let kind = NumericKind::ComplexFloat32;
        *dest = Complex32::new(real_f32(kind, src)?, imag_f32(kind, src)?);
        Ok(())
    }

    fn as_double(&self, _val: &Complex32) -> Result<f64, DataTypeError> {
        Err(DataTypeError::PrecisionLoss {
            kind: NumericKind::ComplexFloat32,
            target: "f64",
        })
    }

    fn as_long(&self, _val: &Complex32) -> Result<i64, DataTypeError> {
        Err(DataTypeError::PrecisionLoss {
            kind: NumericKind::ComplexFloat32,
            target: "i64",
        })
    }

    fn set_double(&self, val: &mut Complex32, v: f64) -> Result<(), DataTypeError> {
        *val = Complex32::new(narrow_f32(NumericKind::ComplexFloat32, v)?, 0.0);
        Ok(())
    }

    fn set_long(&self, val: &mut Complex32, v: i64) -> Result<(), DataTypeError> {
        *val = Complex32::new(v as f32, 0.0);
        Ok(())
    }
}

/// Descriptor for [`NumericKind::ComplexFloat64`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexFloat64Type;

impl DataType for ComplexFloat64Type {
    type Value = Complex64;

    fn kind(&self) -> NumericKind {
        NumericKind::ComplexFloat64
    }

    fn lower_bound(&self, _dest: &mut Complex64) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::ComplexFloat64))
    }

    fn upper_bound(&self, _dest: &mut Complex64) -> Result<(), DataTypeError> {
        Err(unbounded(NumericKind::ComplexFloat64))
    }

    fn to_canonical(&self, src: &Complex64, dest: &mut BigComplex) -> Result<(), DataTypeError> {
        *dest = BigComplex::from_f64_parts(src.re, src.im).ok_or(DataTypeError::NotFinite {
            kind: NumericKind::ComplexFloat64,
        })?;
        Ok(())
    }

    fn from_canonical(&self, src: &BigComplex, dest: &mut Complex64) -> Result<(), DataTypeError> {
        let kind = NumericKind::ComplexFloat64;
        *dest = Complex64::new(real_part(kind, src)?, imag_part(kind, src)?);
        Ok(())
    }

    fn as_double(&self, _val: &Complex64) -> Result<f64, DataTypeError> {
        Err(DataTypeError::PrecisionLoss {
            kind: NumericKind::ComplexFloat64,
            target: "f64",
        })
    }

    fn as_long(&self, _val: &Complex64) -> Result<i64, DataTypeError> {
        Err(DataTypeError::PrecisionLoss {
            kind: NumericKind::ComplexFloat64,
            target: "i64",
        })
    }

    fn set_double(&self, val: &mut Complex64, v: f64) -> Result<(), DataTypeError> {
        *val = Complex64::new(v, 0.0);
        Ok(())
    }

    fn set_long(&self, val: &mut Complex64, v: i64) -> Result<(), DataTypeError> {
        *val = Complex64::new(v as f64, 0.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    #[test]
    fn float_kinds_are_unbounded() {
        let mut f = 1.5f32;
        assert_eq!(
            Float32Type.lower_bound(&mut f),
            Err(DataTypeError::Unbounded {
                kind: NumericKind::Float32
            })
        );
        assert_eq!(f, 1.5);
        let mut d = 0.0f64;
        assert!(Float64Type.upper_bound(&mut d).is_err());
        let mut c = Complex64::new(1.0, 1.0);
        assert!(ComplexFloat64Type.lower_bound(&mut c).is_err());
        assert!(!ComplexFloat64Type.is_bounded());
    }

    #[test]
    fn float32_round_trip_is_exact() {
        for v in [0.0f32, -0.0, 1.0e-45, 0.1, f32::MAX, f32::MIN, 3.25] {
            let mut c = BigComplex::zero();
            Float32Type.to_canonical(&v, &mut c).unwrap();
            assert!(c.is_real());
            let mut back = 7.0f32;
            Float32Type.from_canonical(&c, &mut back).unwrap();
            assert_eq!(back, v);
        }
    }

    #[test]
    fn float32_overflow_from_canonical() {
        let mut f = 2.0f32;
        let big = BigComplex::from_f64(1.0e39).unwrap();
        assert_eq!(
            Float32Type.from_canonical(&big, &mut f),
            Err(DataTypeError::Overflow {
                kind: NumericKind::Float32
            })
        );
        assert_eq!(f, 2.0);
        Float32Type.from_canonical_saturating(&big, &mut f).unwrap();
        assert_eq!(f, f32::MAX);
    }

    #[test]
    fn float32_from_canonical_rounds_once() {
        // Rounding to f64 first drops the trailing 1 and leaves an exact
        // f32 midpoint, which then ties down to 2^60.
        let x: i64 = (1 << 60) + (1 << 36) + 1;
        let mut f = 0.0f32;
        Float32Type.from_canonical(&BigComplex::from(x), &mut f).unwrap();
        assert_eq!(f, x as f32);
        assert_ne!(f, (x as f64) as f32);

        let third = BigComplex::from_real(BigRational::new(BigInt::from(1), BigInt::from(3)));
        Float32Type.from_canonical(&third, &mut f).unwrap();
        assert_eq!(f, 1.0f32 / 3.0);
    }

    #[test]
    fn float32_overflow_edge() {
        // Values below MAX + half an ulp round to MAX; the tie rounds to even,
        // which is infinity.
        let max = BigRational::from_integer(BigInt::from((1u64 << 24) - 1) << 104usize);
        let half_ulp = BigRational::from_integer(BigInt::from(1u8) << 103usize);
        let one = BigRational::from_integer(BigInt::from(1u8));

        let mut f = 0.0f32;
        let below = BigComplex::from_real(&max + &half_ulp - &one);
        Float32Type.from_canonical(&below, &mut f).unwrap();
        assert_eq!(f, f32::MAX);

        let mut f = 1.0f32;
        let tie = BigComplex::from_real(&max + &half_ulp);
        assert_eq!(
            Float32Type.from_canonical(&tie, &mut f),
            Err(DataTypeError::Overflow {
                kind: NumericKind::Float32
            })
        );
        assert_eq!(f, 1.0);

        let re = BigRational::from_integer(BigInt::from(1));
        let mut v = Complex32::new(2.0, 2.0);
        let parts = BigComplex::new(re.clone(), -(&max + &half_ulp - &one));
        ComplexFloat32Type.from_canonical(&parts, &mut v).unwrap();
        assert_eq!(v, Complex32::new(1.0, f32::MIN));
        let parts = BigComplex::new(re, -(&max + &half_ulp));
        assert!(ComplexFloat32Type.from_canonical(&parts, &mut v).is_err());
        assert_eq!(v, Complex32::new(1.0, f32::MIN));
    }

    #[test]
    fn float32_from_canonical_subnormal() {
        let tiny = f32::from_bits(1);
        let mut f = 1.0f32;
        let c = BigComplex::from_f64(f64::from(tiny) * 0.75).unwrap();
        Float32Type.from_canonical(&c, &mut f).unwrap();
        assert_eq!(f, tiny);
        let c = BigComplex::from_f64(f64::from(tiny) * 0.5).unwrap();
        Float32Type.from_canonical(&c, &mut f).unwrap();
        assert_eq!(f, 0.0);
    }

    #[test]
    fn float64_overflow_from_canonical() {
        let huge = BigRational::from_integer(BigInt::from(1u8) << 1024usize);
        let mut d = 0.0;
        assert!(
            Float64Type
                .from_canonical(&BigComplex::from_real(huge.clone()), &mut d)
                .is_err()
        );
        Float64Type
            .from_canonical_saturating(&BigComplex::from_real(-huge), &mut d)
            .unwrap();
        assert_eq!(d, f64::MIN);
    }

    #[test]
    fn non_finite_values_have_no_canonical_form() {
        let mut c = BigComplex::zero();
        assert_eq!(
            Float64Type.to_canonical(&f64::NAN, &mut c),
            Err(DataTypeError::NotFinite {
                kind: NumericKind::Float64
            })
        );
        assert!(
            ComplexFloat32Type
                .to_canonical(&Complex32::new(0.0, f32::INFINITY), &mut c)
                .is_err()
        );
    }

    #[test]
    fn set_double_stores_non_finite() {
        let mut f = 0.0f32;
        Float32Type.set_double(&mut f, f64::INFINITY).unwrap();
        assert_eq!(f, f32::INFINITY);
        Float32Type.set_double(&mut f, f64::NAN).unwrap();
        assert!(f.is_nan());
        assert!(Float32Type.set_double(&mut f, 1.0e300).is_err());
        assert!(f.is_nan());
    }

    #[test]
    fn set_long_rounds_to_nearest() {
        let mut f = 0.0f32;
        Float32Type.set_long(&mut f, 16_777_217).unwrap();
        assert_eq!(f, 16_777_216.0);
        let mut d = 0.0;
        Float64Type.set_long(&mut d, i64::MAX).unwrap();
        assert_eq!(d, 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn float_as_long_is_rejected() {
        assert!(Float32Type.as_long(&1.0).is_err());
        assert!(Float64Type.as_long(&1.0).is_err());
        assert_eq!(Float64Type.as_double(&-2.5), Ok(-2.5));
    }

    #[test]
    fn complex_round_trip() {
        let v = Complex32::new(1.5, -0.25);
        let mut c = BigComplex::zero();
        ComplexFloat32Type.to_canonical(&v, &mut c).unwrap();
        assert!(!c.is_real());
        let mut back = Complex32::default();
        ComplexFloat32Type.from_canonical(&c, &mut back).unwrap();
        assert_eq!(back, v);

        let mut wide = Complex64::default();
        ComplexFloat64Type.from_canonical(&c, &mut wide).unwrap();
        assert_eq!(wide, Complex64::new(1.5, -0.25));
    }

    #[test]
    fn complex_imaginary_overflow() {
        let mut v = Complex32::new(1.0, 1.0);
        let c = BigComplex::from_f64_parts(0.0, -1.0e40).unwrap();
        assert!(ComplexFloat32Type.from_canonical(&c, &mut v).is_err());
        assert_eq!(v, Complex32::new(1.0, 1.0));
        ComplexFloat32Type.from_canonical_saturating(&c, &mut v).unwrap();
        assert_eq!(v, Complex32::new(0.0, f32::MIN));
    }

    #[test]
    fn complex_set_writes_real_part() {
        let mut v = Complex64::new(3.0, 4.0);
        ComplexFloat64Type.set_double(&mut v, 2.5).unwrap();
        assert_eq!(v, Complex64::new(2.5, 0.0));
        ComplexFloat64Type.set_long(&mut v, -3).unwrap();
        assert_eq!(v, Complex64::new(-3.0, 0.0));
        assert!(ComplexFloat64Type.as_double(&v).is_err());
        assert!(ComplexFloat64Type.as_long(&v).is_err());
    }

    #[test]
    fn create_variable_is_zero() {
        assert_eq!(Float32Type.create_variable(), 0.0);
        assert_eq!(Float64Type.create_variable(), 0.0);
        assert_eq!(ComplexFloat32Type.create_variable(), Complex32::new(0.0, 0.0));
        assert_eq!(ComplexFloat64Type.create_variable(), Complex64::new(0.0, 0.0));
    }
}

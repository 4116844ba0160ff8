//! Arbitrary-precision complex interchange value.
//!
//! [`BigComplex`] is the canonical form every descriptor converts to and
//! from, so any two kinds convert through it without pairwise code. Both
//! parts are exact rationals: integers of any width and every finite
//! IEEE 754 value are represented without rounding.

use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Exact complex number with rational real and imaginary parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigComplex {
    real: BigRational,
    imag: BigRational,
}

impl Default for BigComplex {
    fn default() -> Self {
        Self::zero()
    }
}

impl BigComplex {
    /// `0 + 0i`.
    pub fn zero() -> Self {
        Self {
            real: BigRational::zero(),
            imag: BigRational::zero(),
        }
    }

    /// Build from both parts.
    pub fn new(real: BigRational, imag: BigRational) -> Self {
        Self { real, imag }
    }

    /// Real value with a zero imaginary part.
    pub fn from_real(real: BigRational) -> Self {
        Self {
            real,
            imag: BigRational::zero(),
        }
    }

    /// Exact value of an integer.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::from_real(BigRational::from_integer(value.into()))
    }

    /// Exact value of a finite `f64`. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Some(Self::from_real(rational_from_f64(value)?))
    }

    /// Exact value of a pair of finite `f64` parts.
    pub fn from_f64_parts(real: f64, imag: f64) -> Option<Self> {
        Some(Self {
            real: rational_from_f64(real)?,
            imag: rational_from_f64(imag)?,
        })
    }

    /// Real part.
    pub fn real(&self) -> &BigRational {
        &self.real
    }

    /// Imaginary part.
    pub fn imag(&self) -> &BigRational {
        &self.imag
    }

    /// Split into `(real, imag)`.
    pub fn into_parts(self) -> (BigRational, BigRational) {
        (self.real, self.imag)
    }

    /// Whether the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.imag.is_zero()
    }

    /// Whether both parts are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }

    /// Complex conjugate.
    pub fn conj(&self) -> Self {
        Self {
            real: self.real.clone(),
            imag: -self.imag.clone(),
        }
    }

    /// `re² + im²`, exact.
    pub fn norm_sqr(&self) -> BigRational {
        &self.real * &self.real + &self.imag * &self.imag
    }

    /// Division, `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let denom = rhs.norm_sqr();
        if denom.is_zero() {
            return None;
        }
        let num = self * &rhs.conj();
        Some(Self {
            real: num.real / &denom,
            imag: num.imag / &denom,
        })
    }

    /// Real part truncated toward zero.
    pub fn real_trunc(&self) -> BigInt {
        self.real.trunc().to_integer()
    }

    /// Imaginary part truncated toward zero.
    pub fn imag_trunc(&self) -> BigInt {
        self.imag.trunc().to_integer()
    }

    /// Real part rounded to the nearest `f64`, `None` if it overflows.
    pub fn real_to_f64(&self) -> Option<f64> {
        rational_to_f64(&self.real)
    }

    /// Imaginary part rounded to the nearest `f64`, `None` if it overflows.
    pub fn imag_to_f64(&self) -> Option<f64> {
        rational_to_f64(&self.imag)
    }

    /// Real part rounded to the nearest `f32` (ties to even), `None` if it
    /// overflows.
    pub fn real_to_f32(&self) -> Option<f32> {
        rational_to_f32(&self.real)
    }

    /// Imaginary part rounded to the nearest `f32` (ties to even), `None` if
    /// it overflows.
    pub fn imag_to_f32(&self) -> Option<f32> {
        rational_to_f32(&self.imag)
    }

    /// Clamp each part into `lo ..= hi`.
    pub fn clamp(&self, lo: &BigRational, hi: &BigRational) -> Self {
        Self {
            real: clamp_rational(&self.real, lo, hi),
            imag: clamp_rational(&self.imag, lo, hi),
        }
    }
}

fn rational_from_f64(value: f64) -> Option<BigRational> {
    if !value.is_finite() {
        return None;
    }
    BigRational::from_float(value)
}

fn rational_to_f64(value: &BigRational) -> Option<f64> {
    value.to_f64().filter(|f| f.is_finite())
}

/// Single correctly rounded step from the exact value to `f32`.
///
/// The magnitude is scaled by `2^-exp` so the quotient carries 24
/// significant bits (fewer for subnormals), rounded half to even on the
/// remainder, and rebuilt as `q * 2^exp`.
fn rational_to_f32(value: &BigRational) -> Option<f32> {
    const PRECISION: u64 = 24;
    // Exponent of the least significant bit of the smallest subnormal.
    const MIN_EXP: i64 = -149;
    // Every finite f32 is below 2^128.
    const MAX_EXP: i64 = 128;

    if value.is_zero() {
        return Some(0.0);
    }
    let negative = value.is_negative();
    let numer = value.numer().abs();
    let denom = value.denom().abs();

    let k = numer.bits() as i64 - denom.bits() as i64;
    let mut exp = (k - PRECISION as i64).max(MIN_EXP);
    let (mut q, mut r, mut div) = divide_scaled(&numer, &denom, exp);
    if q.bits() > PRECISION {
        exp += 1;
        (q, r, div) = divide_scaled(&numer, &denom, exp);
    }

    let twice = &r << 1usize;
    let odd = !(&q % 2u32).is_zero();
    if twice > div || (twice == div && odd) {
        q += 1u32;
    }
    if q.bits() as i64 + exp > MAX_EXP {
        return None;
    }

    // q <= 2^24 and -149 <= exp <= 104: both factors and the product are
    // exact in f64, and the product is an f32 value.
    let mantissa = f64::from(q.to_u32()?);
    let scale = f64::from_bits(((exp + 1023) as u64) << 52);
    let magnitude = (mantissa * scale) as f32;
    Some(if negative { -magnitude } else { magnitude })
}

/// `floor(numer / (denom * 2^exp))` with its remainder and divisor.
fn divide_scaled(numer: &BigInt, denom: &BigInt, exp: i64) -> (BigInt, BigInt, BigInt) {
    let (num, div) = if exp <= 0 {
        (numer << (-exp) as usize, denom.clone())
    } else {
        (numer.clone(), denom << exp as usize)
    };
    (&num / &div, &num % &div, div)
}

fn clamp_rational(value: &BigRational, lo: &BigRational, hi: &BigRational) -> BigRational {
    if value < lo {
        lo.clone()
    } else if value > hi {
        hi.clone()
    } else {
        value.clone()
    }
}

impl From<i64> for BigComplex {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for BigComplex {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for BigComplex {
    fn from(value: BigRational) -> Self {
        Self::from_real(value)
    }
}

impl Add<&BigComplex> for &BigComplex {
    type Output = BigComplex;

    fn add(self, rhs: &BigComplex) -> BigComplex {
        BigComplex {
            real: &self.real + &rhs.real,
            imag: &self.imag + &rhs.imag,
        }
    }
}

impl Sub<&BigComplex> for &BigComplex {
    type Output = BigComplex;

    fn sub(self, rhs: &BigComplex) -> BigComplex {
        BigComplex {
            real: &self.real - &rhs.real,
            imag: &self.imag - &rhs.imag,
        }
    }
}

impl Mul<&BigComplex> for &BigComplex {
    type Output = BigComplex;

    fn mul(self, rhs: &BigComplex) -> BigComplex {
        BigComplex {
            real: &self.real * &rhs.real - &self.imag * &rhs.imag,
            imag: &self.real * &rhs.imag + &self.imag * &rhs.real,
        }
    }
}

impl Add for BigComplex {
    type Output = BigComplex;

    fn add(self, rhs: BigComplex) -> BigComplex {
        &self + &rhs
    }
}

impl Sub for BigComplex {
    type Output = BigComplex;

    fn sub(self, rhs: BigComplex) -> BigComplex {
        &self - &rhs
    }
}

impl Mul for BigComplex {
    type Output = BigComplex;

    fn mul(self, rhs: BigComplex) -> BigComplex {
        &self * &rhs
    }
}

impl Neg for BigComplex {
    type Output = BigComplex;

    fn neg(self) -> BigComplex {
        BigComplex {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl core::fmt::Display for BigComplex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.imag < BigRational::zero() {
            write!(f, "{}-{}i", self.real, -self.imag.clone())
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn default_is_zero() {
        let z = BigComplex::default();
        assert!(z.is_zero());
        assert!(z.is_real());
    }

    #[test]
    fn integers_are_exact() {
        let v = BigComplex::from(i64::MIN);
        assert_eq!(v.real_trunc(), BigInt::from(i64::MIN));
        let v = BigComplex::from(u64::MAX);
        assert_eq!(v.real_trunc(), BigInt::from(u64::MAX));
        assert!(v.is_real());
    }

    #[test]
    fn floats_are_exact() {
        let v = BigComplex::from_f64(0.1).unwrap();
        // 0.1 is not 1/10 in binary.
        assert_ne!(v.real(), &rat(1, 10));
        assert_eq!(v.real_to_f64(), Some(0.1));
        assert_eq!(BigComplex::from_f64(-2.5).unwrap().real(), &rat(-5, 2));
    }

    #[test]
    fn non_finite_floats_rejected() {
        assert!(BigComplex::from_f64(f64::NAN).is_none());
        assert!(BigComplex::from_f64(f64::INFINITY).is_none());
        assert!(BigComplex::from_f64_parts(1.0, f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn truncation_is_toward_zero() {
        let v = BigComplex::new(rat(-7, 2), rat(7, 2));
        assert_eq!(v.real_trunc(), BigInt::from(-3));
        assert_eq!(v.imag_trunc(), BigInt::from(3));
    }

    #[test]
    fn to_f64_overflow_is_none() {
        let huge = BigRational::from_integer(BigInt::from(1u8) << 1100usize);
        assert_eq!(BigComplex::from_real(huge).real_to_f64(), None);
    }

    #[test]
    fn to_f32_rounds_once() {
        // 2^60 + 2^36 + 1 sits just above an f32 midpoint; rounding through
        // f64 first lands on the midpoint and ties down.
        let x: i64 = (1 << 60) + (1 << 36) + 1;
        let v = BigComplex::from(x);
        assert_eq!(v.real_to_f32(), Some(x as f32));
        assert_eq!(v.real_to_f32(), Some(1_152_921_642_045_800_448.0));
        assert_eq!((-v).real_to_f32(), Some(-(x as f32)));
    }

    #[test]
    fn to_f32_ties_to_even() {
        // 2^24 + 1 is halfway between 2^24 and 2^24 + 2.
        assert_eq!(BigComplex::from(16_777_217i64).real_to_f32(), Some(16_777_216.0));
        // 2^24 + 3 is halfway between 2^24 + 2 and 2^24 + 4.
        assert_eq!(BigComplex::from(16_777_219i64).real_to_f32(), Some(16_777_220.0));
        assert_eq!(
            BigComplex::from_real(rat(1, 3)).real_to_f32(),
            Some(1.0f32 / 3.0)
        );
        assert_eq!(
            BigComplex::from_real(rat(-2, 3)).imag_to_f32(),
            Some(0.0)
        );
    }

    #[test]
    fn to_f32_subnormals() {
        let tiny = f32::from_bits(1);
        let v = BigComplex::from_f64(f64::from(tiny)).unwrap();
        assert_eq!(v.real_to_f32(), Some(tiny));
        // A quarter of the smallest subnormal rounds to zero, three quarters up.
        let quarter = BigComplex::from_f64(f64::from(tiny) / 4.0).unwrap();
        assert_eq!(quarter.real_to_f32(), Some(0.0));
        let three_quarters = BigComplex::from_f64(f64::from(tiny) * 0.75).unwrap();
        assert_eq!(three_quarters.real_to_f32(), Some(tiny));
        let min_normal = BigComplex::from_f64(f64::from(f32::MIN_POSITIVE)).unwrap();
        assert_eq!(min_normal.real_to_f32(), Some(f32::MIN_POSITIVE));
    }

    #[test]
    fn to_f32_overflow_edge() {
        let max = BigRational::from_integer(BigInt::from((1u64 << 24) - 1) << 104usize);
        let half_ulp = BigRational::from_integer(BigInt::from(1u8) << 103usize);
        let one = BigRational::from_integer(BigInt::from(1u8));

        let below = BigComplex::from_real(&max + &half_ulp - &one);
        assert_eq!(below.real_to_f32(), Some(f32::MAX));
        let tie = BigComplex::from_real(&max + &half_ulp);
        assert_eq!(tie.real_to_f32(), None);
        assert_eq!((-below).real_to_f32(), Some(f32::MIN));
    }

    #[test]
    fn arithmetic() {
        let a = BigComplex::new(rat(1, 1), rat(2, 1));
        let b = BigComplex::new(rat(3, 1), rat(-1, 1));
        assert_eq!(&a + &b, BigComplex::new(rat(4, 1), rat(1, 1)));
        assert_eq!(&a - &b, BigComplex::new(rat(-2, 1), rat(3, 1)));
        // (1+2i)(3-i) = 3 - i + 6i + 2 = 5 + 5i
        assert_eq!(&a * &b, BigComplex::new(rat(5, 1), rat(5, 1)));
        assert_eq!(-a.clone(), BigComplex::new(rat(-1, 1), rat(-2, 1)));
        assert_eq!(a.norm_sqr(), rat(5, 1));
    }

    #[test]
    fn division() {
        let a = BigComplex::new(rat(5, 1), rat(5, 1));
        let b = BigComplex::new(rat(3, 1), rat(-1, 1));
        assert_eq!(
            a.checked_div(&b),
            Some(BigComplex::new(rat(1, 1), rat(2, 1)))
        );
        assert_eq!(a.checked_div(&BigComplex::zero()), None);
    }

    #[test]
    fn clamp_both_parts() {
        let v = BigComplex::new(rat(300, 1), rat(-300, 1));
        let c = v.clamp(&rat(0, 1), &rat(255, 1));
        assert_eq!(c, BigComplex::new(rat(255, 1), rat(0, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", BigComplex::new(rat(3, 2), rat(-1, 1))),
            "3/2-1i"
        );
        assert_eq!(format!("{}", BigComplex::from(7i64)), "7+0i");
    }
}

//! Numeric data type descriptors for pixel values.
//!
//! Each supported pixel representation is a [`NumericKind`]. A per-kind
//! descriptor implementing [`DataType`] reports range and precision metadata
//! and converts between the kind's native storage and [`BigComplex`], an
//! exact complex value that serves as the interchange format between any two
//! kinds.
//!
//! - [`DataType`] — the per-kind contract, implemented by [`Int64Type`],
//!   [`UInt8Type`], [`Float32Type`], [`ComplexFloat64Type`], ...
//! - [`BigComplex`] — exact rational real + imaginary value
//! - [`descriptor`] / [`lookup`] / [`cast`] — runtime dispatch over [`Sample`]
//! - [`convert_slice`] — bulk conversion with cooperative cancellation
//!
//! Narrowing writes are checked: out-of-range values fail with
//! [`DataTypeError::Overflow`] unless saturation is requested explicitly.
//!
//! ```
//! use zendatatypes::{BigComplex, DataType, DataTypeError, Int64Type, UInt8Type};
//!
//! let mut v = Int64Type.create_variable();
//! Int64Type.set_long(&mut v, 300).unwrap();
//! assert!(matches!(Int64Type.as_double(&v), Err(DataTypeError::PrecisionLoss { .. })));
//!
//! let mut c = BigComplex::zero();
//! Int64Type.to_canonical(&v, &mut c).unwrap();
//!
//! let mut byte = UInt8Type.create_variable();
//! assert!(UInt8Type.from_canonical(&c, &mut byte).is_err());
//! UInt8Type.from_canonical_saturating(&c, &mut byte).unwrap();
//! assert_eq!(byte, 255);
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod big_complex;
mod convert;
mod data_type;
mod error;
mod float;
mod integer;
mod kind;
mod registry;
mod sample;

pub use big_complex::BigComplex;
pub use convert::{ConvertError, ConvertOptions, ConvertReport, Narrowing, convert_slice};
pub use data_type::{DataType, cast_value};
pub use error::DataTypeError;
pub use float::{ComplexFloat32Type, ComplexFloat64Type, Float32Type, Float64Type};
pub use integer::{
    BitType, Int8Type, Int16Type, Int32Type, Int64Type, U12, UInt8Type, UInt12Type, UInt16Type,
    UInt32Type, UInt64Type,
};
pub use kind::NumericKind;
pub use registry::{ErasedDataType, cast, descriptor, descriptors, lookup};
pub use sample::{Sample, SampleValue};

// Re-exports for callers of `convert_slice` and users of canonical values.
pub use enough::{Stop, StopReason, Unstoppable};
pub use num_bigint::BigInt;
pub use num_complex::{Complex32, Complex64};
pub use num_rational::BigRational;

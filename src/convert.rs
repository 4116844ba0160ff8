//! Bulk conversion between pixel kinds.
//!
//! [`convert_slice`] runs every element through [`BigComplex`], so any pair
//! of kinds converts without pairwise code. Long conversions check a
//! [`Stop`] token every [`ConvertOptions::stop_interval`] elements.

use enough::{Stop, StopReason};

use crate::big_complex::BigComplex;
use crate::data_type::DataType;
use crate::error::DataTypeError;

/// What to do when a value does not fit the destination kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Narrowing {
    /// Fail with [`DataTypeError::Overflow`].
    #[default]
    Checked,
    /// Clamp into [`NumericKind::canonical_range`](crate::NumericKind::canonical_range).
    Saturating,
}

/// Options for [`convert_slice`].
///
/// # Example
///
/// ```
/// use zendatatypes::{ConvertOptions, Narrowing};
///
/// let options = ConvertOptions::new()
///     .with_narrowing(Narrowing::Saturating)
///     .with_stop_interval(1024);
/// assert_eq!(options.narrowing(), Narrowing::Saturating);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ConvertOptions {
    narrowing: Narrowing,
    stop_interval: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertOptions {
    /// Elements converted between stop checks unless overridden.
    pub const DEFAULT_STOP_INTERVAL: usize = 4096;

    /// Checked narrowing, stop checked every 4096 elements.
    pub const fn new() -> Self {
        Self {
            narrowing: Narrowing::Checked,
            stop_interval: Self::DEFAULT_STOP_INTERVAL,
        }
    }

    pub const fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Set how many elements are converted between stop checks.
    /// Zero is treated as one.
    pub const fn with_stop_interval(mut self, elements: usize) -> Self {
        self.stop_interval = if elements == 0 { 1 } else { elements };
        self
    }

    pub const fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    pub const fn stop_interval(&self) -> usize {
        self.stop_interval
    }
}

/// Outcome of a successful [`convert_slice`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertReport {
    /// Elements written.
    pub converted: usize,
    /// Elements that were clamped (only with [`Narrowing::Saturating`]).
    pub saturated: usize,
}

/// A bulk conversion failed.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// Source and destination slices differ in length.
    LengthMismatch {
        /// Source length.
        src: usize,
        /// Destination length.
        dst: usize,
    },
    /// Element `index` could not be converted. Elements before it have
    /// been written.
    Element {
        /// Position in the slice.
        index: usize,
        /// What went wrong.
        source: DataTypeError,
    },
    /// The stop token requested cancellation.
    Stopped(StopReason),
}

impl From<StopReason> for ConvertError {
    fn from(reason: StopReason) -> Self {
        Self::Stopped(reason)
    }
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch { src, dst } => {
                write!(f, "source has {src} elements but destination has {dst}")
            }
            Self::Element { index, source } => write!(f, "element {index}: {source}"),
            Self::Stopped(reason) => write!(f, "conversion stopped: {reason:?}"),
        }
    }
}

impl core::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Element { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convert every element of `src` into `dst`.
///
/// Both slices must have the same length. With [`Narrowing::Checked`] the
/// first out-of-range element stops the conversion with
/// [`ConvertError::Element`]. With [`Narrowing::Saturating`] out-of-range
/// elements are clamped and counted in [`ConvertReport::saturated`];
/// non-finite sources still fail.
pub fn convert_slice<S: DataType, D: DataType>(
    src_type: &S,
    src: &[S::Value],
    dst_type: &D,
    dst: &mut [D::Value],
    options: &ConvertOptions,
    stop: &dyn Stop,
) -> Result<ConvertReport, ConvertError> {
    if src.len() != dst.len() {
        return Err(ConvertError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    log::trace!(
        "converting {} elements from {} to {}",
        src.len(),
        src_type.kind(),
        dst_type.kind()
    );

    let mut report = ConvertReport::default();
    let mut canonical = BigComplex::zero();
    for (index, (s, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
        if index % options.stop_interval == 0 {
            stop.check()?;
        }
        let element = |source| ConvertError::Element { index, source };
        src_type.to_canonical(s, &mut canonical).map_err(element)?;
        match dst_type.from_canonical(&canonical, d) {
            Ok(()) => {}
            Err(DataTypeError::Overflow { .. }) if options.narrowing == Narrowing::Saturating => {
                dst_type
                    .from_canonical_saturating(&canonical, d)
                    .map_err(element)?;
                report.saturated += 1;
            }
            Err(e) => return Err(element(e)),
        }
        report.converted += 1;
    }

    if report.saturated > 0 {
        log::debug!(
            "saturated {} of {} elements converting to {}",
            report.saturated,
            report.converted,
            dst_type.kind()
        );
    }
    Ok(report)
}

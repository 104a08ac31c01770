//! Conversion between time (milliseconds, seconds) and positions on the sample grid.
//!
//! ## Truncation
//! Converting a time to a number of samples truncates toward zero, it does not round.
//! Offsets computed from the same base therefore never overshoot the nominal sample.
//! Callers who need round-to-nearest must adjust the time before converting.
//!
//! Converting samples back to time keeps full precision, so a round trip
//! `milliseconds -> samples -> milliseconds` is lossy by at most one sample period.
use num_traits::ToPrimitive;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A position on the sample grid of a recording.
pub type SampleIndex = i64;

const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// The error type for the conversions in this module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// The sample rate is zero, negative, NaN or infinite.
    InvalidSampleRate(f64),
    /// The time or sample count could not be represented as a finite `f64`.
    NotANumber,
    /// The resulting number of samples does not fit in a [`SampleIndex`].
    ///
    /// [`SampleIndex`]: ./type.SampleIndex.html
    OutOfRange,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConversionError::InvalidSampleRate(rate) => {
                write!(f, "Invalid sample rate: {} (must be positive and finite)", rate)
            }
            ConversionError::NotANumber => write!(f, "Time value is not a finite number"),
            ConversionError::OutOfRange => write!(f, "Sample index out of range"),
        }
    }
}

impl Error for ConversionError {}

/// The sample rate of a recording, in samples per second (Hz).
///
/// A `SampleRate` is always positive and finite, so conversions never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleRate(f64);

impl SampleRate {
    /// Create a new `SampleRate` from a number of samples per second.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidSampleRate` when `samples_per_second`
    /// is zero, negative, NaN or infinite.
    pub fn new(samples_per_second: f64) -> Result<Self, ConversionError> {
        if samples_per_second.is_finite() && samples_per_second > 0.0 {
            Ok(SampleRate(samples_per_second))
        } else {
            debug!("Rejecting sample rate {}", samples_per_second);
            Err(ConversionError::InvalidSampleRate(samples_per_second))
        }
    }

    /// The number of samples per second.
    #[inline]
    pub fn hz(&self) -> f64 {
        self.0
    }

    /// The duration of a single sample, in milliseconds.
    #[inline]
    pub fn sample_period_ms(&self) -> f64 {
        MILLISECONDS_PER_SECOND / self.0
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = ConversionError;

    fn try_from(samples_per_second: f64) -> Result<Self, Self::Error> {
        SampleRate::new(samples_per_second)
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = ConversionError;

    fn try_from(samples_per_second: u32) -> Result<Self, Self::Error> {
        SampleRate::new(f64::from(samples_per_second))
    }
}

impl Display for SampleRate {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

fn finite_f64<T: ToPrimitive>(value: T) -> Result<f64, ConversionError> {
    match value.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::NotANumber),
    }
}

fn truncate_to_index(samples: f64) -> Result<SampleIndex, ConversionError> {
    // `to_i64` truncates toward zero and fails when out of range.
    samples.to_i64().ok_or(ConversionError::OutOfRange)
}

/// Convert a time in milliseconds to a number of samples.
///
/// The result is `sample_rate * millis / 1000`, truncated toward zero.
/// `millis` may be negative (relative offsets) and may be any primitive number.
#[inline]
pub fn milliseconds_to_samples<T: ToPrimitive>(
    millis: T,
    sample_rate: SampleRate,
) -> Result<SampleIndex, ConversionError> {
    let millis = finite_f64(millis)?;
    truncate_to_index(sample_rate.hz() * millis / MILLISECONDS_PER_SECOND)
}

/// Convert a number of samples to a time in milliseconds.
///
/// The result is `1000 * samples / sample_rate`, without truncation.
#[inline]
pub fn samples_to_milliseconds<T: ToPrimitive>(
    samples: T,
    sample_rate: SampleRate,
) -> Result<f64, ConversionError> {
    let samples = finite_f64(samples)?;
    Ok(MILLISECONDS_PER_SECOND * samples / sample_rate.hz())
}

/// Convert a time in seconds to a number of samples, truncated toward zero.
#[inline]
pub fn seconds_to_samples<T: ToPrimitive>(
    seconds: T,
    sample_rate: SampleRate,
) -> Result<SampleIndex, ConversionError> {
    let seconds = finite_f64(seconds)?;
    truncate_to_index(sample_rate.hz() * seconds)
}

/// Get the time, in seconds, that has passed from a sample count.
#[inline]
pub fn samples_to_seconds<T: ToPrimitive>(
    samples: T,
    sample_rate: SampleRate,
) -> Result<f64, ConversionError> {
    let samples = finite_f64(samples)?;
    Ok(samples / sample_rate.hz())
}

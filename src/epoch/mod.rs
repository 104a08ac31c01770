//! Windows of samples ("epochs") around events.
//!
//! An [`Epoch`] is the absolute sample window `start..stop` around one event, together with
//! the index of the recording it belongs to.
//! Epochs are computed from an [`EventTable`] and a [`RelativeWindow`] given in milliseconds
//! relative to each event, either with the [`events_to_epochs`] function or with an
//! [`EpochBuilder`] when the window policy needs to be configured.
//!
//! The output always has one epoch per event row, in row order.
//! Epochs are neither sorted, merged nor clamped: an epoch that starts before the
//! recording has a negative `start`. Use [`truncate_to_recording`] to drop those.
//!
//! [`Epoch`]: ./struct.Epoch.html
//! [`EventTable`]: ../event/struct.EventTable.html
//! [`RelativeWindow`]: ./struct.RelativeWindow.html
//! [`events_to_epochs`]: ./fn.events_to_epochs.html
//! [`EpochBuilder`]: ./struct.EpochBuilder.html
//! [`truncate_to_recording`]: ./fn.truncate_to_recording.html
use crate::event::EventTable;
use crate::time::{milliseconds_to_samples, ConversionError, SampleIndex, SampleRate};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod basenames;
mod bounds;

pub use self::basenames::BasenameIndex;
pub use self::bounds::{truncate_to_recording, Truncated};

/// An absolute window of samples around an event.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Epoch {
    /// First sample of the window. May be negative.
    pub start: SampleIndex,
    /// Sample at which the window stops.
    pub stop: SampleIndex,
    /// Position of the event's recording in the basename list, `0` without a list.
    pub file_index: usize,
}

impl Epoch {
    pub fn new(start: SampleIndex, stop: SampleIndex, file_index: usize) -> Self {
        Self {
            start,
            stop,
            file_index,
        }
    }

    /// `stop - start`. Negative for an inverted window.
    pub fn len(&self) -> SampleIndex {
        self.stop - self.start
    }

    /// `true` when the window holds no samples. Inverted windows count as empty,
    /// see also [`is_inverted`](#method.is_inverted).
    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.stop
    }
}

impl From<Epoch> for (SampleIndex, SampleIndex, usize) {
    fn from(epoch: Epoch) -> Self {
        (epoch.start, epoch.stop, epoch.file_index)
    }
}

/// What to do with a window that stops before it starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WindowPolicy {
    /// Accept it; the resulting epochs have `start > stop`.
    Permissive,
    /// Reject it with `EpochError::InvertedWindow`.
    Strict,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        WindowPolicy::Permissive
    }
}

/// A window in milliseconds, relative to an event.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RelativeWindow {
    pub rel_start: f64,
    pub rel_stop: f64,
}

impl RelativeWindow {
    pub fn new(rel_start: f64, rel_stop: f64) -> Self {
        Self {
            rel_start,
            rel_stop,
        }
    }

    /// `(0, -1)` means "the whole recording" to the readers downstream.
    pub fn is_whole_recording(&self) -> bool {
        self.rel_start == 0.0 && self.rel_stop == -1.0
    }

    /// Check the window against the given policy.
    ///
    /// Under `WindowPolicy::Strict`, a window is only rejected when `rel_start` is not 0,
    /// `rel_stop` is not -1 and `rel_start > rel_stop`. Either sentinel alone exempts the window.
    pub fn validate(&self, policy: WindowPolicy) -> Result<(), EpochError> {
        match policy {
            WindowPolicy::Strict
                if self.rel_start != 0.0
                    && self.rel_stop != -1.0
                    && self.rel_start > self.rel_stop =>
            {
                error!(
                    "rel_start ({} ms) must precede rel_stop ({} ms).",
                    self.rel_start, self.rel_stop
                );
                Err(EpochError::InvertedWindow {
                    rel_start: self.rel_start,
                    rel_stop: self.rel_stop,
                })
            }
            _ => Ok(()),
        }
    }
}

/// The error type for building epochs.
#[derive(Debug, Clone, PartialEq)]
pub enum EpochError {
    /// Converting the window or an offset failed.
    Conversion(ConversionError),
    /// A basename list was given, but the `eegfile` of a row is not in it
    /// (or the row has no `eegfile` at all).
    UnknownFile {
        row: usize,
        eegfile: Option<String>,
    },
    /// The window stops before it starts and the policy is `WindowPolicy::Strict`.
    InvertedWindow { rel_start: f64, rel_stop: f64 },
}

impl Display for EpochError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            EpochError::Conversion(ref e) => write!(f, "Conversion error: {}", e),
            EpochError::UnknownFile {
                row,
                eegfile: Some(ref eegfile),
            } => write!(f, "Event {}: {:?} is not in the list of basenames", row, eegfile),
            EpochError::UnknownFile { row, eegfile: None } => {
                write!(f, "Event {}: no eegfile to look up in the list of basenames", row)
            }
            EpochError::InvertedWindow {
                rel_start,
                rel_stop,
            } => write!(
                f,
                "Inverted window: rel_start ({} ms) is after rel_stop ({} ms)",
                rel_start, rel_stop
            ),
        }
    }
}

impl Error for EpochError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EpochError::Conversion(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConversionError> for EpochError {
    fn from(e: ConversionError) -> Self {
        EpochError::Conversion(e)
    }
}

/// Computes epochs for a fixed window, sample rate and policy.
#[derive(Clone, Copy, Debug)]
pub struct EpochBuilder {
    window: RelativeWindow,
    sample_rate: SampleRate,
    policy: WindowPolicy,
}

impl EpochBuilder {
    /// A builder with the permissive window policy.
    pub fn new(window: RelativeWindow, sample_rate: SampleRate) -> Self {
        Self {
            window,
            sample_rate,
            policy: WindowPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn window(&self) -> RelativeWindow {
        self.window
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Compute one epoch per row of `events`, in row order.
    ///
    /// Without `basenames`, every epoch gets `file_index` 0.
    /// With `basenames`, the `file_index` is the position of the row's `eegfile` in the list;
    /// a row whose file is not listed fails the whole call.
    pub fn build<S: AsRef<str>>(
        &self,
        events: &EventTable,
        basenames: Option<&[S]>,
    ) -> Result<Vec<Epoch>, EpochError> {
        self.window.validate(self.policy)?;

        let rel_start = milliseconds_to_samples(self.window.rel_start, self.sample_rate)?;
        let rel_stop = milliseconds_to_samples(self.window.rel_stop, self.sample_rate)?;
        trace!(
            "build({} events, {} basenames)",
            events.len(),
            basenames.map_or(0, |b| b.len())
        );
        debug!(
            "Window {} ms..{} ms at {} is {}..{} samples.",
            self.window.rel_start, self.window.rel_stop, self.sample_rate, rel_start, rel_stop
        );

        let index = basenames.map(BasenameIndex::new);
        events
            .iter()
            .enumerate()
            .map(|(row, event)| -> Result<Epoch, EpochError> {
                let file_index = match index.as_ref() {
                    Some(index) => event
                        .eegfile
                        .as_deref()
                        .and_then(|eegfile| index.index_of(eegfile))
                        .ok_or_else(|| {
                            error!(
                                "Event {} refers to {:?}, which is not in the list of basenames.",
                                row, event.eegfile
                            );
                            EpochError::UnknownFile {
                                row,
                                eegfile: event.eegfile.clone(),
                            }
                        })?,
                    None => 0,
                };
                Ok(Epoch {
                    start: offset(event.eegoffset, rel_start)?,
                    stop: offset(event.eegoffset, rel_stop)?,
                    file_index,
                })
            })
            .collect()
    }
}

fn offset(eegoffset: SampleIndex, relative: SampleIndex) -> Result<SampleIndex, ConversionError> {
    eegoffset
        .checked_add(relative)
        .ok_or(ConversionError::OutOfRange)
}

/// Convert events to epochs.
///
/// `rel_start` and `rel_stop` are in milliseconds relative to each event.
/// They are converted to samples once (truncating, see [`milliseconds_to_samples`])
/// and added to the `eegoffset` of every row.
/// The window is not required to be ordered; use an [`EpochBuilder`] with
/// [`WindowPolicy::Strict`] to reject inverted windows.
///
/// [`milliseconds_to_samples`]: ../time/fn.milliseconds_to_samples.html
/// [`EpochBuilder`]: ./struct.EpochBuilder.html
/// [`WindowPolicy::Strict`]: ./enum.WindowPolicy.html#variant.Strict
pub fn events_to_epochs<S: AsRef<str>>(
    events: &EventTable,
    rel_start: f64,
    rel_stop: f64,
    sample_rate: SampleRate,
    basenames: Option<&[S]>,
) -> Result<Vec<Epoch>, EpochError> {
    EpochBuilder::new(RelativeWindow::new(rel_start, rel_stop), sample_rate)
        .build(events, basenames)
}

//! # sample-epochs
//! Offset arithmetic and windowing for event-aligned sampled recordings
//! (e.g. EEG or other electrophysiological data).
//!
//! `sample-epochs` does not read files and does not touch signal data.
//! It turns event times into positions on a recording's sample grid and computes the
//! absolute sample windows ("epochs") around those positions, so that a signal reader can
//! extract them afterwards.
//!
//! ## Converting time
//! The [`time`] module converts between milliseconds (or seconds) and sample counts
//! for a given [`SampleRate`].
//! Time to samples truncates toward zero; samples to time keeps full precision.
//! A [`SampleRate`] is validated when it is created, so it is never zero or negative.
//!
//! ## Events
//! An [`EventTable`] is an ordered sequence of [`EventRecord`]s. Each record has an
//! `eegoffset` (its position in samples) and optionally an `eegfile` (the basename of its
//! recording). [`milliseconds_to_events`] builds a table from onset times in milliseconds.
//!
//! ## Epochs
//! [`events_to_epochs`] computes one [`Epoch`] per event, in row order, for a window given in
//! milliseconds relative to each event. When a list of basenames is passed, each epoch also
//! records the position of its recording in that list.
//! [`EpochBuilder`] does the same with a configurable [`WindowPolicy`].
//!
//! ```
//! use sample_epochs::{events_to_epochs, milliseconds_to_events, Epoch, SampleRate};
//!
//! let rate = SampleRate::new(1000.0)?;
//! let events = milliseconds_to_events(&[1000, 2500], rate)?;
//! let epochs = events_to_epochs::<&str>(&events, -200.0, 200.0, rate, None)?;
//! assert_eq!(epochs, vec![Epoch::new(800, 1200, 0), Epoch::new(2300, 2700, 0)]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Logging
//! This crate logs through the [`log`](https://crates.io/crates/log) facade and never
//! installs a logger itself.
//!
//! [`time`]: ./time/index.html
//! [`SampleRate`]: ./time/struct.SampleRate.html
//! [`EventTable`]: ./event/struct.EventTable.html
//! [`EventRecord`]: ./event/struct.EventRecord.html
//! [`milliseconds_to_events`]: ./event/fn.milliseconds_to_events.html
//! [`events_to_epochs`]: ./epoch/fn.events_to_epochs.html
//! [`Epoch`]: ./epoch/struct.Epoch.html
//! [`EpochBuilder`]: ./epoch/struct.EpochBuilder.html
//! [`WindowPolicy`]: ./epoch/enum.WindowPolicy.html

#[macro_use]
extern crate log;

pub mod epoch;
pub mod event;
pub mod time;

pub use crate::epoch::{
    events_to_epochs, truncate_to_recording, BasenameIndex, Epoch, EpochBuilder, EpochError,
    RelativeWindow, Truncated, WindowPolicy,
};
pub use crate::event::{milliseconds_to_events, EventRecord, EventTable};
pub use crate::time::{
    milliseconds_to_samples, samples_to_milliseconds, samples_to_seconds, seconds_to_samples,
    ConversionError, SampleIndex, SampleRate,
};

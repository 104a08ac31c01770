//! Event records and the tables that hold them.
//!
//! An [`EventRecord`] marks a position on the sample grid of a recording (`eegoffset`)
//! and, when several recordings are involved, names the file it belongs to (`eegfile`).
//! An [`EventTable`] is an ordered sequence of records. The row order is meaningful:
//! it is the only key that correlates rows back to the caller's context, so nothing in
//! this crate sorts or deduplicates rows.
//!
//! [`EventRecord`]: ./struct.EventRecord.html
//! [`EventTable`]: ./struct.EventTable.html
use crate::time::{milliseconds_to_samples, ConversionError, SampleIndex, SampleRate};
use itertools::Itertools;
use num_traits::ToPrimitive;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice;

/// A single event: a position on the sample grid and, optionally, the source file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EventRecord {
    /// The absolute position of the event, in samples from the start of the recording.
    pub eegoffset: SampleIndex,
    /// The basename of the recording the event belongs to.
    pub eegfile: Option<String>,
}

impl EventRecord {
    /// An event in a single, implicit recording.
    pub fn new(eegoffset: SampleIndex) -> Self {
        Self {
            eegoffset,
            eegfile: None,
        }
    }

    /// An event in the recording with the given basename.
    pub fn in_file<S: Into<String>>(eegoffset: SampleIndex, eegfile: S) -> Self {
        Self {
            eegoffset,
            eegfile: Some(eegfile.into()),
        }
    }
}

/// An ordered table of events.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct EventTable {
    rows: Vec<EventRecord>,
}

impl EventTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row.
    pub fn push(&mut self, record: EventRecord) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, EventRecord> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[EventRecord] {
        &self.rows
    }

    /// The `eegoffset` column, in row order.
    pub fn offsets(&self) -> Vec<SampleIndex> {
        self.rows.iter().map(|row| row.eegoffset).collect()
    }

    /// The distinct `eegfile` values, in order of first appearance.
    ///
    /// Rows without a file are skipped.
    /// The returned ordering is suitable as the basename list for epoching.
    pub fn basenames(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.eegfile.as_deref())
            .unique()
            .collect()
    }

    /// The rows that belong to the recording with the given basename, in row order.
    pub fn for_file(&self, basename: &str) -> EventTable {
        self.rows
            .iter()
            .filter(|row| row.eegfile.as_deref() == Some(basename))
            .cloned()
            .collect()
    }
}

impl Index<usize> for EventTable {
    type Output = EventRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl From<Vec<EventRecord>> for EventTable {
    fn from(rows: Vec<EventRecord>) -> Self {
        Self { rows }
    }
}

impl FromIterator<EventRecord> for EventTable {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EventTable {
    type Item = EventRecord;
    type IntoIter = std::vec::IntoIter<EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a EventRecord;
    type IntoIter = slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Build a minimal event table from onset times in milliseconds.
///
/// The `i`-th row holds the `i`-th onset converted to samples (see [`milliseconds_to_samples`]);
/// `eegfile` is left empty.
/// The first onset that cannot be converted aborts the whole call.
///
/// [`milliseconds_to_samples`]: ../time/fn.milliseconds_to_samples.html
pub fn milliseconds_to_events<T>(
    onsets: &[T],
    sample_rate: SampleRate,
) -> Result<EventTable, ConversionError>
where
    T: ToPrimitive + Copy,
{
    trace!(
        "milliseconds_to_events({} onsets, {})",
        onsets.len(),
        sample_rate
    );
    onsets
        .iter()
        .map(|&onset| milliseconds_to_samples(onset, sample_rate).map(EventRecord::new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(hz: f64) -> SampleRate {
        SampleRate::new(hz).unwrap()
    }

    #[test]
    fn milliseconds_to_events_with_no_onsets_gives_empty_table() {
        let events = milliseconds_to_events::<f64>(&[], rate(1000.0)).unwrap();
        assert!(events.is_empty());
        assert_eq!(events.offsets(), Vec::<SampleIndex>::new());
    }

    #[test]
    fn milliseconds_to_events_converts_each_onset() {
        let events = milliseconds_to_events(&[0, 500], rate(1000.0)).unwrap();
        assert_eq!(events.offsets(), vec![0, 500]);

        let events = milliseconds_to_events(&[10], rate(100.0)).unwrap();
        assert_eq!(events.offsets(), vec![1]);
    }

    #[test]
    fn milliseconds_to_events_keeps_input_order_and_duplicates() {
        let events = milliseconds_to_events(&[300.0, 100.0, 300.0], rate(1000.0)).unwrap();
        assert_eq!(events.offsets(), vec![300, 100, 300]);
        assert!(events.iter().all(|row| row.eegfile.is_none()));
    }

    #[test]
    fn milliseconds_to_events_fails_on_first_bad_onset() {
        let result = milliseconds_to_events(&[1.0, f64::NAN, 2.0], rate(1000.0));
        assert_eq!(result, Err(ConversionError::NotANumber));
    }

    #[test]
    fn basenames_are_in_order_of_first_appearance() {
        let events: EventTable = vec![
            EventRecord::in_file(10, "B.h5"),
            EventRecord::in_file(20, "A.h5"),
            EventRecord::new(25),
            EventRecord::in_file(30, "B.h5"),
        ]
        .into();
        assert_eq!(events.basenames(), vec!["B.h5", "A.h5"]);
    }

    #[test]
    fn rows_and_indexing_follow_insertion_order() {
        let mut events = EventTable::new();
        events.push(EventRecord::new(7));
        events.push(EventRecord::in_file(3, "A.h5"));
        assert_eq!(events.rows().len(), 2);
        assert_eq!(events[0], EventRecord::new(7));
        assert_eq!(events[1].eegfile.as_deref(), Some("A.h5"));
        assert_eq!(events.rows()[1].eegoffset, 3);
    }

    #[test]
    fn for_file_selects_rows_and_preserves_order() {
        let events: EventTable = vec![
            EventRecord::in_file(30, "A.h5"),
            EventRecord::in_file(20, "B.h5"),
            EventRecord::in_file(10, "A.h5"),
        ]
        .into();
        let a = events.for_file("A.h5");
        assert_eq!(a.offsets(), vec![30, 10]);
        assert!(events.for_file("C.h5").is_empty());
    }
}

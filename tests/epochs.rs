use sample_epochs::{
    events_to_epochs, milliseconds_to_events, truncate_to_recording, EpochBuilder, EpochError,
    EventRecord, EventTable, RelativeWindow, SampleRate, WindowPolicy,
};

#[test]
fn onsets_to_epochs_for_a_single_recording() {
    let rate = SampleRate::new(500.0).unwrap();
    let events = milliseconds_to_events(&[100.0, 1000.0, 1999.0], rate).unwrap();
    assert_eq!(events.offsets(), vec![50, 500, 999]);

    let epochs = events_to_epochs::<&str>(&events, -100.0, 500.0, rate, None).unwrap();
    let triples: Vec<(i64, i64, usize)> = epochs.into_iter().map(Into::into).collect();
    assert_eq!(triples, vec![(0, 300, 0), (450, 750, 0), (949, 1249, 0)]);
}

#[test]
fn epochs_for_several_recordings_use_derived_basenames() {
    let events: EventTable = vec![
        EventRecord::in_file(1000, "R1_session0.h5"),
        EventRecord::in_file(2000, "R1_session1.h5"),
        EventRecord::in_file(3000, "R1_session0.h5"),
    ]
    .into();
    let basenames = events.basenames();
    let rate = SampleRate::new(1000.0).unwrap();

    let epochs = events_to_epochs(&events, -200.0, 200.0, rate, Some(&basenames[..])).unwrap();
    let file_indices: Vec<usize> = epochs.iter().map(|e| e.file_index).collect();
    assert_eq!(file_indices, vec![0, 1, 0]);

    for basename in &basenames {
        let per_file = events.for_file(basename);
        let epochs = events_to_epochs::<&str>(&per_file, -200.0, 200.0, rate, None).unwrap();
        assert_eq!(epochs.len(), per_file.len());
    }
}

#[test]
fn unknown_basename_aborts_without_partial_output() {
    let events: EventTable = vec![
        EventRecord::in_file(1000, "A.h5"),
        EventRecord::in_file(2000, "B.h5"),
    ]
    .into();
    let rate = SampleRate::new(1000.0).unwrap();
    let result = events_to_epochs(&events, 0.0, 10.0, rate, Some(&["B.h5"][..]));
    match result {
        Err(EpochError::UnknownFile { row, eegfile }) => {
            assert_eq!(row, 0);
            assert_eq!(eegfile.as_deref(), Some("A.h5"));
        }
        other => panic!("Expected an unknown file error, got {:?}", other),
    }
}

#[test]
fn strict_builder_and_truncation() {
    let rate = SampleRate::new(1000.0).unwrap();
    let events = milliseconds_to_events(&[50, 500, 990], rate).unwrap();

    let strict = EpochBuilder::new(RelativeWindow::new(-100.0, 100.0), rate)
        .with_policy(WindowPolicy::Strict);
    let epochs = strict.build::<&str>(&events, None).unwrap();

    let truncated = truncate_to_recording(&epochs, 1000);
    assert_eq!(truncated.truncated_pre, 1);
    assert_eq!(truncated.truncated_post, 1);
    assert_eq!(truncated.epochs.len(), 1);
    assert_eq!(truncated.epochs[0].start, 400);

    let inverted = EpochBuilder::new(RelativeWindow::new(100.0, -100.0), rate)
        .with_policy(WindowPolicy::Strict);
    assert!(inverted.build::<&str>(&events, None).is_err());
}

#[test]
fn zero_sample_rate_is_an_error() {
    assert!(SampleRate::new(0.0).is_err());
}

#[test]
fn epoch_types_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EventTable>();
    assert_send_sync::<EpochBuilder>();
    assert_send_sync::<EpochError>();
}

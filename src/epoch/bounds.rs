use super::Epoch;
use crate::time::SampleIndex;

/// The result of [`truncate_to_recording`].
///
/// [`truncate_to_recording`]: ./fn.truncate_to_recording.html
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Truncated {
    /// The epochs that were kept, in their input order.
    pub epochs: Vec<Epoch>,
    /// The number of epochs dropped from the front.
    pub truncated_pre: usize,
    /// The number of epochs dropped from the back.
    pub truncated_post: usize,
}

/// Drop the leading epochs that start before the recording and the trailing epochs that
/// run past its end.
///
/// `n_samples` is the length of the recording; `stop` is exclusive, so an epoch with
/// `stop == n_samples` still fits.
/// Only the head and the tail are inspected: epochs are assumed to be in chronological
/// order, as they are for a single recording.
pub fn truncate_to_recording(epochs: &[Epoch], n_samples: SampleIndex) -> Truncated {
    let truncated_pre = epochs.iter().take_while(|epoch| epoch.start < 0).count();
    let rest = &epochs[truncated_pre..];
    let truncated_post = rest
        .iter()
        .rev()
        .take_while(|epoch| epoch.stop > n_samples)
        .count();
    let kept = &rest[..rest.len() - truncated_post];

    if truncated_pre > 0 || truncated_post > 0 {
        warn!(
            "Dropped {} epoch(s) before and {} epoch(s) after a recording of {} samples.",
            truncated_pre, truncated_post, n_samples
        );
    }

    Truncated {
        epochs: kept.to_vec(),
        truncated_pre,
        truncated_post,
    }
}

#[test]
fn truncate_to_recording_keeps_epochs_that_fit() {
    let epochs = vec![Epoch::new(0, 100, 0), Epoch::new(900, 1000, 0)];
    let truncated = truncate_to_recording(&epochs, 1000);
    assert_eq!(truncated.epochs, epochs);
    assert_eq!(truncated.truncated_pre, 0);
    assert_eq!(truncated.truncated_post, 0);
}

#[test]
fn truncate_to_recording_drops_head_and_tail() {
    let epochs = vec![
        Epoch::new(-20, 80, 0),
        Epoch::new(-5, 95, 0),
        Epoch::new(100, 200, 0),
        Epoch::new(950, 1050, 0),
    ];
    let truncated = truncate_to_recording(&epochs, 1000);
    assert_eq!(truncated.epochs, vec![Epoch::new(100, 200, 0)]);
    assert_eq!(truncated.truncated_pre, 2);
    assert_eq!(truncated.truncated_post, 1);
}

#[test]
fn truncate_to_recording_can_drop_everything() {
    let epochs = vec![Epoch::new(-10, 10, 0), Epoch::new(-1, 2000, 0)];
    let truncated = truncate_to_recording(&epochs, 1000);
    assert!(truncated.epochs.is_empty());
    assert_eq!(truncated.truncated_pre, 2);
    assert_eq!(truncated.truncated_post, 0);
}

#[test]
fn truncate_to_recording_of_nothing() {
    let truncated = truncate_to_recording(&[], 1000);
    assert!(truncated.epochs.is_empty());
    assert_eq!(truncated.truncated_pre + truncated.truncated_post, 0);
}

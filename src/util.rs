//! Small helpers for callers that log and iterate upgrade work
//!
//! Nothing here participates in the ordering itself. [`format_duration`]
//! renders elapsed wall-clock time for human-readable log lines, and
//! [`SizedIter`] lets a lazily-produced sequence report its length without
//! being collected first.

use std::time::Duration;

/// Formats a duration as `"2 hours, 1 minute, 3 seconds"`.
///
/// Zero components are omitted, each component is pluralized on its own, and
/// a sub-second remainder counts as a whole second so short work never shows
/// up as instantaneous. A zero duration formats as `"0 seconds"`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taxis::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(61)), "1 minute, 1 second");
/// assert_eq!(format_duration(Duration::from_millis(100)), "1 second");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let mut total = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        total += 1;
    }
    if total == 0 {
        return "0 seconds".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }
    if seconds > 0 {
        parts.push(pluralize(seconds, "second"));
    }
    parts.join(", ")
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// An iterator with an externally-known length.
///
/// Wraps a lazy sequence whose length the producer already knows, so
/// consumers can call [`ExactSizeIterator::len`] (for progress reporting,
/// preallocation) without draining it.
///
/// # Examples
///
/// ```
/// use taxis::SizedIter;
///
/// let iter = SizedIter::new(0..3, 3);
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct SizedIter<I> {
    inner: I,
    remaining: usize,
}

impl<I> SizedIter<I> {
    /// Wraps `inner`, which is trusted to yield exactly `len` items.
    pub fn new(inner: I, len: usize) -> Self {
        Self {
            inner,
            remaining: len,
        }
    }
}

impl<I: Iterator> Iterator for SizedIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for SizedIter<I> {}

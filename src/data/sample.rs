//! Timestamped sample storage with bounded, hysteresis-based retention.

use std::collections::VecDeque;

use crate::config::{PIXELS_PER_MS, POLL_INTERVAL_MS, TRIM_HYSTERESIS};

/// One timestamped observation of the monitored signal.
///
/// Timestamps are milliseconds on a monotonic clock (see
/// [`perf_now_ms`](crate::sampler::perf_now_ms)). Samples are only ever
/// appended at the tail and discarded from the head, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    pub value: f64,
}

impl Sample {
    #[inline]
    pub fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered rolling history of samples, non-decreasing by timestamp.
///
/// The buffer is never in an invalid state: pushing is unconditional (the
/// caller polls a monotonic clock) and trimming only drops from the head.
#[derive(Debug, Default, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample at the tail. The caller guarantees `timestamp` is not
    /// older than the last appended timestamp.
    #[inline]
    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
    }

    /// Drop oldest samples down to exactly `capacity`, but only once the
    /// buffer has grown past `TRIM_HYSTERESIS * capacity`. Amortizes the
    /// cost of head removal across many ingestion ticks.
    pub fn trim_to(&mut self, capacity: usize) {
        if self.samples.len() > capacity * TRIM_HYSTERESIS {
            let excess = self.samples.len() - capacity;
            self.samples.drain(..excess);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest retained sample, if any.
    #[inline]
    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    /// Most recently pushed sample, if any.
    #[inline]
    pub fn newest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Lazy reverse walk, newest to oldest.
    pub fn iter_from_newest(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter().rev()
    }

    /// Reverse walk over the samples relevant to the visible window.
    ///
    /// Yields newest to oldest and ends after the first sample older than
    /// `window_start`. That boundary sample is itself yielded only when it
    /// lies within `grace` milliseconds of the window start, so the curve
    /// stays continuous at the left edge without dragging in history that
    /// cannot connect to anything visible.
    pub fn visible_tail(&self, window_start: f64, grace: f64) -> VisibleTail<'_> {
        VisibleTail {
            inner: self.samples.iter().rev(),
            window_start,
            grace,
            done: false,
        }
    }

    /// Remove all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Iterator returned by [`SampleBuffer::visible_tail`]. Finite and
/// non-restartable; consumers stop early for free.
pub struct VisibleTail<'a> {
    inner: std::iter::Rev<std::collections::vec_deque::Iter<'a, Sample>>,
    window_start: f64,
    grace: f64,
    done: bool,
}

impl<'a> Iterator for VisibleTail<'a> {
    type Item = &'a Sample;

    fn next(&mut self) -> Option<&'a Sample> {
        if self.done {
            return None;
        }
        let sample = self.inner.next()?;
        if sample.timestamp < self.window_start {
            self.done = true;
            if self.window_start - sample.timestamp > self.grace {
                return None;
            }
        }
        Some(sample)
    }
}

/// Number of samples worth retaining for a chart of the given width, with
/// headroom for the trim hysteresis (twice the visible span at the fixed
/// ingestion cadence). Zero width yields zero capacity; consumers degrade
/// to an empty chart.
pub fn retention_capacity(width: f32) -> usize {
    if width <= 0.0 {
        return 0;
    }
    let millis_per_width = width as f64 / PIXELS_PER_MS;
    (millis_per_width / POLL_INTERVAL_MS * 2.0).ceil() as usize
}

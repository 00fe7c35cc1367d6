//! Briefly highlighting a rule in the editor.
//!
//! Revealing a rule applies a decoration right away and queues a revert for
//! later. Reverts are unconditional: a second reveal does not cancel the first
//! revert, so the decoration can disappear early. The queue is driven by the
//! caller's clock through [`Highlighter::poll`].

use std::ops::Range;
use std::time::{Duration, Instant};

use log::debug;

/// Editor side of a highlight: draws and clears decorations.
///
/// Ranges are byte offsets into the document text. Hosts that address text in
/// UTF-16 code units convert with
/// [`byte_range_to_utf16`](crate::editor::active_document::byte_range_to_utf16).
pub trait DecorationSink {
    fn set_decorations(&mut self, ranges: &[Range<usize>]);
}

/// Applies highlights and reverts them after a fixed duration.
pub struct Highlighter<D: DecorationSink> {
    sink: D,
    duration: Duration,
    pending_reverts: Vec<Instant>,
}

impl<D: DecorationSink> Highlighter<D> {
    pub fn new(sink: D, duration: Duration) -> Self {
        Highlighter {
            sink,
            duration,
            pending_reverts: Vec::new(),
        }
    }

    /// Decorate `range` and schedule its removal at `now + duration`.
    pub fn reveal(&mut self, range: Range<usize>, now: Instant) {
        debug!("highlighting {:?} for {:?}", range, self.duration);
        self.sink.set_decorations(std::slice::from_ref(&range));
        self.pending_reverts.push(now + self.duration);
    }

    /// Fire every revert due at `now`. Returns how many fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let before = self.pending_reverts.len();
        self.pending_reverts.retain(|&deadline| deadline > now);
        let fired = before - self.pending_reverts.len();
        for _ in 0..fired {
            self.sink.set_decorations(&[]);
        }
        fired
    }

    /// Reverts still waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending_reverts.len()
    }

    /// Earliest pending revert, for callers that want to sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_reverts.iter().min().copied()
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }
}

/// Linear probe sequence over a table of `capacity` slots.
///
/// Starts at a key's home slot and advances by one slot at a time, wrapping around at
/// the end of the table. Every slot is yielded at most once, so any walk driven by this
/// iterator terminates even on a table without empty slots.
#[derive(Debug, Clone)]
pub(crate) struct ProbeSeq {
    /// Slot index yielded next
    index: usize,
    /// Number of slots still to be yielded
    remaining: usize,
    /// Number of slots in the probed table
    capacity: usize,
}

impl ProbeSeq {
    /// Creates the probe sequence starting at `home`.
    pub(crate) fn new(home: usize, capacity: usize) -> Self {
        Self { index: home, remaining: capacity, capacity }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);

        let current = self.index;
        let next = current.saturating_add(1);
        self.index = if next >= self.capacity { 0 } else { next };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSeq {}

//! Capacity policy for the text buffer
//!
//! Growth is geometric. Slack is handed back only after several grow steps
//! and only when the live text uses less than a quarter of the allocation,
//! so a series of large points does not cause repeated reallocation.

use bytes::BytesMut;

const GROWTH_FACTOR: usize = 2;
const SLACK_DIVISOR: usize = 4;
const GROWS_BEFORE_SHRINK: u32 = 3;
/// Allocations within this many bytes of the live text are left alone
const MIN_RECLAIM: usize = 8192;

#[derive(Debug)]
pub struct CapacityManager {
    /// Never shrink below this
    floor: usize,
    pub(super) grows_since_shrink: u32,
    /// Capacity before the most recent shrink
    last_shrunk_from: Option<usize>,
}

impl CapacityManager {
    pub(super) fn new(floor: usize) -> Self {
        Self {
            floor,
            grows_since_shrink: 0,
            last_shrunk_from: None,
        }
    }

    /// Make room for `incoming` more bytes
    pub(super) fn reserve_for(&mut self, buffer: &mut BytesMut, incoming: usize) {
        let before = buffer.capacity();
        let required = buffer.len().saturating_add(incoming);
        if required <= before {
            return;
        }

        let target = required.max(before.saturating_mul(GROWTH_FACTOR));
        buffer.reserve(target - buffer.len());
        self.grows_since_shrink = self.grows_since_shrink.saturating_add(1);

        tracing::trace!(
            target: "pointstream::decode::buffer",
            from = before,
            to = buffer.capacity(),
            "Buffer grown"
        );
    }

    /// Reallocate smaller if most of the allocation is idle
    pub(super) fn release_slack(&mut self, buffer: &mut BytesMut) {
        if self.grows_since_shrink < GROWS_BEFORE_SHRINK {
            return;
        }

        let capacity = buffer.capacity();
        let live = buffer.len();

        if self
            .last_shrunk_from
            .is_some_and(|previous| capacity <= previous.saturating_mul(2))
        {
            return;
        }

        let idle = live.saturating_mul(SLACK_DIVISOR) < capacity;
        let worth_it = capacity > self.floor.saturating_mul(2) && capacity > live + MIN_RECLAIM;
        if !(idle && worth_it) {
            return;
        }

        let target = live.saturating_mul(SLACK_DIVISOR).max(self.floor);
        if target >= capacity / 2 {
            return;
        }

        let mut resized = BytesMut::with_capacity(target);
        resized.extend_from_slice(&buffer[..]);
        *buffer = resized;

        self.last_shrunk_from = Some(capacity);
        self.grows_since_shrink = 0;

        log::debug!("Decode buffer shrunk from {capacity} to {target} bytes");
    }

    pub(super) fn reset(&mut self) {
        self.grows_since_shrink = 0;
        self.last_shrunk_from = None;
    }
}

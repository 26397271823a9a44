use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Lock-free statistics for one streamed response
#[derive(Debug, Clone)]
pub struct StreamStats {
    /// Chunks received from the transport
    pub chunks_received: Arc<AtomicU64>,
    /// Bytes received from the transport
    pub bytes_received: Arc<AtomicU64>,
    /// Objects delivered to the consumer
    pub objects_emitted: Arc<AtomicU64>,
    /// Terminal faults (at most one per stream)
    pub faults: Arc<AtomicU64>,
    /// Times the transport reader was released
    pub releases: Arc<AtomicU64>,
    /// Start time for throughput calculation
    pub start_time: Arc<AtomicU64>,
}

/// Immutable snapshot of stream statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamStatsSnapshot {
    pub chunks_received: u64,
    pub bytes_received: u64,
    pub objects_emitted: u64,
    pub faults: u64,
    pub releases: u64,
    /// Average bytes per emitted object
    pub bytes_per_object: f64,
    /// Total elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl StreamStats {
    /// Create new stream statistics tracker
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunks_received: Arc::new(AtomicU64::new(0)),
            bytes_received: Arc::new(AtomicU64::new(0)),
            objects_emitted: Arc::new(AtomicU64::new(0)),
            faults: Arc::new(AtomicU64::new(0)),
            releases: Arc::new(AtomicU64::new(0)),
            start_time: Arc::new(AtomicU64::new(now_micros())),
        }
    }

    /// Get current statistics snapshot
    #[must_use]
    pub fn snapshot(&self) -> StreamStatsSnapshot {
        let elapsed_micros = now_micros().saturating_sub(self.start_time.load(Ordering::Relaxed));
        #[allow(clippy::cast_precision_loss)]
        let elapsed_seconds = (elapsed_micros as f64) / 1_000_000.0;

        let bytes = self.bytes_received.load(Ordering::Relaxed);
        let objects = self.objects_emitted.load(Ordering::Relaxed);

        StreamStatsSnapshot {
            chunks_received: self.chunks_received.load(Ordering::Relaxed),
            bytes_received: bytes,
            objects_emitted: objects,
            faults: self.faults.load(Ordering::Relaxed),
            releases: self.releases.load(Ordering::Relaxed),
            bytes_per_object: if objects > 0 {
                #[allow(clippy::cast_precision_loss)]
                { bytes as f64 / objects as f64 }
            } else {
                0.0
            },
            elapsed_seconds,
        }
    }

    /// Record a chunk received from the transport
    pub fn record_chunk(&self, bytes: usize) {
        self.chunks_received.fetch_add(1, Ordering::Relaxed);
        self.bytes_received.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Record an object delivered to the consumer
    pub fn record_object(&self) {
        self.objects_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a terminal fault
    pub fn record_fault(&self) {
        self.faults.fetch_add(1, Ordering::Relaxed);
    }

    /// Record release of the transport reader
    pub fn record_release(&self) {
        self.releases.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for StreamStats {
    fn default() -> Self {
        Self::new()
    }
}

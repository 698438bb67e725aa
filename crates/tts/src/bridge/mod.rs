mod queue;
mod worker;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use queue::{RequestQueue, ResponseTable};
pub use worker::SynthesisCall;

/// Interval between result polls on the async side
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A queued synthesis job
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Correlation id assigned by the bridge
    pub id: u64,
    /// Payload handed to the blocking synthesis call
    pub payload: String,
    /// Where the audio artifact must be written
    pub destination: PathBuf,
}

/// Result of a completed synthesis job
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Path of the written audio artifact
    pub destination: PathBuf,
}

/// State shared between async callers and the worker thread
#[derive(Debug, Default)]
struct Shared {
    queue: RequestQueue,
    results: ResponseTable,
}

/// Bridges async conversion calls onto a dedicated blocking worker thread
///
/// Callers enqueue a job and poll for its result at a fixed interval,
/// yielding to the runtime between polls. A job that exceeds the
/// configured deadline is abandoned; if its result arrives afterwards it
/// stays in the response table until the bridge is dropped.
pub struct SynthesisBridge {
    shared: Arc<Shared>,
    next_id: AtomicU64,
    max_wait: Duration,
}

impl SynthesisBridge {
    /// Create a bridge and spawn its worker thread
    ///
    /// `max_wait` bounds how long [`convert`](Self::convert) waits for a
    /// result before abandoning the job. The worker thread is detached;
    /// it exits on its own once the bridge is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread cannot be spawned
    pub fn new<C: SynthesisCall>(call: C, max_wait: Duration) -> crate::error::Result<Self> {
        let shared = Arc::new(Shared::default());
        let weak = Arc::downgrade(&shared);

        std::thread::Builder::new()
            .name("synthesis-worker-0".to_string())
            .spawn(move || worker::worker_loop(weak, call, 0))?;

        Ok(Self {
            shared,
            next_id: AtomicU64::new(1),
            max_wait,
        })
    }

    /// Queue a synthesis job and wait for its result
    ///
    /// Returns `None` when no result arrived within the deadline. The
    /// deadline is checked before the response table on every poll, so a
    /// result landing during the final poll interval is abandoned rather
    /// than returned late.
    pub async fn convert(&self, payload: String, destination: PathBuf) -> Option<ConversionResult> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.shared.queue.push(ConversionJob {
            id,
            payload: payload.clone(),
            destination,
        });

        let started = Instant::now();

        loop {
            if started.elapsed() > self.max_wait {
                tracing::error!(id, payload = %payload, "synthesis timed out");
                return None;
            }

            if let Some(result) = self.shared.results.take(id) {
                return Some(result);
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

use std::path::Path;
use std::sync::Weak;
use std::thread;
use std::time::Duration;

use super::{ConversionJob, ConversionResult, Shared};

/// Pause between worker iterations
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

/// A blocking synthesis call executed on a worker thread
///
/// Implementations receive the queued payload and must write the audio
/// artifact to `destination` before returning.
pub trait SynthesisCall: Send + Sync + 'static {
    /// Synthesize `payload` into an audio file at `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if the synthesis request or the artifact write
    /// fails
    fn synthesize(&self, payload: &str, destination: &Path) -> crate::error::Result<()>;
}

/// Worker loop servicing the request queue one job at a time
///
/// Runs until the owning bridge is dropped. The strong handle on the
/// shared state is released before every sleep so the drop is noticed
/// within one interval.
pub(super) fn worker_loop<C: SynthesisCall>(shared: Weak<Shared>, call: C, index: usize) {
    loop {
        {
            let Some(state) = shared.upgrade() else {
                tracing::debug!(worker = index, "synthesis bridge dropped, worker exiting");
                break;
            };

            if let Some(job) = state.queue.pop() {
                run_job(&state, &call, index, job);
            }
        }

        thread::sleep(IDLE_INTERVAL);
    }
}

/// Run a single job; failures are logged and contained so the loop
/// survives, the failed job simply never produces a result
fn run_job<C: SynthesisCall>(state: &Shared, call: &C, index: usize, job: ConversionJob) {
    tracing::debug!(worker = index, id = job.id, "processing synthesis job");

    match call.synthesize(&job.payload, &job.destination) {
        Ok(()) => {
            state.results.insert(
                job.id,
                ConversionResult {
                    destination: job.destination,
                },
            );
        }
        Err(e) => {
            tracing::error!(worker = index, id = job.id, error = %e, "synthesis job failed");
            tracing::debug!(
                worker = index,
                id = job.id,
                payload = %job.payload,
                destination = %job.destination.display(),
                "failed job data"
            );
        }
    }
}

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::{ConversionJob, ConversionResult};

/// FIFO queue of pending conversion jobs, shared between async callers
/// and the worker thread
#[derive(Debug, Default)]
pub(super) struct RequestQueue {
    jobs: Mutex<VecDeque<ConversionJob>>,
}

impl RequestQueue {
    /// Append a job to the back of the queue
    pub fn push(&self, job: ConversionJob) {
        let mut jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        jobs.push_back(job);
    }

    /// Remove and return the oldest pending job
    pub fn pop(&self) -> Option<ConversionJob> {
        let mut jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        jobs.pop_front()
    }
}

/// Completed conversions keyed by job id, awaiting pickup by the
/// caller that queued them
#[derive(Debug, Default)]
pub(super) struct ResponseTable {
    results: Mutex<HashMap<u64, ConversionResult>>,
}

impl ResponseTable {
    /// Store the result for a job id
    ///
    /// Ids are unique, so a collision can only come from a caller that
    /// never claimed its result; the replacement is logged, not fatal.
    pub fn insert(&self, id: u64, result: ConversionResult) {
        let mut results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        if results.insert(id, result).is_some() {
            tracing::warn!(id, "replaced an unclaimed synthesis result");
        }
    }

    /// Remove and return the result for a job id, if present
    pub fn take(&self, id: u64) -> Option<ConversionResult> {
        let mut results = self.results.lock().unwrap_or_else(|e| e.into_inner());
        results.remove(&id)
    }

    /// Number of unclaimed results
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.results.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;

    fn job(id: u64, payload: &str) -> ConversionJob {
        ConversionJob {
            id,
            payload: payload.to_string(),
            destination: PathBuf::from(format!("/tmp/out_{id}.mp3")),
        }
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let queue = RequestQueue::default();
        queue.push(job(1, "a"));
        queue.push(job(2, "b"));
        queue.push(job(3, "c"));

        assert_eq!(queue.pop().unwrap().id, 1);
        assert_eq!(queue.pop().unwrap().id, 2);
        assert_eq!(queue.pop().unwrap().id, 3);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn take_removes_the_result() {
        let table = ResponseTable::default();
        table.insert(
            7,
            ConversionResult {
                destination: PathBuf::from("/tmp/out_7.mp3"),
            },
        );

        assert!(table.take(7).is_some());
        assert!(table.take(7).is_none());
    }

    #[test]
    fn take_of_unknown_id_is_none() {
        let table = ResponseTable::default();
        assert!(table.take(42).is_none());
    }

    #[test]
    fn concurrent_takes_yield_exactly_one_result() {
        let table = Arc::new(ResponseTable::default());
        table.insert(
            9,
            ConversionResult {
                destination: PathBuf::from("/tmp/out_9.mp3"),
            },
        );

        let takers: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || table.take(9).is_some())
            })
            .collect();

        let wins = takers
            .into_iter()
            .map(|taker| taker.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn insert_replaces_unclaimed_results() {
        let table = ResponseTable::default();
        table.insert(
            1,
            ConversionResult {
                destination: PathBuf::from("/tmp/first.mp3"),
            },
        );
        table.insert(
            1,
            ConversionResult {
                destination: PathBuf::from("/tmp/second.mp3"),
            },
        );

        let result = table.take(1).unwrap();
        assert_eq!(result.destination, PathBuf::from("/tmp/second.mp3"));
        assert_eq!(table.len(), 0);
    }
}

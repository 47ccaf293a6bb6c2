//! Scripted mock read engine.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use bytes::Bytes;
use rxscan_core::ServiceHealth;
use rxscan_core::ocr::{
    Error, OcrEngine, OperationHandle, PollOutcome, ReadLine, ReadPage, Result,
};

/// Scripted behavior for one submission.
#[derive(Debug, Clone)]
pub struct MockScan {
    outcome: Outcome,
    pending_polls: u32,
    rejection: Option<String>,
}

#[derive(Debug, Clone)]
enum Outcome {
    Succeed(Vec<ReadPage>),
    Fail(String),
    Never,
}

impl MockScan {
    /// Accept the submission and succeed with the given pages.
    pub fn succeed(pages: Vec<ReadPage>) -> Self {
        Self {
            outcome: Outcome::Succeed(pages),
            pending_polls: 0,
            rejection: None,
        }
    }

    /// Accept the submission and succeed with one page of the given lines.
    pub fn succeed_with_lines(lines: &[&str]) -> Self {
        let lines = lines.iter().map(|text| ReadLine::new(*text)).collect();
        Self::succeed(vec![ReadPage::new(1, lines)])
    }

    /// Accept the submission, then report an engine-side failure.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(reason.into()),
            pending_polls: 0,
            rejection: None,
        }
    }

    /// Reject the submission outright.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Never,
            pending_polls: 0,
            rejection: Some(reason.into()),
        }
    }

    /// Accept the submission and stay pending on every poll.
    pub fn never_finishes() -> Self {
        Self {
            outcome: Outcome::Never,
            pending_polls: 0,
            rejection: None,
        }
    }

    /// Answer `Pending` this many times before the terminal outcome.
    pub fn with_pending_polls(mut self, polls: u32) -> Self {
        self.pending_polls = polls;
        self
    }
}

impl Default for MockScan {
    fn default() -> Self {
        Self::succeed(Vec::new())
    }
}

#[derive(Debug)]
struct Progress {
    scan: MockScan,
    polls_left: u32,
}

/// Mock read engine driven by a queue of [`MockScan`] scripts.
///
/// Each submission consumes the next script from the queue (or the
/// fallback once the queue is empty) and mints a fresh operation
/// handle; polling that handle plays the script back. Counters record
/// how many submissions and polls the engine served.
#[derive(Debug, Default)]
pub struct MockReadEngine {
    scripts: Mutex<VecDeque<MockScan>>,
    fallback: MockScan,
    active: Mutex<HashMap<String, Progress>>,
    submits: AtomicU32,
    polls: AtomicU32,
    minted: AtomicU32,
}

impl MockReadEngine {
    /// Creates an engine with an empty script queue.
    ///
    /// Until scripts are queued, every submission succeeds immediately
    /// with no recognized text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a script to the submission queue.
    pub fn queue(self, scan: MockScan) -> Self {
        self.scripts
            .lock()
            .expect("script queue lock poisoned")
            .push_back(scan);
        self
    }

    /// Sets the script used once the queue is exhausted.
    pub fn with_fallback(mut self, scan: MockScan) -> Self {
        self.fallback = scan;
        self
    }

    /// Number of submissions served so far.
    pub fn submit_count(&self) -> u32 {
        self.submits.load(Ordering::SeqCst)
    }

    /// Number of polls served so far.
    pub fn poll_count(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl OcrEngine for MockReadEngine {
    async fn submit(&self, _data: Bytes, _filename: Option<&str>) -> Result<OperationHandle> {
        self.submits.fetch_add(1, Ordering::SeqCst);

        let scan = self
            .scripts
            .lock()
            .expect("script queue lock poisoned")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        if let Some(reason) = &scan.rejection {
            return Err(Error::submit(reason.clone()));
        }

        let minted = self.minted.fetch_add(1, Ordering::SeqCst) + 1;
        let handle = OperationHandle::new(format!("mock://operations/{minted}"));
        let polls_left = scan.pending_polls;
        self.active
            .lock()
            .expect("active operations lock poisoned")
            .insert(handle.as_str().to_owned(), Progress { scan, polls_left });

        Ok(handle)
    }

    async fn poll(&self, operation: &OperationHandle) -> Result<PollOutcome> {
        self.polls.fetch_add(1, Ordering::SeqCst);

        let mut active = self
            .active
            .lock()
            .expect("active operations lock poisoned");
        let Some(progress) = active.get_mut(operation.as_str()) else {
            return Err(Error::decode(format!("unknown operation '{operation}'")));
        };

        match &progress.scan.outcome {
            Outcome::Never => Ok(PollOutcome::Pending),
            _ if progress.polls_left > 0 => {
                progress.polls_left -= 1;
                Ok(PollOutcome::Pending)
            }
            Outcome::Succeed(pages) => Ok(PollOutcome::Succeeded(pages.clone())),
            Outcome::Fail(reason) => Ok(PollOutcome::Failed {
                reason: reason.clone(),
            }),
        }
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

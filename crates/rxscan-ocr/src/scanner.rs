//! Document scanning over an asynchronous read engine.
//!
//! [`DocumentScanner`] wraps any [`OcrEngine`] with the resilience the
//! submit/poll protocol needs in practice: backoff-paced polling under a
//! hard wall-clock budget, whole-sequence retries for transient faults,
//! and best-effort batch fan-out.

use std::fmt;
use std::time::Duration;

use futures::future::join_all;
use rxscan_core::ocr::{BoxedOcrEngine, Error, OcrFileResult, PollOutcome, Result};
use rxscan_core::{ServiceHealth, SourceFile};
use tokio::time::Instant;

use crate::TRACING_TARGET_SCANNER;
use crate::backoff::poll_delay;
use crate::client::ReadConfig;

/// Default wall-clock polling budget per scanned file.
pub const DEFAULT_MAX_POLLING: Duration = Duration::from_secs(60);

/// Default number of whole-sequence retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Scans documents through a read engine, hiding its asynchronous
/// submit/poll protocol.
///
/// One scanner instance is reusable across many scans and safe to share:
/// it holds only the engine handle and the polling policy, never
/// per-operation state.
#[derive(Clone)]
pub struct DocumentScanner {
    engine: BoxedOcrEngine,
    max_polling: Duration,
    max_retries: u32,
}

impl fmt::Debug for DocumentScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentScanner")
            .field("max_polling", &self.max_polling)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl DocumentScanner {
    /// Creates a scanner over an engine with the default polling policy.
    pub fn new(engine: BoxedOcrEngine) -> Self {
        Self {
            engine,
            max_polling: DEFAULT_MAX_POLLING,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Creates a scanner that takes its polling policy from a client configuration.
    pub fn from_config(engine: BoxedOcrEngine, config: &ReadConfig) -> Self {
        Self {
            engine,
            max_polling: config.max_polling,
            max_retries: config.max_retries,
        }
    }

    /// Sets the wall-clock polling budget per scanned file.
    pub fn with_max_polling(mut self, budget: Duration) -> Self {
        self.max_polling = budget;
        self
    }

    /// Sets the number of whole-sequence retries after the first attempt.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Performs a health check against the underlying engine.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.engine.health_check().await
    }

    /// Scans one file, retrying the whole submit/poll sequence on
    /// transient faults.
    ///
    /// Terminal errors (the engine reporting failure, or the polling
    /// budget running out) propagate immediately; retrying them would
    /// only reproduce the same answer. When every attempt fails on a
    /// transient fault, the last error is wrapped into
    /// [`Error::Failed`].
    pub async fn analyze(&self, file: &SourceFile) -> Result<OcrFileResult> {
        let filename = file.filename().unwrap_or("<unnamed>");
        let attempts = self.max_retries.saturating_add(1);
        let mut last_error = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = poll_delay(attempt - 1);
                tracing::debug!(
                    target: TRACING_TARGET_SCANNER,
                    filename,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying scan"
                );
                tokio::time::sleep(delay).await;
            }

            match self.scan_once(file).await {
                Ok(result) => return Ok(result),
                Err(err) if err.is_retryable() => {
                    tracing::warn!(
                        target: TRACING_TARGET_SCANNER,
                        filename,
                        attempt,
                        error = %err,
                        "Scan attempt failed"
                    );
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(Error::retries_exhausted(attempts, last_error))
    }

    /// One submit/poll sequence under the wall-clock budget.
    async fn scan_once(&self, file: &SourceFile) -> Result<OcrFileResult> {
        let operation = self.engine.submit(file.data.clone(), file.filename()).await?;
        let started = Instant::now();
        let mut poll = 0;

        loop {
            tokio::time::sleep(poll_delay(poll)).await;
            poll += 1;

            // The budget is wall-clock time since submission, so it is
            // checked even when the sleep itself outlived it.
            if started.elapsed() >= self.max_polling {
                return Err(Error::timeout(operation, self.max_polling));
            }

            match self.engine.poll(&operation).await? {
                PollOutcome::Pending => continue,
                PollOutcome::Succeeded(pages) => {
                    let result = OcrFileResult::from_pages(file.filename.clone(), pages);
                    tracing::debug!(
                        target: TRACING_TARGET_SCANNER,
                        operation = %operation,
                        pages = result.pages,
                        lines = result.total_lines,
                        "Scan succeeded"
                    );
                    return Ok(result);
                }
                PollOutcome::Failed { reason } => return Err(Error::failed(reason)),
            }
        }
    }

    /// Scans many files concurrently, tolerating partial failure.
    ///
    /// Every file is analyzed independently; failures are logged and
    /// dropped from the output. The first error is raised only when not
    /// a single file produced text, so downstream stages always operate
    /// on whatever was recoverable.
    pub async fn analyze_batch(&self, files: &[SourceFile]) -> Result<Vec<OcrFileResult>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let outcomes = join_all(files.iter().map(|file| self.analyze(file))).await;

        let mut results = Vec::with_capacity(files.len());
        let mut first_error = None;
        let mut failed = 0usize;

        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(result) => results.push(result),
                Err(err) => {
                    failed += 1;
                    tracing::warn!(
                        target: TRACING_TARGET_SCANNER,
                        filename = file.filename().unwrap_or("<unnamed>"),
                        error = %err,
                        "File scan failed"
                    );
                    first_error.get_or_insert(err);
                }
            }
        }

        if results.is_empty() {
            if let Some(err) = first_error {
                tracing::error!(
                    target: TRACING_TARGET_SCANNER,
                    total = files.len(),
                    "All file scans failed"
                );
                return Err(err);
            }
        }

        if failed > 0 {
            tracing::warn!(
                target: TRACING_TARGET_SCANNER,
                scanned = results.len(),
                failed,
                "Batch completed with partial failures"
            );
        } else {
            tracing::debug!(
                target: TRACING_TARGET_SCANNER,
                scanned = results.len(),
                "Batch completed"
            );
        }

        Ok(results)
    }
}

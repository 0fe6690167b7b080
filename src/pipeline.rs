//! Concurrent alteration of a stream of names sharing one state

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::alterations::{default_wordlist, load_wordlist, MutationState};
use crate::error::{AlterationError, Result};
use crate::stringset::StringSet;
use crate::types::{Alteration, AlterationConfig};

/// Counters updated by every pipeline run
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    names_processed: AtomicU64,
    names_generated: AtomicU64,
    names_rejected: AtomicU64,
}

/// Point-in-time copy of [`PipelineMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub names_processed: u64,
    pub names_generated: u64,
    pub names_rejected: u64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_success(&self, generated: usize) {
        self.names_processed.fetch_add(1, Ordering::Relaxed);
        self.names_generated.fetch_add(generated as u64, Ordering::Relaxed);
    }

    fn record_rejection(&self) {
        self.names_processed.fetch_add(1, Ordering::Relaxed);
        self.names_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            names_processed: self.names_processed.load(Ordering::Relaxed),
            names_generated: self.names_generated.load(Ordering::Relaxed),
            names_rejected: self.names_rejected.load(Ordering::Relaxed),
        }
    }
}

/// A name that could not be altered
#[derive(Debug, Clone)]
pub struct FailedName {
    pub name: String,
    pub error: AlterationError,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Every generated name, deduplicated across inputs
    pub names: StringSet,
    pub failed: Vec<FailedName>,
    pub processed: usize,
}

impl PipelineReport {
    fn merge(&mut self, other: PipelineReport) {
        self.names.extend(other.names);
        self.failed.extend(other.failed);
        self.processed += other.processed;
    }
}

/// Runs the enabled alterations over many names on a bounded worker pool.
///
/// Generator calls are CPU-bound, so each one runs on the blocking pool
/// while a semaphore caps how many are in flight.
#[derive(Clone)]
pub struct AlterationPipeline {
    state: Arc<MutationState>,
    alterations: Arc<[Alteration]>,
    semaphore: Arc<Semaphore>,
    metrics: Arc<PipelineMetrics>,
}

impl AlterationPipeline {
    /// `concurrency` is clamped to `1..=Semaphore::MAX_PERMITS`
    pub fn new(state: Arc<MutationState>, alterations: Vec<Alteration>, concurrency: usize) -> Self {
        tracing::debug!(
            alterations = %alterations.len(),
            learns_words = %alterations.iter().any(Alteration::updates_cache),
            "Alteration pipeline created"
        );

        Self {
            state,
            alterations: alterations.into(),
            semaphore: Arc::new(Semaphore::new(concurrency.clamp(1, Semaphore::MAX_PERMITS))),
            metrics: Arc::new(PipelineMetrics::new()),
        }
    }

    /// Build the state and pipeline described by `config`, loading its
    /// wordlist or falling back to the built-in one.
    pub fn from_config(config: &AlterationConfig) -> Result<Self> {
        config.validate()?;

        let wordlist = match &config.wordlist {
            Some(path) => load_wordlist(path)?,
            None => default_wordlist(),
        };

        let state = MutationState::from_config(config, &wordlist);
        tracing::info!(
            words = %wordlist.len(),
            min_for_word_flip = %state.min_for_word_flip(),
            edit_distance = %state.edit_distance(),
            "Alteration state initialized"
        );

        Ok(Self::new(Arc::new(state), config.enabled(), config.concurrency))
    }

    pub fn state(&self) -> &Arc<MutationState> {
        &self.state
    }

    pub fn alterations(&self) -> &[Alteration] {
        &self.alterations
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Alter a single name with every enabled technique
    pub async fn alter(&self, name: &str) -> Result<StringSet> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| AlterationError::internal(e.to_string()))?;

        let state = Arc::clone(&self.state);
        let alterations = Arc::clone(&self.alterations);
        let name = name.to_string();

        tokio::task::spawn_blocking(move || state.generate(&name, &alterations)).await?
    }

    /// Alter a batch of names concurrently.
    ///
    /// Malformed names are reported in the result and do not stop the batch.
    pub async fn run_batch(&self, names: &[String]) -> PipelineReport {
        let batch_start = Instant::now();
        let futures = names.iter().map(|name| self.alter(name));
        let results = join_all(futures).await;

        let mut report = PipelineReport::default();
        for (name, result) in names.iter().zip(results) {
            report.processed += 1;
            match result {
                Ok(generated) => {
                    self.metrics.record_success(generated.len());
                    report.names.extend(generated);
                }
                Err(error) => {
                    self.metrics.record_rejection();
                    tracing::warn!(name = %name, error = %error, "Failed to alter name");
                    report.failed.push(FailedName {
                        name: name.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            names_requested = %names.len(),
            names_generated = %report.names.len(),
            errors = %report.failed.len(),
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Alteration batch completed"
        );

        report
    }

    /// Alter `names` in batches, calling `on_progress(done, total)` after each
    pub async fn run<F>(&self, names: &[String], batch_size: usize, mut on_progress: F) -> PipelineReport
    where
        F: FnMut(usize, usize),
    {
        let mut report = PipelineReport::default();
        for batch in names.chunks(batch_size.max(1)) {
            report.merge(self.run_batch(batch).await);
            on_progress(report.processed, names.len());
        }
        report
    }
}

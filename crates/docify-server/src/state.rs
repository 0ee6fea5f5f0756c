//! Shared server state and the in-memory job store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use docify_core::{Clock, JobRecord, SystemClock};

use crate::server::ServeConfig;
use crate::templates::TemplateEngine;

/// In-memory mapping from job id to its record.
///
/// Jobs are created at generate time and never expire; the process lifetime
/// is the retention policy.
pub struct JobStore {
    jobs: RwLock<HashMap<String, JobRecord>>,
    clock: Arc<dyn Clock>,
}

impl JobStore {
    /// Create an empty store that reads time from the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Current time from the injected clock.
    pub fn now_unix(&self) -> u64 {
        self.clock.now_unix()
    }

    /// Insert a record, replacing any record with the same id.
    pub async fn insert(&self, record: JobRecord) {
        let mut jobs = self.jobs.write().await;
        jobs.insert(record.job_id.clone(), record);
    }

    /// Look up a record by id.
    pub async fn get(&self, job_id: &str) -> Option<JobRecord> {
        let jobs = self.jobs.read().await;
        jobs.get(job_id).cloned()
    }

    /// Number of jobs that have not reached their terminal state.
    pub async fn active_count(&self) -> usize {
        let now = self.clock.now_unix();
        let jobs = self.jobs.read().await;

        jobs.values()
            .filter(|job| !job.status_at(now).is_terminal())
            .count()
    }
}

/// State shared across request handlers.
pub struct AppState {
    pub config: ServeConfig,
    pub store: JobStore,
    pub templates: TemplateEngine,
}

impl AppState {
    /// Create state backed by the wall clock.
    pub fn new(config: ServeConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create state with an injected clock so tests can pin elapsed time.
    pub fn with_clock(config: ServeConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: JobStore::new(clock),
            templates: TemplateEngine::new(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    use docify_core::{JobOptions, RepoRef};

    struct ManualClock(AtomicU64);

    impl Clock for ManualClock {
        fn now_unix(&self) -> u64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn record(created_at: u64) -> JobRecord {
        let repo = RepoRef::parse("https://github.com/acme/widgets").unwrap();
        JobRecord::new(repo, JobOptions::default(), created_at)
    }

    #[tokio::test]
    async fn stores_and_retrieves_jobs() {
        let store = JobStore::new(Arc::new(ManualClock(AtomicU64::new(100))));
        let job = record(100);
        let id = job.job_id.clone();

        store.insert(job.clone()).await;

        assert_eq!(store.get(&id).await, Some(job));
        assert_eq!(store.get("unknown").await, None);
    }

    #[tokio::test]
    async fn reinserting_the_same_id_replaces_the_record() {
        let store = JobStore::new(Arc::new(ManualClock(AtomicU64::new(100))));
        let job = record(100);
        let id = job.job_id.clone();

        store.insert(job).await;
        store.insert(record(100)).await;

        assert!(store.get(&id).await.is_some());
        assert_eq!(store.active_count().await, 1);
    }

    #[tokio::test]
    async fn active_count_excludes_completed_jobs() {
        let clock = Arc::new(ManualClock(AtomicU64::new(100)));
        let store = JobStore::new(clock.clone());

        store.insert(record(100)).await;
        assert_eq!(store.active_count().await, 1);

        clock.0.store(500, Ordering::SeqCst);
        assert_eq!(store.active_count().await, 0);
    }
}

//! Job identifiers and the simulated build schedule.

use serde::{Deserialize, Serialize};

use crate::repo::RepoRef;

/// Fixed window, in seconds, a simulated build takes from submission to done.
pub const ESTIMATED_COMPLETION_SECONDS: u64 = 30;

/// Lifecycle of a simulated documentation build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Queued,
    Cloning,
    Analyzing,
    Generating,
    Building,
    Completed,
}

impl JobStatus {
    /// Whether the job has reached its terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed)
    }
}

/// Options accepted with a build request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOptions {
    pub include_ai_summaries: bool,
    pub generate_search_index: bool,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            include_ai_summaries: true,
            generate_search_index: true,
        }
    }
}

/// A submitted (simulated) documentation build.
///
/// Status and progress are not stored; they are derived from the creation
/// time, so repeated polls of the same job are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: String,
    pub repository: RepoRef,
    pub options: JobOptions,

    /// Submission time, seconds since the Unix epoch
    pub created_at_unix: u64,
}

impl JobRecord {
    /// Create a record for a freshly submitted build.
    ///
    /// The id is synthesized from owner, name, and submission time.
    /// Uniqueness is best-effort: two submissions of the same repository in
    /// the same second collide, and the later one wins.
    pub fn new(repository: RepoRef, options: JobOptions, now_unix: u64) -> Self {
        let job_id = format!("{}-{}-{}", repository.owner, repository.name, now_unix);

        Self {
            job_id,
            repository,
            options,
            created_at_unix: now_unix,
        }
    }

    /// Status at the given time, derived from the fixed build schedule.
    pub fn status_at(&self, now_unix: u64) -> JobStatus {
        schedule_status(now_unix.saturating_sub(self.created_at_unix))
    }

    /// Progress percentage at the given time.
    pub fn progress_at(&self, now_unix: u64) -> u8 {
        schedule_progress(now_unix.saturating_sub(self.created_at_unix))
    }
}

/// Status after `elapsed` seconds of the simulated build.
///
/// Phase boundaries partition the 30-second completion window.
fn schedule_status(elapsed: u64) -> JobStatus {
    match elapsed {
        0..=1 => JobStatus::Pending,
        2..=4 => JobStatus::Queued,
        5..=9 => JobStatus::Cloning,
        10..=14 => JobStatus::Analyzing,
        15..=21 => JobStatus::Generating,
        22..=29 => JobStatus::Building,
        _ => JobStatus::Completed,
    }
}

/// Linear progress over the completion window, capped at 100.
fn schedule_progress(elapsed: u64) -> u8 {
    if elapsed >= ESTIMATED_COMPLETION_SECONDS {
        return 100;
    }
    (elapsed * 100 / ESTIMATED_COMPLETION_SECONDS) as u8
}

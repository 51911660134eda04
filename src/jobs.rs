//! # Job Queue
//!
//! In-memory asynchronous jobs. [`JobQueue::submit`] returns an id right
//! away and runs the task on the tokio runtime; callers poll for status.
//!
//! ## Lifecycle
//!
//! ```text
//! queued -> running -> done
//!                   \-> failed
//! ```
//!
//! Progress is an integer in `[0, 100]` that never decreases. A job makes
//! exactly one terminal transition; a panicking task counts as failed.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Running,
    Done,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Snapshot of a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    pub progress: u8,
    /// Unix milliseconds.
    pub created_at: i64,
    /// Unix milliseconds.
    pub updated_at: i64,
    pub result: Option<Value>,
    pub error: Option<String>,
}

type JobMap = Arc<RwLock<HashMap<String, Job>>>;

/// Handed to a running task to report progress.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    jobs: JobMap,
    id: String,
}

impl ProgressHandle {
    /// Report progress. Values are floored and clamped to `[0, 100]`;
    /// anything below the current value is ignored, as is any report after
    /// the job finished.
    pub async fn set(&self, progress: f64) {
        let clamped = if progress.is_nan() {
            0
        } else {
            progress.floor().clamp(0.0, 100.0) as u8
        };
        let mut jobs = self.jobs.write().await;
        if let Some(job) = jobs.get_mut(&self.id) {
            if job.status.is_terminal() || clamped <= job.progress {
                return;
            }
            job.progress = clamped;
            job.updated_at = now_ms();
        }
    }

    pub fn job_id(&self) -> &str {
        &self.id
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// The job registry.
#[derive(Debug, Clone, Default)]
pub struct JobQueue {
    jobs: JobMap,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job and start it. Must be called inside a tokio runtime.
    pub async fn submit<F, Fut>(&self, task: F) -> String
    where
        F: FnOnce(ProgressHandle) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value, String>> + Send + 'static,
    {
        let id = Uuid::new_v4().to_string();
        let now = now_ms();
        self.jobs.write().await.insert(
            id.clone(),
            Job {
                id: id.clone(),
                status: JobStatus::Queued,
                progress: 0,
                created_at: now,
                updated_at: now,
                result: None,
                error: None,
            },
        );
        log::debug!("[jobs] {} queued", id);

        let jobs = self.jobs.clone();
        let handle = ProgressHandle {
            jobs: jobs.clone(),
            id: id.clone(),
        };
        let job_id = id.clone();
        tokio::spawn(async move {
            transition(&jobs, &job_id, |job| job.status = JobStatus::Running).await;
            log::debug!("[jobs] {} running", job_id);

            let outcome = match tokio::spawn(task(handle)).await {
                Ok(result) => result,
                Err(e) => Err(format!("task aborted: {}", e)),
            };

            transition(&jobs, &job_id, |job| match outcome {
                Ok(value) => {
                    job.status = JobStatus::Done;
                    job.progress = 100;
                    job.result = Some(value);
                }
                Err(error) => {
                    job.status = JobStatus::Failed;
                    job.error = Some(error);
                }
            })
            .await;
        });

        id
    }

    pub async fn poll(&self, id: &str) -> Option<Job> {
        self.jobs.read().await.get(id).cloned()
    }

    /// All jobs, oldest first.
    pub async fn list(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.jobs.read().await.values().cloned().collect();
        jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        jobs
    }

    /// Drop finished jobs last updated more than `max_age` ago. Queued and
    /// running jobs are kept. Returns the number removed.
    pub async fn clear_older_than(&self, max_age: Duration) -> usize {
        let max_age_ms = i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX);
        let cutoff = now_ms().saturating_sub(max_age_ms);
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|_, job| !(job.status.is_terminal() && job.updated_at <= cutoff));
        before - jobs.len()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

/// Apply a change to a job that has not finished yet.
async fn transition(jobs: &JobMap, id: &str, change: impl FnOnce(&mut Job)) {
    let mut jobs = jobs.write().await;
    if let Some(job) = jobs.get_mut(id) {
        if job.status.is_terminal() {
            return;
        }
        change(job);
        job.updated_at = now_ms();
        if job.status.is_terminal() {
            log::debug!("[jobs] {} {:?}", id, job.status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn wait_terminal(queue: &JobQueue, id: &str) -> Job {
        for _ in 0..200 {
            if let Some(job) = queue.poll(id).await {
                if job.status.is_terminal() {
                    return job;
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("job {id} did not finish");
    }

    #[tokio::test]
    async fn test_job_completes() {
        let queue = JobQueue::new();
        let id = queue
            .submit(|progress| async move {
                progress.set(40.7).await;
                Ok::<_, String>(json!({"icons": 3}))
            })
            .await;
        let job = wait_terminal(&queue, &id).await;
        assert_eq!(job.status, JobStatus::Done);
        assert_eq!(job.progress, 100);
        assert_eq!(job.result, Some(json!({"icons": 3})));
        assert!(job.updated_at >= job.created_at);
    }

    #[tokio::test]
    async fn test_job_fails() {
        let queue = JobQueue::new();
        let id = queue.submit(|_| async { Err::<Value, _>("provider down".to_string()) }).await;
        let job = wait_terminal(&queue, &id).await;
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.error.as_deref(), Some("provider down"));
        assert_eq!(job.result, None);
    }

    #[tokio::test]
    async fn test_panicking_task_fails() {
        let queue = JobQueue::new();
        let id = queue
            .submit(|_| async {
                if true {
                    panic!("boom");
                }
                Ok::<_, String>(Value::Null)
            })
            .await;
        let job = wait_terminal(&queue, &id).await;
        assert_eq!(job.status, JobStatus::Failed);
    }

    #[tokio::test]
    async fn test_progress_clamped_and_monotonic() {
        let queue = JobQueue::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let id = queue
            .submit(|progress| async move {
                progress.set(150.0).await;
                progress.set(20.0).await;
                let _ = rx.await;
                Ok::<_, String>(Value::Null)
            })
            .await;

        let mut seen = 0;
        for _ in 0..200 {
            let job = queue.poll(&id).await.unwrap();
            assert!(job.progress >= seen);
            seen = job.progress;
            if seen == 100 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(seen, 100);
        assert_eq!(queue.poll(&id).await.unwrap().status, JobStatus::Running);
        tx.send(()).unwrap();
        assert_eq!(wait_terminal(&queue, &id).await.progress, 100);
    }

    #[tokio::test]
    async fn test_list_and_unknown() {
        let queue = JobQueue::new();
        let a = queue.submit(|_| async { Ok::<_, String>(Value::Null) }).await;
        let b = queue.submit(|_| async { Ok::<_, String>(Value::Null) }).await;
        let ids: Vec<String> = queue.list().await.into_iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a) && ids.contains(&b));
        assert_eq!(queue.poll("nope").await, None);
    }

    #[tokio::test]
    async fn test_clear_drops_only_finished_jobs() {
        let queue = JobQueue::new();
        let done = queue.submit(|_| async { Ok::<_, String>(json!({"icons": []})) }).await;
        wait_terminal(&queue, &done).await;

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let running = queue
            .submit(|_| async move {
                let _ = rx.await;
                Ok::<_, String>(Value::Null)
            })
            .await;

        assert_eq!(queue.clear_older_than(Duration::from_secs(3600)).await, 0);
        assert_eq!(queue.len().await, 2);

        assert_eq!(queue.clear_older_than(Duration::ZERO).await, 1);
        assert_eq!(queue.poll(&done).await, None);
        assert!(queue.poll(&running).await.is_some());

        tx.send(()).unwrap();
        wait_terminal(&queue, &running).await;
        assert_eq!(queue.clear_older_than(Duration::ZERO).await, 1);
        assert!(queue.is_empty().await);
    }
}

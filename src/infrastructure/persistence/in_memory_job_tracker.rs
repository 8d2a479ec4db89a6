use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::application::ports::JobTracker;
use crate::domain::{Job, JobId, JobStatus, StoragePath};

/// Mutex-wrapped map holding every job for the life of the process. Jobs are
/// never evicted; they disappear with the process.
pub struct InMemoryJobTracker {
    jobs: Mutex<HashMap<JobId, Job>>,
}

impl InMemoryJobTracker {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(HashMap::new()),
        }
    }

    fn with_jobs<R>(&self, f: impl FnOnce(&mut HashMap<JobId, Job>) -> R) -> R {
        // Writes replace whole fields, so a poisoned lock never holds a
        // half-written record.
        let mut jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut jobs)
    }
}

impl Default for InMemoryJobTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTracker for InMemoryJobTracker {
    fn create(&self, id: JobId) {
        self.with_jobs(|jobs| {
            jobs.insert(id, Job::new(id));
        });
    }

    fn set_progress(&self, id: JobId, percent: u8) {
        self.with_jobs(|jobs| match jobs.get_mut(&id) {
            Some(job) if !job.status.is_terminal() => {
                job.progress = percent;
                job.updated_at = Utc::now();
            }
            Some(_) => {}
            None => {
                // First update won the race against `create`; start a fresh
                // record rather than dropping the progress signal.
                let mut job = Job::new(id);
                job.status = JobStatus::Processing;
                job.progress = percent;
                jobs.insert(id, job);
            }
        });
    }

    fn set_completed(&self, id: JobId, output: StoragePath) {
        self.with_jobs(|jobs| {
            let job = jobs.entry(id).or_insert_with(|| Job::new(id));
            job.status = JobStatus::Completed;
            job.progress = 100;
            job.output = Some(output);
            job.updated_at = Utc::now();
        });
    }

    fn set_error(&self, id: JobId, message: &str) {
        self.with_jobs(|jobs| {
            let job = jobs.entry(id).or_insert_with(|| Job::new(id));
            job.status = JobStatus::Error;
            job.error_message = Some(message.to_string());
            job.updated_at = Utc::now();
        });
    }

    fn get(&self, id: JobId) -> Option<Job> {
        self.with_jobs(|jobs| jobs.get(&id).cloned())
    }
}

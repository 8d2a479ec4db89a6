use crate::domain::{Job, JobId, StoragePath};

/// Process-wide job state store shared between the submission handler and the
/// background runner tasks. Implementations serialize all operations under a
/// single lock; critical sections are O(1) with no I/O, so the port is
/// synchronous and safe to call from async contexts without awaiting.
pub trait JobTracker: Send + Sync {
    /// Insert the initial `started`/0 record. Callers must do this before the
    /// runner is allowed to mutate the same id.
    fn create(&self, id: JobId);

    /// Overwrite only the progress field of a live job. A terminal job is
    /// left untouched; an unknown id gets a fresh `processing` record so an
    /// out-of-order first update cannot be lost.
    fn set_progress(&self, id: JobId, percent: u8);

    fn set_completed(&self, id: JobId, output: StoragePath);

    fn set_error(&self, id: JobId, message: &str);

    /// Atomic snapshot of the job, taken under the same lock as the writes.
    fn get(&self, id: JobId) -> Option<Job>;
}

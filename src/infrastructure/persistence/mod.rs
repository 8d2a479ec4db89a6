mod in_memory_job_tracker;

pub use in_memory_job_tracker::InMemoryJobTracker;

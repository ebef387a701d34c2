use super::*;
use crate::ID;
use crate::SegmentError;
use crate::SegmentResult;
use crate::report::Report;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A submitted segment job running on the blocking pool.
pub struct JobHandle {
    job: Arc<Job>,
    task: JoinHandle<SegmentResult<Report>>,
}

impl JobHandle {
    pub(crate) fn new(job: Arc<Job>, task: JoinHandle<SegmentResult<Report>>) -> Self {
        Self { job, task }
    }
    pub fn id(&self) -> ID<Job> {
        self.job.id()
    }
    pub fn job(&self) -> &Arc<Job> {
        &self.job
    }
    /// Segments processed so far, out of the total.
    pub fn progress(&self) -> (usize, usize) {
        (self.job.processed(), self.job.total())
    }
    pub fn phase(&self) -> Phase {
        self.job.phase()
    }
    pub fn cancel(&self) {
        self.job.cancel();
    }
    /// Outcomes recorded so far, readable while running and after any ending.
    pub fn report(&self) -> Report {
        self.job.report()
    }
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
    /// Wait for the job to end.
    pub async fn join(self) -> SegmentResult<Report> {
        self.task
            .await
            .map_err(|e| SegmentError::Aborted(e.to_string()))?
    }
}

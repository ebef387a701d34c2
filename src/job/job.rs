use super::*;
use crate::ID;
use crate::Segment;
use crate::SegmentResult;
use crate::report::Outcome;
use crate::report::Report;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Shared state of one segment job.
///
/// The orchestrator writes progress, phase, and outcomes; observers read
/// them concurrently and may request cancellation at any time.
#[derive(Debug)]
pub struct Job {
    id: ID<Job>,
    dest: String,
    description: String,
    total: usize,
    processed: AtomicUsize,
    cancel: AtomicBool,
    deadline: Option<Instant>,
    phase: Mutex<Phase>,
    report: RwLock<Report>,
}

impl Job {
    pub fn new(dest: &str, description: &str, total: usize) -> Self {
        Self {
            id: ID::default(),
            dest: dest.to_string(),
            description: description.to_string(),
            total,
            processed: AtomicUsize::new(0),
            cancel: AtomicBool::new(false),
            deadline: None,
            phase: Mutex::new(Phase::Validating),
            report: RwLock::new(Report::new(total)),
        }
    }
    /// Treat reaching `deadline` as a cancellation request.
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn id(&self) -> ID<Job> {
        self.id
    }
    pub fn dest(&self) -> &str {
        &self.dest
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    /// Ask the job to stop before its next segment starts.
    pub fn cancel(&self) {
        if !self.cancel.swap(true, Ordering::SeqCst) {
            log::warn!("cancellation requested for job {} ({})", self.dest, self.id);
        }
    }
    pub fn stop_requested(&self) -> bool {
        self.cancel.load(Ordering::SeqCst) || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
    pub(crate) fn enter(&self, phase: Phase) {
        let mut current = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        match phase {
            Phase::Extracting | Phase::Training | Phase::Recording | Phase::Releasing => {
                log::trace!("{} {} -> {}", self.dest, *current, phase)
            }
            _ => log::info!("{} {} -> {}", self.dest, *current, phase),
        }
        *current = phase;
    }

    pub(crate) fn update(&self, n: usize) {
        self.processed.fetch_add(n, Ordering::Relaxed);
    }
    pub(crate) fn record(&self, segment: Segment, outcome: Outcome) -> SegmentResult<()> {
        self.report
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .record(segment, outcome)
    }
    /// Snapshot of the outcomes recorded so far.
    pub fn report(&self) -> Report {
        self.report.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

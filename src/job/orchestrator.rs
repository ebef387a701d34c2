use super::*;
use crate::Segment;
use crate::SegmentError;
use crate::SegmentResult;
use crate::frame::Catalog;
use crate::frame::Frame;
use crate::frame::FrameKey;
use crate::frame::Lease;
use crate::report::Failure;
use crate::report::Outcome;
use crate::report::Report;
use crate::segment::Partition;
use crate::segment::SegmentKeys;
use crate::training::Blueprint;
use crate::training::Message;
use crate::training::Registry;
use crate::training::error_count;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

/// Trains one model per row of a key frame.
///
/// Every segment gets a fresh trainer configured from the same blueprint,
/// pointed at that segment's train (and validation) partitions. Segments run
/// strictly one after another; at most one segment's partitions exist in the
/// catalog at any time.
pub struct Orchestrator {
    parms: Blueprint,
    keys: SegmentKeys,
    registry: Registry,
    catalog: Arc<Catalog>,
    deadline: Option<Instant>,
}

impl Orchestrator {
    /// Validate the key frame and the algorithm. Nothing is locked or
    /// extracted yet.
    pub fn new(
        parms: Blueprint,
        segments: Frame,
        registry: Registry,
        catalog: Arc<Catalog>,
    ) -> SegmentResult<Self> {
        let keys = SegmentKeys::new(segments)?;
        if !registry.contains(&parms.algo) {
            return Err(SegmentError::UnknownAlgorithm(parms.algo.clone()));
        }
        Ok(Self {
            parms,
            keys,
            registry,
            catalog,
            deadline: None,
        })
    }
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }
    pub fn keys(&self) -> &SegmentKeys {
        &self.keys
    }

    /// Fresh job state sized to this orchestrator's segments, publishing
    /// its models under `dest`.
    pub fn job(&self, dest: &str) -> Job {
        Job::new(dest, &self.describe(), self.keys.len()).with_deadline(self.deadline)
    }

    /// Run on the blocking pool of the current tokio runtime.
    pub fn submit(self, dest: &str) -> JobHandle {
        let job = Arc::new(self.job(dest));
        log::info!("submitting {}", job.description());
        let task = {
            let job = job.clone();
            tokio::task::spawn_blocking(move || self.run(&job))
        };
        JobHandle::new(job, task)
    }

    /// Run every segment to completion on the calling thread.
    ///
    /// Per-segment failures are recorded in the report. Errors are reserved
    /// for faults that end the whole run: unresolvable frames, lock
    /// conflicts, partition name collisions, and cancellation. Outcomes
    /// recorded before the fault stay readable through [`Job::report`].
    pub fn run(&self, job: &Job) -> SegmentResult<Report> {
        let result = self.execute(job);
        match &result {
            Ok(report) => {
                job.enter(Phase::Done);
                log::info!(
                    "{} done: {} succeeded, {} failed",
                    job.dest(),
                    report.succeeded(),
                    report.failed()
                );
            }
            Err(e) if e.is_cancelled() => {
                job.enter(Phase::Cancelled);
                log::warn!("{} {}", job.dest(), e);
            }
            Err(e) => {
                job.enter(Phase::Failed);
                log::error!("{} failed: {}", job.dest(), e);
            }
        }
        result
    }

    fn execute(&self, job: &Job) -> SegmentResult<Report> {
        job.enter(Phase::Locking);
        let lease = Lease::acquire(self.catalog.clone(), job.id(), self.parms.frames())?;
        let train = self
            .reorder(Some(&self.parms.train))?
            .ok_or_else(|| SegmentError::Resolution(self.parms.train.clone()))?;
        let valid = self.reorder(self.parms.valid.as_ref())?;
        job.enter(Phase::Iterating);
        let ref mut progress = Progress::new(self.keys.len());
        for segment in 0..self.keys.len() {
            if job.stop_requested() {
                return Err(SegmentError::Cancelled {
                    processed: job.processed(),
                    total: job.total(),
                });
            }
            self.segment(job, segment, &train, valid.as_ref())?;
            progress.tick();
        }
        job.enter(Phase::Unlocking);
        lease.release()?;
        Ok(job.report())
    }

    /// Resolve a source frame and move the key columns to the front.
    /// An absent reference stays absent.
    fn reorder(&self, key: Option<&FrameKey>) -> SegmentResult<Option<Frame>> {
        key.map(|key| self.catalog.get(key)?.reorder(&self.keys.names()))
            .transpose()
    }

    /// Validation reads the training frame itself.
    fn self_validated(&self) -> bool {
        self.parms.valid.as_ref() == Some(&self.parms.train)
    }

    fn segment(&self, job: &Job, segment: Segment, train: &Frame, valid: Option<&Frame>) -> SegmentResult<()> {
        job.enter(Phase::Extracting);
        let train = Partition::extract(&self.catalog, train, segment, self.keys.probe(segment, train).as_ref())?;
        let valid = valid
            .filter(|_| !self.self_validated())
            .map(|v| Partition::extract(&self.catalog, v, segment, self.keys.probe(segment, v).as_ref()))
            .transpose()?;
        job.enter(Phase::Training);
        let outcome = match self.self_validated() {
            true => self.attempt(segment, &train, Some(&train)),
            false => self.attempt(segment, &train, valid.as_ref()),
        };
        job.update(1);
        job.enter(Phase::Recording);
        job.record(segment, outcome)?;
        job.enter(Phase::Releasing);
        train.release()?;
        valid.map(Partition::release).transpose()?;
        Ok(())
    }

    /// Configure, validate, and train a fresh trainer on one segment. Every
    /// failure, panics included, becomes a failed outcome.
    fn attempt(&self, segment: Segment, train: &Partition, valid: Option<&Partition>) -> Outcome {
        let parms = self.parms.substitute(train.key().clone(), valid.map(|v| v.key().clone()));
        let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
            let Some(mut trainer) = self.registry.make(&parms.algo) else {
                let message = Message::error("algo", format!("no trainer for {:?}", parms.algo));
                return Outcome::failed(Failure::configuration(&[message]));
            };
            trainer.configure(&parms, train.frame(), valid.map(Partition::frame));
            let messages = trainer.validate();
            match error_count(&messages) {
                0 => match trainer.train() {
                    Ok(model) => Outcome::trained(model),
                    Err(e) => Outcome::failed(Failure::training(&e)),
                },
                _ => Outcome::failed(Failure::configuration(&messages)),
            }
            .warned(&messages)
        }))
        .unwrap_or_else(|payload| Outcome::failed(Failure::panic(payload.as_ref())));
        match outcome.failure() {
            None => log::debug!("segment {} trained on {}", segment, train.key()),
            Some(failure) => log::warn!("segment {} {}", segment, failure),
        }
        outcome
    }

    fn describe(&self) -> String {
        format!(
            "{} models for {} segments of {} by {:?}",
            self.parms.algo,
            self.keys.len(),
            self.parms.train,
            self.keys.names()
        )
    }
}

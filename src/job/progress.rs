use std::time::Instant;

/// Throttled progress logging for a segment loop.
pub struct Progress {
    total: usize,
    ticks: usize,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        let now = Instant::now();
        Self {
            total,
            ticks: 0,
            begin: now,
            delta: now,
        }
    }
    pub fn ticks(&self) -> usize {
        self.ticks
    }
    /// Count one segment, logging at most once per interval and on the last.
    pub fn tick(&mut self) {
        self.ticks += 1;
        let now = Instant::now();
        if self.ticks == self.total || now.duration_since(self.delta) >= crate::PROGRESS_LOG_INTERVAL {
            let total_t = now.duration_since(self.begin);
            self.delta = now;
            log::info!(
                "progress: {:8.0?} {:>8} / {:<8} {:6.2}%   mean {:8.2} segments/s",
                total_t,
                self.ticks,
                self.total,
                self.ticks as f32 / self.total.max(1) as f32 * 100f32,
                self.ticks as f32 / total_t.as_secs_f32().max(f32::EPSILON),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks() {
        let mut progress = Progress::new(2);
        progress.tick();
        progress.tick();
        assert_eq!(progress.ticks(), 2);
        Progress::new(0).tick();
    }
}

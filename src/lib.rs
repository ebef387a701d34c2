//! Per-segment model training over columnar frames.
//!
//! A key frame names the segments (one row per segment), a blueprint names the
//! algorithm and the full train/validation frames, and the orchestrator trains
//! one model per segment on the rows matching that segment's key values.
#[cfg(feature = "server")]
pub mod cli;
pub mod error;
pub mod frame;
pub mod job;
pub mod report;
pub mod segment;
pub mod training;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Zero-based row index into a frame.
pub type Row = usize;
/// Zero-based segment index (row of the key frame).
pub type Segment = usize;
/// Cell value. Categorical cells hold their domain index, missing is NaN.
pub type Value = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::marker::PhantomData;

/// Identifier of a `T` (a job, a model), a time-ordered uuid.
pub struct ID<T> {
    uuid: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            uuid: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<T> std::fmt::Debug for ID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID({})", self.uuid)
    }
}
impl<T> std::fmt::Display for ID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

/// Serialized as the bare uuid string.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.uuid)
    }
}

// ============================================================================
// ROW MATCHING
// ============================================================================
/// Rows per parallel chunk when scanning a frame for a segment's rows.
pub const MATCH_CHUNK_ROWS: usize = 1 << 14;

// ============================================================================
// PARTITIONS
// ============================================================================
/// Infix of per-segment partition names: `{source}{SEGMENT_SUFFIX}{index}`.
pub const SEGMENT_SUFFIX: &str = "_segment_";

// ============================================================================
// TRAINING
// ============================================================================
/// Minimum non-missing rows a segment needs before a trainer accepts it.
pub const DEFAULT_MIN_ROWS: usize = 1;
/// Interval between progress log messages during a segment job.
pub const PROGRESS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Optional job deadline from the SEGMENT_DURATION env var.
pub fn deadline() -> Option<std::time::Instant> {
    std::env::var("SEGMENT_DURATION")
        .ok()
        .and_then(|s| parse_duration(&s))
        .map(|d| std::time::Instant::now() + d)
}

/// Seconds in a count of `s`, `m`, `h` or `d`, as in "30s" or "2h".
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let scale = match s.chars().last()? {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        _ => return None,
    };
    s[..s.len() - 1]
        .parse::<u64>()
        .ok()
        .map(|n| std::time::Duration::from_secs(n * scale))
}

use super::*;
use crate::ID;
use crate::SegmentError;
use crate::SegmentResult;
use crate::job::Job;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

struct Entry {
    frame: Arc<Frame>,
    readers: Vec<ID<Job>>,
}

impl Entry {
    fn locked(&self) -> bool {
        !self.readers.is_empty()
    }
}

/// In-memory store of frames addressed by [`FrameKey`].
///
/// Frames may be read-locked by jobs; a read-locked key cannot be
/// overwritten or removed until every holder unlocks it.
#[derive(Default)]
pub struct Catalog {
    frames: RwLock<HashMap<FrameKey, Entry>>,
}

impl Catalog {
    /// Insert or replace a frame under its own key.
    pub fn put(&self, frame: Frame) -> SegmentResult<Arc<Frame>> {
        let mut frames = self.frames.write().unwrap_or_else(PoisonError::into_inner);
        match frames.get(frame.key()).is_some_and(Entry::locked) {
            true => Err(SegmentError::Locked(frame.key().clone())),
            false => {
                let frame = Arc::new(frame);
                frames.insert(
                    frame.key().clone(),
                    Entry {
                        frame: frame.clone(),
                        readers: Vec::new(),
                    },
                );
                Ok(frame)
            }
        }
    }
    /// Insert a frame whose key must not exist yet.
    pub fn create(&self, frame: Frame) -> SegmentResult<Arc<Frame>> {
        let mut frames = self.frames.write().unwrap_or_else(PoisonError::into_inner);
        match frames.contains_key(frame.key()) {
            true => Err(SegmentError::Occupied(frame.key().clone())),
            false => {
                let frame = Arc::new(frame);
                frames.insert(
                    frame.key().clone(),
                    Entry {
                        frame: frame.clone(),
                        readers: Vec::new(),
                    },
                );
                Ok(frame)
            }
        }
    }
    pub fn get(&self, key: &FrameKey) -> SegmentResult<Arc<Frame>> {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|e| e.frame.clone())
            .ok_or_else(|| SegmentError::Resolution(key.clone()))
    }
    /// Drop a frame from the catalog. Its storage is reclaimed once the
    /// last outstanding `Arc` is gone.
    pub fn remove(&self, key: &FrameKey) -> SegmentResult<Arc<Frame>> {
        let mut frames = self.frames.write().unwrap_or_else(PoisonError::into_inner);
        match frames.get(key).map(Entry::locked) {
            None => Err(SegmentError::Resolution(key.clone())),
            Some(true) => Err(SegmentError::Locked(key.clone())),
            Some(false) => frames
                .remove(key)
                .map(|e| e.frame)
                .ok_or_else(|| SegmentError::Resolution(key.clone())),
        }
    }
    pub fn read_lock(&self, key: &FrameKey, job: ID<Job>) -> SegmentResult<()> {
        self.frames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(key)
            .map(|e| e.readers.push(job))
            .ok_or_else(|| SegmentError::Resolution(key.clone()))
    }
    pub fn read_unlock(&self, key: &FrameKey, job: ID<Job>) -> SegmentResult<()> {
        let mut frames = self.frames.write().unwrap_or_else(PoisonError::into_inner);
        let entry = frames
            .get_mut(key)
            .ok_or_else(|| SegmentError::Resolution(key.clone()))?;
        let index = entry
            .readers
            .iter()
            .position(|r| *r == job)
            .ok_or_else(|| SegmentError::NotLocked {
                key: key.clone(),
                job: job.to_string(),
            })?;
        entry.readers.swap_remove(index);
        Ok(())
    }
    /// Number of outstanding read locks on a key.
    pub fn readers(&self, key: &FrameKey) -> usize {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map_or(0, |e| e.readers.len())
    }
    pub fn contains(&self, key: &FrameKey) -> bool {
        self.frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
    pub fn len(&self) -> usize {
        self.frames.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn keys(&self) -> Vec<FrameKey> {
        let mut keys = self
            .frames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        keys
    }
}

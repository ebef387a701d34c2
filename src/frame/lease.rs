use super::*;
use crate::ID;
use crate::SegmentResult;
use crate::job::Job;
use std::sync::Arc;

/// Read locks held by one job on a set of catalog frames.
///
/// Locks are taken together in [`Lease::acquire`] and released exactly once:
/// by [`Lease::release`] on the normal path, or by `Drop` on any other exit.
pub struct Lease {
    catalog: Arc<Catalog>,
    job: ID<Job>,
    keys: Vec<FrameKey>,
}

impl Lease {
    pub fn acquire<I>(catalog: Arc<Catalog>, job: ID<Job>, keys: I) -> SegmentResult<Self>
    where
        I: IntoIterator<Item = FrameKey>,
    {
        let mut lease = Self {
            catalog,
            job,
            keys: Vec::new(),
        };
        for key in keys {
            lease.catalog.read_lock(&key, job)?;
            lease.keys.push(key);
        }
        log::debug!("job {} read-locked {:?}", job, lease.keys);
        Ok(lease)
    }
    pub fn keys(&self) -> &[FrameKey] {
        &self.keys
    }
    /// Unlock everything, reporting the first failure.
    pub fn release(mut self) -> SegmentResult<()> {
        self.unlock()
    }
    fn unlock(&mut self) -> SegmentResult<()> {
        std::mem::take(&mut self.keys)
            .iter()
            .map(|key| self.catalog.read_unlock(key, self.job))
            .fold(Ok(()), |acc, r| acc.and(r))
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        if let Err(e) = self.unlock() {
            log::error!("job {} failed to release read locks: {}", self.job, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentError;

    fn catalog() -> Arc<Catalog> {
        let catalog = Arc::new(Catalog::default());
        catalog.put(Frame::new("a", vec![Column::real("x", vec![1.0])])).unwrap();
        catalog.put(Frame::new("b", vec![Column::real("x", vec![2.0])])).unwrap();
        catalog
    }

    #[test]
    fn release_unlocks_once() {
        let catalog = catalog();
        let lease = Lease::acquire(catalog.clone(), ID::default(), [FrameKey::from("a"), FrameKey::from("b")]).unwrap();
        assert_eq!(lease.keys().len(), 2);
        assert_eq!(catalog.readers(&"a".into()), 1);
        lease.release().unwrap();
        assert_eq!(catalog.readers(&"a".into()), 0);
        assert_eq!(catalog.readers(&"b".into()), 0);
    }

    #[test]
    fn drop_unlocks() {
        let catalog = catalog();
        {
            let _lease = Lease::acquire(catalog.clone(), ID::default(), [FrameKey::from("a")]).unwrap();
            assert!(matches!(catalog.remove(&"a".into()), Err(SegmentError::Locked(_))));
        }
        assert_eq!(catalog.readers(&"a".into()), 0);
        catalog.remove(&"a".into()).unwrap();
    }

    #[test]
    fn partial_acquire_rolls_back() {
        let catalog = catalog();
        let result = Lease::acquire(catalog.clone(), ID::default(), [FrameKey::from("a"), FrameKey::from("ghost")]);
        assert!(matches!(result, Err(SegmentError::Resolution(_))));
        assert_eq!(catalog.readers(&"a".into()), 0);
    }

    #[test]
    fn same_frame_twice() {
        let catalog = catalog();
        let lease = Lease::acquire(catalog.clone(), ID::default(), [FrameKey::from("a"), FrameKey::from("a")]).unwrap();
        assert_eq!(catalog.readers(&"a".into()), 2);
        lease.release().unwrap();
        assert_eq!(catalog.readers(&"a".into()), 0);
    }
}

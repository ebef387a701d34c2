use super::*;
use crate::Segment;
use crate::SegmentResult;
use crate::frame::Catalog;
use crate::frame::Frame;
use crate::frame::FrameKey;
use std::sync::Arc;

/// A segment's slice of a source frame, registered in the catalog as
/// `{source}_segment_{index}` for as long as the partition lives.
///
/// Released explicitly with [`Partition::release`]; dropping an unreleased
/// partition removes it as well.
pub struct Partition {
    frame: Arc<Frame>,
    catalog: Arc<Catalog>,
    released: bool,
}

impl Partition {
    /// Copy the rows of `source` that belong to `segment` into a new catalog
    /// frame. `None` as the key means no row can match.
    pub fn extract(
        catalog: &Arc<Catalog>,
        source: &Frame,
        segment: Segment,
        key: Option<&KeyRow>,
    ) -> SegmentResult<Self> {
        let rows = key.map_or_else(Vec::new, |key| Matcher::default().rows(source, key));
        let frame = catalog.create(source.select(source.key().segment(segment), &rows))?;
        log::debug!("extracted {} of {} rows into {}", rows.len(), source.nrows(), frame.key());
        Ok(Self {
            frame,
            catalog: catalog.clone(),
            released: false,
        })
    }
    pub fn key(&self) -> &FrameKey {
        self.frame.key()
    }
    pub fn frame(&self) -> Arc<Frame> {
        self.frame.clone()
    }
    /// Remove the partition from the catalog, returning once it is gone.
    pub fn release(mut self) -> SegmentResult<()> {
        self.released = true;
        self.catalog.remove(self.frame.key()).map(|_| ())
    }
}

impl Drop for Partition {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.catalog.remove(self.frame.key()) {
                log::error!("failed to release partition {}: {}", self.frame.key(), e);
            }
        }
    }
}

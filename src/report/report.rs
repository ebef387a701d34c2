use super::*;
use crate::Segment;
use crate::SegmentError;
use crate::SegmentResult;
use crate::segment::SegmentKeys;

/// Outcomes addressed by segment index. Each index is written at most once
/// and only written indices are visible.
#[derive(Debug, Clone, Default)]
pub struct Report {
    slots: Vec<Option<Outcome>>,
}

impl Report {
    pub fn new(total: usize) -> Self {
        Self {
            slots: vec![None; total],
        }
    }
    pub fn record(&mut self, segment: Segment, outcome: Outcome) -> SegmentResult<()> {
        assert!(segment < self.slots.len(), "segment {} out of range", segment);
        if self.slots[segment].is_some() {
            return Err(SegmentError::Rerecorded(segment));
        }
        self.slots[segment] = Some(outcome);
        Ok(())
    }
    pub fn get(&self, segment: Segment) -> Option<&Outcome> {
        self.slots.get(segment).and_then(Option::as_ref)
    }
    /// Number of segments the report was sized for.
    pub fn total(&self) -> usize {
        self.slots.len()
    }
    pub fn recorded(&self) -> usize {
        self.slots.iter().flatten().count()
    }
    pub fn succeeded(&self) -> usize {
        self.iter().filter(|(_, o)| o.is_trained()).count()
    }
    pub fn failed(&self) -> usize {
        self.iter().filter(|(_, o)| !o.is_trained()).count()
    }
    /// Recorded outcomes in segment order.
    pub fn iter(&self) -> impl Iterator<Item = (Segment, &Outcome)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().map(|o| (i, o)))
    }
    /// Caller-facing rows, one per recorded segment.
    pub fn entries(&self, keys: &SegmentKeys) -> Vec<Entry> {
        self.iter()
            .map(|(segment, outcome)| Entry::from((keys, segment, outcome)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;
    use crate::frame::Frame;
    use crate::training::Message;
    use crate::training::Model;

    fn model() -> Model {
        let frame = Frame::new("t", vec![Column::real("y", vec![1.0])]);
        Model::constant("mean", &frame, "y", 1.0, 1)
    }

    #[test]
    fn record_once() {
        let mut report = Report::new(3);
        report.record(1, Outcome::trained(model())).unwrap();
        assert!(matches!(
            report.record(1, Outcome::trained(model())),
            Err(SegmentError::Rerecorded(1))
        ));
        assert!(report.get(0).is_none());
        assert!(report.get(1).unwrap().is_trained());
        assert!(report.get(7).is_none());
        assert_eq!(report.recorded(), 1);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn counts_and_order() {
        let mut report = Report::new(3);
        report.record(2, Outcome::trained(model())).unwrap();
        report
            .record(0, Outcome::failed(Failure::configuration(&[Message::error("y", "gone")])))
            .unwrap();
        assert_eq!(report.iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        Report::new(1).record(1, Outcome::trained(model())).ok();
    }
}

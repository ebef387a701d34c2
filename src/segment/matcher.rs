use super::*;
use crate::Row;
use crate::frame::Frame;
use rayon::prelude::*;

/// Finds the rows of a frame belonging to one segment.
///
/// The frame's leading columns must be the key columns, in key order. Rows
/// are scanned once, in parallel chunks whose results are concatenated in
/// chunk order, so the returned indices are ascending.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    chunk: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_chunk(crate::MATCH_CHUNK_ROWS)
    }
}

impl Matcher {
    pub fn with_chunk(chunk: usize) -> Self {
        assert!(chunk > 0);
        Self { chunk }
    }
    pub fn rows(&self, frame: &Frame, key: &KeyRow) -> Vec<Row> {
        assert!(key.len() <= frame.ncols(), "key wider than {}", frame.key());
        let n = frame.nrows();
        let columns = &frame.columns()[..key.len()];
        (0..n.div_ceil(self.chunk))
            .into_par_iter()
            .map(|c| {
                (c * self.chunk..((c + 1) * self.chunk).min(n))
                    .filter(|r| key.matches(columns, *r))
                    .collect::<Vec<Row>>()
            })
            .collect::<Vec<Vec<Row>>>()
            .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Value;
    use crate::frame::Column;

    #[test]
    fn missing_equals_missing() {
        let frame = Frame::new(
            "f",
            vec![
                Column::integer("a", vec![1.0, 2.0, Value::NAN]),
                Column::labels("b", &[Some("a"), Some("b"), Some("a")]),
            ],
        );
        let key = KeyRow::from(vec![Value::NAN, 0.0]);
        assert_eq!(Matcher::default().rows(&frame, &key), vec![2]);
        let key = KeyRow::from(vec![1.0, 0.0]);
        assert_eq!(Matcher::default().rows(&frame, &key), vec![0]);
    }

    #[test]
    fn no_match_is_empty() {
        let frame = Frame::new("f", vec![Column::integer("a", vec![1.0, 2.0])]);
        assert!(Matcher::default().rows(&frame, &KeyRow::from(vec![3.0])).is_empty());
        let empty = Frame::new("e", vec![Column::integer("a", vec![])]);
        assert!(Matcher::default().rows(&empty, &KeyRow::from(vec![3.0])).is_empty());
    }

    #[test]
    fn chunking_preserves_order() {
        let frame = Frame::random().reorder(&["store", "region"]).unwrap();
        let key = KeyRow::from(vec![1.0, 2.0]);
        let whole = Matcher::with_chunk(usize::MAX / 2).rows(&frame, &key);
        let tiny = Matcher::with_chunk(7).rows(&frame, &key);
        assert_eq!(whole, tiny);
        assert!(tiny.windows(2).all(|w| w[0] < w[1]));
        assert!(tiny.iter().all(|r| frame.column(0).at(*r) == 1.0));
        assert!(tiny.iter().all(|r| frame.column(1).at(*r) == 2.0));
    }

    #[test]
    fn segments_cover_frame() {
        let frame = Frame::random().reorder(&["store", "region"]).unwrap();
        let keys = SegmentKeys::new(frame.distinct("keys", &["store", "region"]).unwrap()).unwrap();
        let total = (0..keys.len())
            .map(|k| keys.probe(k, &frame).unwrap())
            .map(|key| Matcher::default().rows(&frame, &key).len())
            .sum::<usize>();
        assert_eq!(total, frame.nrows());
    }
}

use super::*;
use crate::Row;
use crate::SegmentError;
use crate::SegmentResult;
use crate::Value;
use std::cmp::Ordering;

/// An ordered set of equally long columns, addressed by its key.
#[derive(Debug, Clone)]
pub struct Frame {
    key: FrameKey,
    columns: Vec<Column>,
}

impl Frame {
    pub fn new(key: impl Into<FrameKey>, columns: Vec<Column>) -> Self {
        let key = key.into();
        assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "columns of {} differ in length",
            key
        );
        Self { key, columns }
    }
    pub fn key(&self) -> &FrameKey {
        &self.key
    }
    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
    pub fn vec(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }
    pub fn row(&self, row: Row) -> Vec<Value> {
        self.columns.iter().map(|c| c.at(row)).collect()
    }
}

impl Frame {
    /// Same columns with `keys` moved to the front in key order, the rest
    /// following in their original relative order. Storage is shared.
    pub fn reorder<S>(&self, keys: &[S]) -> SegmentResult<Self>
    where
        S: AsRef<str>,
    {
        let mut front = Vec::with_capacity(keys.len());
        for key in keys.iter().map(AsRef::as_ref) {
            match self.vec(key) {
                Some(column) => front.push(column.clone()),
                None => {
                    return Err(SegmentError::MissingColumn {
                        frame: self.key.clone(),
                        column: key.to_string(),
                    });
                }
            }
        }
        let rest = self
            .columns
            .iter()
            .filter(|c| !keys.iter().any(|k| k.as_ref() == c.name()))
            .cloned();
        Ok(Self {
            key: self.key.clone(),
            columns: front.into_iter().chain(rest).collect(),
        })
    }

    /// Fresh frame holding only `rows`, in order. Names, kinds and domains
    /// are kept; the source is left untouched.
    pub fn select(&self, key: impl Into<FrameKey>, rows: &[Row]) -> Self {
        Self {
            key: key.into(),
            columns: self.columns.iter().map(|c| c.select(rows)).collect(),
        }
    }

    /// One row per distinct combination of the named columns, ascending,
    /// missing values sorted last.
    pub fn distinct<S>(&self, key: impl Into<FrameKey>, names: &[S]) -> SegmentResult<Self>
    where
        S: AsRef<str>,
    {
        let keyed = self.reorder(names)?;
        let width = names.len();
        let mut rows = (0..keyed.nrows())
            .map(|r| keyed.columns[..width].iter().map(|c| c.at(r)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| Self::compare(a, b));
        rows.dedup_by(|a, b| Self::compare(a, b) == Ordering::Equal);
        let columns = keyed.columns[..width]
            .iter()
            .enumerate()
            .map(|(i, c)| Column::from((c, rows.iter().map(|row| row[i]).collect::<Vec<_>>())))
            .collect();
        Ok(Self::new(key, columns))
    }

    fn compare(a: &[Value], b: &[Value]) -> Ordering {
        a.iter()
            .zip(b)
            .map(|(x, y)| match (x.is_nan(), y.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => x.total_cmp(y),
            })
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

/// Column shaped like a template (name, kind, domain) with new values.
impl From<(&Column, Vec<Value>)> for Column {
    fn from((template, data): (&Column, Vec<Value>)) -> Self {
        match template.kind() {
            Kind::Real => Column::real(template.name(), data),
            Kind::Integer => Column::integer(template.name(), data),
            Kind::Categorical => Column::categorical(
                template.name(),
                template.domain().map(<[String]>::to_vec).unwrap_or_default(),
                data,
            ),
        }
    }
}

impl crate::Arbitrary for Frame {
    /// Store (categorical), region (integer, sometimes missing), x and a
    /// response y that is linear in x per store.
    fn random() -> Self {
        use rand::Rng;
        const ROWS: usize = 1024;
        const STORES: [&str; 4] = ["north", "south", "east", "west"];
        let ref mut rng = rand::rng();
        let stores = (0..ROWS)
            .map(|_| Some(STORES[rng.random_range(0..STORES.len())]))
            .collect::<Vec<_>>();
        let regions = (0..ROWS)
            .map(|_| match rng.random_bool(0.1) {
                true => Value::NAN,
                false => rng.random_range(0..3) as Value,
            })
            .collect::<Vec<_>>();
        let xs = (0..ROWS)
            .map(|_| rng.random_range(-10.0..10.0))
            .collect::<Vec<Value>>();
        let ys = stores
            .iter()
            .zip(xs.iter())
            .map(|(s, x)| {
                let slope = STORES.iter().position(|t| Some(*t) == *s).unwrap_or(0) as Value;
                slope * x + rng.random_range(-0.5..0.5)
            })
            .collect::<Vec<Value>>();
        Self::new(
            "random",
            vec![
                Column::labels("store", &stores),
                Column::integer("region", regions),
                Column::real("x", xs),
                Column::real("y", ys),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn sample() -> Frame {
        Frame::new(
            "sample",
            vec![
                Column::real("x", vec![0.5, 1.5, 2.5]),
                Column::integer("id", vec![1.0, 2.0, Value::NAN]),
                Column::labels("store", &[Some("a"), Some("b"), Some("a")]),
                Column::real("y", vec![1.0, 2.0, 3.0]),
            ],
        )
    }

    #[test]
    fn reorder_moves_keys_first() {
        let frame = sample();
        let keyed = frame.reorder(&["store", "id"]).unwrap();
        assert_eq!(keyed.names(), vec!["store", "id", "x", "y"]);
        assert_eq!(keyed.key(), frame.key());
        assert!(keyed.column(0).shares(frame.vec("store").unwrap()));
        assert!(keyed.column(3).shares(frame.vec("y").unwrap()));
    }

    #[test]
    fn reorder_is_idempotent() {
        let frame = sample();
        let once = frame.reorder(&["id", "store"]).unwrap();
        let twice = once.reorder(&["id", "store"]).unwrap();
        assert_eq!(once.names(), twice.names());
        assert!(once
            .columns()
            .iter()
            .zip(twice.columns())
            .all(|(a, b)| a.shares(b)));
    }

    #[test]
    fn reorder_missing_column() {
        match sample().reorder(&["store", "nope"]) {
            Err(SegmentError::MissingColumn { column, .. }) => assert_eq!(column, "nope"),
            other => panic!("unexpected {:?}", other.map(|f| f.names().join(","))),
        }
    }

    #[test]
    fn select_keeps_schema() {
        let frame = sample();
        let part = frame.select("part", &[2, 0]);
        assert_eq!(part.key().as_str(), "part");
        assert_eq!(part.names(), frame.names());
        assert_eq!(part.nrows(), 2);
        assert_eq!(part.vec("x").unwrap().values(), &[2.5, 0.5]);
        assert_eq!(part.vec("store").unwrap().domain(), frame.vec("store").unwrap().domain());
        assert_eq!(frame.nrows(), 3);
    }

    #[test]
    fn select_nothing() {
        let part = sample().select("empty", &[]);
        assert_eq!(part.nrows(), 0);
        assert_eq!(part.ncols(), 4);
        assert_eq!(part.vec("store").unwrap().kind(), Kind::Categorical);
    }

    #[test]
    fn distinct_sorts_missing_last() {
        let frame = Frame::new(
            "f",
            vec![
                Column::integer("a", vec![2.0, Value::NAN, 1.0, 2.0, Value::NAN]),
                Column::labels("b", &[Some("y"), Some("x"), Some("x"), Some("y"), Some("x")]),
            ],
        );
        let keys = frame.distinct("keys", &["a", "b"]).unwrap();
        assert_eq!(keys.nrows(), 3);
        assert_eq!(keys.row(0), vec![1.0, 0.0]);
        assert_eq!(keys.row(1), vec![2.0, 1.0]);
        assert!(keys.row(2)[0].is_nan());
        assert_eq!(keys.vec("b").unwrap().kind(), Kind::Categorical);
    }

    #[test]
    fn random_frame_is_rectangular() {
        let frame = Frame::random();
        assert_eq!(frame.ncols(), 4);
        assert!(frame.columns().iter().all(|c| c.len() == frame.nrows()));
    }
}

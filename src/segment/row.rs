use crate::Row;
use crate::Value;
use crate::frame::Column;

/// One segment's key values, in key-column order. NaN marks a missing
/// component, which only matches a missing cell.
#[derive(Debug, Clone)]
pub struct KeyRow(Vec<Value>);

impl KeyRow {
    pub fn values(&self) -> &[Value] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Whether `row` of the leading `columns` equals this key exactly.
    /// Stops at the first mismatching component.
    pub fn matches(&self, columns: &[Column], row: Row) -> bool {
        self.0.iter().zip(columns).all(|(key, column)| {
            let cell = column.at(row);
            match key.is_nan() {
                true => cell.is_nan(),
                false => cell == *key,
            }
        })
    }
}

impl From<Vec<Value>> for KeyRow {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_matches_only_missing() {
        let columns = [Column::integer("a", vec![1.0, Value::NAN])];
        let missing = KeyRow::from(vec![Value::NAN]);
        let one = KeyRow::from(vec![1.0]);
        assert!(!missing.matches(&columns, 0));
        assert!(missing.matches(&columns, 1));
        assert!(one.matches(&columns, 0));
        assert!(!one.matches(&columns, 1));
    }

    #[test]
    fn exact_equality() {
        let columns = [Column::real("a", vec![1.0 + 1e-12])];
        assert!(!KeyRow::from(vec![1.0]).matches(&columns, 0));
    }

    #[test]
    fn empty_key_matches_everything() {
        let columns = [Column::real("a", vec![3.0])];
        assert!(KeyRow::from(vec![]).matches(&columns, 0));
    }
}

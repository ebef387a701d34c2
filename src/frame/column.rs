use super::*;
use crate::Row;
use crate::Value;
use std::sync::Arc;

/// A named, typed column. Missing cells are NaN regardless of kind.
///
/// Cloning a column shares its storage; only [`Column::select`] allocates.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    kind: Kind,
    data: Arc<[Value]>,
    domain: Option<Arc<[String]>>,
}

impl Column {
    pub fn real(name: &str, data: Vec<Value>) -> Self {
        Self {
            name: name.to_string(),
            kind: Kind::Real,
            data: data.into(),
            domain: None,
        }
    }
    pub fn integer(name: &str, data: Vec<Value>) -> Self {
        Self {
            name: name.to_string(),
            kind: Kind::Integer,
            data: data.into(),
            domain: None,
        }
    }
    /// Categorical column from domain indices.
    pub fn categorical(name: &str, domain: Vec<String>, codes: Vec<Value>) -> Self {
        Self {
            name: name.to_string(),
            kind: Kind::Categorical,
            data: codes.into(),
            domain: Some(domain.into()),
        }
    }
    /// Categorical column from labels. The domain is the sorted set of labels.
    pub fn labels(name: &str, labels: &[Option<&str>]) -> Self {
        let mut domain = labels.iter().flatten().map(|s| s.to_string()).collect::<Vec<_>>();
        domain.sort();
        domain.dedup();
        let codes = labels
            .iter()
            .map(|l| match l {
                Some(l) => domain.binary_search_by(|d| d.as_str().cmp(*l)).map_or(Value::NAN, |i| i as Value),
                None => Value::NAN,
            })
            .collect();
        Self::categorical(name, domain, codes)
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn domain(&self) -> Option<&[String]> {
        self.domain.as_deref()
    }
    pub fn values(&self) -> &[Value] {
        &self.data
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn at(&self, row: Row) -> Value {
        self.data[row]
    }
    pub fn is_na(&self, row: Row) -> bool {
        self.data[row].is_nan()
    }
    pub fn is_categorical(&self) -> bool {
        self.kind == Kind::Categorical
    }
    /// Integer-valued: declared integer, or real with at least one value
    /// and only integral values.
    pub fn is_int(&self) -> bool {
        match self.kind {
            Kind::Integer => true,
            Kind::Categorical => false,
            Kind::Real => {
                let mut present = self.data.iter().filter(|v| !v.is_nan()).peekable();
                present.peek().is_some() && present.all(|v| v.is_finite() && v.fract() == 0.0)
            }
        }
    }
    /// Label of a categorical cell, `None` when missing or not categorical.
    pub fn label(&self, row: Row) -> Option<&str> {
        let code = self.at(row);
        match (&self.domain, code.is_nan()) {
            (Some(domain), false) => domain.get(code as usize).map(String::as_str),
            _ => None,
        }
    }
    /// Domain index of a label, `None` when the label is not in the domain.
    pub fn code(&self, label: &str) -> Option<Value> {
        self.domain()?
            .iter()
            .position(|d| d == label)
            .map(|i| i as Value)
    }
    /// Copy of the given rows into fresh storage, keeping name, kind and domain.
    pub fn select(&self, rows: &[Row]) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            data: rows.iter().map(|r| self.data[*r]).collect(),
            domain: self.domain.clone(),
        }
    }
    /// Whether both columns are backed by the same storage.
    pub fn shares(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

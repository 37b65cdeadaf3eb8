use std::fmt;

use ahash::AHashMap;

use crate::loader::{RawRow, is_digit_literal};

/// Results recorded for one subject, keyed by variant name.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectRecord {
    pub name: String,
    values: AHashMap<String, f64>,
}

impl SubjectRecord {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            values: AHashMap::new(),
        }
    }

    /// Stores `value` under `variant`, replacing any earlier value.
    pub fn insert<T: Into<String>>(&mut self, variant: T, value: f64) {
        self.values.insert(variant.into(), value);
    }

    pub fn get(&self, variant: &str) -> Option<f64> {
        self.values.get(variant).copied()
    }

    pub fn has(&self, variant: &str) -> bool {
        self.values.contains_key(variant)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A row whose value was not a digit literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowWarning {
    pub subject: String,
    pub variant: String,
    pub value: String,
}

impl RowWarning {
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            subject: row.subject.clone(),
            variant: row.variant.clone(),
            value: row.value.clone(),
        }
    }
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: results for {} {} ({}) will be ignored.",
            self.subject, self.variant, self.value
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ingest {
    Stored,
    Rejected(RowWarning),
}

/// Groups valid rows by subject. Subjects are kept in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    records: Vec<SubjectRecord>,
    index: AHashMap<String, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, row: &RawRow) -> Ingest {
        let value = match row.value.parse::<f64>() {
            Ok(value) if is_digit_literal(&row.value) => value,
            _ => return Ingest::Rejected(RowWarning::from_row(row)),
        };
        self.record_mut(&row.subject).insert(row.variant.as_str(), value);
        Ingest::Stored
    }

    pub fn subject(&self, name: &str) -> Option<&SubjectRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn subjects(&self) -> impl Iterator<Item = &SubjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_mut(&mut self, name: &str) -> &mut SubjectRecord {
        let idx = match self.index.get(name).copied() {
            Some(idx) => idx,
            None => {
                self.records.push(SubjectRecord::new(name));
                let idx = self.records.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.records[idx]
    }
}

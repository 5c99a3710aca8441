//! Order-preserving grouping of records by a field value.

use std::collections::HashMap;

use serde_json::Value;

use super::date::is_valid_date_value;
use super::record::{DATE_FIELD, field, group_key};

/// One group key with the records that share it, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a> {
    /// Stringified field value shared by every record in the bucket.
    pub key: String,
    /// Records in the order they appeared in the input.
    pub records: Vec<&'a Value>,
}

/// Mapping from group key to bucket, iterated in first-seen key order.
///
/// Borrows the records it groups; building one never copies a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets<'a> {
    buckets: Vec<Bucket<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> Buckets<'a> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to the bucket for `key`, creating it on first sight.
    pub fn push(&mut self, key: String, record: &'a Value) {
        if let Some(bucket) = self
            .index
            .get(&key)
            .and_then(|&pos| self.buckets.get_mut(pos))
        {
            bucket.records.push(record);
            return;
        }
        self.index.insert(key.clone(), self.buckets.len());
        self.buckets.push(Bucket {
            key,
            records: vec![record],
        });
    }

    /// Returns the records grouped under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[&'a Value]> {
        let pos = *self.index.get(key)?;
        self.buckets.get(pos).map(|b| b.records.as_slice())
    }

    /// Iterates buckets in first-seen key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<'a>> {
        self.buckets.iter()
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.key.as_str())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if no record was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b Buckets<'a> {
    type Item = &'b Bucket<'a>;
    type IntoIter = std::slice::Iter<'b, Bucket<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Groups `records` by the value of field `key`.
///
/// Records that are not objects, or whose `key` field is missing or null,
/// are skipped. When grouping by `DATE`, records with an invalid date are
/// skipped as well. Each record is visited once.
///
/// Accepts any iterator of borrowed records, so both `&[Value]` and a
/// pre-filtered `Vec<&Value>` can be grouped without copying.
#[must_use]
pub fn group_by<'a, I>(records: I, key: &str) -> Buckets<'a>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut buckets = Buckets::new();
    for record in records {
        let Some(value) = field(record, key) else {
            continue;
        };
        if key == DATE_FIELD && !is_valid_date_value(Some(value)) {
            continue;
        }
        if let Some(group) = group_key(value) {
            buckets.push(group, record);
        }
    }
    buckets
}

use std::collections::{BTreeMap, HashMap};

use chrono::{offset::Utc, DateTime};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RtValue {
    Bool(bool),
    Float(f64),
    Int(i64),
}

impl RtValue {
    /// Numeric view used by derived-metric computation. Bools are not
    /// numbers here.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RtValue::Float(f) => Some(*f),
            RtValue::Int(i) => Some(*i as f64),
            RtValue::Bool(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RtValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// One refresh cycle's worth of named values.
///
/// Built fresh every cycle; registers that failed to read are simply absent.
/// There is no carry-over from previous cycles and no placeholder values.
#[derive(Debug, Default)]
pub struct Record {
    timestamp: Option<DateTime<Utc>>,
    fields: HashMap<&'static str, RtValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = Some(timestamp);
    }

    pub fn set_field(&mut self, key: &'static str, value: RtValue) {
        self.fields.insert(key, value);
    }

    pub fn get_field(&self, key: &str) -> Option<&RtValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn all_fields(&self) -> &HashMap<&'static str, RtValue> {
        &self.fields
    }

    /// Sorted view for serialization and log output.
    pub fn sorted_fields(&self) -> BTreeMap<&'static str, RtValue> {
        self.fields.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

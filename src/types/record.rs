use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::naming::snake_to_lower_camel;
use crate::traits::Model;
use crate::types::Row;

/// An ordered bag of camelCase properties hydrated from one row.
///
/// `Record` is what row-to-object conversion produces when no concrete
/// model class is configured, and the raw material every concrete model
/// is constructed from. It implements [`Model`] itself, so dynamic and
/// typed results flow through the same contract.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    properties: Map<String, Value>,
}

impl Record {
    /// Builds a record from a row, re-keying every field from snake_case
    /// to lower camelCase. Values and field order are preserved.
    pub fn from_row(row: &Row) -> Self {
        let properties = row
            .iter()
            .map(|(field, value)| (snake_to_lower_camel(field), value.clone()))
            .collect();
        Self { properties }
    }

    /// Gets a property value by its camelCase name.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Returns all properties in insertion order.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the record has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(properties: Map<String, Value>) -> Self {
        Self { properties }
    }
}

impl Model for Record {
    fn from_record(record: Record) -> Self {
        record
    }

    fn record(&self) -> &Record {
        self
    }
}

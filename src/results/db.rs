use std::fmt;

use serde_json::Value;

use crate::error::{Result, ResultError};
use crate::results::ArrayResult;
use crate::traits::{Model, ModelClass, ResultView};
use crate::types::{Record, Row};

/// Result variant for relational row sets.
///
/// The payload is a sequence of rows, each an ordered column-to-value
/// mapping. Assignment validates the shape shallowly (only the first
/// element is inspected), optionally rewrites every row's keys with a
/// prefix, and stores the outcome in plain array storage. Object
/// conversion goes row by row through [`Record`] and the configured
/// [`ModelClass`], falling back to the record itself when no class is set.
///
/// ```
/// use resultrs::DbResult;
/// use serde_json::json;
///
/// let result = DbResult::new(Some(json!([{"id": 5, "name": "a"}])), None).unwrap();
/// assert_eq!(result.result_id(), Some(&json!(5)));
/// assert_eq!(result.json_result().unwrap(), r#"[{"id":5,"name":"a"}]"#);
/// ```
#[derive(Debug, Clone)]
pub struct DbResult {
    inner: ArrayResult,
    model_class: Option<ModelClass>,
}

impl DbResult {
    /// Creates a database result from an optional row-set payload,
    /// rewriting row keys with `prefix` when one is supplied.
    ///
    /// Fails with [`ResultError::InvalidRowSet`] when the payload is not
    /// a sequence, or when its first element is not a mapping.
    pub fn new(result: Option<Value>, prefix: Option<&str>) -> Result<Self> {
        let mut db = Self {
            inner: ArrayResult::new(None),
            model_class: None,
        };
        db.set_result(result, prefix)?;
        Ok(db)
    }

    /// Replaces the stored row set.
    ///
    /// A null payload is stored as-is with no checks. Otherwise the
    /// payload must be a sequence whose first element, if any, is a
    /// mapping; later rows are deliberately not inspected. A non-empty
    /// prefix rewrites every key `k` of every mapping row to
    /// `{prefix}_{k}`, keeping values and field order; the original keys
    /// do not survive.
    pub fn set_result(&mut self, result: Option<Value>, prefix: Option<&str>) -> Result<()> {
        let rows = match result {
            None => {
                self.inner.set_result(None);
                return Ok(());
            }
            Some(Value::Array(rows)) => rows,
            Some(_) => return Err(ResultError::InvalidRowSet),
        };

        if let Some(first) = rows.first() {
            if !first.is_object() {
                return Err(ResultError::InvalidRowSet);
            }
        }

        let rows = match prefix {
            Some(prefix) if !prefix.is_empty() => prefix_rows(rows, prefix),
            _ => rows,
        };

        self.inner.set_result(Some(Value::Array(rows)));
        Ok(())
    }

    /// Configures the model type used by object conversion; `None` clears
    /// it, and conversion falls back to plain records.
    ///
    /// Handles not backed by the model contract are rejected with
    /// [`ResultError::ClassIsNotModel`]; the previous configuration stays
    /// in place.
    pub fn set_model_class(&mut self, class: Option<ModelClass>) -> Result<()> {
        if let Some(class) = &class {
            if !class.is_model() {
                return Err(ResultError::ClassIsNotModel {
                    class: class.name().to_string(),
                });
            }
        }
        self.model_class = class;
        Ok(())
    }

    /// Returns the first row when it is a non-empty mapping.
    pub fn first_result(&self) -> Option<&Row> {
        self.rows()?
            .first()
            .and_then(Value::as_object)
            .filter(|row| !row.is_empty())
    }

    /// Returns the `id` field of the first row.
    pub fn result_id(&self) -> Option<&Value> {
        self.rows()?.first()?.as_object()?.get("id")
    }

    /// Returns the first field of the first row, in declaration order.
    pub fn result_first_field(&self) -> Option<&Value> {
        self.first_result()?.iter().next().map(|(_, value)| value)
    }

    /// Converts the first row to a model instance; `Ok(None)` when there
    /// is no first row.
    pub fn first_object_result(&self) -> Result<Option<Box<dyn Model>>> {
        match self.first_result() {
            Some(row) => self.row_to_model(row).map(Some),
            None => Ok(None),
        }
    }

    /// Renders the row set as JSON text; `None` when the payload is null.
    pub fn json_result(&self) -> Option<String> {
        self.inner.json_result()
    }

    fn rows(&self) -> Option<&Vec<Value>> {
        self.inner.result().and_then(Value::as_array)
    }

    fn row_to_model(&self, row: &Row) -> Result<Box<dyn Model>> {
        let record = Record::from_row(row);
        match &self.model_class {
            Some(class) => class.construct(record),
            None => Ok(Box::new(record)),
        }
    }
}

/// Rebuilds a row set with every key of every mapping row rewritten to
/// `{prefix}_{key}`. Non-mapping rows pass through untouched.
fn prefix_rows(rows: Vec<Value>, prefix: &str) -> Vec<Value> {
    rows.into_iter()
        .map(|row| match row {
            Value::Object(fields) => {
                let rewritten: Row = fields
                    .into_iter()
                    .map(|(key, value)| (format!("{}_{}", prefix, key), value))
                    .collect();
                Value::Object(rewritten)
            }
            other => other,
        })
        .collect()
}

impl ResultView for DbResult {
    fn result(&self) -> Option<&Value> {
        self.inner.result()
    }

    fn string_result(&self) -> Option<String> {
        self.inner.string_result()
    }

    fn array_result(&self) -> Option<&Value> {
        self.inner.array_result()
    }

    /// Converts every row in order. A row that is not a mapping fails the
    /// whole batch; no partial results are produced.
    fn object_result(&self) -> Result<Option<Vec<Box<dyn Model>>>> {
        let rows = match self.array_result().and_then(Value::as_array) {
            Some(rows) => rows,
            None => return Ok(None),
        };

        let mut objects = Vec::with_capacity(rows.len());
        for row in rows {
            let row = row.as_object().ok_or(ResultError::InvalidRowSet)?;
            objects.push(self.row_to_model(row)?);
        }
        Ok(Some(objects))
    }
}

impl fmt::Display for DbResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_result().unwrap_or_default())
    }
}

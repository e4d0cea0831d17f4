use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::results::{ArrayResult, DbResult, TextResult};
use crate::traits::{Model, ResultView};

/// The closed set of result variants behind one tag.
///
/// Lets callers hold heterogeneous results in one place without trait
/// objects; every contract method dispatches to the wrapped variant.
#[derive(Debug, Clone)]
pub enum AnyResult {
    /// Plain array-shaped payload.
    Array(ArrayResult),
    /// Opaque scalar/text payload.
    Text(TextResult),
    /// Relational row set.
    Db(DbResult),
}

impl ResultView for AnyResult {
    fn result(&self) -> Option<&Value> {
        match self {
            AnyResult::Array(result) => result.result(),
            AnyResult::Text(result) => result.result(),
            AnyResult::Db(result) => result.result(),
        }
    }

    fn string_result(&self) -> Option<String> {
        match self {
            AnyResult::Array(result) => result.string_result(),
            AnyResult::Text(result) => result.string_result(),
            AnyResult::Db(result) => result.string_result(),
        }
    }

    fn array_result(&self) -> Option<&Value> {
        match self {
            AnyResult::Array(result) => result.array_result(),
            AnyResult::Text(result) => result.array_result(),
            AnyResult::Db(result) => result.array_result(),
        }
    }

    fn object_result(&self) -> Result<Option<Vec<Box<dyn Model>>>> {
        match self {
            AnyResult::Array(result) => result.object_result(),
            AnyResult::Text(result) => result.object_result(),
            AnyResult::Db(result) => result.object_result(),
        }
    }

    fn bool_result(&self) -> bool {
        match self {
            AnyResult::Array(result) => result.bool_result(),
            AnyResult::Text(result) => result.bool_result(),
            AnyResult::Db(result) => result.bool_result(),
        }
    }
}

impl fmt::Display for AnyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_result().unwrap_or_default())
    }
}

impl From<ArrayResult> for AnyResult {
    fn from(result: ArrayResult) -> Self {
        AnyResult::Array(result)
    }
}

impl From<TextResult> for AnyResult {
    fn from(result: TextResult) -> Self {
        AnyResult::Text(result)
    }
}

impl From<DbResult> for AnyResult {
    fn from(result: DbResult) -> Self {
        AnyResult::Db(result)
    }
}

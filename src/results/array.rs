use std::fmt;

use serde_json::Value;

use crate::traits::ResultView;

/// Result variant for plain array-shaped payloads (lists or maps).
///
/// The payload is stored verbatim: any array shape is accepted and nothing
/// is validated. Rendering to text goes through JSON.
#[derive(Debug, Clone)]
pub struct ArrayResult {
    result: Option<Value>,
}

impl ArrayResult {
    /// Creates an array result from an optional payload.
    pub fn new(result: Option<Value>) -> Self {
        Self { result }
    }

    /// Replaces the stored payload wholesale.
    pub fn set_result(&mut self, result: Option<Value>) {
        self.result = result;
    }

    /// Renders the payload as JSON text; `None` when the payload is null.
    ///
    /// Non-ASCII characters are emitted literally, never `\u`-escaped.
    pub fn json_result(&self) -> Option<String> {
        self.result
            .as_ref()
            .and_then(|value| serde_json::to_string(value).ok())
    }
}

impl ResultView for ArrayResult {
    fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    fn string_result(&self) -> Option<String> {
        self.json_result()
    }

    fn array_result(&self) -> Option<&Value> {
        self.result.as_ref()
    }
}

impl fmt::Display for ArrayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_result().unwrap_or_default())
    }
}

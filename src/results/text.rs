use std::fmt;

use serde_json::Value;

use crate::traits::ResultView;

/// Result variant for opaque scalar and text payloads, e.g. rendered HTML.
///
/// This variant has no structured views by contract: the array and object
/// renderings are always absent, whatever was stored.
#[derive(Debug, Clone)]
pub struct TextResult {
    result: Option<Value>,
}

impl TextResult {
    /// Creates a text result from an optional payload.
    pub fn new(result: Option<Value>) -> Self {
        Self { result }
    }

    /// Replaces the stored payload wholesale.
    pub fn set_result(&mut self, result: Option<Value>) {
        self.result = result;
    }
}

impl ResultView for TextResult {
    fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// String payloads render bare; anything else renders as compact JSON.
    fn string_result(&self) -> Option<String> {
        self.result.as_ref().map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

impl fmt::Display for TextResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_result().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload_renders_bare() {
        let result = TextResult::new(Some(json!("<p>hello</p>")));
        assert_eq!(result.string_result().unwrap(), "<p>hello</p>");
    }

    #[test]
    fn test_scalar_payloads_are_stringified() {
        assert_eq!(
            TextResult::new(Some(json!(42))).string_result().unwrap(),
            "42"
        );
        assert_eq!(
            TextResult::new(Some(json!(true))).string_result().unwrap(),
            "true"
        );
    }

    #[test]
    fn test_null_payload_renders_nothing() {
        let result = TextResult::new(None);
        assert_eq!(result.string_result(), None);
        assert_eq!(result.to_string(), "");
    }

    #[test]
    fn test_structured_views_always_absent() {
        let result = TextResult::new(Some(json!([1, 2, 3])));
        assert!(result.array_result().is_none());
        assert!(result.object_result().unwrap().is_none());

        let result = TextResult::new(Some(json!({"a": 1})));
        assert!(result.array_result().is_none());
        assert!(result.object_result().unwrap().is_none());
    }

    #[test]
    fn test_bool_result_over_opaque_payloads() {
        for payload in [json!(""), json!(0), json!(null), json!(false), json!([])] {
            assert!(
                !TextResult::new(Some(payload.clone())).bool_result(),
                "expected {} to be falsy",
                payload
            );
        }
        assert!(!TextResult::new(None).bool_result());
        assert!(TextResult::new(Some(json!("<html/>"))).bool_result());
        assert!(TextResult::new(Some(json!(7))).bool_result());
    }

    #[test]
    fn test_set_result_replaces_wholesale() {
        let mut result = TextResult::new(Some(json!("before")));
        result.set_result(Some(json!("after")));
        assert_eq!(result.string_result().unwrap(), "after");
        result.set_result(None);
        assert_eq!(result.string_result(), None);
    }

    #[test]
    fn test_display_routes_through_string_result() {
        let result = TextResult::new(Some(json!("page")));
        assert_eq!(result.to_string(), "page");
    }
}

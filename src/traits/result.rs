use serde_json::Value;

use crate::error::Result;
use crate::traits::Model;

/// The uniform contract every result variant exposes.
///
/// Implementors store one optional, type-erased payload and render it on
/// demand. The provided methods carry the behavior shared by all variants:
/// truthiness over the payload and the "unsupported view yields nothing"
/// defaults. Variants override only the views they actually support, and
/// no accessor fails on a null payload.
pub trait ResultView {
    /// Returns the stored payload unmodified.
    fn result(&self) -> Option<&Value>;

    /// Textual rendering of the payload; `None` when the payload is null.
    fn string_result(&self) -> Option<String>;

    /// Array rendering of the payload; `None` when this variant cannot
    /// represent the payload as an array.
    fn array_result(&self) -> Option<&Value> {
        None
    }

    /// Typed-object rendering of the payload; `Ok(None)` when unsupported
    /// or when the payload is null.
    fn object_result(&self) -> Result<Option<Vec<Box<dyn Model>>>> {
        Ok(None)
    }

    /// Truthiness of the payload: null, `false`, numeric zero, and empty
    /// strings, arrays and objects are falsy; everything else is truthy.
    /// An absent payload is falsy.
    fn bool_result(&self) -> bool {
        self.result().map_or(false, truthy)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Minimal variant exercising the provided defaults.
    struct Opaque {
        payload: Option<Value>,
    }

    impl ResultView for Opaque {
        fn result(&self) -> Option<&Value> {
            self.payload.as_ref()
        }

        fn string_result(&self) -> Option<String> {
            self.result().map(|value| value.to_string())
        }
    }

    #[test]
    fn test_bool_result_falsy_payloads() {
        let falsy = [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ];
        for payload in falsy {
            let result = Opaque {
                payload: Some(payload.clone()),
            };
            assert!(!result.bool_result(), "expected {} to be falsy", payload);
        }
    }

    #[test]
    fn test_bool_result_truthy_payloads() {
        let truthy = [
            json!(true),
            json!(1),
            json!(-2.5),
            json!("0"),
            json!("text"),
            json!([0]),
            json!({"a": 1}),
        ];
        for payload in truthy {
            let result = Opaque {
                payload: Some(payload.clone()),
            };
            assert!(result.bool_result(), "expected {} to be truthy", payload);
        }
    }

    #[test]
    fn test_absent_payload_is_falsy() {
        let result = Opaque { payload: None };
        assert!(!result.bool_result());
    }

    #[test]
    fn test_default_structured_views_are_absent() {
        let result = Opaque {
            payload: Some(json!([1, 2])),
        };
        assert!(result.array_result().is_none());
        assert!(result.object_result().unwrap().is_none());
    }
}

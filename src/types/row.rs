use serde_json::{Map, Value};

/// A single relational row: an ordered mapping from column name to value.
///
/// Backed by `serde_json`'s map with the `preserve_order` feature, so the
/// "first field" of a row is well defined and field order survives prefix
/// rewriting and record conversion.
pub type Row = Map<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_preserve_field_order() {
        let row: Row = serde_json::from_str(r#"{"name": "a", "id": 5}"#).unwrap();
        let fields: Vec<&str> = row.keys().map(|key| key.as_str()).collect();
        assert_eq!(fields, ["name", "id"]);
    }

    #[test]
    fn test_insertion_order_survives_rebuild() {
        let mut row = Row::new();
        row.insert("zebra".to_string(), Value::from(1));
        row.insert("apple".to_string(), Value::from(2));

        let rebuilt: Row = row.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let fields: Vec<&str> = rebuilt.keys().map(|key| key.as_str()).collect();
        assert_eq!(fields, ["zebra", "apple"]);
    }
}

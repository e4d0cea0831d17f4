//! resultrs - A type-safe result normalization layer
//!
//! Wraps heterogeneous raw payloads (relational row sets, plain arrays,
//! rendered text) behind one contract that can render the payload as an
//! array, a JSON string, plain text, a boolean, or typed model objects.
//!
//! # Example
//! ```
//! use resultrs::{DbResult, ResultView};
//! use serde_json::json;
//!
//! # fn main() -> resultrs::Result<()> {
//! let rows = json!([
//!     {"id": 1, "first_name": "Alice"},
//!     {"id": 2, "first_name": "Bob"},
//! ]);
//!
//! let result = DbResult::new(Some(rows), None)?;
//! assert_eq!(result.result_id(), Some(&json!(1)));
//!
//! let objects = result.object_result()?.unwrap();
//! assert_eq!(objects[0].record().get("firstName"), Some(&json!("Alice")));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod naming;
pub mod results;
pub mod traits;
pub mod types;

// Re-export main types for convenient access
pub use error::{Result, ResultError};
pub use results::{AnyResult, ArrayResult, DbResult, TextResult};
pub use traits::{Model, ModelClass, ResultView};
pub use types::{Record, Row};

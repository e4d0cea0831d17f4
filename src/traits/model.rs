use std::any::type_name;
use std::fmt;

use crate::error::{Result, ResultError};
use crate::types::Record;

/// Contract for typed models hydrated from relational rows.
///
/// A model is constructed from a [`Record`] (one row's fields re-keyed to
/// lower camelCase) and keeps that record available for property access.
/// [`Record`] implements the contract itself and acts as the fallback when
/// no concrete model type is configured.
pub trait Model: fmt::Debug + Send + Sync + 'static {
    /// Builds an instance from the camelCase properties of one row.
    ///
    /// Construction never fails: a model is a property bag, and typed
    /// access happens through accessors over [`Model::record`].
    fn from_record(record: Record) -> Self
    where
        Self: Sized;

    /// Returns the camelCase property map backing this instance.
    fn record(&self) -> &Record;
}

/// Constructor shared by every model type reachable through a handle.
type ModelCtor = fn(Record) -> Box<dyn Model>;

/// A type-erased reference to a model type, used to configure row-to-object
/// conversion without the concrete type appearing in the result's signature.
///
/// Handles built with [`ModelClass::of`] carry the type's constructor and
/// always satisfy the model contract. Handles built with
/// [`ModelClass::named`] carry only a type name, the form a configuration
/// layer hands over, and are rejected when assigned to a result.
///
/// ```
/// use resultrs::{Model, ModelClass, Record};
///
/// #[derive(Debug)]
/// struct User {
///     record: Record,
/// }
///
/// impl Model for User {
///     fn from_record(record: Record) -> Self {
///         Self { record }
///     }
///
///     fn record(&self) -> &Record {
///         &self.record
///     }
/// }
///
/// assert!(ModelClass::of::<User>().is_model());
/// assert!(!ModelClass::named("app::User").is_model());
/// ```
#[derive(Debug, Clone)]
pub struct ModelClass {
    name: String,
    ctor: Option<ModelCtor>,
}

impl ModelClass {
    /// Creates a handle to a concrete model type.
    pub fn of<M: Model>() -> Self {
        Self {
            name: type_name::<M>().to_string(),
            ctor: Some(|record| Box::new(M::from_record(record)) as Box<dyn Model>),
        }
    }

    /// Creates a handle carrying only a type name.
    ///
    /// Used when the target type comes from configuration and has not been
    /// resolved to a known model type. Assigning such a handle to a result
    /// fails with [`ResultError::ClassIsNotModel`].
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ctor: None,
        }
    }

    /// Returns the name of the referenced type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true when the handle is backed by a model constructor.
    pub fn is_model(&self) -> bool {
        self.ctor.is_some()
    }

    /// Constructs one model instance from a converted row.
    pub fn construct(&self, record: Record) -> Result<Box<dyn Model>> {
        match self.ctor {
            Some(ctor) => Ok(ctor(record)),
            None => Err(ResultError::ClassIsNotModel {
                class: self.name.clone(),
            }),
        }
    }
}

//! # Method Module
//!
//! Callable values stored by the registry, the argument shape they accept,
//! and the error type they produce.
//!
//! ## Overview
//!
//! A registered method is a type-erased callable with the signature
//! `Fn(Params) -> Result<Value, MethodError>`. [`Method`] wraps the callable
//! in an `Arc` so bindings are cheap to clone and safe to share across
//! threads. [`Params`] carries the arguments as JSON data (positional,
//! named, or absent) and can be converted into a typed value with
//! [`Params::parse`].
//!
//! ## Typed parameters
//!
//! Handlers that want strongly-typed arguments deserialize the params at the
//! top of the function and surface shape mismatches as
//! [`MethodError::InvalidParams`]:
//!
//! ```
//! use methodmap::{MethodResult, Params};
//! use serde_json::json;
//!
//! fn add(params: Params) -> MethodResult {
//!     let (a, b): (i64, i64) = params.parse()?;
//!     Ok(json!(a + b))
//! }
//!
//! let params = Params::from_value(Some(json!([2, 3]))).unwrap();
//! assert_eq!(add(params).unwrap(), json!(5));
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Result type returned by registered methods.
pub type MethodResult = Result<Value, MethodError>;

/// Type-erased callable signature stored by the registry.
pub type MethodFn = dyn Fn(Params) -> MethodResult + Send + Sync;

/// Error produced by a method invocation or a params conversion.
#[derive(Debug)]
pub enum MethodError {
    /// The supplied params could not be interpreted by the method.
    InvalidParams {
        /// What was wrong with the params
        message: String,
    },
    /// The method ran and failed.
    Failed {
        /// The underlying failure reported by the method
        source: anyhow::Error,
    },
}

impl MethodError {
    /// Build an [`MethodError::InvalidParams`] from any message.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        MethodError::InvalidParams {
            message: message.into(),
        }
    }

    /// Build a [`MethodError::Failed`] from any error value.
    pub fn failed(source: impl Into<anyhow::Error>) -> Self {
        MethodError::Failed {
            source: source.into(),
        }
    }
}

impl fmt::Display for MethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodError::InvalidParams { message } => {
                write!(f, "invalid params: {message}")
            }
            MethodError::Failed { source } => {
                write!(f, "method failed: {source}")
            }
        }
    }
}

impl std::error::Error for MethodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MethodError::InvalidParams { .. } => None,
            MethodError::Failed { source } => Some(source.as_ref()),
        }
    }
}

/// Arguments passed to a registered method.
///
/// Mirrors the three argument shapes a JSON-RPC style call site can produce:
/// a JSON array (positional), a JSON object (named), or nothing at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Params {
    /// No arguments.
    #[default]
    None,
    /// Positional arguments.
    Positional(Vec<Value>),
    /// Named arguments.
    Named(Map<String, Value>),
}

impl Params {
    /// Classify a JSON value into a params shape.
    ///
    /// Absent and `null` values mean "no arguments". Scalars are rejected:
    /// a call site must pass its arguments as an array or an object.
    ///
    /// # Errors
    ///
    /// Returns [`MethodError::InvalidParams`] for scalar values.
    pub fn from_value(value: Option<Value>) -> Result<Self, MethodError> {
        match value {
            None | Some(Value::Null) => Ok(Params::None),
            Some(Value::Array(items)) => Ok(Params::Positional(items)),
            Some(Value::Object(fields)) => Ok(Params::Named(fields)),
            Some(other) => Err(MethodError::invalid_params(format!(
                "params must be an array or an object, got {other}"
            ))),
        }
    }

    /// Convert the params back into a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Params::None => Value::Null,
            Params::Positional(items) => Value::Array(items),
            Params::Named(fields) => Value::Object(fields),
        }
    }

    /// Convert the params into a typed value.
    ///
    /// Positional params deserialize from a JSON array (tuples, `Vec<T>`),
    /// named params from a JSON object (structs with named fields).
    ///
    /// # Errors
    ///
    /// Returns [`MethodError::InvalidParams`] when the params do not match
    /// the shape of `T`.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T, MethodError> {
        serde_json::from_value(self.into_value())
            .map_err(|err| MethodError::invalid_params(err.to_string()))
    }

    /// Number of arguments carried.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Params::None => 0,
            Params::Positional(items) => items.len(),
            Params::Named(fields) => fields.len(),
        }
    }

    /// Whether no arguments are carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A registered method: a cheaply clonable handle around a shared callable.
#[derive(Clone)]
pub struct Method {
    func: Arc<MethodFn>,
}

impl Method {
    /// Wrap a function or closure as a registrable method.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Params) -> MethodResult + Send + Sync + 'static,
    {
        Method {
            func: Arc::new(func),
        }
    }

    /// Invoke the underlying callable with the given params.
    ///
    /// # Errors
    ///
    /// Propagates whatever the callable returns.
    pub fn call(&self, params: Params) -> MethodResult {
        (self.func)(params)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").finish_non_exhaustive()
    }
}

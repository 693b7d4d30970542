//! # Registry Module
//!
//! The registry module provides the name-keyed method table at the heart of
//! methodmap. It maps method names to [`Method`] callables and offers bulk
//! registration from services, maps, and individual functions.
//!
//! ## Overview
//!
//! The registry is responsible for:
//! - Binding method names to callables and handing them back on lookup
//! - Validating names against the accepted grammar on every write path
//! - Namespacing bulk registrations under an optional prefix
//! - Enforcing the configured duplicate policy
//!
//! ## Registration
//!
//! Methods are registered individually or in bulk:
//!
//! ```
//! use methodmap::{MethodRegistry, Params};
//! use serde_json::json;
//!
//! let mut registry = MethodRegistry::new();
//! registry
//!     .register_method("math.add", |params: Params| {
//!         let (a, b): (i64, i64) = params.parse()?;
//!         Ok(json!(a + b))
//!     })
//!     .expect("valid name");
//!
//! assert!(registry.contains("math.add"));
//! ```
//!
//! ## Replacement Semantics
//!
//! If a method with the same name already exists and the duplicate policy is
//! `Replace`, it will be replaced: the old binding is returned to the caller
//! and the displacement is logged. Under `Deny` the second registration is
//! rejected and the original binding stays live.

use crate::method::{Method, MethodResult, Params};
use crate::naming;
use crate::runtime_config::{DuplicatePolicy, RegistryConfig};
use crate::service::Service;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

/// Registration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The method name does not match the accepted name grammar.
    ///
    /// Names are dot-separated identifier segments; each segment starts with
    /// a letter or underscore.
    InvalidName {
        /// The rejected name
        name: String,
    },
    /// The method name lives under the reserved `rpc` namespace.
    ReservedNamespace {
        /// The rejected name
        name: String,
    },
    /// The name is already bound and the duplicate policy is `Deny`.
    Duplicate {
        /// The already-bound name
        name: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidName { name } => {
                write!(
                    f,
                    "registration error: invalid method name '{}'. \
                    Names are dot-separated identifier segments, e.g. 'math.add'",
                    name
                )
            }
            RegistryError::ReservedNamespace { name } => {
                write!(
                    f,
                    "registration error: '{}' is under the reserved 'rpc' namespace",
                    name
                )
            }
            RegistryError::Duplicate { name } => {
                write!(
                    f,
                    "registration error: method '{}' is already registered \
                    and the duplicate policy is deny",
                    name
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Name-keyed table of registered methods.
///
/// Maintains a registry of method names to their callables. Lookup returns
/// the stored callable; invoking it is the caller's business. Iteration
/// order is unspecified.
#[derive(Clone, Debug, Default)]
pub struct MethodRegistry {
    methods: HashMap<String, Method>,
    on_duplicate: DuplicatePolicy,
}

impl MethodRegistry {
    /// Create a new empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new empty registry with an explicit configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        MethodRegistry {
            methods: HashMap::new(),
            on_duplicate: config.on_duplicate,
        }
    }

    /// Create a new empty registry configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_config(RegistryConfig::from_env())
    }

    /// Bind `method` to `name`.
    ///
    /// Returns the displaced method when `name` was already bound and the
    /// duplicate policy permits replacement.
    ///
    /// # Errors
    ///
    /// Fails when the name is malformed or reserved, or when the name is
    /// already bound under the `Deny` policy.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        method: Method,
    ) -> Result<Option<Method>, RegistryError> {
        let name = name.into();
        if !naming::is_valid_name(&name) {
            return Err(RegistryError::InvalidName { name });
        }
        if naming::is_reserved(&name) {
            return Err(RegistryError::ReservedNamespace { name });
        }

        let displaced = if self.methods.contains_key(&name) {
            match self.on_duplicate {
                DuplicatePolicy::Deny => {
                    return Err(RegistryError::Duplicate { name });
                }
                DuplicatePolicy::Replace => {
                    let old = self.methods.remove(&name);
                    warn!(
                        method_name = %name,
                        total_methods = self.methods.len(),
                        "Replaced existing method binding"
                    );
                    old
                }
            }
        } else {
            None
        };

        info!(
            method_name = %name,
            total_methods = self.methods.len() + 1,
            "Method registered"
        );
        self.methods.insert(name, method);
        Ok(displaced)
    }

    /// Look up a method by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Method> {
        let method = self.methods.get(name);
        if method.is_none() {
            debug!(
                method_name = %name,
                total_methods = self.methods.len(),
                "Method lookup miss"
            );
        }
        method
    }

    /// Unbind a method, returning it if it was registered.
    pub fn remove(&mut self, name: &str) -> Option<Method> {
        let removed = self.methods.remove(name);
        if removed.is_some() {
            info!(
                method_name = %name,
                total_methods = self.methods.len(),
                "Method removed"
            );
        }
        removed
    }

    /// Whether a method is bound under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the registry holds no methods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterator over the registered method names.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Iterator over `(name, method)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Method)> {
        self.methods.iter().map(|(name, m)| (name.as_str(), m))
    }

    /// Register a single function or closure under an explicit name.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MethodRegistry::insert`].
    pub fn register_method<F>(
        &mut self,
        name: impl Into<String>,
        func: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(Params) -> MethodResult + Send + Sync + 'static,
    {
        self.insert(name, Method::new(func)).map(|_| ())
    }

    /// Register every method exported by `service` under its namespace.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MethodRegistry::build_method_map`]; a
    /// malformed namespace surfaces as an invalid full name.
    pub fn register_service<S: Service>(&mut self, service: &S) -> Result<(), RegistryError> {
        let namespace = service.namespace();
        let exported = service.methods();
        debug!(
            namespace = %namespace,
            exported = exported.len(),
            "Registering service"
        );
        self.build_method_map(exported, Some(&namespace))
    }

    /// Construct `S` via [`Default`] and register its exported methods.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MethodRegistry::register_service`].
    pub fn register_service_default<S>(&mut self) -> Result<(), RegistryError>
    where
        S: Service + Default,
    {
        let service = S::default();
        self.register_service(&service)
    }

    /// Register a map of name-to-method pairs, optionally under a prefix.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MethodRegistry::build_method_map`].
    pub fn register_map(
        &mut self,
        methods: HashMap<String, Method>,
        prefix: Option<&str>,
    ) -> Result<(), RegistryError> {
        self.build_method_map(methods, prefix)
    }

    /// Populate the registry from name-to-method pairs.
    ///
    /// Each name is joined to the optional prefix with the namespace
    /// separator, validated, and inserted under the configured duplicate
    /// policy. The first failure aborts the bulk operation; entries already
    /// inserted by the same call remain bound.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MethodRegistry::insert`], reported for the
    /// joined name.
    pub fn build_method_map<I>(
        &mut self,
        entries: I,
        prefix: Option<&str>,
    ) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (String, Method)>,
    {
        let prefix = prefix.unwrap_or("");
        for (name, method) in entries {
            let full_name = naming::join(prefix, &name);
            self.insert(full_name, method)?;
        }
        Ok(())
    }
}

//! Exporting a value's methods into a registry as a namespaced set.
//!
//! A [`Service`](crate::Service) enumerates its exported methods explicitly;
//! the registry joins each exported name to the service's namespace. The
//! default namespace is derived from the implementing type's name.

use crate::method::Method;

/// A value whose methods can be registered as a namespaced set.
///
/// Implementors return their exported name-to-callable pairs from
/// [`methods`](Service::methods); the closures typically capture whatever
/// state the service needs (`Arc`-shared handles, configuration, and so on).
///
/// ```
/// use methodmap::{Method, MethodRegistry, Params, Service};
/// use serde_json::json;
///
/// struct Clock;
///
/// impl Service for Clock {
///     fn methods(&self) -> Vec<(String, Method)> {
///         vec![(
///             "ticks".to_string(),
///             Method::new(|_params: Params| Ok(json!(0))),
///         )]
///     }
/// }
///
/// let mut registry = MethodRegistry::new();
/// registry.register_service(&Clock).expect("register");
/// assert!(registry.contains("clock.ticks"));
/// ```
pub trait Service: Send + Sync + 'static {
    /// Namespace the exported methods are registered under.
    ///
    /// Defaults to the implementing type's name, lowercased.
    fn namespace(&self) -> String {
        type_namespace::<Self>()
    }

    /// The exported name-to-callable pairs.
    fn methods(&self) -> Vec<(String, Method)>;
}

/// Derive a namespace from a type name: the last path segment, lowercased.
///
/// Generic arguments are stripped, so `mycrate::api::Store<Memory>` becomes
/// `store`.
#[must_use]
pub fn type_namespace<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let base = base.rsplit("::").next().unwrap_or(base);
    base.to_ascii_lowercase()
}

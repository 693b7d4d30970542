//! # methodmap
//!
//! **methodmap** is a name-keyed method registry for building JSON-RPC style
//! dispatch tables in Rust.
//!
//! ## Overview
//!
//! methodmap stores callables under dot-separated method names and hands them
//! back on lookup. It covers the registration side of an RPC server: single
//! functions under explicit names, whole services under a namespace, and
//! plain maps under an optional prefix. Transport, wire formats, and the
//! request loop that routes protocol messages are deliberately out of scope;
//! the registry is the table such a loop would consult.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`method`]** - Callable values, the [`Params`] argument shape, and
//!   method errors
//! - **[`registry`]** - The name-keyed method table and its registration
//!   entry points
//! - **[`service`]** - Exporting a value's methods as a namespaced set
//! - **[`naming`]** - Method-name grammar, reserved namespace, prefix joining
//! - **[`runtime_config`]** - Environment variable-based configuration
//! - **[`shared`]** - Lock-free shared access with atomic replacement
//!
//! ## Quick Start
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
//! let add = registry.get("math.add").expect("registered");
//! let params = Params::from_value(Some(json!([2, 3]))).expect("array params");
//! assert_eq!(add.call(params).expect("call"), json!(5));
//! ```
//!
//! ## Key Patterns
//!
//! 1. **Explicit names**: Rust callables carry no runtime name, so every
//!    registration names its method explicitly
//! 2. **Namespaced services**: a [`Service`] exports `(name, callable)` pairs
//!    and the registry binds them under `namespace.name`
//! 3. **Validated writes**: every write path checks the name grammar and the
//!    reserved `rpc` namespace
//! 4. **Snapshot reads**: [`SharedRegistry`] gives concurrent callers
//!    lock-free snapshots with atomic replacement
//!
//! ## Replacement Semantics
//!
//! Registering a name twice is governed by [`DuplicatePolicy`]: the default
//! `Replace` displaces the old binding (and logs it), `Deny` rejects the
//! second registration. The policy is set in code or via the
//! `METHODMAP_ON_DUPLICATE` environment variable.

pub mod method;
pub mod naming;
pub mod registry;
pub mod runtime_config;
pub mod service;
pub mod shared;

pub use method::{Method, MethodError, MethodFn, MethodResult, Params};
pub use registry::{MethodRegistry, RegistryError};
pub use runtime_config::{DuplicatePolicy, RegistryConfig};
pub use service::{type_namespace, Service};
pub use shared::SharedRegistry;

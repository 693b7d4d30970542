//! Tests for service registration
//!
//! # Test Coverage
//!
//! Validates the namespaced bulk-registration entry points:
//! - Default namespace derivation from the type name
//! - Namespace overrides
//! - Default-constructed service registration
//! - Composing multiple services into one registry
//! - Duplicate detection across services under the deny policy

#![allow(clippy::unwrap_used, clippy::expect_used)]

use methodmap::{
    DuplicatePolicy, Method, MethodRegistry, Params, RegistryConfig, RegistryError, Service,
};
use serde_json::json;

#[derive(Default)]
struct Calculator {
    bias: i64,
}

impl Service for Calculator {
    fn methods(&self) -> Vec<(String, Method)> {
        let bias = self.bias;
        vec![
            (
                "add".to_string(),
                Method::new(move |params: Params| {
                    let (a, b): (i64, i64) = params.parse()?;
                    Ok(json!(a + b + bias))
                }),
            ),
            (
                "negate".to_string(),
                Method::new(|params: Params| {
                    let (value,): (i64,) = params.parse()?;
                    Ok(json!(-value))
                }),
            ),
        ]
    }
}

struct Clock;

impl Service for Clock {
    fn namespace(&self) -> String {
        "time".to_string()
    }

    fn methods(&self) -> Vec<(String, Method)> {
        vec![(
            "ticks".to_string(),
            Method::new(|_params: Params| Ok(json!(1024))),
        )]
    }
}

#[test]
fn test_service_registers_under_type_namespace() {
    let mut registry = MethodRegistry::new();
    registry
        .register_service(&Calculator { bias: 10 })
        .expect("register");

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("calculator.add"));
    assert!(registry.contains("calculator.negate"));
    assert!(!registry.contains("add"));

    let add = registry.get("calculator.add").expect("bound");
    let params = Params::from_value(Some(json!([2, 3]))).unwrap();
    assert_eq!(add.call(params).unwrap(), json!(15));
}

#[test]
fn test_namespace_override() {
    let mut registry = MethodRegistry::new();
    registry.register_service(&Clock).expect("register");

    assert!(registry.contains("time.ticks"));
    assert!(!registry.contains("clock.ticks"));
}

#[test]
fn test_register_service_default() {
    let mut registry = MethodRegistry::new();
    registry
        .register_service_default::<Calculator>()
        .expect("register");

    let add = registry.get("calculator.add").expect("bound");
    let params = Params::from_value(Some(json!([2, 3]))).unwrap();
    // The default-constructed calculator has no bias.
    assert_eq!(add.call(params).unwrap(), json!(5));
}

#[test]
fn test_services_compose_in_one_registry() {
    let mut registry = MethodRegistry::new();
    registry
        .register_service(&Calculator { bias: 0 })
        .expect("register calculator");
    registry.register_service(&Clock).expect("register clock");

    let mut names: Vec<&str> = registry.method_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["calculator.add", "calculator.negate", "time.ticks"]
    );
}

#[test]
fn test_duplicate_across_services_denied() {
    let config = RegistryConfig {
        on_duplicate: DuplicatePolicy::Deny,
    };
    let mut registry = MethodRegistry::with_config(config);
    registry
        .register_service(&Calculator { bias: 0 })
        .expect("first registration");

    let err = registry
        .register_service(&Calculator { bias: 7 })
        .unwrap_err();
    assert!(matches!(err, RegistryError::Duplicate { .. }));

    // The first service's bindings survive the failed re-registration.
    let add = registry.get("calculator.add").expect("bound");
    let params = Params::from_value(Some(json!([1, 1]))).unwrap();
    assert_eq!(add.call(params).unwrap(), json!(2));
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use serde_json::json;

fn constant(result: i64) -> Method {
    Method::new(move |_params: Params| Ok(json!(result)))
}

fn deny_config() -> RegistryConfig {
    RegistryConfig {
        on_duplicate: DuplicatePolicy::Deny,
    }
}

#[test]
fn insert_and_get_roundtrip() {
    let mut registry = MethodRegistry::new();
    registry.insert("ping", constant(1)).unwrap();

    let method = registry.get("ping").expect("bound");
    assert_eq!(method.call(Params::None).unwrap(), json!(1));
    assert!(registry.get("pong").is_none());
}

#[test]
fn insert_reports_displaced_binding() {
    let mut registry = MethodRegistry::new();
    registry.insert("ping", constant(1)).unwrap();

    let displaced = registry.insert("ping", constant(2)).unwrap();
    let old = displaced.expect("previous binding returned");
    assert_eq!(old.call(Params::None).unwrap(), json!(1));

    let current = registry.get("ping").expect("bound");
    assert_eq!(current.call(Params::None).unwrap(), json!(2));
    assert_eq!(registry.len(), 1);
}

#[test]
fn deny_policy_keeps_original_binding() {
    let mut registry = MethodRegistry::with_config(deny_config());
    registry.insert("ping", constant(1)).unwrap();

    let err = registry.insert("ping", constant(2)).unwrap_err();
    assert_eq!(
        err,
        RegistryError::Duplicate {
            name: "ping".to_string()
        }
    );

    let current = registry.get("ping").expect("still bound");
    assert_eq!(current.call(Params::None).unwrap(), json!(1));
}

#[test]
fn invalid_name_is_rejected() {
    let mut registry = MethodRegistry::new();
    for name in ["", "1abc", "math.", "math add"] {
        let err = registry.insert(name, constant(0)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidName {
                name: name.to_string()
            }
        );
    }
    assert!(registry.is_empty());
}

#[test]
fn reserved_namespace_is_rejected() {
    let mut registry = MethodRegistry::new();
    let err = registry.insert("rpc.discover", constant(0)).unwrap_err();
    assert_eq!(
        err,
        RegistryError::ReservedNamespace {
            name: "rpc.discover".to_string()
        }
    );

    // Only the exact namespace is reserved, not every "rpc" substring.
    registry.insert("rpcx.discover", constant(0)).unwrap();
}

#[test]
fn remove_unbinds() {
    let mut registry = MethodRegistry::new();
    registry.insert("ping", constant(1)).unwrap();

    assert!(registry.remove("ping").is_some());
    assert!(registry.remove("ping").is_none());
    assert!(registry.get("ping").is_none());
    assert!(registry.is_empty());
}

#[test]
fn build_method_map_applies_prefix() {
    let mut registry = MethodRegistry::new();
    let entries = vec![
        ("echo".to_string(), constant(1)),
        ("reverse".to_string(), constant(2)),
    ];
    registry.build_method_map(entries, Some("util")).unwrap();

    assert!(registry.contains("util.echo"));
    assert!(registry.contains("util.reverse"));
    assert!(!registry.contains("echo"));
}

#[test]
fn build_method_map_stops_at_first_failure() {
    let mut registry = MethodRegistry::new();
    let entries = vec![
        ("first".to_string(), constant(1)),
        ("not valid".to_string(), constant(2)),
        ("last".to_string(), constant(3)),
    ];
    let err = registry.build_method_map(entries, None).unwrap_err();
    assert_eq!(
        err,
        RegistryError::InvalidName {
            name: "not valid".to_string()
        }
    );

    // Entries before the failure stay bound; later entries were never seen.
    assert!(registry.contains("first"));
    assert!(!registry.contains("last"));
}

#[test]
fn method_names_lists_bindings() {
    let mut registry = MethodRegistry::new();
    registry.insert("a", constant(1)).unwrap();
    registry.insert("b", constant(2)).unwrap();

    let mut names: Vec<&str> = registry.method_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);

    let mut pairs: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec!["a", "b"]);
}

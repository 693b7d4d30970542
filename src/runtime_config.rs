//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for registry behavior.
//!
//! ## Environment Variables
//!
//! ### `METHODMAP_ON_DUPLICATE`
//!
//! Controls what happens when a registration names an already-bound method:
//!
//! - `replace` (default) - the new binding wins; the displacement is logged
//! - `deny` - the registration fails with a duplicate error
//!
//! Unrecognized values fall back to the default.
//!
//! ## Usage
//!
//! ```
//! use methodmap::runtime_config::RegistryConfig;
//!
//! let config = RegistryConfig::from_env();
//! println!("duplicate policy: {:?}", config.on_duplicate);
//! ```

use std::env;

/// Policy applied when a registration names an already-bound method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The new binding wins; the displaced method is dropped.
    #[default]
    Replace,
    /// A second binding for a live name is an error.
    Deny,
}

/// Registry configuration loaded from environment variables.
///
/// Load this at startup using [`RegistryConfig::from_env()`], or build one
/// directly when the policy is decided in code.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryConfig {
    /// Policy for registrations that name an already-bound method
    pub on_duplicate: DuplicatePolicy,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let on_duplicate = match env::var("METHODMAP_ON_DUPLICATE") {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "deny" => DuplicatePolicy::Deny,
                _ => DuplicatePolicy::Replace,
            },
            Err(_) => DuplicatePolicy::Replace,
        };
        RegistryConfig { on_duplicate }
    }
}

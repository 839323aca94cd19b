//! Typed environment variable lookup with default fallback.
//!
//! Every resolver in this module is total: a missing or unparseable
//! value falls back to the supplied default, never to an error.

use std::env;

use super::constants::{FALSY_VALUES, TRUTHY_VALUES};

/// Resolve a string variable, falling back to `default` when unset.
pub fn string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Resolve a boolean variable, falling back to `default` when unset
/// or when the value is not a recognized truthy/falsy string.
pub fn bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|raw| {
            let parsed = parse_bool(&raw);
            if parsed.is_none() {
                tracing::warn!(
                    "{} has unrecognized boolean value {:?}, using default {}",
                    key,
                    raw,
                    default
                );
            }
            parsed
        })
        .unwrap_or(default)
}

/// Convert a raw string to a boolean.
///
/// Accepts `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`,
/// case-insensitively and ignoring surrounding whitespace. Anything
/// else is `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let normalized = raw.trim().to_ascii_lowercase();
    if TRUTHY_VALUES.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSY_VALUES.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Serializes tests that mutate process environment variables.
///
/// The test harness runs tests on parallel threads; unguarded
/// `set_var`/`remove_var` calls would race between tests.
#[cfg(test)]
pub(crate) static TEST_ENV_LOCK: once_cell::sync::Lazy<std::sync::Mutex<()>> =
    once_cell::sync::Lazy::new(|| std::sync::Mutex::new(()));

#[cfg(test)]
mod tests {
    use super::*;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        TEST_ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_string_unset_uses_default() {
        let _guard = lock();
        env::remove_var("ENV_TEST_UNSET_STRING");
        assert_eq!(string("ENV_TEST_UNSET_STRING", "fallback"), "fallback");
    }

    #[test]
    fn test_string_set_wins_over_default() {
        let _guard = lock();
        env::set_var("ENV_TEST_SET_STRING", "from-env");
        assert_eq!(string("ENV_TEST_SET_STRING", "fallback"), "from-env");
        env::remove_var("ENV_TEST_SET_STRING");
    }

    #[test]
    fn test_string_empty_value_counts_as_set() {
        let _guard = lock();
        env::set_var("ENV_TEST_EMPTY_STRING", "");
        assert_eq!(string("ENV_TEST_EMPTY_STRING", "fallback"), "");
        env::remove_var("ENV_TEST_EMPTY_STRING");
    }

    #[test]
    fn test_bool_unset_uses_default() {
        let _guard = lock();
        env::remove_var("ENV_TEST_UNSET_BOOL");
        assert!(bool("ENV_TEST_UNSET_BOOL", true));
        assert!(!bool("ENV_TEST_UNSET_BOOL", false));
    }

    #[test]
    fn test_bool_set_wins_over_default() {
        let _guard = lock();
        env::set_var("ENV_TEST_SET_BOOL", "false");
        assert!(!bool("ENV_TEST_SET_BOOL", true));
        env::set_var("ENV_TEST_SET_BOOL", "true");
        assert!(bool("ENV_TEST_SET_BOOL", false));
        env::remove_var("ENV_TEST_SET_BOOL");
    }

    #[test]
    fn test_bool_unrecognized_uses_default() {
        let _guard = lock();
        env::set_var("ENV_TEST_BAD_BOOL", "maybe");
        assert!(bool("ENV_TEST_BAD_BOOL", true));
        assert!(!bool("ENV_TEST_BAD_BOOL", false));
        env::remove_var("ENV_TEST_BAD_BOOL");
    }

    #[test]
    fn test_parse_bool_truthy_values() {
        for raw in ["true", "TRUE", "True", "1", "yes", "on", " true "] {
            assert_eq!(parse_bool(raw), Some(true), "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_parse_bool_falsy_values() {
        for raw in ["false", "FALSE", "False", "0", "no", "off", " off "] {
            assert_eq!(parse_bool(raw), Some(false), "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_parse_bool_unrecognized_values() {
        for raw in ["", "2", "enabled", "truee", "y n"] {
            assert_eq!(parse_bool(raw), None, "raw = {:?}", raw);
        }
    }
}

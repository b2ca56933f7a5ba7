//! Unit tests for the process-wide configuration
//!
//! These tests mutate shared state and run serially.

use readable::{config, Array, Config, Value};
use serial_test::serial;

/// Restores the default shared configuration when dropped, even if the
/// test panics first.
struct ResetOnDrop;

impl Drop for ResetOnDrop {
    fn drop(&mut self) {
        config::reset();
    }
}

#[cfg(test)]
mod shared_config_tests {
    use super::*;

    #[test]
    #[serial]
    fn test_max_string_length_is_read_at_format_time() {
        config::reset();
        let _reset = ResetOnDrop;
        config::set_max_string_length(10);

        assert_eq!(readable::format_value(&Value::from("0123456789")), r#""0123456789""#);
        assert_eq!(
            readable::format_value(&Value::from("01234567890")),
            r#""0123456789...[11]""#
        );

        config::set_max_string_length(3);
        assert_eq!(readable::format_value(&Value::from("abcd")), r#""abc...[4]""#);
    }

    #[test]
    #[serial]
    fn test_root_path() {
        config::reset();
        let _reset = ResetOnDrop;
        let root = config::current().root_path;
        assert_eq!(
            readable::normalize_path(&format!("{}test/test.x", root)),
            "test/test.x"
        );
        assert_eq!(readable::normalize_path("/outside/root"), "/outside/root");

        config::set_root_path("/srv/app/");
        assert_eq!(readable::normalize_path("/srv/app/src/lib.rs"), "src/lib.rs");
    }

    #[test]
    #[serial]
    fn test_set_replaces_everything() {
        let _reset = ResetOnDrop;
        config::set(Config::default().with_max_depth(1).with_root_path("/x/"));

        let nested = Value::Array(Array::list(vec![Value::Array(Array::new())]));
        assert_eq!(readable::format_value(&nested), "[{too deeply nested}]");
        assert_eq!(config::current().root_path, "/x/");

        config::reset();
        assert_eq!(config::current(), Config::default());
    }

    #[test]
    #[serial]
    fn test_update_in_place() {
        config::reset();
        let _reset = ResetOnDrop;
        config::update(|c| {
            c.severity_names.insert(99, "E_CUSTOM".to_string());
        });
        assert_eq!(readable::describe_severity(99), "E_CUSTOM");
        config::reset();
        assert_eq!(readable::describe_severity(99), "{unknown error-code}");
    }

    #[test]
    #[serial]
    fn test_failed_test_does_not_leak_configuration() {
        let outcome = std::panic::catch_unwind(|| {
            let _reset = ResetOnDrop;
            config::set_max_string_length(1);
            panic!("assertion failed mid-test");
        });

        assert!(outcome.is_err());
        assert_eq!(config::current(), Config::default());
    }
}

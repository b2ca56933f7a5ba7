//! Error severity codes.
//!
//! The codes follow the PHP `E_*` constants. They are configuration data:
//! [`Config::severity_names`](crate::Config::severity_names) starts out as
//! [`DEFAULT_SEVERITIES`] and may be replaced wholesale.

#![allow(missing_docs)]

pub const E_ERROR: i64 = 1;
pub const E_WARNING: i64 = 2;
pub const E_PARSE: i64 = 4;
pub const E_NOTICE: i64 = 8;
pub const E_CORE_ERROR: i64 = 16;
pub const E_CORE_WARNING: i64 = 32;
pub const E_COMPILE_ERROR: i64 = 64;
pub const E_COMPILE_WARNING: i64 = 128;
pub const E_USER_ERROR: i64 = 256;
pub const E_USER_WARNING: i64 = 512;
pub const E_USER_NOTICE: i64 = 1024;
/// Legacy code, kept for older producers.
pub const E_STRICT: i64 = 2048;
pub const E_RECOVERABLE_ERROR: i64 = 4096;
pub const E_DEPRECATED: i64 = 8192;
pub const E_USER_DEPRECATED: i64 = 16384;

/// Returned for codes missing from the table.
pub const UNKNOWN_SEVERITY: &str = "{unknown error-code}";

/// Default code to name table.
pub const DEFAULT_SEVERITIES: &[(i64, &str)] = &[
    (E_ERROR, "E_ERROR"),
    (E_WARNING, "E_WARNING"),
    (E_PARSE, "E_PARSE"),
    (E_NOTICE, "E_NOTICE"),
    (E_CORE_ERROR, "E_CORE_ERROR"),
    (E_CORE_WARNING, "E_CORE_WARNING"),
    (E_COMPILE_ERROR, "E_COMPILE_ERROR"),
    (E_COMPILE_WARNING, "E_COMPILE_WARNING"),
    (E_USER_ERROR, "E_USER_ERROR"),
    (E_USER_WARNING, "E_USER_WARNING"),
    (E_USER_NOTICE, "E_USER_NOTICE"),
    (E_STRICT, "E_STRICT"),
    (E_RECOVERABLE_ERROR, "E_RECOVERABLE_ERROR"),
    (E_DEPRECATED, "E_DEPRECATED"),
    (E_USER_DEPRECATED, "E_USER_DEPRECATED"),
];

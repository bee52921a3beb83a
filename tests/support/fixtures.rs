//! Test fixtures and constants.

/// Secrets written as files by `Test::standard`.
pub const SECRET_FILES: &[(&str, &str)] = &[
    ("DB_HOST", "db"),
    ("DB_PORT", "5432"),
    ("BALANCE", "52.61"),
    ("SEND_EMAILS", "True"),
    ("TITLE", "some title here "),
    ("DESCRIPTION", "some \ndescription here \r\n"),
];

/// Secrets exported as environment variables by `Test::standard`.
pub const ENV_VARS: &[(&str, &str)] = &[
    ("HOSTNAME", "localhost"),
    ("MAX_WORKERS", "4"),
    ("PERCENT_CHANGE", "15.3"),
    ("DISABLE_CACHE", "false"),
];

/// A secret value used to check that logs never leak values.
pub const CANARY: &str = "sk-live-canary-9f8e7d6c";

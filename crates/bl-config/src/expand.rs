//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key and is only used for error reporting.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${BL_DOCS_TEST_SURELY_UNSET:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(value, "0.0.0.0");
    }

    #[test]
    fn test_missing_var_reports_field() {
        let err = expand_env("${BL_DOCS_TEST_MISSING_VAR}", "site.repository_url").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("site.repository_url"));
        assert!(msg.contains("BL_DOCS_TEST_MISSING_VAR"));
    }
}

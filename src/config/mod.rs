//! Process configuration read from the environment (`.env` is loaded by the binaries).

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 4000;

/// Runtime settings. Built once at startup; a missing required variable is fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Direct Postgres connection string. When set, storage bypasses the PostgREST API.
    pub database_url: Option<String>,
    pub port: u16,
    /// `APP_ENV=test`: build everything but do not bind the listener.
    pub test_mode: bool,
}

/// Returns the value of `key`, or `ConfigError::Missing` when it is unset or empty.
pub fn require_env<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::Missing { key: key.to_string() })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = require_env(&lookup, "SUPABASE_URL")?;
        let supabase_anon_key = require_env(&lookup, "SUPABASE_ANON_KEY")?;
        let database_url = lookup("DATABASE_URL").filter(|v| !v.is_empty());
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT".into(),
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };
        let test_mode = lookup("APP_ENV").as_deref() == Some("test");
        Ok(Config {
            supabase_url,
            supabase_anon_key,
            database_url,
            port,
            test_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_port_and_mode() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert_eq!(config.port, 4000);
        assert!(!config.test_mode);
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = Config::from_lookup(lookup(&[("SUPABASE_URL", "https://project.supabase.co")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == "SUPABASE_ANON_KEY"));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("SUPABASE_URL", ""), ("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == "SUPABASE_URL"));
    }

    #[test]
    fn reads_port_test_mode_and_database_url() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("PORT", "8080"),
            ("APP_ENV", "test"),
            ("DATABASE_URL", "postgres://localhost/certigen"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.test_mode);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/certigen"));
    }

    #[test]
    fn test_mode_needs_exact_value() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("APP_ENV", "TEST"),
        ]))
        .unwrap();
        assert!(!config.test_mode);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("PORT", "abc"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}

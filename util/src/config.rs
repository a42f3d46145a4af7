//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete grader configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub code_runner_host: String,
    pub code_runner_port: u16,
    pub code_runner_timeout_secs: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when unset or unparseable.
fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default, so loading never fails. Numeric values that
    /// do not parse are replaced by their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "class-grader".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "grader=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "grader.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            code_runner_host: env::var("CODE_RUNNER_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            code_runner_port: parsed_or("CODE_RUNNER_PORT", 5000),
            code_runner_timeout_secs: parsed_or("CODE_RUNNER_TIMEOUT_SECS", 60),
        }
    }

    /// Base URL of the external code runner, e.g. `http://127.0.0.1:5000`.
    pub fn code_runner_url(&self) -> String {
        format!("http://{}:{}", self.code_runner_host, self.code_runner_port)
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_code_runner_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.code_runner_host = value.into());
    }

    pub fn set_code_runner_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.code_runner_port = value);
    }

    pub fn set_code_runner_timeout_secs(value: u64) {
        AppConfig::set_field(|cfg| cfg.code_runner_timeout_secs = value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const MUT_VARS: &[&str] = &[
        "CODE_RUNNER_HOST",
        "CODE_RUNNER_PORT",
        "CODE_RUNNER_TIMEOUT_SECS",
        "LOG_TO_STDOUT",
    ];

    fn clear_mut_vars() {
        for k in MUT_VARS {
            unsafe { std::env::remove_var(k) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear_mut_vars();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.code_runner_host, "127.0.0.1");
        assert_eq!(cfg.code_runner_port, 5000);
        assert_eq!(cfg.code_runner_timeout_secs, 60);
        assert!(!cfg.log_to_stdout);
        assert_eq!(cfg.code_runner_url(), "http://127.0.0.1:5000");
    }

    #[test]
    #[serial]
    fn reads_overrides_from_env() {
        clear_mut_vars();
        unsafe {
            std::env::set_var("CODE_RUNNER_HOST", "runner.internal");
            std::env::set_var("CODE_RUNNER_PORT", "8081");
            std::env::set_var("CODE_RUNNER_TIMEOUT_SECS", "5");
            std::env::set_var("LOG_TO_STDOUT", "true");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.code_runner_url(), "http://runner.internal:8081");
        assert_eq!(cfg.code_runner_timeout_secs, 5);
        assert!(cfg.log_to_stdout);
        clear_mut_vars();
    }

    #[test]
    #[serial]
    fn unparseable_numbers_fall_back() {
        clear_mut_vars();
        unsafe {
            std::env::set_var("CODE_RUNNER_PORT", "not-a-port");
            std::env::set_var("CODE_RUNNER_TIMEOUT_SECS", "-3");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.code_runner_port, 5000);
        assert_eq!(cfg.code_runner_timeout_secs, 60);
        clear_mut_vars();
    }

    #[test]
    #[serial]
    fn setters_update_global_and_reset_restores() {
        clear_mut_vars();
        AppConfig::reset();
        AppConfig::set_code_runner_port(9999);
        assert_eq!(AppConfig::global().code_runner_port, 9999);

        AppConfig::reset();
        assert_eq!(AppConfig::global().code_runner_port, 5000);
    }
}

use once_cell::sync::OnceCell;

use crate::env_file::APP_ENV_VAR;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct Config {
    /// Active environment name, `None` when running against plain `.env`.
    pub app_env: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let app_env = normalize_env_name(std::env::var(APP_ENV_VAR).ok());
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self { app_env, log_level })
    }

    /// Process-wide snapshot, captured on first access and never re-read.
    pub fn global() -> anyhow::Result<&'static Config> {
        CONFIG.get_or_try_init(Config::from_env)
    }
}

/// An empty `APP_ENV` means "unset".
fn normalize_env_name(raw: Option<String>) -> Option<String> {
    raw.filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_normalizes_to_none() {
        assert_eq!(normalize_env_name(Some(String::new())), None);
    }

    #[test]
    fn missing_name_stays_none() {
        assert_eq!(normalize_env_name(None), None);
    }

    #[test]
    fn non_empty_name_is_kept() {
        assert_eq!(
            normalize_env_name(Some("production".into())),
            Some("production".into())
        );
    }
}

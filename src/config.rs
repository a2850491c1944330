use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/store.json";
const DEFAULT_ACCOUNT: &str = "shrssrhs";
const DEFAULT_GITHUB_API: &str = "https://api.github.com";
const DEFAULT_CONTRIBUTIONS_API: &str = "https://github-contributions-api.jogruber.de";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// `None` disables the admin panel: every login attempt fails.
    pub admin_password: Option<String>,
    pub github_account: String,
    pub github_api_url: String,
    pub contributions_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            data_path: env::var("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|value| !value.is_empty()),
            github_account: var_or("GITHUB_ACCOUNT", DEFAULT_ACCOUNT),
            github_api_url: trim_url(var_or("GITHUB_API_URL", DEFAULT_GITHUB_API)),
            contributions_api_url: trim_url(var_or(
                "CONTRIBUTIONS_API_URL",
                DEFAULT_CONTRIBUTIONS_API,
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            admin_password: None,
            github_account: DEFAULT_ACCOUNT.to_string(),
            github_api_url: DEFAULT_GITHUB_API.to_string(),
            contributions_api_url: DEFAULT_CONTRIBUTIONS_API.to_string(),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped_from_base_urls() {
        assert_eq!(trim_url("http://127.0.0.1:9000/".into()), "http://127.0.0.1:9000");
        assert_eq!(trim_url("https://api.github.com".into()), "https://api.github.com");
    }

    #[test]
    fn default_config_has_admin_disabled() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.admin_password.is_none());
        assert_eq!(config.github_account, "shrssrhs");
    }
}

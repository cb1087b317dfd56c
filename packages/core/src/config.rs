use std::env;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::store::DEFAULT_STORE_PATH;
use crate::vacancy::hh_adapter::DEFAULT_FETCH_LIMIT;

pub const DEFAULT_API_URL: &str = "https://api.hh.ru";

/// All of Russia.
pub const DEFAULT_AREA: u32 = 113;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub area: u32,
    pub user_agent: String,
    pub store_path: PathBuf,
    pub fetch_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Every variable is optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("HH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let area = match lookup("HH_AREA") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| format!("HH_AREA must be a valid area id, got '{}'", raw))?,
            None => DEFAULT_AREA,
        };

        let user_agent = lookup("HH_USER_AGENT")
            .unwrap_or_else(|| format!("hh-vacancy-tracker/{}", env!("CARGO_PKG_VERSION")));

        let store_path = lookup("VACANCY_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let fetch_limit = match lookup("FETCH_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or("FETCH_LIMIT must be a positive number")?,
            None => DEFAULT_FETCH_LIMIT,
        };

        Ok(Self {
            api_url,
            area,
            user_agent,
            store_path,
            fetch_limit,
        })
    }

    /// Command-line flags take precedence over the environment.
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<(), String> {
        if let Some(path) = &cli.store_path {
            self.store_path = path.clone();
        }
        if let Some(url) = &cli.api_url {
            self.api_url = url.clone();
        }
        if let Some(area) = cli.area {
            self.area = area;
        }
        if let Some(limit) = cli.limit {
            if limit == 0 {
                return Err("--limit must be a positive number".to_string());
            }
            self.fetch_limit = limit;
        }
        Ok(())
    }
}

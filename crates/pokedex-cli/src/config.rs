// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use pokedex_app::{ControllerOptions, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "pokedex";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_TIMEOUT: &str = "10s";
const DEFAULT_LOG_LEVEL: &str = "info";
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub search: Search,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: Api::default(),
            search: Search::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Api {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
    pub page_size: Option<u32>,
    pub detail_concurrency: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Search {
    pub debounce: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("POKEDEX_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set POKEDEX_CONFIG_PATH to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no `version = 1` line; values belong under [api], [search], and [log]",
                    path.display()
                )
            })?;
        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.api.base_url
            && base_url.trim().is_empty()
        {
            bail!("api.base_url in {} must not be empty", path.display());
        }

        if let Some(timeout) = &self.api.timeout
            && parse_duration(timeout)? <= Duration::ZERO
        {
            bail!(
                "api.timeout in {} must be positive, got {}",
                path.display(),
                timeout
            );
        }

        if let Some(page_size) = self.api.page_size
            && !(1..=MAX_PAGE_SIZE).contains(&page_size)
        {
            bail!(
                "api.page_size in {} must be between 1 and {MAX_PAGE_SIZE}, got {}",
                path.display(),
                page_size
            );
        }

        if self.api.detail_concurrency == Some(0) {
            bail!(
                "api.detail_concurrency in {} must be at least 1",
                path.display()
            );
        }

        if let Some(debounce) = &self.search.debounce {
            parse_duration(debounce)
                .with_context(|| format!("search.debounce in {}", path.display()))?;
        }

        Ok(())
    }

    pub fn api_base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .unwrap_or(pokedex_api::DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn api_timeout(&self) -> Result<Duration> {
        parse_duration(self.api.timeout.as_deref().unwrap_or(DEFAULT_TIMEOUT))
    }

    pub fn page_size(&self) -> u32 {
        self.api.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn detail_concurrency(&self) -> usize {
        self.api
            .detail_concurrency
            .unwrap_or(pokedex_api::DEFAULT_DETAIL_CONCURRENCY)
    }

    pub fn debounce(&self) -> Result<Duration> {
        match &self.search.debounce {
            Some(raw) => parse_duration(raw),
            None => Ok(DEFAULT_DEBOUNCE),
        }
    }

    pub fn controller_options(&self) -> Result<ControllerOptions> {
        Ok(ControllerOptions {
            page_size: self.page_size(),
            debounce: self.debounce()?,
        })
    }

    /// `EnvFilter` directives; `POKEDEX_LOG` overrides `[log].level`.
    pub fn log_filter(&self) -> String {
        env::var("POKEDEX_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.log.level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned())
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.log.file {
            return Ok(PathBuf::from(file));
        }
        let cache_root = dirs::cache_dir().ok_or_else(|| {
            anyhow!("cannot resolve cache directory; set [log].file to a writable path")
        })?;
        Ok(cache_root.join(APP_NAME).join("pokedex.log"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# pokedex config\n# Place this file at: {}\n\nversion = 1\n\n[api]\nbase_url = \"{}\"\ntimeout = \"{}\"\npage_size = {}\ndetail_concurrency = {}\n\n[search]\ndebounce = \"{}ms\"\n\n[log]\nlevel = \"{}\"\n# Optional. Default is the platform cache dir (for example ~/.cache/pokedex/pokedex.log)\n# file = \"/absolute/path/to/pokedex.log\"\n",
            path.display(),
            pokedex_api::DEFAULT_BASE_URL,
            DEFAULT_TIMEOUT,
            DEFAULT_PAGE_SIZE,
            pokedex_api::DEFAULT_DETAIL_CONCURRENCY,
            DEFAULT_DEBOUNCE.as_millis(),
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    let raw = raw.trim();
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        let secs = mins
            .checked_mul(60)
            .with_context(|| format!("duration {raw:?} is too large"))?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 300ms or 10s)")
}

//! API base URL resolution.
//!
//! The browser bundle has no process environment, so public configuration is
//! baked in at compile time:
//! - `GALLERY_DEV_API_BASE_URL`: debug builds, default `http://localhost:8001`
//! - `GALLERY_API_BASE_URL`: release builds, default empty (same origin)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DEV_API_BASE_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub const fn current() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Config for the current build mode from compile-time variables.
    pub fn from_build_env() -> Self {
        Self::resolve(
            BuildMode::current(),
            option_env!("GALLERY_DEV_API_BASE_URL"),
            option_env!("GALLERY_API_BASE_URL"),
        )
    }

    /// Pick the base URL for `mode`, dropping any trailing `/`.
    pub fn resolve(mode: BuildMode, dev_base_url: Option<&str>, prod_base_url: Option<&str>) -> Self {
        let raw = match mode {
            BuildMode::Development => non_blank(dev_base_url).unwrap_or(DEFAULT_DEV_API_BASE_URL),
            BuildMode::Production => non_blank(prod_base_url).unwrap_or(""),
        };
        Self { base_url: raw.trim().trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for an API endpoint such as `/admin/verify`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Default log filter for the binaries: library events at info level
pub const LOG_DIRECTIVE: &str = "portfolio_content=info";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root folder holding one sub-folder per collection
    pub content_dir: PathBuf,

    /// Treat content warnings as build failures
    pub fail_on_warnings: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            content_dir: std::env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("src/content")),

            fail_on_warnings: match std::env::var("FAIL_ON_WARNINGS") {
                Ok(value) => parse_flag(&value)?,
                Err(_) => false,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        other => bail!("FAIL_ON_WARNINGS must be a boolean, got '{}'", other),
    }
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use media_links::resolver::{DEFAULT_USER_AGENT, ResolverConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{Args, OutputFormat};
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Overall redirect resolution timeout, in seconds
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_redirects: usize,
    pub user_agent: String,
    /// URLs classified concurrently within one batch
    pub concurrency: usize,
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 5,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            concurrency: 8,
            output: OutputFormat::Pretty,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("linkscan").join("config.toml"))
    }

    /// Loads `path`, or the default location when `None`. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self =
            toml::from_str(&content).map_err(|source| CliError::ConfigParse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(CliError::Config("timeout_secs must be greater than 0".into()));
        }
        if self.concurrency == 0 {
            return Err(CliError::Config("concurrency must be greater than 0".into()));
        }
        Ok(())
    }

    /// Command-line flags take precedence over file values.
    pub fn with_overrides(mut self, args: &Args) -> Result<Self> {
        if let Some(timeout) = args.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(concurrency) = args.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_max_redirects(self.max_redirects)
            .with_user_agent(self.user_agent.as_str())
    }
}

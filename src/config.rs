//! Server Configuration
//!
//! Parses the command line into a `ServerConfig` and builds the normalizer
//! it selects.

use crate::normalize::{DictionaryTranslator, Normalizer, PassThrough, standard};

use anyhow::{Result, anyhow, bail};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub const USAGE: &str = "--bind <addr:port> [--policy plain|standard] [--translations <file.json>] [--log-level <level>]";

/// Which normalization pipeline the store runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Every token counted as-is, case-sensitive.
    Plain,
    /// Alphabetic validation, lower-casing and translation.
    #[default]
    Standard,
}

impl FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(Policy::Plain),
            "standard" => Ok(Policy::Standard),
            other => Err(anyhow!("Unknown policy '{}' (expected plain or standard)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub policy: Policy,
    pub translations: Option<PathBuf>,
    pub log_level: tracing::Level,
}

impl ServerConfig {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        let mut bind_addr: Option<SocketAddr> = None;
        let mut policy = Policy::default();
        let mut translations: Option<PathBuf> = None;
        let mut log_level = tracing::Level::INFO;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .map(String::as_str)
                    .ok_or_else(|| anyhow!("{} requires a value", flag))
            };
            match flag {
                "--bind" => {
                    bind_addr = Some(value()?.parse()?);
                    i += 2;
                }
                "--policy" => {
                    policy = value()?.parse()?;
                    i += 2;
                }
                "--translations" => {
                    translations = Some(PathBuf::from(value()?));
                    i += 2;
                }
                "--log-level" => {
                    log_level = value()?
                        .parse()
                        .map_err(|_| anyhow!("Invalid log level '{}'", args[i + 1]))?;
                    i += 2;
                }
                other => bail!("Unknown argument '{}'", other),
            }
        }

        let bind_addr = bind_addr.ok_or_else(|| anyhow!("--bind is required"))?;
        if policy == Policy::Plain && translations.is_some() {
            bail!("--translations only applies to the standard policy");
        }

        Ok(Self {
            bind_addr,
            policy,
            translations,
            log_level,
        })
    }

    /// Builds the normalizer selected by this configuration.
    pub fn build_normalizer(&self) -> Result<Arc<dyn Normalizer>> {
        match self.policy {
            Policy::Plain => Ok(Arc::new(PassThrough)),
            Policy::Standard => {
                let translator = match &self.translations {
                    Some(path) => DictionaryTranslator::load(path)?,
                    None => DictionaryTranslator::new(),
                };
                Ok(Arc::new(standard(translator)))
            }
        }
    }
}

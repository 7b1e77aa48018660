use std::path::PathBuf;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// The environment variable which overrides the configured nameservers.
pub const ENV_DNS: &str = "IPLOG_DNS";

const DEFAULT_DATABASE: &str = "ip_addresses.db";
const DEFAULT_MIN_LENGTH: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: PathBuf,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            resolver: Default::default(),
            validation: Default::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(b: &[u8]) -> serde_yaml::Result<Self> {
        if b.iter().all(|c| c.is_ascii_whitespace()) {
            return Ok(Default::default());
        }
        serde_yaml::from_slice::<Config>(b)
    }

    /// Replace the configured nameservers with those listed in the given
    /// environment variable value, separated by ',' or ';'.
    pub fn apply_dns_env(&mut self, value: &str) {
        let nameservers: Vec<String> = value
            .split([';', ','])
            .map(|it| it.trim())
            .filter(|it| !it.is_empty())
            .map(String::from)
            .collect();

        if !nameservers.is_empty() {
            info!("use nameservers from {}: {:?}", ENV_DNS, &nameservers);
            self.resolver.nameservers = nameservers;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct ResolverConfig {
    /// Explicit nameservers, either `ip` or `ip:port`. Empty means the system resolver.
    #[serde(default)]
    pub nameservers: Vec<String>,
    /// Fixed answers which bypass any lookup.
    #[serde(default)]
    pub overrides: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ValidationConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: None,
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

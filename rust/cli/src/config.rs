use baccarat_engine::player::STARTING_BALANCE;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BACCARAT_CONFIG";
pub const SEED_ENV: &str = "BACCARAT_SEED";
pub const STARTING_BALANCE_ENV: &str = "BACCARAT_STARTING_BALANCE";
pub const DEAL_ONLY_ENV: &str = "BACCARAT_DEAL_ONLY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: f64,
    pub seed: Option<u64>,
    pub deal_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub seed: ValueSource,
    pub deal_only: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            seed: ValueSource::Default,
            deal_only: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of file and environment values.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        starting_balance: Option<f64>,
        deal_only: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(s) = seed {
            self.config.seed = Some(s);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(b) = starting_balance {
            self.config.starting_balance = b;
            self.sources.starting_balance = ValueSource::Cli;
        }
        if deal_only {
            self.config.deal_only = true;
            self.sources.deal_only = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            seed: None,
            deal_only: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        tracing::debug!(path = %path, "loaded config file");
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.deal_only {
            cfg.deal_only = v;
            sources.deal_only = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(balance) = std::env::var(STARTING_BALANCE_ENV)
        && !balance.is_empty()
    {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(flag) = std::env::var(DEAL_ONLY_ENV)
        && !flag.is_empty()
    {
        cfg.deal_only =
            parse_bool(&flag).ok_or_else(|| ConfigError::Invalid("Invalid deal_only".into()))?;
        sources.deal_only = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    deal_only: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !cfg.starting_balance.is_finite() || cfg.starting_balance <= 0.0 {
        return Err(ConfigError::Invalid(
            "starting_balance must be > 0".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

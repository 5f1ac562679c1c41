use drawpoker_engine::ledger::{Bet, Denomination, Money, STARTING_BALANCE};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: Money,
    pub denomination: Denomination,
    pub bet: Bet,
    pub seed: Option<u64>,
    pub strategy: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub denomination: ValueSource,
    pub bet: ValueSource,
    pub seed: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            denomination: ValueSource::Default,
            bet: ValueSource::Default,
            seed: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            denomination: Denomination::default(),
            bet: Bet::default(),
            seed: None,
            strategy: "paying".into(),
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DRAWPOKER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = parse_balance(&scalar_text(&v))?;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.denomination {
            cfg.denomination = parse_denomination(&scalar_text(&v))?;
            sources.denomination = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = Bet::new(v).map_err(|e| ConfigError::Invalid(e.to_string()))?;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Ok(balance) = std::env::var("DRAWPOKER_STARTING_BALANCE")
        && !balance.is_empty()
    {
        cfg.starting_balance = parse_balance(&balance)?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(denom) = std::env::var("DRAWPOKER_DENOMINATION")
        && !denom.is_empty()
    {
        cfg.denomination = parse_denomination(&denom)?;
        sources.denomination = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("DRAWPOKER_BET")
        && !bet.is_empty()
    {
        let credits: u8 = bet
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid bet: {}", bet)))?;
        cfg.bet = Bet::new(credits).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        sources.bet = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("DRAWPOKER_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(name) = std::env::var("DRAWPOKER_STRATEGY")
        && !name.is_empty()
    {
        cfg.strategy = name;
        sources.strategy = ValueSource::Env;
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
    starting_balance: Option<toml::Value>,
    #[serde(default)]
    denomination: Option<toml::Value>,
    #[serde(default)]
    bet: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategy: Option<String>,
}

/// Amounts may be written as TOML strings or numbers (`"0.50"`, `0.5`, `200`).
fn scalar_text(v: &toml::Value) -> String {
    match v {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_balance(s: &str) -> Result<Money, ConfigError> {
    Money::parse(s).map_err(|_| ConfigError::Invalid(format!("Invalid starting_balance: {}", s)))
}

fn parse_denomination(s: &str) -> Result<Denomination, ConfigError> {
    s.parse::<Denomination>()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance == Money::ZERO {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    if !drawpoker_ai::STRATEGIES.contains(&cfg.strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy '{}' (expected one of: {})",
            cfg.strategy,
            drawpoker_ai::STRATEGIES.join(", ")
        )));
    }
    Ok(())
}

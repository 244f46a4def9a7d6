//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Currency converter configuration.
    #[serde(default)]
    pub converter: ConverterConfig,
    /// Password generator configuration.
    #[serde(default)]
    pub password: PasswordConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Currency converter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    /// Currency selected as the source when a session starts.
    #[serde(default = "default_from")]
    pub default_from: String,
    /// Currency selected as the target when a session starts.
    #[serde(default = "default_to")]
    pub default_to: String,
    /// Decimal places used when displaying converted amounts.
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,
    /// Currency table override. Empty means the built-in table.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
            display_decimals: default_display_decimals(),
            currencies: Vec::new(),
        }
    }
}

fn default_from() -> String {
    "KRW".to_string()
}

fn default_to() -> String {
    "USD".to_string()
}

fn default_display_decimals() -> u32 {
    2
}

/// One currency entry as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code, e.g. "USD".
    pub code: String,
    /// Units of this currency per 1 USD.
    pub value_in_usd: Decimal,
    /// Display symbol.
    pub symbol: String,
    /// Display name.
    pub full_name: String,
    /// Optional flag glyph.
    #[serde(default)]
    pub flag: Option<String>,
}

/// Password generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    /// Shortest password that may be generated.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Longest password that may be generated.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

fn default_min_length() -> usize {
    8
}

fn default_max_length() -> usize {
    20
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `CAMBIO__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CAMBIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

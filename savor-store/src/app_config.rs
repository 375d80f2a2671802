use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub tracking: TrackingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_delivery_fee() -> f64 { 3.99 }
fn default_tax_rate() -> f64 { 0.08 }
fn default_currency() -> String { "USD".to_string() }

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
            tax_rate: default_tax_rate(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackingSettings {
    /// Delay between two order status transitions
    #[serde(default = "default_status_interval")]
    pub status_interval_secs: u64,
}

fn default_status_interval() -> u64 { 8 }

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            status_interval_secs: default_status_interval(),
        }
    }
}

impl TrackingSettings {
    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_interval_secs)
    }
}

impl Config {
    /// Load from `config/` under the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load from `<root>/config/`, then apply `SAVOR_*` environment overrides
    pub fn load_from(root: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let dir = root.join("config");
        let file = |name: &str| config::File::with_name(&dir.join(name).to_string_lossy());

        let s = config::Config::builder()
            .add_source(file("default"))
            // Per-environment and local overrides are optional
            .add_source(file(&run_mode).required(false))
            .add_source(file("local").required(false))
            // Eg.. `SAVOR_PRICING__TAX_RATE=0.1` overrides `pricing.tax_rate`
            .add_source(
                config::Environment::with_prefix("SAVOR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build a config from a single TOML document, without touching the filesystem
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let config: Config = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let pricing = &self.pricing;
        if !pricing.delivery_fee.is_finite() || pricing.delivery_fee < 0.0 {
            return Err(config::ConfigError::Message(format!(
                "pricing.delivery_fee must be a non-negative amount, got {}",
                pricing.delivery_fee
            )));
        }
        if !(0.0..1.0).contains(&pricing.tax_rate) {
            return Err(config::ConfigError::Message(format!(
                "pricing.tax_rate must be in [0, 1), got {}",
                pricing.tax_rate
            )));
        }
        if self.tracking.status_interval_secs == 0 {
            return Err(config::ConfigError::Message(
                "tracking.status_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

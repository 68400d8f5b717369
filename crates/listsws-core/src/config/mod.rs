use std::collections::BTreeSet;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_LISTS_PATH;


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub service: ServiceConfig,
    pub suite: SuiteConfig,
    pub requirements: RequirementConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub site_url: String,
    pub lists_path: String,
}

impl ServiceConfig {
    /// ## Summary
    /// Returns the absolute URL of the Lists service endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            self.lists_path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// Field that acts as the canonical text column of a generic list.
    pub common_field_name: String,
    pub resource_prefix: String,
    pub check_in_comment: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementConfig {
    /// Requirement numbers the server under test does not implement.
    #[serde(default)]
    pub disabled: Vec<u32>,
}

impl RequirementConfig {
    #[must_use]
    pub fn disabled_set(&self) -> BTreeSet<u32> {
        self.disabled.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `listsws.toml`, and
    /// `LISTSWS__*` environment variables. Environment variables win.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            .add_source(
                config::Environment::with_prefix("LISTSWS")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("requirements.disabled"),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the TOML is invalid or does not deserialize.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(Config::builder()
            .add_source(Self::defaults()?.build()?)
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Self::defaults()?.add_source(config::File::with_name("listsws.toml").required(false)))
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("service.site_url", "http://localhost")?
            .set_default("service.lists_path", DEFAULT_LISTS_PATH)?
            .set_default("suite.common_field_name", "Title")?
            .set_default("suite.resource_prefix", "MSLISTSWS")?
            .set_default("suite.check_in_comment", "Checked in by conformance suite")?
            .set_default("requirements.disabled", Vec::<String>::new())?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(endpoint = %settings.service.endpoint(), "Configuration loaded");
    Ok(settings)
}

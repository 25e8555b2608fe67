use anyhow::Context;
use serde::Deserialize;

const ENV_PREFIX: &str = "LIBRARY_CATALOG";
const CONFIG_FILE: &str = "library_catalog";

#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
/// Server settings, layered from defaults, an optional `library_catalog.toml`
/// and `LIBRARY_CATALOG__*` environment variables
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub app_name: String,
    pub jaeger_enabled: bool,
    pub seed_sample_books: bool,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(
            config::File::with_name(CONFIG_FILE).required(false),
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Loads settings from given file source, overridden by given environment source
    pub fn load_with<F>(file: F, environment: config::Environment) -> anyhow::Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("app_name", "library_catalog")?
            .set_default("jaeger_enabled", true)?
            .set_default("seed_sample_books", false)?
            .add_source(file)
            .add_source(
                environment
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize settings")
    }
}

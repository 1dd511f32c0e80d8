use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order.
pub const CONFIG_PATHS_ENV: &str = "FOLIO_CONFIG";

/// Prefix of environment overrides, e.g. `FOLIO__WEB3FORMS__ACCESS_KEY`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Load the default config file, the files listed in [`CONFIG_PATHS_ENV`]
/// and the environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(extra) = std::env::var(CONFIG_PATHS_ENV) {
        paths.extend(
            extra
                .split(':')
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        );
    }
    load_with_override(&paths, &[])
}

/// Load the given config files followed by inline toml `overrides`, then
/// apply the environment overrides.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub web3forms: Web3FormsConfig,
    pub webhook: Option<WebhookConfig>,
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub default_subject: String,
}

#[derive(Debug, Deserialize)]
pub struct Web3FormsConfig {
    pub access_key: String,
    pub submit_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookConfig {
    pub url: Url,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub relay_url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_with_override(&[Path::new(DEFAULT_CONFIG_PATH)], &[]).unwrap();
        assert_eq!(config.contact.default_subject, "Portfolio Contact");
    }

    #[test]
    fn overrides() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[
                "web3forms.access_key = \"secret\"",
                "webhook.url = \"https://hooks.example.com/contact\"",
            ],
        )
        .unwrap();

        assert_eq!(config.web3forms.access_key, "secret");
        assert_eq!(
            config.webhook.unwrap().url.as_str(),
            "https://hooks.example.com/contact"
        );
    }

    #[test]
    fn missing_file() {
        let result = load_with_override(&[Path::new("/nonexistent/folio.toml")], &[]);
        assert!(result.is_err());
    }
}

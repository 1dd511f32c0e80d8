use folio_config::Config;
use folio_di::Provides;
use tracing::{info, warn};

use crate::environment::{types::RestServer, ConfigProvider, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.web3forms.access_key.is_empty() {
        warn!("No web3forms access key configured, submissions will be rejected");
    }
    match &config.webhook {
        Some(webhook) => info!("Notifying webhook at {}", webhook.url),
        None => info!("No webhook configured"),
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

use std::sync::Arc;

use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_di::provider;
use folio_extern_impl::{
    relay::ContactRelayApiServiceConfig, web3forms::Web3FormsApiServiceConfig,
};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        ..config: ConfigProvider {
            // Extern
            Web3FormsApiServiceConfig,
            ContactRelayApiServiceConfig,

            // Core
            ContactFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self {
            _cache: Default::default(),
            config,
        }
    }
}

provider! {
    /// Reduced provider, holding the values derived from the configuration
    pub ConfigProvider {
        // Extern
        web3forms_api_service_config: Web3FormsApiServiceConfig,
        contact_relay_api_service_config: ContactRelayApiServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Extern
        let web3forms_api_service_config = Web3FormsApiServiceConfig::new(
            config.web3forms.access_key.as_str(),
            config.web3forms.submit_endpoint_override.clone(),
        );

        let contact_relay_api_service_config = ContactRelayApiServiceConfig {
            relay_url: config.client.relay_url.clone().into(),
        };

        // Core
        let default_subject = config.contact.default_subject.trim();
        anyhow::ensure!(
            !default_subject.is_empty(),
            "contact.default_subject must not be empty"
        );
        let contact_feature_config = ContactFeatureConfig {
            default_subject: default_subject.into(),
            webhook_url: config
                .webhook
                .as_ref()
                .map(|webhook| Arc::new(webhook.url.clone())),
        };

        Ok(Self {
            _cache: Default::default(),
            web3forms_api_service_config,
            contact_relay_api_service_config,
            contact_feature_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use folio_di::Provides;

    use super::*;

    fn provider(overrides: &[&str]) -> Provider {
        let config = folio_config::load_with_override(
            &[Path::new(folio_config::DEFAULT_CONFIG_PATH)],
            overrides,
        )
        .unwrap();
        Provider::new(ConfigProvider::new(&config).unwrap())
    }

    #[test]
    fn provide_rest_server() {
        let mut provider = provider(&[]);
        let _: types::RestServer = provider.provide();
    }

    #[test]
    fn provide_contact_form() {
        let mut provider = provider(&[]);
        let _: types::ContactForm = provider.provide();
    }

    #[test]
    fn contact_feature_config_is_shared() {
        let mut provider = provider(&["webhook.url = \"https://hooks.example.com/contact\""]);

        let a: ContactFeatureConfig = provider.provide();
        let b: ContactFeatureConfig = provider.provide();

        assert!(Arc::ptr_eq(&a.default_subject, &b.default_subject));
        assert_eq!(
            a.webhook_url.unwrap().as_str(),
            "https://hooks.example.com/contact"
        );
    }

    #[test]
    fn blank_default_subject() {
        let config = folio_config::load_with_override(
            &[Path::new(folio_config::DEFAULT_CONFIG_PATH)],
            &["contact.default_subject = \"  \""],
        )
        .unwrap();
        assert!(ConfigProvider::new(&config).is_err());
    }
}

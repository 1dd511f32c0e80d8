use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_form_impl::ContactFormServiceImpl;
use folio_extern_impl::{
    relay::ContactRelayApiServiceImpl, web3forms::Web3FormsApiServiceImpl,
    webhook::WebhookApiServiceImpl,
};
use folio_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Web3FormsApi, WebhookApi, Time>;
pub type ContactForm = ContactFormServiceImpl<ContactRelayApi>;

// Extern
pub type Web3FormsApi = Web3FormsApiServiceImpl;
pub type WebhookApi = WebhookApiServiceImpl;
pub type ContactRelayApi = ContactRelayApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

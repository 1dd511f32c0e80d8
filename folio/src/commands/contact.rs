use anyhow::bail;
use clap::Subcommand;
use folio_config::Config;
use folio_core_form_contracts::{ContactFormService, ContactFormSubmitError};
use folio_di::Provides;
use folio_models::{contact::ContactFormData, validation::get_form_errors};

use crate::environment::{types::ContactForm, ConfigProvider, Provider};

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate a contact form and submit it to the relay
    #[command(aliases(["s"]))]
    Send {
        /// Name of the sender
        #[arg(long)]
        name: String,
        /// Email address of the sender
        #[arg(long)]
        email: String,
        /// Subject of the message
        #[arg(long)]
        subject: Option<String>,
        /// Content of the message
        #[arg(long)]
        message: String,
        /// Value of the hidden honeypot field
        #[arg(long, hide = true)]
        honeypot: Option<String>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                subject,
                message,
                honeypot,
            } => {
                let form = ContactFormData {
                    name,
                    email,
                    subject,
                    message,
                    honeypot,
                };
                send(config, form).await
            }
        }
    }
}

async fn send(config: Config, form: ContactFormData) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider);
    let contact_form: ContactForm = provider.provide();

    match contact_form.submit(form).await {
        Ok(()) => {
            println!("Message sent successfully");
            Ok(())
        }
        Err(ContactFormSubmitError::Invalid(validation)) => {
            for error in get_form_errors(&validation) {
                eprintln!("{error}");
            }
            bail!("The contact form is invalid")
        }
        Err(err) => Err(err.into()),
    }
}

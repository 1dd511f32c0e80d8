use std::net::IpAddr;

use axum::http::StatusCode;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_testing::{web3forms, webhook};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Web3forms {
            host,
            port,
            access_key,
        } => {
            info!("Starting web3forms testing server on {host}:{port}");
            info!(
                "Submit endpoint: http://{host}:{port}{}",
                web3forms::SUBMIT_ROUTE
            );
            info!("Access key: {access_key:?}");
            folio_testing::serve(web3forms::router(access_key), host, port).await?
        }
        Command::Webhook { host, port, status } => {
            let status = StatusCode::from_u16(status)?;
            info!("Starting webhook testing server on {host}:{port}");
            info!(
                "Webhook url: http://{host}:{port}{}, responding with {status}",
                webhook::WEBHOOK_ROUTE
            );
            folio_testing::serve(
                webhook::router(status, Default::default()),
                host,
                port,
            )
            .await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the web3forms testing server
    Web3forms {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        port: u16,
        #[arg(long, default_value = "test-access-key")]
        access_key: String,
    },
    /// Start the webhook testing server
    Webhook {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8002")]
        port: u16,
        /// The status code to answer every request with
        #[arg(long, default_value = "200")]
        status: u16,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

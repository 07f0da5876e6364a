use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::provider::EnvCredentialProvider;
use std::sync::Arc;
use tether_core::credential::CredentialProvider;
use tether_core::form::RecordForm;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "tether")]
#[command(
    about = "Tether - sign in, then call the record, add and translate services",
    long_about = None
)]
struct Cli {
    /// Overrides the configured base URL (e.g. http://10.0.2.2:5000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two numbers locally
    Add { a: String, b: String },
    /// Add two numbers with the /add service
    AddRemote {
        /// Send the operands as a JSON body instead of query parameters
        #[arg(long)]
        post: bool,
        a: String,
        b: String,
    },
    /// Sign in and translate text with the /translate service
    Translate { text: String },
    /// Sign in and log a record with the /api/record service
    Record {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        time_in: String,
        #[arg(long, default_value = "")]
        time_out: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url;
    let provider: Arc<dyn CredentialProvider> = Arc::new(EnvCredentialProvider);

    // Configuration is only loaded for commands that reach the network.
    let result = match cli.command {
        Commands::Add { a, b } => {
            println!("{}", commands::calc::add_local(&a, &b));
            return Ok(());
        }
        Commands::AddRemote { post, a, b } => {
            let config = commands::load_config(base_url)?;
            let try_sign_in = EnvCredentialProvider::is_configured();
            commands::calc::add_remote(config, provider, try_sign_in, post, a, b).await?
        }
        Commands::Translate { text } => {
            let config = commands::load_config(base_url)?;
            commands::translate::run(config, provider, text).await?
        }
        Commands::Record {
            first_name,
            last_name,
            time_in,
            time_out,
            notes,
        } => {
            let config = commands::load_config(base_url)?;
            let form = RecordForm {
                first_name,
                last_name,
                time_in,
                time_out,
                notes,
            };
            commands::record::run(config, provider, form).await?
        }
    };

    commands::present(&result);
    let code = commands::exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

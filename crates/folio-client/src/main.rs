//! `folio`: terminal front end for the portfolio content API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use folio_client::api::ContentClient;
use folio_client::config::ClientConfig;
use folio_client::contact::{ContactFields, ContactForm, SubmitOutcome};
use folio_client::home::HomeState;
use folio_client::project::ProjectDetail;

#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and show the home page
    Home,
    /// Show one project by id or slug
    Project { id: String },
    /// Send a message through the contact form
    Contact {
        name: String,
        email: String,
        message: String,
        #[arg(long, short)]
        subject: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    folio_client::init_tracing();

    let config = ClientConfig::from_env();
    let client = ContentClient::new(&config).context("Invalid API_BASE")?;
    info!(api = %config.api_base, "Using content API");

    match cli.command {
        Command::Home => {
            let mut state = HomeState::default();
            state.load(&client).await;
            print!("{}", state.view().render());
        }
        Command::Project { id } => {
            let detail =
                ProjectDetail::resolve(None, &id, &client, &config.github_username).await;
            print!("{}", detail.render());
        }
        Command::Contact {
            name,
            email,
            message,
            subject,
        } => {
            let form = ContactForm::with_fields(ContactFields {
                name,
                email,
                message,
                subject: subject.unwrap_or_default(),
            });
            let outcome = form.submit(&client).await;
            if let Some(status) = form.status() {
                println!("{}", status.message);
            }
            if !matches!(outcome, SubmitOutcome::Sent(_)) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

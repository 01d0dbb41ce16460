//! Command-line companion to the intake service.
//!
//! - `intake-cli submit <url> --name .. --email .. --message ..` - submit a form the way the site does
//! - `intake-cli probe <url>` - call the liveness endpoint
//! - `intake-cli self-test` - write a test row and send a test email using the server's environment

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use form_intake::client::{Form, FormHandler, FormView, MessageBanner, MessageKind, SubmitOutcome};
use form_intake::config::Config;

#[derive(Parser)]
#[command(name = "intake-cli")]
#[command(about = "Submit to and check a contact form intake endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a contact form or project enquiry
    Submit {
        /// Form action URL
        url: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Send a project enquiry for this project instead of a contact message
        #[arg(long)]
        project: Option<String>,
    },
    /// Check that the endpoint is up
    Probe {
        /// Endpoint URL
        url: String,
    },
    /// Verify sheet access and email delivery with the server configuration
    SelfTest,
}

/// Renders the form state as terminal output.
struct TerminalView;

impl FormView for TerminalView {
    fn show_loading(&mut self) {
        eprintln!("Sending...");
    }

    fn hide_loading(&mut self) {}

    fn show_message(&mut self, banner: MessageBanner) {
        match banner.kind {
            MessageKind::Success => println!("{}", banner.text),
            MessageKind::Error => eprintln!("{}", banner.text),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            url,
            name,
            email,
            message,
            project,
        } => {
            let mut form = match project {
                Some(project) => {
                    let mut form = Form::enquiry(url);
                    form.input("project", &project)?;
                    form
                }
                None => Form::contact(url),
            };
            form.input("name", &name)?;
            form.input("email", &email)?;
            form.input("message", &message)?;

            let handler = FormHandler::new()?;
            let outcome = handler.submit(&mut form, &mut TerminalView).await;

            match &outcome {
                SubmitOutcome::Delivered { status, .. } => {
                    if let Some(ack) = outcome.acknowledgement().filter(|a| !a.success) {
                        eprintln!("note: endpoint answered {status} with: {}", ack.message);
                    }
                }
                SubmitOutcome::TransportFailed { .. } => std::process::exit(1),
            }
        }
        Commands::Probe { url } => {
            let resp = reqwest::get(&url).await?;
            let status = resp.status();
            let body: serde_json::Value = resp.json().await?;
            println!("{status} {}", serde_json::to_string_pretty(&body)?);
        }
        Commands::SelfTest => {
            let config = Config::from_env()?;
            let sheet = form_intake::connect_sheet(&config).await?;
            let notifier = form_intake::build_notifier(&config);

            let report =
                form_intake::setup::self_test(&config, sheet.as_ref(), notifier.as_ref()).await;
            println!("{report}");
            if report != form_intake::setup::SELF_TEST_OK {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

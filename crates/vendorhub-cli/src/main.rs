mod output;
mod session;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vendorhub_core::Field;
use vendorhub_matching::MatchingClient;
use vendorhub_search::{Dashboard, RandomRatings, SearchController};

#[derive(Debug, Parser)]
#[command(name = "vendorhub")]
#[command(about = "Vendor Hub supplier search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        #[arg(long, default_value = "")]
        product: String,
        #[arg(long, default_value = "")]
        quantity: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Matching endpoint URL (overrides `VENDORHUB_ENDPOINT`)
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Fill in the search form line by line on stdin
    Interactive {
        /// Matching endpoint URL (overrides `VENDORHUB_ENDPOINT`)
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Print the procurement dashboard
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = vendorhub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Search {
            product,
            quantity,
            location,
            endpoint,
        }) => {
            let config = config.with_endpoint_override(endpoint.as_deref());
            let mut controller = SearchController::new(MatchingClient::from_config(&config)?);
            controller.update_field(Field::Product, product);
            controller.update_field(Field::Quantity, quantity);
            controller.update_field(Field::Location, location);

            let mut stdout = std::io::stdout().lock();
            session::trigger_search(&mut controller, &mut RandomRatings, &mut stdout).await?;
        }
        Some(Commands::Interactive { endpoint }) => {
            let config = config.with_endpoint_override(endpoint.as_deref());
            let mut controller = SearchController::new(MatchingClient::from_config(&config)?);
            tracing::info!(endpoint = %controller.client().endpoint(), env = %config.env, "interactive session started");

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run_session(&mut controller, &mut RandomRatings, stdin, &mut stdout).await?;
        }
        Some(Commands::Dashboard) => {
            print!("{}", output::format_dashboard(&Dashboard::demo()));
        }
        None => println!("vendorhub: run `vendorhub --help` for commands"),
    }

    Ok(())
}

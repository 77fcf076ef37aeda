mod cli;
mod display;
mod error;
mod github;
mod search;
mod types;

use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use error::Result;
use github::GitHubClient;
use search::{filter_repositories, SearchMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mode = match cli.command {
        Commands::AllRepos => SearchMode::All,
        Commands::ClassRepos { class_name } => SearchMode::Class { class_name },
        Commands::ExactRepo { class_name, year } => SearchMode::Exact { class_name, year },
        Commands::YearRepos { year } => SearchMode::Year { year },
    };

    display::print_banner();
    println!("{}\n", format!("Searching for {}...", mode.description()).bold());

    let client = GitHubClient::new(cli.token)?;
    let repos = client.search_repositories(&mode.query()).await?;
    let repos = filter_repositories(repos, &mode);

    display::print_results(&repos);

    Ok(())
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "esprit-tracker")]
#[command(about = "ESPRIT-PI Repository Tracker - Search GitHub repositories starting with ESPRITPI")]
#[command(version = "0.1.0")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// GitHub access token, raises the API rate limit from 60 to 5000 requests per hour
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for all repositories starting with ESPRITPI
    AllRepos,

    /// Search for repositories matching ESPRITPI-<Class> pattern
    ClassRepos {
        /// The class name to search for (e.g., "2ING", "1CS")
        class_name: String,
    },

    /// Search for exact repository match ESPRITPI-<Class>-<Year>
    ExactRepo {
        /// The class name (e.g., "2ING", "1CS")
        class_name: String,

        /// The year (e.g., "2024", "2025")
        year: String,
    },

    /// Search for repositories matching ESPRITPI-*-<Year> pattern
    YearRepos {
        /// The year to search for (e.g., "2024", "2025")
        year: String,
    },
}

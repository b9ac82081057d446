pub mod api_client;
mod commands;
pub mod error;
mod utils;

#[cfg(test)]
mod utils_test;

use clap::{Parser, Subcommand};

use crate::db::Language;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Project catalog CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: CATALOG_API_URL env or http://localhost:9050)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects
    List {
        /// Only show projects written in this language
        #[arg(short, long)]
        language: Option<Language>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Store a project under a name
    Put {
        /// Project name
        name: String,
        /// Language the project is written in (go, rust, python, typescript)
        #[arg(short, long)]
        language: Language,
        /// Project URL
        #[arg(short, long)]
        url: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);

    match cli.command {
        Some(Commands::List { language, format }) => {
            let output = commands::project::list_projects(&api_client, language, &format).await?;
            println!("{}", output);
        }
        Some(Commands::Put {
            name,
            language,
            url,
            format,
        }) => {
            let request = commands::project::PutProjectRequest { language, url };
            let output =
                commands::project::put_project(&api_client, &name, request, &format).await?;
            println!("{}", output);
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["catalog", "--help"]);
        }
    }

    Ok(())
}

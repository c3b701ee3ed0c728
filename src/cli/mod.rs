pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "planets-api")]
#[command(about = "Planets REST API server and helpers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Mint a bearer token signed with the configured JWT secret")]
    Token(commands::token::TokenArgs),
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::handle(args).await,
        Some(Commands::Token(args)) => commands::token::handle(args),
        None => commands::serve::handle(commands::serve::ServeArgs::default()).await,
    }
}

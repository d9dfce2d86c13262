mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use funnel_core::{logging, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    logging::init(&config)?;

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "funnel", &mut std::io::stdout());
        return Ok(());
    }

    let file_path = cli
        .file
        .unwrap_or_else(|| config.effective_data_file().display().to_string());
    tracing::debug!("Using data file {}", file_path);

    let mut ctx = CliContext::load(&file_path).await?;

    match cli.command {
        Commands::Board(board_cmd) => handlers::board::handle(&mut ctx, board_cmd.action).await?,
        Commands::List(list_cmd) => handlers::list::handle(&mut ctx, list_cmd.action).await?,
        Commands::Card(card_cmd) => handlers::card::handle(&mut ctx, card_cmd.action).await?,
        Commands::Checklist(checklist_cmd) => {
            handlers::checklist::handle(&mut ctx, checklist_cmd.action).await?
        }
        Commands::Completed(completed_cmd) => {
            handlers::completed::handle(&mut ctx, completed_cmd.action).await?
        }
        Commands::View(view_cmd) => handlers::view::handle(&ctx, view_cmd.action)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

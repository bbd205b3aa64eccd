use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::AppContext;
use crate::logging::{self, LogSink};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::resolve(cli.data_dir.as_deref(), cli.api_url.as_deref(), cli.format)?;
    let command = cli.command.unwrap_or(Commands::Browse);

    // The browser owns the terminal, so its logs go to a file
    let sink = match command {
        Commands::Browse => LogSink::file_in(ctx.data_dir()),
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink)?;
    tracing::debug!(base_url = %ctx.base_url, data_dir = %ctx.data_dir().display(), "context resolved");

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::List { query, genre } => handlers::list::handle(&ctx, query, genre),

        Commands::Genres { query } => handlers::genres::handle(&ctx, query),

        Commands::Show { id, query, genre } => handlers::show::handle(&ctx, &id, query, genre),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}

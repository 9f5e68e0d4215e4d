use anyhow::{Context, Result};
use clap::Parser;
use typeahead::{
    backends::create_backends,
    cli::{
        Cli, Commands, admin::handle_admin, config::handle_config,
        lookup::{handle_ping, handle_select, handle_suggest},
    },
    config::AppConfig,
    console::{console, init_console},
    tui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Config may not exist yet; fall back to defaults so `config set` can create it
    let mut config = AppConfig::load().unwrap_or_default();

    let effective_verbosity = cli.get_effective_verbosity(config.get_verbosity());
    init_console(effective_verbosity);

    let command = match cli.command.take() {
        Some(Commands::Config { action }) => return handle_config(action),
        other => other,
    };

    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;
    let backends = create_backends(&config.backend, &config)?;
    console().debug(&format!("Using {} backend", backends.name()));

    match command {
        None => tui::run(backends, config, effective_verbosity).await?,
        Some(Commands::Suggest { query }) => {
            handle_suggest(&query, backends.lookup.as_ref(), &config).await?;
        }
        Some(Commands::Select { id }) => handle_select(id, backends.lookup.as_ref()).await?,
        Some(Commands::Ping) => handle_ping(backends.admin.as_ref()).await?,
        Some(Commands::Admin { action }) => handle_admin(action, backends.admin.as_ref()).await?,
        Some(Commands::Config { .. }) => {}
    }

    Ok(())
}

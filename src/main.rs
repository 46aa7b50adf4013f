mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ListenArgs};
use mg_core::config::Config;
use mg_server::Service;

fn apply_listen(config: &mut Config, listen: ListenArgs) {
    if let Some(host) = listen.host {
        config.server.host = host;
    }
    if let Some(port) = listen.port {
        config.server.port = port;
    }
}

fn run_service(service: Service, config: Config) -> Result<()> {
    tracing::info!(
        "Starting {service:?} service on {}:{}",
        config.server.host,
        config.server.port
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(mg_server::start(service, config))
        .with_context(|| format!("{service:?} service failed"))
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = path else {
        anyhow::bail!("No config file given; pass one as an argument or with --config");
    };

    let config =
        Config::load(path).with_context(|| format!("Invalid config file {}", path.display()))?;
    let warnings = config.validate();
    if warnings.is_empty() {
        println!("Configuration is valid: {}", path.display());
    } else {
        println!("Configuration loaded with {} warning(s):", warnings.len());
        for warning in warnings {
            println!("  - {warning}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "menagerie=trace,mg_server=trace,mg_db=debug,mg_core=debug,tower_http=debug".to_string()
        } else {
            "menagerie=info,mg_server=info,mg_db=info,mg_core=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Cats { listen, db } => {
            let mut config = config;
            apply_listen(&mut config, listen);
            if let Some(db) = db {
                config.database.cats_path = db;
            }
            run_service(Service::Cats, config)
        }
        Commands::People {
            listen,
            db,
            no_seed,
        } => {
            let mut config = config;
            apply_listen(&mut config, listen);
            if let Some(db) = db {
                config.database.people_path = db;
            }
            if no_seed {
                config.database.seed_people = false;
            }
            run_service(Service::People, config)
        }
        Commands::Hello { listen } => {
            let mut config = config;
            apply_listen(&mut config, listen);
            run_service(Service::Hello, config)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("menagerie {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

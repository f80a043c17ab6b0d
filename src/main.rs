use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fincodes::cli::{self, Cli, Commands, ConfigCommands, GeneratorArgs};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    let result = match cli.command {
        None => cli::board::run(&GeneratorArgs::default()),
        Some(Commands::Generate {
            kind,
            name,
            count,
            generator,
        }) => cli::generate::run(kind, name.as_deref(), count, &generator),
        Some(Commands::Board { generator }) => cli::board::run(&generator),
        Some(Commands::Validate { code, kind }) => cli::validate::run(&code, kind),
        Some(Commands::Share {
            amount,
            description,
            generator,
        }) => cli::share::run(amount, &description, &generator),
        Some(Commands::Decode { payload }) => cli::share::decode(&payload),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Set {
                category,
                goal,
                goal_suffix,
            } => cli::config::set(category, goal, goal_suffix),
        },
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "fincodes", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so generated codes can be piped cleanly.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

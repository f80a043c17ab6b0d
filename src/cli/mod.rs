pub mod board;
pub mod config;
pub mod generate;
pub mod share;
pub mod validate;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::codes::{CodeGenerator, CodeKind, GoalSuffix};
use crate::entropy::{RandomSource, RngSource};
use crate::error::Result;
use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "fincodes",
    version,
    about = "Reference codes for transactions, categories, goals, alerts, sessions and accounts."
)]
pub struct Cli {
    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Pin the clock or the random stream for reproducible output.
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Seed the random source
    #[arg(long)]
    pub seed: Option<u64>,
    /// Generate as of this instant: RFC 3339 or YYYY-MM-DD (midnight UTC)
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate reference codes.
    Generate {
        /// Code family
        kind: CodeKind,
        /// Name embedded in category and goal codes (default from settings)
        #[arg(long)]
        name: Option<String>,
        /// Number of codes to print
        #[arg(long, default_value = "1")]
        count: usize,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Show a fresh code for every family.
    Board {
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Check a code's format. The family is detected from the prefix unless given.
    Validate {
        code: String,
        /// Validate against this family instead of detecting it
        #[arg(long)]
        kind: Option<CodeKind>,
    },
    /// Encode an expense as a shareable payload.
    Share {
        /// Amount, e.g. -4.85
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// What the expense was for
        description: String,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Decode an expense-share payload.
    Decode {
        payload: String,
    },
    /// Show or change settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print shell completions.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print current settings and where they live.
    Show,
    /// Update one or more settings.
    Set {
        /// Default name for category codes
        #[arg(long)]
        category: Option<String>,
        /// Default name for goal codes
        #[arg(long)]
        goal: Option<String>,
        /// Goal-code timestamp: last four characters, or the whole thing
        #[arg(long = "goal-suffix")]
        goal_suffix: Option<GoalSuffix>,
    },
}

pub type DynGenerator = CodeGenerator<Box<dyn Clock>, Box<dyn RandomSource>>;

/// Build a generator honouring `--at`, `--seed` and the configured goal suffix.
pub(crate) fn build_generator(args: &GeneratorArgs, settings: &Settings) -> Result<DynGenerator> {
    let clock: Box<dyn Clock> = match &args.at {
        Some(at) => Box::new(FixedClock::parse(at)?),
        None => Box::new(SystemClock),
    };
    let random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };
    debug!(at = ?args.at, seed = ?args.seed, goal_suffix = ?settings.goal_suffix, "building generator");
    Ok(CodeGenerator::new(clock, random).with_goal_suffix(settings.goal_suffix))
}

/// The name a family embeds: the explicit one, else the configured default.
pub(crate) fn name_for<'a>(kind: CodeKind, explicit: Option<&'a str>, settings: &'a Settings) -> &'a str {
    match (explicit, kind) {
        (Some(name), _) => name,
        (None, CodeKind::Category) => &settings.default_category,
        (None, CodeKind::Goal) => &settings.default_goal,
        (None, _) => "",
    }
}

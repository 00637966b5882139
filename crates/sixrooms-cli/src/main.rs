#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "sr: six-room dungeon graph generator",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for report commands.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Build",
        about = "Generate a fresh six-room dungeon",
        long_about = "Generate one six-room unit and print it as graph JSON.",
        after_help = "EXAMPLES:\n    # Random layout\n    sr generate > dungeon.json\n\n    # Fixed layout and seed\n    sr generate --layout 3 --seed 42"
    )]
    Generate(cmd::generate::GenerateArgs),

    #[command(
        next_help_heading = "Build",
        about = "Attach a sub-dungeon to a room",
        long_about = "Generate a new unit and connect its first room to ROOM. ROOM itself is unchanged.",
        after_help = "EXAMPLES:\n    sr attach room-1a2b3c4d5e6f7a8b --graph dungeon.json > grown.json"
    )]
    Attach(cmd::attach::AttachArgs),

    #[command(
        next_help_heading = "Build",
        about = "Replace a room with a sub-dungeon",
        long_about = "Replace ROOM with a new unit whose first room inherits ROOM's label, content, entrance flag and connections.",
        after_help = "EXAMPLES:\n    sr explode room-1a2b3c4d5e6f7a8b --graph dungeon.json | jq .bridge_room"
    )]
    Explode(cmd::explode::ExplodeArgs),

    #[command(
        next_help_heading = "Edit",
        about = "Connect two rooms",
        after_help = "EXAMPLES:\n    sr connect room-a room-b --kind secret --graph dungeon.json"
    )]
    Connect(cmd::connect::ConnectArgs),

    #[command(
        next_help_heading = "Edit",
        about = "Edit a room's label, content or entrance flag",
        after_help = "EXAMPLES:\n    sr edit-room room-a --label \"Flooded Crypt\" --entrance true < dungeon.json"
    )]
    EditRoom(cmd::edit::EditRoomArgs),

    #[command(
        next_help_heading = "Edit",
        about = "Edit a connection's kind, description or clue room",
        after_help = "EXAMPLES:\n    sr edit-connection room-a room-b --kind secret --clue room-c < dungeon.json"
    )]
    EditConnection(cmd::edit::EditConnectionArgs),

    #[command(
        next_help_heading = "Read",
        about = "Show bridge connections and entrance depths"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(next_help_heading = "Read", about = "List rooms and passages in export order")]
    Outline(cmd::outline::OutlineArgs),

    #[command(
        next_help_heading = "Read",
        about = "Validate graph structure",
        long_about = "Report duplicate ids, dangling endpoints, parallel connections, self-loops and dangling clue rooms. Exits non-zero on any issue."
    )]
    Check(cmd::check::CheckArgs),

    #[command(next_help_heading = "Read", about = "List the layout catalog")]
    Layouts,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SIXROOMS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "sixrooms=debug,sr=debug,info"
        } else {
            "sixrooms=info,sr=info,warn"
        })
    });

    let format = env::var("SIXROOMS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs go to stderr.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli) -> (OutputMode, anyhow::Result<()>) {
    let project_root = match env::current_dir() {
        Ok(root) => root,
        Err(err) => return (OutputMode::Text, Err(err.into())),
    };
    let config = match config::resolve_config(&project_root) {
        Ok(config) => config,
        Err(err) => return (resolve_output_mode(cli.format, cli.json, None), Err(err)),
    };
    let output = resolve_output_mode(cli.format, cli.json, config.output());
    debug!(?output, "resolved output mode");

    let result = match cli.command {
        Commands::Generate(ref args) => cmd::generate::run_generate(args, &config),
        Commands::Attach(ref args) => cmd::attach::run_attach(args, &config),
        Commands::Explode(ref args) => cmd::explode::run_explode(args, &config),
        Commands::Connect(ref args) => cmd::connect::run_connect(args),
        Commands::EditRoom(ref args) => cmd::edit::run_edit_room(args),
        Commands::EditConnection(ref args) => cmd::edit::run_edit_connection(args),
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, output),
        Commands::Outline(ref args) => cmd::outline::run_outline(args, output),
        Commands::Check(ref args) => cmd::check::run_check(args, output),
        Commands::Layouts => cmd::layouts::run_layouts(output),
    };
    (output, result)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (output, result) = run(cli);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if render_error(output, &CliError::from(&err)).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use two_move_replay::config::ReplayConfig;
use two_move_replay::render::TextStyle;
use two_move_replay::{check_violations, run_file, ReplayOptions};

#[derive(Parser)]
#[command(name = "two-move-replay")]
#[command(about = "Replay and validate games of Two Move Chess")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a game (.pgn) or show a position (.fen)
    Replay {
        /// Game or position file
        #[arg(short, long)]
        file: PathBuf,
        /// Snapshot as <turn>[:<path>], where <turn> is a number like 8 or 8.5, or "end"
        #[arg(short, long = "output")]
        output: Vec<String>,
        /// Print every turn and its move type
        #[arg(short, long)]
        debug: bool,
        /// Print boards with chess glyphs
        #[arg(short, long)]
        unicode: bool,
        /// Print the game as an HTML table
        #[arg(long)]
        html: bool,
        /// Print the game as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that every game in a directory breaks the rules
    Violations {
        /// Print each game and the error it raised
        #[arg(short, long)]
        verbose: bool,
        /// Directory of games to check
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl Commands {
    fn log_level(&self) -> Level {
        match self {
            Commands::Replay { debug: true, .. } | Commands::Violations { verbose: true, .. } => {
                Level::DEBUG
            }
            _ => Level::INFO,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.command.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = ReplayConfig::load().context("Failed to load two-move.toml")?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Replay {
            file,
            output,
            debug,
            unicode,
            html,
            json,
        } => {
            let options = ReplayOptions {
                checkpoints: output,
                debug,
                html,
                json,
                text_style: if unicode {
                    TextStyle::Unicode
                } else {
                    config.text_style()
                },
                svg_style: config.svg_style(),
            };
            run_file(&file, &options, &mut stdout)
                .with_context(|| format!("Failed to replay {}", file.display()))?;
        }
        Commands::Violations { verbose, dir } => {
            let dir = dir.unwrap_or(config.violations_dir);
            let checked = check_violations(&dir, verbose, &mut stdout)?;
            writeln!(stdout, "All {} violations detected", checked)?;
        }
    }
    Ok(())
}

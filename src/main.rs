//! # md-outline CLI (`mdo`)
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mdo render <file>` | Print the rendered HTML |
//! | `mdo outline <file>` | Print the heading outline as JSON |
//! | `mdo batch <dir>` | Outline every markdown file under a directory |
//!
//! ## Examples
//!
//! ```bash
//! # Outline a single document
//! mdo outline docs/schemes.md
//!
//! # Read from stdin, compact output, "h1"-style levels
//! cat README.md | mdo outline - --compact --level-format tag
//!
//! # Outline a docs tree into a file
//! mdo batch ./docs --output build/outlines.json --config ./config/mdo.toml
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use md_outline::config::{self, LevelFormat};
use md_outline::outline_cmd::{self, OutputOptions};
use md_outline::batch;

/// md-outline CLI — extract heading outlines from markdown.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. A missing file means built-in defaults.
#[derive(Parser)]
#[command(
    name = "mdo",
    about = "md-outline — extract heading → content outlines from markdown as JSON",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/mdo.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to HTML and print it.
    Render {
        /// Markdown file, or `-` for stdin.
        input: PathBuf,
    },

    /// Extract the heading outline of a markdown document.
    ///
    /// Each heading maps to its level and the HTML fragments that follow
    /// it up to the next heading of any level.
    Outline {
        /// Markdown file, or `-` for stdin.
        input: PathBuf,

        /// Write JSON to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Single-line JSON.
        #[arg(long)]
        compact: bool,

        /// Level representation: `number` (2) or `tag` ("h2").
        #[arg(long, value_enum)]
        level_format: Option<LevelFormat>,
    },

    /// Outline every markdown file under a directory.
    ///
    /// Files are selected with `[scan]` include/exclude globs and keyed by
    /// relative path in the output.
    Batch {
        /// Directory to scan.
        root: PathBuf,

        /// Write JSON to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Single-line JSON.
        #[arg(long)]
        compact: bool,

        /// Level representation: `number` (2) or `tag` ("h2").
        #[arg(long, value_enum)]
        level_format: Option<LevelFormat>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cfg = config::load_config_or_minimal(&cli.config)?;

    match cli.command {
        Commands::Render { input } => {
            outline_cmd::run_render(&cfg, &input)?;
        }
        Commands::Outline {
            input,
            output,
            compact,
            level_format,
        } => {
            let options = OutputOptions::resolve(&cfg, compact, level_format);
            outline_cmd::run_outline(&cfg, &input, output.as_deref(), options)?;
        }
        Commands::Batch {
            root,
            output,
            compact,
            level_format,
        } => {
            let options = OutputOptions::resolve(&cfg, compact, level_format);
            batch::run_batch(&cfg, &root, output.as_deref(), options)?;
        }
    }

    Ok(())
}

//! scrollbuf - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// scrollbuf - page through a file or piped text with word wrapping
#[derive(Parser, Debug)]
#[command(name = "scrollbuf")]
#[command(version)]
#[command(about = "Page through text in a bounded, word-wrapping scrollback buffer")]
pub struct Args {
    /// Path to a text file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Keep at most this many lines of input (oldest are dropped)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_entries: Option<u64>,

    /// Start on the last page
    #[arg(short, long)]
    pub follow: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = scrollbuf::config::load_config_with_precedence(args.config.clone())?;
        let merged = scrollbuf::config::merge_config(config_file);
        let with_env = scrollbuf::config::apply_env_overrides(merged);

        let max_entries_override = args
            .max_entries
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX));
        let follow_override = if args.follow { Some(true) } else { None };

        scrollbuf::config::apply_cli_overrides(with_env, max_entries_override, follow_override)
    };

    scrollbuf::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let lines = scrollbuf::source::read_lines(args.file.clone())?;

    let mut buffer = scrollbuf::ScrollBuffer::from_config(&config);
    for line in lines {
        let style = scrollbuf::pager::style_for_line(&line);
        buffer.add_line(line, style);
    }

    info!(
        entries = buffer.entry_count(),
        "Input loaded"
    );

    scrollbuf::pager::run(buffer, config.follow)?;

    Ok(())
}

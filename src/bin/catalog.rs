use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use fixture_poster::catalog;
use fixture_poster::file::WriteJsonFile;
use fixture_poster::match_data::read_matches;
use fixture_poster::print::tabulate_catalog;
use fixture_poster::text::parse_datetime;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the match data from
    #[clap(short = 'm', long, default_value = "data/matches.json")]
    matches: PathBuf,

    /// file to write the catalog to
    #[clap(short = 'o', long, default_value = "list.json")]
    out: PathBuf,

    /// list matches that kicked off before this time (defaults to now)
    #[clap(short = 'n', long, value_parser = parse_now)]
    now: Option<DateTime<Utc>>,
}

fn parse_now(s: &str) -> anyhow::Result<DateTime<Utc>> {
    parse_datetime(s).ok_or(anyhow!("unreadable time {s}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let matches = read_matches(&args.matches)?;
    let entries = catalog::build(&matches, args.now.unwrap_or_else(Utc::now));
    info!("catalog:\n{}", Console::default().render(&tabulate_catalog(&entries)));

    entries.write_json_file(&args.out)?;
    info!("wrote {} entries to {}", entries.len(), args.out.display());
    Ok(())
}

use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use serde::Serialize;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, Wyrand};
use tracing::{debug, info};

use fixture_poster::config::PosterConfig;
use fixture_poster::file::WriteJsonFile;
use fixture_poster::layout::{compose, grain_seed, Canvas, PosterLayout};
use fixture_poster::match_data::{find_by_index, find_by_title, read_matches};
use fixture_poster::poster::{derive, PosterIr};
use fixture_poster::print::{tabulate_stats, tabulate_timeline};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the match data from
    #[clap(short = 'm', long, default_value = "data/matches.json")]
    matches: PathBuf,

    /// match index
    #[clap(short = 'i', long)]
    index: Option<u32>,

    /// match title, e.g. "New Zealand x Norway"
    #[clap(short = 't', long)]
    title: Option<String>,

    /// poster configuration file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// grain seed, overriding the configured one
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// file to write the poster IR and layout to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.index.is_none() && self.title.is_none()
            || self.index.is_some() && self.title.is_some()
        {
            bail!("either the -i or the -t flag must be specified");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct PosterOutput {
    ir: PosterIr,
    layout: PosterLayout,
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
    args.validate()?;
    debug!("args: {args:?}");

    let mut config = match &args.config {
        Some(path) => PosterConfig::load(path)?,
        None => PosterConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    debug!("config: {config:?}");

    let matches = read_matches(&args.matches)?;
    let record = match (args.index, &args.title) {
        (Some(index), _) => find_by_index(&matches, index).ok_or(anyhow!("no match with index {index}"))?,
        (None, Some(title)) => find_by_title(&matches, title).ok_or(anyhow!("no match titled '{title}'"))?,
        (None, None) => unreachable!(),
    };

    let ir = derive(record, &config)?;
    info!(
        "{} {}-{} {}, {}",
        ir.text.home_name, ir.score.home, ir.score.away, ir.text.away_name, ir.text.formatted_date
    );
    info!("statistics:\n{}", Console::default().render(&tabulate_stats(&ir)));
    info!("goals:\n{}", Console::default().render(&tabulate_timeline(&ir)));

    let mut rand = Wyrand::seed(grain_seed(&ir.title, config.seed));
    let layout = compose(&ir, &Canvas::a3(), &config, &mut rand);
    debug!("layout: {layout:?}");

    if let Some(out) = args.out {
        PosterOutput { ir, layout }.write_json_file(&out)?;
        info!("wrote {}", out.display());
    }
    Ok(())
}

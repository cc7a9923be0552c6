use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use blogcard::config::Config;
use blogcard::logger::configure_logger;
use blogcard::query_string::CardQuery;
use blogcard::server::{card_renderer, server_run, AppState};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "blogcard.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the card list, single cards and the public directory
    Serve,
    /// Render the card of a post file to stdout
    Card {
        /// Markdown or JSON post file
        file: PathBuf,
    },
    /// Render one page of the card list
    Page {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Output file. Stdout if missing
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn card_cmd(config: &Config, file: PathBuf) -> Result<()> {
    let cards = card_renderer(config)?;
    let posts = config.post_loader().load_file(&file)?;
    if posts.is_empty() {
        bail!("No valid posts found in {}", file.display());
    }

    for post in posts.iter() {
        println!("{}", cards.render(post));
    }
    Ok(())
}

fn page_cmd(config: &Config, page: u32, tag: Option<String>, out: Option<PathBuf>) -> Result<()> {
    let state = AppState::load(config)?;
    let rendered = state.render_page(&CardQuery { page, tag });

    match out {
        Some(out) => {
            fs::write(&out, rendered).with_context(|| format!("Error writing {}", out.display()))?;
            info!("Page written to {}", out.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run blogcard --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Command::Serve => {
            info!("Starting blogcard =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
            server_run(config).await?;
        }
        Command::Card { file } => card_cmd(&config, file)?,
        Command::Page { page, tag, out } => page_cmd(&config, page, tag, out)?,
    }

    Ok(())
}

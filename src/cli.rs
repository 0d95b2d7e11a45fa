// src/cli.rs
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use crate::{
    config::consts::{DEFAULT_MAP_FILE, LOCATIONS_SELECTOR},
    config::options::{ExtractOptions, FailurePolicy, LinkOptions, OutputOptions},
    error::{Error, Result},
    links, scrape, store,
};

#[derive(Debug, Parser)]
#[command(name = "mvc_scrape", version, about = "Extract NJ MVC licensing locations from a saved locations page")]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a saved page and print the location map as JSON
    Extract {
        /// Saved HTML page, or '-' for stdin
        input: PathBuf,
        /// Also write the map to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
        /// Drop entries that cannot be parsed instead of failing the run
        #[arg(long)]
        skip_invalid: bool,
        #[arg(long, default_value = LOCATIONS_SELECTOR)]
        selector: String,
    },
    /// Look up one location in a saved map and print its appointment links
    Show {
        id: i64,
        #[arg(long, default_value = DEFAULT_MAP_FILE)]
        map: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract { input, out, pretty, skip_invalid, selector } => {
            let policy = if skip_invalid { FailurePolicy::Skip } else { FailurePolicy::Abort };
            let opts = ExtractOptions { selector, ..ExtractOptions::default() }.with_policy(policy);
            let output = out.map(|path| OutputOptions { path, pretty });
            extract(&input, &opts, output.as_ref(), pretty)
        }
        Command::Show { id, map } => show(id, &map),
    }
}

fn extract(
    input: &Path,
    opts: &ExtractOptions,
    output: Option<&OutputOptions>,
    pretty: bool,
) -> Result<()> {
    let html = read_input(input)?;
    let extraction = scrape::extract_page(&html, opts)?;

    println!("{}", store::to_json(&extraction.locations, pretty)?);

    if let Some(out) = output {
        let path = store::save(&extraction.locations, out)?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn show(id: i64, map_path: &Path) -> Result<()> {
    let map = store::load(map_path)?;
    let loc = map.get(id).ok_or(Error::UnknownLocation(id))?;
    let links = links::for_location(&LinkOptions::default(), id)?;

    println!("{}", serde_json::to_string_pretty(loc)?);
    println!("next available: {}", links.next_available);
    println!("book:           {}", links.wizard);
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

// src/cli.rs
use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use dialoguer::Confirm;

use crate::{
    config::{
        consts::{API_ROOT, PAUSE_MAX_MS, PAUSE_MIN_MS},
        options::{AppOptions, ExportFormat, ExportOptions, LookupOptions, Overwrite, PauseRange},
    },
    core::Error,
    engine::types::Game,
    file::{self, WriteOutcome},
    progress::{Progress, Skip},
    runner,
};

/// Look up board games on BoardGameGeek and write their details to a table.
#[derive(Debug, Parser)]
#[command(name = "bgg_scrape", version, about)]
pub struct Args {
    /// Text file with one game name per line (`-` for stdin)
    pub game_list: PathBuf,

    /// Output file
    pub output: PathBuf,

    /// Overwrite the output file without asking
    #[arg(short, long)]
    pub yes: bool,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Shortest pause after each request
    #[arg(long, default_value_t = PAUSE_MIN_MS)]
    pub min_pause_ms: u64,

    /// Longest pause after each request
    #[arg(long, default_value_t = PAUSE_MAX_MS)]
    pub max_pause_ms: u64,

    #[arg(long, default_value = API_ROOT)]
    pub api_root: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Append diagnostics here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// More diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> Result<AppOptions> {
        let pause = PauseRange::from_millis(self.min_pause_ms, self.max_pause_ms)
            .ok_or_else(|| eyre!("--min-pause-ms must not exceed --max-pause-ms"))?;

        Ok(AppOptions {
            lookup: LookupOptions {
                api_root: self.api_root.clone(),
                pause,
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
            export: ExportOptions {
                out_path: self.output.clone(),
                format: self.format.into(),
                overwrite: if self.yes { Overwrite::Always } else { Overwrite::Ask },
            },
        })
    }
}

/// Prints status lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
    found: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Searching {total} games on boardgamegeek.com...");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str, game: &Game) {
        self.seen += 1;
        self.found += 1;
        println!("[{}/{}] {} -> {}", self.seen, self.total, name, game.url);
    }
    fn item_failed(&mut self, name: &str, why: Skip) {
        self.seen += 1;
        match why {
            Skip::NotFound => println!("[{}/{}] Cannot find the game \"{}\"", self.seen, self.total, name),
            Skip::NoDetails => println!(
                "[{}/{}] Have trouble retrieving the info for \"{}\". Skipped",
                self.seen, self.total, name
            ),
        }
    }
    fn finish(&mut self) {
        println!("Found {} of {} games", self.found, self.total);
    }
}

/// Ask on the terminal, defaulting to no.
pub fn confirm_overwrite(path: &Path) -> crate::core::Result<bool> {
    Confirm::new()
        .with_prompt(format!("The file {} already exists. Do you want to overwrite it?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| Error::Prompt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

fn reads_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// A game list read from stdin leaves no input for the overwrite question.
fn check_overwrite_prompt(args: &Args) -> Result<()> {
    if reads_stdin(&args.game_list) && !args.yes && args.output.exists() {
        bail!(
            "{} already exists and the game list comes from stdin, so there is no way to ask \
             before overwriting it; pass --yes or choose another output file",
            args.output.display()
        );
    }
    Ok(())
}

fn read_game_list(path: &Path) -> Result<Vec<String>> {
    let names = if reads_stdin(path) {
        file::read_names(io::stdin().lock())
    } else {
        file::read_names_from(path)
    }
    .wrap_err_with(|| format!("reading {}", path.display()))?;
    Ok(names)
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref()).map_err(|e| eyre!("installing logger: {e}"))?;
    let opts = args.to_options()?;
    check_overwrite_prompt(&args)?;

    println!("Reading from game list...");
    let names = read_game_list(&args.game_list)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::lookup_all(&opts.lookup, &names, Some(&mut progress))?;

    let out = &opts.export.out_path;
    let outcome = file::write_games(&opts.export, &summary.games, confirm_overwrite)
        .wrap_err("results were not written")?;
    match outcome {
        WriteOutcome::Written(path) => {
            println!("Wrote {} games to {}", summary.games.len(), path.display());
        }
        WriteOutcome::NothingToWrite => println!("There is nothing to write!"),
        WriteOutcome::Declined => println!("Left {} untouched.", out.display()),
    }
    Ok(())
}

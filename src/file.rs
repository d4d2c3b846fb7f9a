// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::consts::HEADERS;
use crate::config::options::{ExportFormat, ExportOptions, Overwrite};
use crate::core::Result;
use crate::engine::types::Game;

/// One name per line, trimmed, blank lines dropped, order kept.
pub fn read_names<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            out.push(name.to_string());
        }
    }
    Ok(out)
}

pub fn read_names_from(path: &Path) -> io::Result<Vec<String>> {
    read_names(io::BufReader::new(File::open(path)?))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// No games; the destination was not touched.
    NothingToWrite,
    /// Destination exists and the user said no.
    Declined,
}

/// Write `games` to `export.out_path`.
///
/// An empty set never touches the file system. An existing file is only
/// replaced if `export.overwrite` is `Always` or `confirm(path)` agrees.
/// A failing `confirm` is an error, never a silent no.
pub fn write_games<F>(export: &ExportOptions, games: &[Game], confirm: F) -> Result<WriteOutcome>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    if games.is_empty() {
        return Ok(WriteOutcome::NothingToWrite);
    }

    let path = &export.out_path;
    if path.exists() && export.overwrite == Overwrite::Ask && !confirm(path)? {
        info!(path = %path.display(), "overwrite declined");
        return Ok(WriteOutcome::Declined);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    write_table(BufWriter::new(file), games, export.format)?;
    info!(path = %path.display(), rows = games.len(), "export written");
    Ok(WriteOutcome::Written(path.clone()))
}

/// Header row then one row per game.
pub fn write_table<W: Write>(w: W, games: &[Game], format: ExportFormat) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(w);

    wtr.write_record(HEADERS)?;
    for game in games {
        wtr.serialize(game)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub export: ExportOptions,
}

/// Bounds for the uniform pause after each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseRange {
    pub min: Duration,
    pub max: Duration,
}

impl PauseRange {
    /// `None` when `min > max`.
    pub fn new(min: Duration, max: Duration) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn from_millis(min: u64, max: u64) -> Option<Self> {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }
}

impl Default for PauseRange {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(PAUSE_MIN_MS),
            max: Duration::from_millis(PAUSE_MAX_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub api_root: String,
    pub pause: PauseRange,
    /// No timeout unless asked for; a hung call blocks the batch.
    pub timeout: Option<Duration>,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            api_root: API_ROOT.to_string(),
            pause: PauseRange::default(),
            timeout: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

/// What to do when the output file already exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overwrite {
    #[default]
    Ask,
    Always,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub format: ExportFormat,
    pub overwrite: Overwrite,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("games.csv"),
            format: ExportFormat::Csv,
            overwrite: Overwrite::Ask,
        }
    }
}

impl ExportOptions {
    pub fn new(out_path: impl AsRef<Path>) -> Self {
        Self { out_path: out_path.as_ref().to_path_buf(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_range_rejects_inverted_bounds() {
        assert!(PauseRange::from_millis(1500, 200).is_none());
        let r = PauseRange::from_millis(0, 0).unwrap();
        assert_eq!(r.max, Duration::ZERO);
    }

    #[test]
    fn defaults_follow_consts() {
        let o = AppOptions::default();
        assert_eq!(o.lookup.api_root, API_ROOT);
        assert_eq!(o.lookup.pause.min, Duration::from_millis(PAUSE_MIN_MS));
        assert_eq!(o.lookup.pause.max, Duration::from_millis(PAUSE_MAX_MS));
        assert_eq!(o.lookup.timeout, None);
        assert_eq!(o.export.format.delim(), b',');
        assert_eq!(o.export.overwrite, Overwrite::Ask);
    }
}

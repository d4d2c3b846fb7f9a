// src/runner.rs
use tracing::{info, warn};

use crate::{
    config::options::LookupOptions,
    core::{Result, XmlSource},
    engine::{Catalog, types::Game},
    progress::{Progress, Skip},
    throttle::{RandomPause, Throttle},
};

/// What a batch produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Resolved games, in input order.
    pub games: Vec<Game>,
    /// Names with no catalog match.
    pub unresolved: Vec<String>,
    /// Names that matched but whose record could not be read.
    pub undescribed: Vec<String>,
}

impl RunSummary {
    pub fn skipped(&self) -> usize {
        self.unresolved.len() + self.undescribed.len()
    }
}

/// Resolve every name in order, pausing after each remote call.
///
/// Best effort: a name that can't be resolved or described is reported and
/// skipped, the batch always runs to the end.
pub fn run<S: XmlSource>(
    catalog: &Catalog<S>,
    names: &[String],
    throttle: &dyn Throttle,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
    }

    let mut summary = RunSummary::default();

    for name in names {
        let id = catalog.search_with(name, &mut |msg: &str| {
            if let Some(p) = progress.as_deref_mut() {
                p.log(msg);
            }
        });
        throttle.pause();

        let Some(id) = id else {
            warn!(name = %name, "cannot find the game");
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(name, Skip::NotFound);
            }
            summary.unresolved.push(name.clone());
            continue;
        };

        let game = catalog.describe_with(&id, &mut |msg: &str| {
            if let Some(p) = progress.as_deref_mut() {
                p.log(msg);
            }
        });
        throttle.pause();

        match game {
            Some(game) => {
                info!(name = %name, %id, "resolved");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(name, &game);
                }
                summary.games.push(game);
            }
            None => {
                warn!(name = %name, %id, "trouble retrieving the info, skipped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, Skip::NoDetails);
                }
                summary.undescribed.push(name.clone());
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

/// Live lookup with the configured API root and pause policy.
pub fn lookup_all(
    opts: &LookupOptions,
    names: &[String],
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let catalog = Catalog::connect(opts)?;
    let throttle = RandomPause::new(opts.pause);
    Ok(run(&catalog, names, &throttle, progress))
}

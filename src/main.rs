mod error;
mod pitch;
mod record;
mod sim;
mod trial;

use crate::sim::{Params, Simulation};
use crate::trial::StatsAccumulator;

use anyhow::{Context, Result};

use std::fs;
use std::path::{Path, PathBuf};

const PLAYER_ID: &str = "bondb001";
const YEAR: u32 = 2004;
const TRIALS: usize = 1000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = Params {
        ball_rate_swing: 0.191,
        ball_rate_all: 0.587,
    };

    let event_dir = PathBuf::from(format!("{}eve", YEAR));
    let lines = read_event_lines(&event_dir)
        .with_context(|| format!("reading event files from {}", event_dir.display()))?;

    let records = record::season_records(lines.iter().map(|l| l.as_str()), PLAYER_ID)
        .with_context(|| format!("no usable plate appearances for {} in {}", PLAYER_ID, YEAR))?;
    for r in &records {
        log::debug!(
            "inning {} ({:?}), {}: pitches {:?}, play {:?}",
            r.inning,
            r.half,
            r.batter,
            r.pitches,
            r.outcome
        );
    }

    let simulation = Simulation::new(records, params)?;
    log::info!(
        "simulating {} trials over {} plate appearances for {} in {}",
        TRIALS,
        simulation.plate_appearances(),
        PLAYER_ID,
        YEAR
    );

    let mut results = StatsAccumulator::default();
    let mut rng = rand::thread_rng();
    simulation.run(TRIALS, &mut rng, &mut results)?;

    let out = format!("OBP-{}-{}.csv", PLAYER_ID, YEAR);
    results
        .write_obp_lines(&out)
        .with_context(|| format!("writing {}", out))?;
    if let Some(summary) = results.summary() {
        log::info!(
            "mean no-bat OBP over {} trials: {:.3} (min {:.3}, max {:.3})",
            summary.trials,
            summary.mean,
            summary.min,
            summary.max
        );
    }

    Ok(())
}

/// A team's event file includes only its home games, so the player's
/// full season means reading every file in the directory.
fn read_event_lines(dir: &Path) -> Result<Vec<String>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("EVN") | Some("EVA")
            )
        })
        .collect();
    paths.sort();

    let mut lines = Vec::new();
    for path in paths {
        let contents =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        lines.extend(contents.lines().map(str::to_string));
    }
    Ok(lines)
}

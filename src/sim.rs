use crate::error::SimError;
use crate::pitch::PitchCall;
use crate::record::PlateAppearanceRecord;
use crate::trial::{TrialResult, TrialSink};

use rand::Rng;

const BALLS_FOR_WALK: u32 = 4;
const STRIKES_FOR_OUT: u32 = 3;

/// Probability parameters for the no-bat counterfactual. Both are
/// empirically calibrated constants supplied by the caller, not derived
/// from the log data.
#[derive(Debug, Copy, Clone)]
pub struct Params {
    /// Chance a pitch was outside the zone, given that the batter swung.
    pub ball_rate_swing: f64,
    /// Chance any pitch is outside the zone; used for synthetic pitches
    /// once the recorded sequence is exhausted.
    pub ball_rate_all: f64,
}

impl Params {
    fn validate(&self) -> Result<(), SimError> {
        let rates = [
            ("ball_rate_swing", self.ball_rate_swing),
            ("ball_rate_all", self.ball_rate_all),
        ];
        for (name, value) in rates.iter().copied() {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Outcome of one plate appearance with the bat removed: the batter
/// either reaches base (walk or hit-by-pitch) or is out on strikes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AtBatOutcome {
    ReachesBase,
    Out,
}

/// Replays one recorded pitch sequence without the bat.
///
/// Recorded balls and called strikes stand as called. Swing events
/// (foul, swinging strike, foul bunt, tip, in play) hide the true zone
/// call, so one is sampled: ball with probability `ball_rate_swing`.
/// If the recorded sequence ends before the count resolves (the real
/// at-bat ended on a ball in play), synthetic pitches are sampled at
/// `ball_rate_all` until it does. An empty sequence goes straight to
/// the synthetic loop.
///
/// Comparisons are strict `<`, so the 0.0 and 1.0 parameter edges are
/// fully deterministic. Unrecognized characters are ignored, never an
/// error.
pub fn resolve_at_bat<R: Rng>(pitches: &str, params: &Params, rng: &mut R) -> AtBatOutcome {
    let mut balls = 0;
    let mut strikes = 0;
    for c in pitches.chars() {
        match PitchCall::classify(c) {
            Some(PitchCall::HitByPitch) => return AtBatOutcome::ReachesBase,
            Some(PitchCall::Ball) => balls += 1,
            Some(PitchCall::CalledStrike) => strikes += 1,
            Some(PitchCall::Swing) => {
                if rng.gen::<f64>() < params.ball_rate_swing {
                    balls += 1;
                } else {
                    strikes += 1;
                }
            }
            None => continue,
        }
        if strikes == STRIKES_FOR_OUT {
            break;
        }
        if balls == BALLS_FOR_WALK {
            return AtBatOutcome::ReachesBase;
        }
    }
    while strikes < STRIKES_FOR_OUT && balls < BALLS_FOR_WALK {
        if rng.gen::<f64>() < params.ball_rate_all {
            balls += 1;
        } else {
            strikes += 1;
        }
        if balls == BALLS_FOR_WALK {
            return AtBatOutcome::ReachesBase;
        }
    }
    AtBatOutcome::Out
}

/// Replays a fixed season of plate appearances through the resolver,
/// once per trial, producing an empirical OBP distribution.
pub struct Simulation {
    records: Vec<PlateAppearanceRecord>,
    params: Params,
}

impl Simulation {
    pub fn new(records: Vec<PlateAppearanceRecord>, params: Params) -> Result<Self, SimError> {
        params.validate()?;
        if records.is_empty() {
            return Err(SimError::EmptySeason);
        }
        Ok(Self { records, params })
    }

    pub fn plate_appearances(&self) -> usize {
        self.records.len()
    }

    /// Runs `trials` independent replays of the season. Every record
    /// contributes to every trial; only the stochastic resolution of
    /// each appearance varies. The record set is never modified, so
    /// trials share nothing but the generator's stream.
    pub fn run<R: Rng, T: TrialSink>(
        &self,
        trials: usize,
        rng: &mut R,
        results: &mut T,
    ) -> Result<(), SimError> {
        if trials == 0 {
            return Err(SimError::InvalidTrialCount { trials });
        }
        for trial in 0..trials {
            let onbase = self
                .records
                .iter()
                .filter(|pa| {
                    resolve_at_bat(&pa.pitches, &self.params, rng) == AtBatOutcome::ReachesBase
                })
                .count();
            results.push(TrialResult {
                trial,
                obp: onbase as f64 / self.records.len() as f64,
            });
        }
        Ok(())
    }
}

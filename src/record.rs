use crate::error::SimError;

/// Record-type marker for lines that describe a play (as opposed to a
/// substitution, comment, or other bookkeeping record).
const PLAY_MARKER: &str = "play";

/// Outcome code for lines that record a non-play event (injury delay,
/// ejection, and so on). These never carry real pitch outcomes.
const NO_PLAY: &str = "NP";

/// play,inning,half,batter,count,pitches,play-code
const MIN_FIELDS: usize = 7;

/// Which half of the inning the plate appearance occurred in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

/// One play line of the event log, reduced to the fields the simulation
/// cares about. After deduplication, exactly one record survives per
/// plate appearance: the one carrying the complete pitch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateAppearanceRecord {
    pub inning: u32,
    pub half: Half,
    pub batter: String,
    pub pitches: String,
    pub outcome: String,
}

impl PlateAppearanceRecord {
    fn from_fields(fields: &[&str]) -> Option<Self> {
        let inning = fields[1].parse().ok().filter(|n| *n > 0)?;
        let half = match fields[2] {
            "0" => Half::Top,
            "1" => Half::Bottom,
            _ => return None,
        };
        Some(Self {
            inning,
            half,
            batter: fields[3].to_string(),
            pitches: fields[5].to_string(),
            outcome: fields[6].to_string(),
        })
    }
}

/// Filters a season's raw event-log lines down to the target batter's
/// play records, in game order. Matching is exact equality on the
/// tokenized batter field, so an id that happens to be a substring of
/// another player's id cannot produce false positives.
///
/// A line that looks like the batter's but cannot be parsed is skipped
/// with a warning; one bad line must not abort the whole season.
pub fn extract<'a, I>(lines: I, batter_id: &str) -> Vec<PlateAppearanceRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    for line in lines {
        let line = line.trim();
        let fields: Vec<&str> = line.split(',').collect();
        if fields[0] != PLAY_MARKER {
            continue;
        }
        if fields.len() < MIN_FIELDS {
            if line.contains(batter_id) {
                log::warn!("skipping malformed play line: {:?}", line);
            }
            continue;
        }
        if fields[3] != batter_id {
            continue;
        }
        match PlateAppearanceRecord::from_fields(&fields) {
            Some(record) => records.push(record),
            None => log::warn!("skipping play line with bad inning/half: {:?}", line),
        }
    }
    records
}

/// True when `earlier` plus the `.` annotation separator begins `later`,
/// i.e. `earlier` is a partial pitch sequence of the same plate
/// appearance that `later` completes.
fn is_partial_of(earlier: &str, later: &str) -> bool {
    match later.strip_prefix(earlier) {
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

/// Collapses plate appearances split across multiple play lines by
/// mid-appearance events (stolen bases, wild pitches). The complete
/// pitch sequence always appears in the last line of the group, so any
/// record whose sequence-plus-period prefixes its immediate successor's
/// sequence is a superseded partial and is dropped. `NP` lines are
/// dropped first. Chronological order is preserved.
///
/// Each record is compared only to its immediate successor, matching
/// the upstream parser this was calibrated against; an appearance split
/// across three or more lines collapses fully only when each line
/// prefixes the next.
pub fn dedup(records: Vec<PlateAppearanceRecord>) -> Vec<PlateAppearanceRecord> {
    let records: Vec<PlateAppearanceRecord> = records
        .into_iter()
        .filter(|r| r.outcome != NO_PLAY)
        .collect();
    let mut kept = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let superseded = match records.get(i + 1) {
            Some(next) => is_partial_of(&record.pitches, &next.pitches),
            None => false,
        };
        if !superseded {
            kept.push(record.clone());
        }
    }
    kept
}

/// Extraction plus deduplication: the season's canonical
/// plate-appearance set, fixed for the remainder of the run.
pub fn season_records<'a, I>(
    lines: I,
    batter_id: &str,
) -> Result<Vec<PlateAppearanceRecord>, SimError>
where
    I: IntoIterator<Item = &'a str>,
{
    let records = dedup(extract(lines, batter_id));
    if records.is_empty() {
        return Err(SimError::EmptySeason);
    }
    Ok(records)
}
